use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(&cfg).unwrap());
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                messages::warning(format!(
                    "No configuration file at {} (defaults are in use). Run `rinterlog init` to create one.",
                    path.display()
                ));
                return Ok(());
            }

            let content = std::fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(_) => messages::success(format!("Configuration file {} is valid", path.display())),
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "invalid configuration file {}: {}",
                        path.display(),
                        e
                    )));
                }
            }
        }
    }

    Ok(())
}
