use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the monthly log directory
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing rinterlog…");

    Config::init_all(cli.data_dir.clone())?;

    let cfg = Config::load();
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Log dir    : {}", cfg.data_dir);
    println!("🎉 rinterlog initialization completed!");

    Ok(())
}
