use clap::{Parser, Subcommand};

/// Command-line interface definition for rinterlog
/// Chat-bot style logger for work interruptions
#[derive(Parser)]
#[command(
    name = "rinterlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record work interruptions into monthly JSON log files and summarize the current month",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding the monthly log files
    #[arg(global = true, long = "data-dir")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the log directory
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Start the bot: answer chat commands read line by line until EOF
    Run,
}
