use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Immutable process configuration, built once at startup and passed down
/// to the dispatcher and the bot.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the monthly interrupt log files.
    pub data_dir: String,

    /// Environment variable holding the chat-platform credential.
    #[serde(default = "default_token_var")]
    pub token_var: String,

    /// Crate version, carried here instead of a free-floating global.
    #[serde(skip, default = "crate_version")]
    pub version: String,
}

fn default_token_var() -> String {
    "SLACK_BOT_TOKEN".to_string()
}

fn crate_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_data_dir() -> String {
    // log files land in the working directory unless configured otherwise
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            token_var: default_token_var(),
            version: crate_version(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rinterlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rinterlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rinterlog.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file and the log directory
    pub fn init_all(custom_dir: Option<String>) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config {
            data_dir: custom_dir.unwrap_or_else(default_data_dir),
            token_var: default_token_var(),
            version: crate_version(),
        };

        let yaml = serde_yaml::to_string(&config).unwrap();
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {:?}", Self::config_file());

        // Create the log directory if not exists
        fs::create_dir_all(&config.data_dir)?;
        println!("✅ Log dir:     {:?}", config.data_dir);

        Ok(())
    }
}
