//! Chat command router.
//!
//! Holds the command grammar compiled once at startup and dispatches one
//! inbound message line to the matching handler. Lines that match no
//! registered command are ignored, as a chat framework would simply never
//! dispatch them.

use crate::bot::handlers;
use crate::bot::transport::Conversation;
use crate::config::Config;
use crate::store::MonthlyLogStore;
use regex::Regex;

pub struct Router {
    store: MonthlyLogStore,
    version: String,
    add_pattern: Regex,
}

impl Router {
    pub fn new(cfg: &Config) -> Self {
        Self {
            store: MonthlyLogStore::new(&cfg.data_dir),
            version: cfg.version.clone(),
            // add <duration> <fqdn> (HW|SW|OTHER|UNK)
            add_pattern: Regex::new(r"^add\s+(\S+)\s+(\S+)\s+(HW|SW|OTHER|UNK)$").unwrap(),
        }
    }

    /// Dispatch one inbound chat message.
    pub fn handle_message(&self, message: &str, conv: &mut dyn Conversation) {
        let message = message.trim();

        if let Some(cap) = self.add_pattern.captures(message) {
            match handlers::record_interruption(&self.store, &cap[1], &cap[2], &cap[3]) {
                Ok(reply) => conv.reply(&reply),
                Err(crate::errors::AppError::InvalidArgument(msg)) => {
                    conv.reply(&format!(":warning: *{}*", msg));
                }
                Err(e) => {
                    conv.reply(&format!(
                        ":skull_and_crossbones: *Impossible to store new interrupt.* Please check this bot health ! {}",
                        e
                    ));
                }
            }
        } else if message == "get_current_month" {
            match handlers::summarize_current_month(&self.store) {
                Ok(reply) => conv.reply(&reply),
                Err(e) => {
                    conv.reply(&format!(
                        ":warning: *Impossible to read current interrupt log file.* Please check this bot health ! {}",
                        e
                    ));
                }
            }
        } else if message == "version" {
            conv.reply(&handlers::version(&self.version));
        }
    }
}
