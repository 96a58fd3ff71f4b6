use crate::bot::{Router, console};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use std::env;

/// Handle the `run` command: check the chat credential, then listen for
/// commands until EOF. A missing or empty credential is fatal before any
/// command is served.
pub fn handle(cfg: &Config) -> AppResult<()> {
    match env::var(&cfg.token_var) {
        Ok(token) if !token.trim().is_empty() => {}
        _ => return Err(AppError::MissingToken(cfg.token_var.clone())),
    }

    messages::info(format!(
        "rinterlog {} listening (log dir: {})",
        cfg.version, cfg.data_dir
    ));

    let router = Router::new(cfg);
    console::listen(&router)
}
