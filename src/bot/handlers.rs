//! Chat command handlers. Each handler validates its already-tokenized
//! arguments, performs the store/aggregator call, and returns the reply
//! text; the router turns errors into user-facing replies.

use crate::core::summary;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, InterruptEvent};
use crate::store::{MonthKey, MonthlyLogStore};
use crate::utils::duration::{duration2compact, duration2whole_minutes, parse_duration};
use chrono::{Duration, Local};

/// Handle `add <duration> <fqdn> <category>`.
pub fn record_interruption(
    store: &MonthlyLogStore,
    duration_text: &str,
    fqdn: &str,
    category_token: &str,
) -> AppResult<String> {
    //
    // 1. Parse duration (mandatory)
    //
    let duration = parse_duration(duration_text).ok_or_else(|| {
        AppError::InvalidArgument(format!(
            "Impossible to parse duration '{}', please use an expression such as `30m` or `2h30m`",
            duration_text
        ))
    })?;

    //
    // 2. Reject zero or negative durations
    //
    if duration <= Duration::zero() {
        return Err(AppError::InvalidArgument(
            "I tried to spend negative time at work ... it did not work well".to_string(),
        ));
    }

    //
    // 3. Require an origin identifier
    //
    if fqdn.trim().is_empty() {
        return Err(AppError::InvalidArgument(
            "Impossible to parse fqdn. If you cannot specify it please use `nocomment` as a placeholder"
                .to_string(),
        ));
    }

    //
    // 4. Validate category here as well, not only in the command grammar
    //
    let category = Category::from_token(category_token).ok_or_else(|| {
        AppError::InvalidArgument(format!("Impossible to parse category '{}'", category_token))
    })?;

    //
    // 5. One "now" per operation: the record timestamp and the month key
    //    of the write come from the same instant
    //
    let now = Local::now();
    let key = MonthKey::from_datetime(now);
    let event = InterruptEvent::new(now, duration2whole_minutes(duration), category, fqdn.trim());

    store.append(&key, &event)?;

    Ok(format!(
        ":heavy_check_mark: *New interrupt successfully registered:* `{}` - `{}`",
        duration2compact(duration),
        fqdn.trim()
    ))
}

/// Handle `get_current_month`.
pub fn summarize_current_month(store: &MonthlyLogStore) -> AppResult<String> {
    let key = MonthKey::from_datetime(Local::now());
    let summary = summary::summarize(store, &key)?;

    let mut message = format!(
        "*Registered interrupt informations for {} :* \n`Total count: {}`\n`Total time : {}`",
        key.month_name(),
        summary.entries,
        summary.total_time_str()
    );

    if summary.malformed_lines > 0 {
        message.push_str(&format!(
            "\n:warning: `Skipped {} malformed line(s)`",
            summary.malformed_lines
        ));
    }

    Ok(message)
}

/// Handle `version`.
pub fn version(version: &str) -> String {
    format!("Thanks for asking! I'm running `{}`", version)
}
