//! Utilities
use std::env;
use chrono::Local;

pub fn get_webhook_url() -> String {
    match env::var("SLACK_WEBHOOK_URL") {
        Ok(value) => value,
        Err(_e) => {String::from("")},
    }
}
pub fn get_log_dir() -> String {
    match env::var("LOG_DIR") {
        Ok(value) => value,
        Err(_e) => {String::from("")},
    }
}
pub fn get_target_url() -> String {
    match env::var("TARGET_URL") {
        Ok(value) => value,
        Err(_e) => {String::from("")},
    }
}
/// The default date for a run: today, matching the cron schedule that
/// processes each day's log on the same day.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
