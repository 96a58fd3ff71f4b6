#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::Local;
use rinterlog::store::{MonthKey, MonthlyLogStore};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rib() -> Command {
    cargo_bin_cmd!("rinterlog")
}

/// Create a unique, empty test data dir inside the system temp dir
pub fn setup_data_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rinterlog", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).unwrap();
    path.to_string_lossy().to_string()
}

/// Path of the current month's log file inside a data dir
pub fn current_log_file(data_dir: &str) -> PathBuf {
    let store = MonthlyLogStore::new(data_dir);
    store.path_for(&MonthKey::from_datetime(Local::now()))
}
