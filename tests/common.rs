#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use worktime::config::Config;
use worktime::ledger::LedgerFiles;

/// The binary with `HOME` pointing at an empty directory, so a developer's
/// own `~/.worktime/worktime.conf` never leaks into the tests.
pub fn wt() -> Command {
    let mut home = env::temp_dir();
    home.push("worktime_home_empty");
    fs::create_dir_all(&home).expect("create test home");
    wt_with_home(&home)
}

pub fn wt_with_home(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("worktime");
    cmd.env("HOME", home).env("USERPROFILE", home);
    cmd
}

/// Create a unique ledger path inside its own temp directory; any previous
/// ledger, balance and log files are removed.
pub fn setup_ledger(name: &str) -> String {
    let mut dir: PathBuf = env::temp_dir();
    dir.push(format!("worktime_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");

    dir.push("worktime.csv");
    dir.to_string_lossy().to_string()
}

/// Default config pointing at `ledger`.
pub fn config_for(ledger: &str) -> Config {
    Config {
        ledger: ledger.to_string(),
        ..Config::default()
    }
}

pub fn files_for(ledger: &str) -> (Config, LedgerFiles) {
    let cfg = config_for(ledger);
    let files = LedgerFiles::from_config(&cfg);
    (cfg, files)
}

/// `"15.01.2025 08:00:00"` → NaiveDateTime
pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%d.%m.%Y %H:%M:%S").expect("valid test timestamp")
}

pub fn read(path: &str) -> String {
    fs::read_to_string(path).expect("read ledger")
}

/// Ledger lines without the header.
pub fn data_lines(path: &str) -> Vec<String> {
    read(path).lines().skip(1).map(str::to_string).collect()
}
