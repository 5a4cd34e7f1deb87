#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, colors off, never touching the user's config file.
pub fn rtc() -> Command {
    let mut cmd = cargo_bin_cmd!("rteamcal");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique data file path inside the system temp dir and remove any
/// leftovers (data file, operation log, migration backups).
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rteamcal.csv", name));
    let data_path = path.to_string_lossy().to_string();
    for suffix in ["", ".log", ".v1.bak"] {
        fs::remove_file(format!("{data_path}{suffix}")).ok();
    }
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `add` and return the id printed by the command.
pub fn add_entry(data: &str, args: &[&str]) -> String {
    let mut full = vec!["--data", data, "--test", "add"];
    full.extend_from_slice(args);

    let output = rtc().args(&full).output().expect("run add");
    assert!(
        output.status.success(),
        "add failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .split("Entry added: ")
        .nth(1)
        .and_then(|rest| rest.split_whitespace().next())
        .expect("id in add output")
        .to_string()
}

/// Initialize a data file and register a small team dataset.
/// Returns the ids in insertion order.
pub fn init_with_data(data: &str) -> Vec<String> {
    rtc()
        .args(["--data", data, "--test", "init"])
        .assert()
        .success();

    vec![
        add_entry(
            data,
            &[
                "Kim", "--start", "2024-01-10", "--end", "2024-01-12", "-c", "vacation", "-d",
                "trip",
            ],
        ),
        add_entry(
            data,
            &["Lee", "--start", "2024-02-01", "-c", "am", "-d", "dentist"],
        ),
        add_entry(
            data,
            &[
                "Park",
                "--start",
                "2024-02-05",
                "--end",
                "2024-02-09",
                "-c",
                "proj",
                "-d",
                "release",
                "--progress",
                "40",
                "--memo",
                "QA pending",
            ],
        ),
    ]
}
