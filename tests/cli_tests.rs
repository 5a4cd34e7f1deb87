mod common;
use common::{add_entry, init_with_data, rtc, setup_data_file, temp_out};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

#[test]
fn test_init_creates_versioned_data_file() {
    let data = setup_data_file("init_creates");

    rtc()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data file created"));

    let content = fs::read_to_string(&data).expect("data file");
    assert!(content.starts_with("#rteamcal-schema=2"));
    assert!(content.contains("id,owner_name,start_date,end_date,category"));

    // second init leaves the file alone
    rtc()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already present"));
}

#[test]
fn test_add_and_list() {
    let data = setup_data_file("add_and_list");
    let ids = init_with_data(&data);
    assert_eq!(ids.len(), 3);

    rtc()
        .args(["--data", &data, "--test", "list", "-p", "2024"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&ids[0][..8]))
        .stdout(predicate::str::contains("morning half-day"))
        .stdout(predicate::str::contains("40%"))
        .stdout(predicate::str::contains("3 of 3 entries"));

    rtc()
        .args(["--data", &data, "--test", "list", "-p", "2024-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 3 entries"))
        .stdout(predicate::str::contains("Kim").not());

    rtc()
        .args(["--data", &data, "--test", "list", "-p", "all", "-c", "vac"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 of 3 entries"));
}

#[test]
fn test_list_empty_period() {
    let data = setup_data_file("list_empty");
    init_with_data(&data);

    rtc()
        .args(["--data", &data, "--test", "list", "-p", "1999"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries for the selected period."));
}

#[test]
fn test_add_defaults_end_to_start() {
    let data = setup_data_file("add_default_end");
    rtc()
        .args(["--data", &data, "--test", "init"])
        .assert()
        .success();

    rtc()
        .args([
            "--data",
            &data,
            "--test",
            "add",
            "Choi",
            "--start",
            "2024-03-04",
            "-c",
            "TRIP",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Choi] business trip 2024-03-04..2024-03-04",
        ));
}

#[test]
fn test_add_rejects_invalid_date() {
    let data = setup_data_file("add_invalid_date");

    rtc()
        .args([
            "--data",
            &data,
            "--test",
            "add",
            "Kim",
            "--start",
            "2024-13-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));

    assert!(!std::path::Path::new(&data).exists());
}

#[test]
fn test_add_rejects_progress_out_of_range() {
    let data = setup_data_file("add_bad_progress");

    rtc()
        .args([
            "--data",
            &data,
            "--test",
            "add",
            "Kim",
            "--start",
            "2024-01-01",
            "--progress",
            "150",
        ])
        .assert()
        .failure();
}

#[test]
fn test_add_unknown_category_warns_and_keeps_label() {
    let data = setup_data_file("add_unknown_cat");

    rtc()
        .args([
            "--data",
            &data,
            "--test",
            "add",
            "Kim",
            "--start",
            "2024-01-01",
            "-c",
            "sabbatical",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("sabbatical"));

    rtc()
        .args(["--data", &data, "--test", "data", "--check"])
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown category 'sabbatical'"));
}

#[test]
fn test_edit_updates_fields() {
    let data = setup_data_file("edit_updates");
    let ids = init_with_data(&data);

    rtc()
        .args([
            "--data",
            &data,
            "--test",
            "edit",
            &ids[0][..8],
            "--end",
            "2024-01-15",
            "-d",
            "long trip",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[Kim] vacation 2024-01-10..2024-01-15",
        ));

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.contains("long trip"));
    assert!(content.contains("2024-01-15"));
}

#[test]
fn test_edit_without_changes_fails() {
    let data = setup_data_file("edit_no_changes");
    let ids = init_with_data(&data);

    rtc()
        .args(["--data", &data, "--test", "edit", &ids[1]])
        .assert()
        .failure();
}

#[test]
fn test_del_with_yes_flag() {
    let data = setup_data_file("del_yes");
    let ids = init_with_data(&data);

    rtc()
        .args(["--data", &data, "--test", "del", &ids[1], "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    rtc()
        .args(["--data", &data, "--test", "list", "-p", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 2 entries"))
        .stdout(predicate::str::contains("Lee").not());

    // the same id a second time is stale
    rtc()
        .args(["--data", &data, "--test", "del", &ids[1], "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_del_asks_for_confirmation() {
    let data = setup_data_file("del_confirm");
    let ids = init_with_data(&data);

    rtc()
        .args(["--data", &data, "--test", "del", &ids[0]])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Operation cancelled."));

    rtc()
        .args(["--data", &data, "--test", "del", &ids[0]])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    let content = fs::read_to_string(&data).unwrap();
    assert!(!content.contains(&ids[0]));
    assert!(content.contains(&ids[2]));
}

#[test]
fn test_events_json_feed() {
    let data = setup_data_file("events_feed");
    let ids = init_with_data(&data);

    let output = rtc()
        .args(["--data", &data, "--test", "events"])
        .output()
        .expect("run events");
    assert!(output.status.success());

    let events: Value = serde_json::from_slice(&output.stdout).expect("valid JSON on stdout");
    let events = events.as_array().expect("array");
    assert_eq!(events.len(), 3);

    assert_eq!(events[0]["id"], ids[0].as_str());
    assert_eq!(events[0]["title"], "[Kim] trip");
    assert_eq!(events[0]["start"], "2024-01-10");
    assert_eq!(events[0]["end"], "2024-01-13");
    assert_eq!(events[0]["color"], "#FF6B6B");
    assert_eq!(events[0]["allDay"], true);

    assert_eq!(events[1]["start"], "2024-02-01T09:00:00");
    assert_eq!(events[1]["end"], "2024-02-01T13:00:00");
    assert_eq!(events[1]["allDay"], false);

    assert_eq!(events[2]["end"], "2024-02-10");
}

#[test]
fn test_events_written_to_file_with_period() {
    let data = setup_data_file("events_file");
    init_with_data(&data);
    let out = temp_out("events_file", "json");

    rtc()
        .args([
            "--data", &data, "--test", "events", "-p", "2024-02", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 events written"));

    let events: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(events.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_export_csv_and_json() {
    let data = setup_data_file("export_csv_json");
    init_with_data(&data);
    let csv_out = temp_out("export_entries", "csv");
    let json_out = temp_out("export_events", "json");

    rtc()
        .args([
            "--data", &data, "--test", "export", "--format", "csv", "--file", &csv_out,
            "--range", "2024-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed"));

    let csv_text = fs::read_to_string(&csv_out).unwrap();
    let mut lines = csv_text.lines();
    assert_eq!(
        lines.next(),
        Some("id,owner_name,start_date,end_date,category,description,progress_percent,memo")
    );
    assert_eq!(lines.count(), 1);

    rtc()
        .args([
            "--data", &data, "--test", "export", "--format", "json", "--file", &json_out,
            "--events",
        ])
        .assert()
        .success();

    let events: Value = serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    assert_eq!(events[2]["title"], "[Park] release");
    assert_eq!(events[2]["color"], "#6BCB77");
}

#[test]
fn test_export_xlsx_and_overwrite_guard() {
    let data = setup_data_file("export_xlsx");
    init_with_data(&data);
    let out = temp_out("export_xlsx", "xlsx");

    rtc()
        .args([
            "--data", &data, "--test", "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK"));

    // existing file, answer "no"
    rtc()
        .args([
            "--data", &data, "--test", "export", "--format", "xlsx", "--file", &out,
        ])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not overwritten"));

    rtc()
        .args([
            "--data", &data, "--test", "export", "--format", "xlsx", "--file", &out, "--force",
        ])
        .assert()
        .success();
}

#[test]
fn test_backup_compressed() {
    let data = setup_data_file("backup_zip");
    init_with_data(&data);
    let dest = temp_out("backup_zip", "csv");
    let zip_path = format!("{dest}.zip");
    fs::remove_file(&zip_path).ok();

    rtc()
        .args([
            "--data",
            &data,
            "--test",
            "backup",
            "--file",
            &dest,
            "--compress",
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Compressed"));

    assert!(fs::read(&zip_path).unwrap().starts_with(b"PK"));
    assert!(!std::path::Path::new(&dest).exists());
}

#[test]
fn test_data_migrate_legacy_file() {
    let data = setup_data_file("data_migrate");
    fs::write(
        &data,
        "owner_name,start_date,end_date,category,description\n\
         Kim,2024-01-10,2024-01-12,vacation,trip\n\
         Lee,2024-02-01,,afternoon half-day,bank\n",
    )
    .unwrap();

    rtc()
        .args(["--data", &data, "--test", "data", "--info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema version : v1"))
        .stdout(predicate::str::contains("data --migrate"));

    rtc()
        .args(["--data", &data, "--test", "data", "--migrate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migrated to schema v2"));

    assert!(std::path::Path::new(&format!("{data}.v1.bak")).exists());

    rtc()
        .args(["--data", &data, "--test", "data", "--info", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schema version : v2"))
        .stdout(predicate::str::contains("Entries        : 2"))
        .stdout(predicate::str::contains("no issues found"));

    rtc()
        .args(["--data", &data, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("migrate_to_v2"));
}

#[test]
fn test_log_records_operations() {
    let data = setup_data_file("log_ops");
    let ids = init_with_data(&data);

    rtc()
        .args(["--data", &data, "--test", "del", &ids[0], "-y"])
        .assert()
        .success();

    rtc()
        .args(["--data", &data, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"))
        .stdout(predicate::str::contains("del"));
}

#[test]
fn test_dashboard_shows_progress() {
    let data = setup_data_file("dashboard");
    init_with_data(&data);
    add_entry(
        &data,
        &[
            "Han", "--start", "2024-02-12", "-c", "proj", "-d", "docs", "--progress", "100",
        ],
    );

    rtc()
        .args(["--data", &data, "--test", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Park] release"))
        .stdout(predicate::str::contains("QA pending"))
        .stdout(predicate::str::contains("Average progress: 70%"));
}

#[test]
fn test_categories_legend() {
    rtc()
        .args(["--test", "categories"])
        .assert()
        .success()
        .stdout(predicate::str::contains("morning half-day"))
        .stdout(predicate::str::contains("#FFB347"))
        .stdout(predicate::str::contains("#3788d8"));
}

#[test]
fn test_legacy_file_list_then_delete_shown_id() {
    let data = setup_data_file("legacy_del");
    let legacy = "owner_name,start_date,end_date,category,description\n\
                  Kim,2024-01-10,2024-01-12,vacation,trip\n\
                  Lee,2024-02-01,,afternoon half-day,bank\n";
    fs::write(&data, legacy).unwrap();

    let output = rtc()
        .args(["--data", &data, "--test", "events"])
        .output()
        .expect("run events");
    assert!(output.status.success());
    let events: Value = serde_json::from_slice(&output.stdout).unwrap();
    let lee_id = events[1]["id"].as_str().expect("id").to_string();

    // the listing shows the same id on a second read
    rtc()
        .args(["--data", &data, "--test", "list", "-p", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(&lee_id[..8]));

    rtc()
        .args(["--data", &data, "--test", "del", &lee_id[..8], "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    let content = fs::read_to_string(&data).unwrap();
    assert!(content.starts_with("#rteamcal-schema=2"));
    assert!(content.contains("Kim"));
    assert!(!content.contains("Lee"));
    assert_eq!(fs::read_to_string(format!("{data}.v1.bak")).unwrap(), legacy);
}

#[test]
fn test_foreign_header_is_refused_and_file_untouched() {
    let data = setup_data_file("foreign_header");
    let foreign = "name,from,to\nKim,2024-01-10,2024-01-12\n";
    fs::write(&data, foreign).unwrap();

    rtc()
        .args([
            "--data", &data, "--test", "add", "Lee", "--start", "2024-02-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized header"));

    assert_eq!(fs::read_to_string(&data).unwrap(), foreign);
}

#[test]
fn test_edit_clear_progress() {
    let data = setup_data_file("edit_clear_progress");
    let ids = init_with_data(&data);

    rtc()
        .args(["--data", &data, "--test", "edit", &ids[2], "--clear-progress"])
        .assert()
        .success();

    rtc()
        .args(["--data", &data, "--test", "dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries with a progress value."));

    rtc()
        .args([
            "--data",
            &data,
            "--test",
            "edit",
            &ids[2],
            "--clear-progress",
            "--progress",
            "10",
        ])
        .assert()
        .failure();
}

#[test]
fn test_events_out_does_not_overwrite_without_force() {
    let data = setup_data_file("events_overwrite");
    init_with_data(&data);
    let out = temp_out("events_overwrite", "json");
    fs::write(&out, "keep me").unwrap();

    rtc()
        .args(["--data", &data, "--test", "events", "--out", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not overwritten"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rtc()
        .args(["--data", &data, "--test", "events", "--out", &out, "--force"])
        .assert()
        .success();
    let events: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(events.as_array().map(|a| a.len()), Some(3));
}
