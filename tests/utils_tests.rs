use chrono::NaiveDate;
use rteamcal::config::Config;
use rteamcal::config::migrate::{migrate_config_file, missing_fields};
use rteamcal::core::data::DataLogic;
use rteamcal::core::list::EntryFilter;
use rteamcal::models::ScheduleEntry;
use rteamcal::store::Table;
use rteamcal::utils::date::{normalize_date_text, parse_period};
use rteamcal::utils::formatting::{display_width, strip_ansi};
use std::fs;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_parse_period_forms() {
    assert_eq!(
        parse_period("2024").unwrap(),
        Some((d("2024-01-01"), d("2024-12-31")))
    );
    assert_eq!(
        parse_period("2024-02").unwrap(),
        Some((d("2024-02-01"), d("2024-02-29")))
    );
    assert_eq!(
        parse_period("2024-02-05").unwrap(),
        Some((d("2024-02-05"), d("2024-02-05")))
    );
    assert_eq!(
        parse_period("2024-11:2025-01").unwrap(),
        Some((d("2024-11-01"), d("2025-01-31")))
    );
    assert_eq!(parse_period("ALL").unwrap(), None);

    assert!(parse_period("2024-02:2024").is_err());
    assert!(parse_period("2025:2024").is_err());
    assert!(parse_period("24").is_err());
    assert!(parse_period("2024-13").is_err());
}

#[test]
fn test_normalize_date_text() {
    assert_eq!(normalize_date_text(" 2024-01-10 "), "2024-01-10");
    assert_eq!(normalize_date_text("2024/1/5"), "2024-01-05");
    assert_eq!(normalize_date_text("2024-01-10T00:00:00"), "2024-01-10");
    assert_eq!(normalize_date_text("not a date"), "not a date");
}

#[test]
fn test_filter_overlap_and_owner() {
    let mut table = Table::new();
    table.append(ScheduleEntry::new(
        "Kim",
        d("2024-01-30"),
        Some(d("2024-02-02")),
        "vacation",
        "ski",
    ));
    table.append(ScheduleEntry::new(
        "Lee",
        d("2024-03-01"),
        None,
        "other",
        "x",
    ));

    let feb = EntryFilter::from_period(Some("2024-02")).unwrap();
    let hits = feb.apply(&table);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].owner_name, "Kim");

    let by_owner = EntryFilter {
        owner: Some("lee".into()),
        ..EntryFilter::default()
    };
    assert_eq!(by_owner.apply(&table).len(), 1);
}

#[test]
fn test_data_check_reports_problems() {
    let mut table = Table::new();
    let mut bad = ScheduleEntry::new("Kim", d("2024-01-10"), None, "holiday", "x");
    bad.end_date = "later".into();
    let id = bad.id.clone();
    table.append(bad);
    table.append(ScheduleEntry::new(
        "Lee",
        d("2024-01-10"),
        Some(d("2024-01-08")),
        "vacation",
        "y",
    ));

    let issues = DataLogic::check(&table);
    let messages: Vec<&str> = issues.iter().map(|i| i.message.as_str()).collect();
    assert_eq!(issues.len(), 3, "{messages:?}");
    assert!(issues.iter().any(|i| i.id == id && i.message.contains("end date 'later'")));
    assert!(messages.iter().any(|m| m.contains("unknown category 'holiday'")));
    assert!(messages.iter().any(|m| m.contains("before start date")));
}

#[test]
fn test_config_migration_renames_and_fills_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rteamcal.conf");
    fs::write(&path, "csv_file: /tmp/old.csv\nseparator_char: '='\n").unwrap();

    let missing = missing_fields(&path).unwrap();
    assert!(missing.contains(&"data_file"));
    assert!(missing.contains(&"dashboard_bar_width"));

    assert!(migrate_config_file(&path).unwrap());
    assert!(missing_fields(&path).unwrap().is_empty());

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.data_file, "/tmp/old.csv");
    assert_eq!(cfg.separator(), '=');
    assert_eq!(cfg.default_category, "other");

    assert!(!migrate_config_file(&path).unwrap());
}

#[test]
fn test_strip_ansi_and_width() {
    let painted = "\x1b[38;2;255;107;107mvacation\x1b[0m";
    assert_eq!(strip_ansi(painted), "vacation");
    assert_eq!(display_width(painted), 8);
    assert_eq!(display_width("■■"), 2);
}
