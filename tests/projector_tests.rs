use rteamcal::core::{project, project_all};
use rteamcal::models::category::DEFAULT_COLOR;
use rteamcal::models::{Category, ScheduleEntry};
use rteamcal::store::Table;

fn entry(owner: &str, start: &str, end: &str, category: &str, desc: &str) -> ScheduleEntry {
    ScheduleEntry {
        id: format!("id-{owner}-{start}"),
        owner_name: owner.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        category: category.to_string(),
        description: desc.to_string(),
        progress_percent: None,
        memo: None,
    }
}

#[test]
fn test_all_day_entry_gets_exclusive_end() {
    let ev = project(&entry("Kim", "2024-01-10", "2024-01-12", "vacation", "trip"));

    assert_eq!(ev.title, "[Kim] trip");
    assert_eq!(ev.start, "2024-01-10");
    assert_eq!(ev.end, "2024-01-13");
    assert!(ev.all_day);
    assert_eq!(ev.color, Category::Vacation.color());
}

#[test]
fn test_single_day_and_month_boundaries() {
    let same_day = project(&entry("A", "2024-03-05", "2024-03-05", "project", "x"));
    assert_eq!(same_day.end, "2024-03-06");

    let month_end = project(&entry("A", "2024-01-30", "2024-01-31", "project", "x"));
    assert_eq!(month_end.end, "2024-02-01");

    let leap = project(&entry("A", "2024-02-28", "2024-02-28", "project", "x"));
    assert_eq!(leap.end, "2024-02-29");

    let year_end = project(&entry("A", "2024-12-31", "2024-12-31", "project", "x"));
    assert_eq!(year_end.end, "2025-01-01");
}

#[test]
fn test_morning_half_day_window() {
    let ev = project(&entry(
        "Lee",
        "2024-02-01",
        "2024-02-03",
        "morning half-day",
        "dentist",
    ));

    assert_eq!(ev.start, "2024-02-01T09:00:00");
    assert_eq!(ev.end, "2024-02-01T13:00:00");
    assert!(!ev.all_day);
    assert_eq!(ev.color, "#FFB347");
}

#[test]
fn test_afternoon_half_day_window() {
    let ev = project(&entry(
        "Lee",
        "2024-02-01",
        "2024-02-01",
        "afternoon half-day",
        "bank",
    ));

    assert_eq!(ev.start, "2024-02-01T14:00:00");
    assert_eq!(ev.end, "2024-02-01T18:00:00");
    assert!(!ev.all_day);
}

#[test]
fn test_unknown_category_uses_default_color() {
    for label in ["holiday?", "", "Vacation", "🏖️ something"] {
        let ev = project(&entry("Kim", "2024-01-10", "2024-01-10", label, "x"));
        assert_eq!(ev.color, DEFAULT_COLOR, "label {label:?}");
        assert!(ev.all_day);
        assert_eq!(ev.end, "2024-01-11");
    }
}

#[test]
fn test_unparseable_end_is_passed_through_unshifted() {
    let ev = project(&entry("Kim", "2024-01-10", "soon", "vacation", "trip"));

    assert_eq!(ev.start, "2024-01-10");
    assert_eq!(ev.end, "soon");
    assert!(ev.all_day);
}

#[test]
fn test_inverted_range_is_projected_as_is() {
    let ev = project(&entry("Kim", "2024-01-12", "2024-01-10", "vacation", "trip"));
    assert_eq!(ev.start, "2024-01-12");
    assert_eq!(ev.end, "2024-01-11");
}

#[test]
fn test_title_with_empty_owner_and_description() {
    let ev = project(&entry("", "2024-01-10", "2024-01-10", "other", ""));
    assert_eq!(ev.title, "[] ");
}

#[test]
fn test_event_carries_entry_id_and_serializes_for_calendar() {
    let e = entry("Kim", "2024-01-10", "2024-01-12", "vacation", "trip");
    let ev = project(&e);
    assert_eq!(ev.id, e.id);

    let json = serde_json::to_value(&ev).expect("serialize");
    assert_eq!(json["allDay"], serde_json::Value::Bool(true));
    assert_eq!(json["end"], "2024-01-13");
    assert_eq!(json["color"], "#FF6B6B");
}

#[test]
fn test_project_all_keeps_row_order() {
    let mut table = Table::new();
    table.append(entry("C", "2024-05-01", "2024-05-01", "other", "c"));
    table.append(entry("A", "2024-01-01", "2024-01-01", "other", "a"));
    table.append(entry("B", "2024-03-01", "2024-03-01", "afternoon half-day", "b"));

    let titles: Vec<String> = project_all(&table).into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["[C] c", "[A] a", "[B] b"]);
}

#[test]
fn test_category_lookup_by_code_and_label() {
    assert_eq!(Category::from_input("AM"), Some(Category::MorningHalfDay));
    assert_eq!(
        Category::from_input(" afternoon half-day "),
        Some(Category::AfternoonHalfDay)
    );
    assert_eq!(Category::from_input("trip"), Some(Category::BusinessTrip));
    assert_eq!(Category::from_input("nope"), None);

    let half_days: Vec<Category> = Category::ALL
        .into_iter()
        .filter(|c| c.half_day_window().is_some())
        .collect();
    assert_eq!(
        half_days,
        vec![Category::MorningHalfDay, Category::AfternoonHalfDay]
    );
}
