use serde::Serialize;

/// Calendar display record consumed by the widget layer.
///
/// Serialized in FullCalendar's event-object shape. For all-day events
/// `end` is exclusive (the day after the last scheduled day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    /// Id of the source entry, used to route clicks back to edit/delete.
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub all_day: bool,
}
