use chrono::NaiveTime;
use serde::Serialize;

/// Color used for entries whose category label is not a known one.
pub const DEFAULT_COLOR: &str = "#3788d8";

/// Kind of schedule entry.
///
/// Each variant carries its display color and, for the half-day variants,
/// the fixed time window it occupies on the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Proposal,
    Project,
    Vacation,
    MorningHalfDay,
    AfternoonHalfDay,
    BusinessTrip,
    Urgent,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Proposal,
        Category::Project,
        Category::Vacation,
        Category::MorningHalfDay,
        Category::AfternoonHalfDay,
        Category::BusinessTrip,
        Category::Urgent,
        Category::Other,
    ];

    /// Label stored in the data file.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Proposal => "proposal",
            Category::Project => "project",
            Category::Vacation => "vacation",
            Category::MorningHalfDay => "morning half-day",
            Category::AfternoonHalfDay => "afternoon half-day",
            Category::BusinessTrip => "business trip",
            Category::Urgent => "urgent",
            Category::Other => "other",
        }
    }

    /// Short code accepted on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Category::Proposal => "prop",
            Category::Project => "proj",
            Category::Vacation => "vac",
            Category::MorningHalfDay => "am",
            Category::AfternoonHalfDay => "pm",
            Category::BusinessTrip => "trip",
            Category::Urgent => "urgent",
            Category::Other => "other",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Category::Proposal => "#9C27B0",
            Category::Project => "#6BCB77",
            Category::Vacation => "#FF6B6B",
            Category::MorningHalfDay => "#FFB347",
            Category::AfternoonHalfDay => "#FFCC00",
            Category::BusinessTrip => "#4D96FF",
            Category::Urgent => "#E91E63",
            Category::Other => "#A2A2A2",
        }
    }

    /// Label written by the first, spreadsheet-based version of the calendar.
    pub fn legacy_label(&self) -> &'static str {
        match self {
            Category::Proposal => "📑 제안",
            Category::Project => "💻 프로젝트",
            Category::Vacation => "🏖️ 휴가 (종일)",
            Category::MorningHalfDay => "🌅 오전 반차",
            Category::AfternoonHalfDay => "🌇 오후 반차",
            Category::BusinessTrip => "✈️ 출장/외근",
            Category::Urgent => "🔥 긴급/야근",
            Category::Other => "📅 기타",
        }
    }

    /// Time window for half-day categories, `None` for all-day ones.
    pub fn half_day_window(&self) -> Option<(NaiveTime, NaiveTime)> {
        let hm = |h| NaiveTime::from_hms_opt(h, 0, 0);
        match self {
            Category::MorningHalfDay => hm(9).zip(hm(13)),
            Category::AfternoonHalfDay => hm(14).zip(hm(18)),
            _ => None,
        }
    }

    /// Exact match against the stored label.
    pub fn from_label(label: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Match a label found in an old data file: current label or legacy text.
    pub fn from_stored(label: &str) -> Option<Self> {
        let label = label.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == label || c.legacy_label() == label)
    }

    /// Lenient lookup used for CLI input: label or code, any case.
    pub fn from_input(input: &str) -> Option<Self> {
        let needle = input.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.label() == needle || c.code() == needle)
    }
}

/// Display color for a stored category label, falling back to [`DEFAULT_COLOR`].
pub fn color_for_label(label: &str) -> &'static str {
    Category::from_label(label)
        .map(|c| c.color())
        .unwrap_or(DEFAULT_COLOR)
}
