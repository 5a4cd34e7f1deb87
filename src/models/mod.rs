pub mod category;
pub mod display_event;
pub mod entry;

pub use category::Category;
pub use display_event::DisplayEvent;
pub use entry::{EntryPatch, ScheduleEntry};
