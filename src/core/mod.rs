pub mod add;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod data;
pub mod del;
pub mod edit;
pub mod list;
pub mod log;
pub mod projector;

pub use projector::{project, project_all};
