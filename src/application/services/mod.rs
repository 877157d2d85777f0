//! Application services

pub mod history_service;
pub mod narrative;
pub mod narrative_service;
pub mod roll_service;

pub use history_service::{HistoryService, HISTORY_LIMIT};
pub use narrative_service::NarrativeService;
pub use roll_service::{RollError, RollPhase, RollService};
