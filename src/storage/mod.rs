//! Local persistence of analyses

pub mod history;

pub use history::{HistoryEntry, HistoryStore};
