//! Placement prep library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;
pub mod storage;

pub use config::Config;
pub use error::{PrepError, Result};
pub use processing::{Analysis, AnalysisRequest, DetectedSkills, PrepAnalyzer, SkillMatcher};
pub use storage::{HistoryEntry, HistoryStore};
