//! Skill extraction and preparation synthesis

pub mod taxonomy;
pub mod skill_matcher;
pub mod readiness;
pub mod checklist;
pub mod study_plan;
pub mod questions;
pub mod analyzer;

pub use analyzer::{Analysis, AnalysisRequest, PrepAnalyzer};
pub use skill_matcher::{DetectedSkills, SkillMatcher};
