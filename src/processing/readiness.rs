//! Readiness score derivation and the confidence overlay

use crate::config::ScoringConfig;
use crate::processing::skill_matcher::DetectedSkills;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const MAX_SCORE: u8 = 100;

/// User self-assessment for a detected skill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillConfidence {
    Know,
    Practice,
}

/// Skill label -> self-assessment
pub type ConfidenceMap = BTreeMap<String, SkillConfidence>;

/// Compute the base readiness score for one analysis
pub fn readiness_score(
    scoring: &ScoringConfig,
    text: &str,
    company: &str,
    role: &str,
    detected: &DetectedSkills,
) -> u8 {
    let mut score = scoring.base_score as i64;

    let category_bonus = (detected.category_count() as i64 * scoring.category_bonus as i64)
        .min(scoring.max_category_bonus as i64);
    score += category_bonus;

    if !company.trim().is_empty() {
        score += scoring.company_bonus as i64;
    }

    if !role.trim().is_empty() {
        score += scoring.role_bonus as i64;
    }

    if text.trim().chars().count() > scoring.detailed_jd_chars {
        score += scoring.detail_bonus as i64;
    }

    clamp_score(score)
}

/// Displayed score: +step per known skill, -step per skill needing practice.
/// The stored base score is left untouched.
pub fn adjusted_score(scoring: &ScoringConfig, base: u8, confidence: &ConfidenceMap) -> u8 {
    let step = scoring.confidence_step as i64;
    let delta: i64 = confidence
        .values()
        .map(|c| match c {
            SkillConfidence::Know => step,
            SkillConfidence::Practice => -step,
        })
        .sum();

    clamp_score(base as i64 + delta)
}

fn clamp_score(score: i64) -> u8 {
    score.clamp(0, MAX_SCORE as i64) as u8
}

/// Qualitative band shown next to a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Excellent,
    Good,
    Developing,
    Beginning,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => ScoreBand::Excellent,
            60..=79 => ScoreBand::Good,
            40..=59 => ScoreBand::Developing,
            _ => ScoreBand::Beginning,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "Excellent! You have strong preparation.",
            ScoreBand::Good => "Good progress! Keep practicing.",
            ScoreBand::Developing => "Getting there! Focus on key areas.",
            ScoreBand::Beginning => "Start with fundamentals and core concepts.",
        }
    }
}
