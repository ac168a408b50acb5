//! Report view of a stored analysis with the confidence overlay applied

use crate::config::ScoringConfig;
use crate::processing::readiness::ScoreBand;
use crate::storage::history::HistoryEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to render one analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrepReport {
    /// The persisted record, unchanged
    #[serde(flatten)]
    pub entry: HistoryEntry,

    /// Readiness score after the confidence overlay (0-100)
    pub displayed_score: u8,

    pub band: ScoreBand,

    /// One-line verdict for the displayed score
    pub verdict: String,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    /// False when the analysis was not written to history
    pub stored: bool,
}

impl PrepReport {
    pub fn new(entry: HistoryEntry, scoring: &ScoringConfig, stored: bool) -> Self {
        let displayed_score = entry.displayed_score(scoring);
        let band = ScoreBand::from_score(displayed_score);

        Self {
            entry,
            displayed_score,
            band,
            verdict: band.message().to_string(),
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                tool_version: env!("CARGO_PKG_VERSION").to_string(),
                stored,
            },
        }
    }

    /// Whether the overlay moved the score away from the stored base
    pub fn is_adjusted(&self) -> bool {
        self.displayed_score != self.entry.readiness_score
    }

    /// Created-at formatted for display, falling back to the raw string
    pub fn created_display(&self) -> String {
        format_timestamp(&self.entry.created_at)
    }
}

pub fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).format("%b %-d, %Y %H:%M UTC").to_string())
        .unwrap_or_else(|_| raw.to_string())
}
