//! CLI interface for placement prep

use crate::config::OutputFormat;
use crate::processing::readiness::SkillConfidence;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "placement-prep")]
#[command(about = "Job description analysis and interview preparation planner")]
#[command(long_about = "Detect skills in a job description, score your readiness, and get a round checklist, a 7-day plan and likely interview questions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a job description
    Analyze {
        /// Job description file (TXT, MD, PDF)
        #[arg(short, long, conflicts_with_all = ["text", "request"])]
        job: Option<PathBuf>,

        /// Job description text
        #[arg(short, long, conflicts_with = "request")]
        text: Option<String>,

        /// JSON request with jdText, company and role fields
        #[arg(long)]
        request: Option<PathBuf>,

        /// Company name
        #[arg(long)]
        company: Option<String>,

        /// Role title
        #[arg(short, long)]
        role: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Do not store the analysis in history
        #[arg(long)]
        no_history: bool,

        /// Seed for the interview question fill-in
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Analyze the bundled sample job description
    Sample {
        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Do not store the analysis in history
        #[arg(long)]
        no_history: bool,
    },

    /// Saved analyses
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Mark how confident you are in a detected skill
    Confidence {
        /// Analysis ID
        id: String,

        /// Skill label as detected (case-insensitive)
        skill: String,

        #[arg(value_enum)]
        level: ConfidenceLevel,
    },

    /// List the skill taxonomy
    Skills,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// List saved analyses, most recent first
    List,

    /// Show one saved analysis
    Show {
        /// Analysis ID
        id: String,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Delete one saved analysis
    Delete {
        /// Analysis ID
        id: String,
    },

    /// Delete all saved analyses
    Clear,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConfidenceLevel {
    /// I know this skill
    Know,
    /// I need to practice this skill
    Practice,
    /// Remove the mark
    Clear,
}

impl ConfidenceLevel {
    pub fn to_confidence(self) -> Option<SkillConfidence> {
        match self {
            ConfidenceLevel::Know => Some(SkillConfidence::Know),
            ConfidenceLevel::Practice => Some(SkillConfidence::Practice),
            ConfidenceLevel::Clear => None,
        }
    }
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
