//! Error handling for the placement prep application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Analysis not found: {0}")]
    NotFound(String),

    #[error("Skill '{skill}' was not detected in this analysis{}", suggestion_suffix(.suggestion))]
    UnknownSkill {
        skill: String,
        suggestion: Option<String>,
    },

    #[error("History storage error: {0}")]
    Storage(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;

/// Template rendering failures surface as output errors
impl From<askama::Error> for PrepError {
    fn from(err: askama::Error) -> Self {
        PrepError::OutputFormatting(err.to_string())
    }
}
