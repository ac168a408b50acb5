//! Input manager for loading job descriptions and analysis requests

use crate::error::{PrepError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use crate::processing::analyzer::AnalysisRequest;
use log::info;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use tokio::io::AsyncReadExt;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Read job description text from a PDF, text or markdown file
    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        Self::ensure_exists(path)?;

        let text = match Self::detect_file_type(path)? {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Request | FileType::Unknown => {
                return Err(PrepError::UnsupportedFormat(format!(
                    "Unsupported job description file: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Load a JSON analysis request. Fields that are not strings are read as empty.
    pub async fn load_request(&self, path: &Path) -> Result<AnalysisRequest> {
        Self::ensure_exists(path)?;

        if Self::detect_file_type(path)? != FileType::Request {
            return Err(PrepError::UnsupportedFormat(format!(
                "Analysis requests must be JSON: {}",
                path.display()
            )));
        }

        let content = tokio::fs::read_to_string(path).await?;
        let value: Value = serde_json::from_str(&content)?;
        info!("Loaded analysis request: {}", path.display());
        Ok(AnalysisRequest::from_json_value(&value))
    }

    /// Read a job description piped on stdin
    pub async fn read_stdin(&self) -> Result<String> {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        Ok(text)
    }

    fn ensure_exists(path: &Path) -> Result<()> {
        if path.exists() {
            Ok(())
        } else {
            Err(PrepError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )))
        }
    }

    fn detect_file_type(path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                PrepError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        Ok(FileType::from_extension(extension))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
