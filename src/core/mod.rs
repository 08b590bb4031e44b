// webpify/src/core/mod.rs
use std::path::PathBuf;
use thiserror::Error;

pub mod pipeline;

pub const DEFAULT_MAX_WIDTH: u32 = 1600;
pub const WEBP_QUALITY: u8 = 80;
pub const OUTPUT_EXTENSION: &str = "webp";
pub const OUTPUT_DIR_NAME: &str = "output";
pub const DEFAULT_INPUT_DIR: &str = "input";
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

#[derive(Debug, Clone)]
pub struct ConvertConfig {
    pub max_width: u32,
    pub quality: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTarget {
    pub source: PathBuf,
    pub destination: PathBuf,
}

#[derive(Debug)]
pub enum Outcome {
    Converted,
    Skipped,
    Failed(ConvertError),
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub total_size_before: u64,
    pub total_size_after: u64,
    pub failures: Vec<(String, String)>,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            quality: WEBP_QUALITY,
        }
    }
}

impl ConvertConfig {
    pub fn with_max_width(max_width: u32) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_width == 0 {
            return Err(ConvertError::InvalidParameter(
                "Max width must be at least 1 pixel".to_string(),
            ));
        }

        if self.max_width > 100_000 {
            return Err(ConvertError::InvalidParameter(
                "Max width too large (max 100,000 pixels)".to_string(),
            ));
        }

        if self.quality == 0 || self.quality > 100 {
            return Err(ConvertError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    pub fn record(&mut self, target: &ConversionTarget, outcome: &Outcome) {
        match outcome {
            Outcome::Converted => {
                self.converted += 1;
                self.total_size_before += file_size_or_zero(&target.source);
                self.total_size_after += file_size_or_zero(&target.destination);
            }
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed(err) => {
                self.failed += 1;
                self.failures
                    .push((target.source.display().to_string(), err.to_string()));
            }
        }
    }

    pub fn savings_percent(&self) -> f64 {
        if self.total_size_before == 0 {
            return 0.0;
        }

        let saved = self.total_size_before as f64 - self.total_size_after as f64;
        (saved / self.total_size_before as f64 * 100.0).clamp(0.0, 100.0)
    }
}

fn file_size_or_zero(path: &std::path::Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Write error: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
