//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AdtxError, Result};

/// Main configuration for the adtx pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdtxConfig {
    /// PDF rendering configuration.
    pub pdf: PdfConfig,

    /// Optical recognition configuration.
    pub ocr: OcrConfig,

    /// Summary generation configuration.
    pub summary: SummaryConfig,
}

/// PDF rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Maximum pages to render (0 = unlimited).
    pub max_pages: usize,

    /// Fall back to OCR for pages without native text.
    pub ocr_fallback: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            max_pages: 0,
            ocr_fallback: true,
        }
    }
}

/// Optical recognition configuration.
///
/// The tesseract binary location is explicit configuration rather than
/// process-wide state so two recognizers can point at different builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Path or name of the tesseract binary.
    pub tesseract_cmd: PathBuf,

    /// Recognition language passed as `-l`.
    pub language: String,

    /// Page segmentation mode (`--psm`). 6 = single uniform block of text.
    pub page_seg_mode: u8,

    /// OCR engine mode (`--oem`).
    pub engine_mode: u8,

    /// Character whitelist. ADT-1 field values only ever contain letters,
    /// digits and `@ . , & ( ) - /`; constraining the symbol set reduces
    /// misreads on low-quality scans.
    pub char_whitelist: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            tesseract_cmd: PathBuf::from("tesseract"),
            language: "eng".to_string(),
            page_seg_mode: 6,
            engine_mode: 3,
            char_whitelist:
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789@.,&()-/"
                    .to_string(),
        }
    }
}

/// Summary generation configuration (Ollama boundary).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// Preferred model name.
    pub model: String,

    /// Models to try, in order, when the preferred one is not installed.
    pub fallbacks: Vec<String>,

    /// Generation timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            model: "llama3.2".to_string(),
            fallbacks: vec![
                "llama3".to_string(),
                "llama2".to_string(),
                "mistral".to_string(),
            ],
            timeout_secs: 60,
        }
    }
}

impl AdtxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| AdtxError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| AdtxError::Config(e.to_string()))?;
        Ok(std::fs::write(path, content)?)
    }
}
