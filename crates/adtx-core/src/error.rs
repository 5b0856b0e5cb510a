//! Error types for the adtx-core library.

use thiserror::Error;

/// Main error type for the adtx library.
///
/// [`OcrError`] is deliberately absent: recognition failures never leave
/// the renderer, which absorbs them per page.
#[derive(Error, Debug)]
pub enum AdtxError {
    /// PDF rendering error.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF rendering.
///
/// Only [`PdfError::Open`] is fatal to a run; everything that happens after
/// the document is open is absorbed per page by the renderer.
#[derive(Error, Debug)]
pub enum PdfError {
    /// The input file cannot be opened or parsed at all.
    #[error("failed to open document: {0}")]
    Open(String),

    /// Failed to recover a raster image for a page.
    #[error("failed to rasterize page {page}: {reason}")]
    Raster { page: u32, reason: String },
}

/// Errors related to optical recognition of a single page.
///
/// The renderer recovers from all of these: a failed page contributes
/// empty text and processing continues.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The tesseract binary could not be launched.
    #[error("failed to launch tesseract ({cmd}): {reason}")]
    Launch { cmd: String, reason: String },

    /// Tesseract exited with a non-zero status.
    #[error("tesseract failed: {0}")]
    Recognition(String),

    /// Failed to write the page image to a scratch file.
    #[error("failed to encode page image: {0}")]
    Encode(String),
}

/// Result type for the adtx library.
pub type Result<T> = std::result::Result<T, AdtxError>;
