//! Optical recognition of rasterized pages.

mod tesseract;

pub use tesseract::TesseractOcr;

use crate::error::OcrError;
use image::DynamicImage;

/// Recognizes the text on a single page image.
///
/// This is the seam between rendering and recognition: the renderer only
/// needs something that turns one image into text, and tests substitute
/// stub implementations here.
pub trait PageRecognizer {
    /// Recognize the text on one page. The returned text may be empty.
    fn recognize(&self, page: &DynamicImage) -> Result<String, OcrError>;
}
