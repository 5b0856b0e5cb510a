//! Per-page text rendering with OCR fallback.

use std::path::Path;

use lopdf::{Document, ObjectId};
use tracing::{debug, warn};

use super::raster;
use crate::error::PdfError;
use crate::models::config::PdfConfig;
use crate::ocr::PageRecognizer;

/// Renders a multi-page document into one linear text blob.
///
/// Pages are processed strictly in document order. A page with native text
/// contributes that text; a page without is rasterized and handed to the
/// recognizer. Every per-page failure is absorbed as an empty fragment, so
/// the only error this type surfaces is [`PdfError::Open`].
pub struct DocumentRenderer<R> {
    recognizer: R,
    config: PdfConfig,
}

impl<R: PageRecognizer> DocumentRenderer<R> {
    /// Create a renderer with default configuration.
    pub fn new(recognizer: R) -> Self {
        Self {
            recognizer,
            config: PdfConfig::default(),
        }
    }

    /// Set the rendering configuration.
    pub fn with_config(mut self, config: PdfConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the document at `path` to text.
    ///
    /// Returns `Ok("")` for a document that opened but yielded no text on
    /// any page; that is not a failure. The document handle is owned by
    /// this call and released on every exit path.
    pub fn render(&self, path: &Path) -> Result<String, PdfError> {
        let doc = Document::load(path).map_err(|e| PdfError::Open(e.to_string()))?;
        let pages = doc.get_pages();
        debug!("opened {} with {} pages", path.display(), pages.len());

        let mut text = String::new();
        for (index, (&number, &page_id)) in pages.iter().enumerate() {
            if self.config.max_pages > 0 && index >= self.config.max_pages {
                debug!("stopping at configured page limit {}", self.config.max_pages);
                break;
            }

            let fragment = self.render_page(&doc, number, page_id);
            if !fragment.is_empty() {
                text.push_str(&fragment);
                text.push('\n');
            }
        }

        Ok(text)
    }

    /// Render one page, absorbing every failure into an empty fragment.
    fn render_page(&self, doc: &Document, number: u32, page_id: ObjectId) -> String {
        let native = doc.extract_text(&[number]).unwrap_or_default();
        if !native.trim().is_empty() {
            debug!("page {}: {} chars of native text", number, native.len());
            return native;
        }

        if !self.config.ocr_fallback {
            debug!("page {}: no native text, OCR fallback disabled", number);
            return String::new();
        }

        let image = match raster::page_image(doc, number, page_id) {
            Ok(image) => image,
            Err(e) => {
                warn!("{}", e);
                return String::new();
            }
        };

        match self.recognizer.recognize(&image) {
            Ok(recognized) => {
                debug!("page {}: {} chars recognized", number, recognized.len());
                recognized
            }
            Err(e) => {
                warn!("page {}: recognition failed: {}", number, e);
                String::new()
            }
        }
    }
}
