//! Tesseract-backed page recognition.

use std::process::Command;

use image::DynamicImage;
use tracing::debug;

use super::PageRecognizer;
use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// Page recognizer that shells out to the tesseract binary.
///
/// The binary location comes from [`OcrConfig`] rather than any process-wide
/// setting, so two recognizers can point at different installations. The
/// page image is written to a scratch PNG that lives only for the call.
pub struct TesseractOcr {
    config: OcrConfig,
}

impl TesseractOcr {
    pub fn new(config: OcrConfig) -> Self {
        Self { config }
    }
}

impl PageRecognizer for TesseractOcr {
    fn recognize(&self, page: &DynamicImage) -> Result<String, OcrError> {
        let scratch = tempfile::Builder::new()
            .prefix("adtx-page-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Encode(e.to_string()))?;
        page.save_with_format(scratch.path(), image::ImageFormat::Png)
            .map_err(|e| OcrError::Encode(e.to_string()))?;

        let output = Command::new(&self.config.tesseract_cmd)
            .arg(scratch.path())
            .arg("stdout")
            .args(["-l", &self.config.language])
            .args(["--psm", &self.config.page_seg_mode.to_string()])
            .args(["--oem", &self.config.engine_mode.to_string()])
            .arg("-c")
            .arg(format!(
                "tessedit_char_whitelist={}",
                self.config.char_whitelist
            ))
            .output()
            .map_err(|e| OcrError::Launch {
                cmd: self.config.tesseract_cmd.display().to_string(),
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(OcrError::Recognition(
                String::from_utf8_lossy(&output.stderr).trim().to_string(),
            ));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!(
            "recognized {} chars ({}x{} page image)",
            text.len(),
            page.width(),
            page.height()
        );
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn missing_binary_is_a_launch_error() {
        let recognizer = TesseractOcr::new(OcrConfig {
            tesseract_cmd: PathBuf::from("/nonexistent/tesseract-binary"),
            ..OcrConfig::default()
        });

        let page = DynamicImage::new_rgb8(4, 4);
        let err = recognizer.recognize(&page).unwrap_err();
        assert!(matches!(err, OcrError::Launch { .. }));
    }
}
