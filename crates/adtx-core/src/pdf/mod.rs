//! PDF rendering: native text per page, OCR fallback for scanned pages.

mod raster;
mod renderer;

pub use renderer::DocumentRenderer;
