//! Core library for Form ADT-1 extraction.
//!
//! This crate provides:
//! - PDF text rendering with per-page OCR fallback for scanned pages
//! - A tesseract-backed page recognizer with a constrained character set
//! - Rule-based extraction of the eight ADT-1 fields (company, CIN,
//!   addresses, appointment date/type, auditor details)

pub mod error;
pub mod form;
pub mod models;
pub mod ocr;
pub mod pdf;

pub use error::{AdtxError, OcrError, PdfError, Result};
pub use form::{ExtractionResult, FormParser, RecordParser};
pub use models::config::{AdtxConfig, OcrConfig, PdfConfig, SummaryConfig};
pub use models::record::FormRecord;
pub use ocr::{PageRecognizer, TesseractOcr};
pub use pdf::DocumentRenderer;
