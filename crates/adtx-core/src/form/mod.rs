//! Form ADT-1 field extraction.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, FormParser};

use crate::models::record::FormRecord;

/// Trait for record parsers.
pub trait RecordParser {
    /// Parse a record from the full document text. Parsing never fails:
    /// every field that cannot be recovered is left at its default.
    fn parse(&self, text: &str) -> ExtractionResult;

    /// Parse and keep only the record.
    fn parse_record(&self, text: &str) -> FormRecord {
        self.parse(text).record
    }
}
