//! Rule-driven parser producing the eight-field record.

use std::time::Instant;

use tracing::{debug, info};

use super::RecordParser;
use super::rules::{
    extract_appointment_date, extract_appointment_type, extract_auditor_name, extract_cin,
    extract_company_name, extract_registration_number, locate_trailing_address,
};
use crate::models::record::FormRecord;

/// Result of record extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// The extracted record, all eight fields populated or defaulted.
    pub record: FormRecord,
    /// One warning per field that stayed empty.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Parser applying the per-field rules in a fixed order.
///
/// Field rules are independent; the two address fields are the exception
/// in that they anchor on a previously extracted name and are skipped when
/// that name is empty.
#[derive(Debug, Default)]
pub struct FormParser;

impl FormParser {
    pub fn new() -> Self {
        Self
    }
}

impl RecordParser for FormParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        info!("parsing record from {} chars of text", text.len());

        let mut record = FormRecord {
            cin: extract_cin(text).unwrap_or_default(),
            company_name: extract_company_name(text).unwrap_or_default(),
            appointment_date: extract_appointment_date(text).unwrap_or_default(),
            auditor_name: extract_auditor_name(text).unwrap_or_default(),
            auditor_frn_or_membership: extract_registration_number(text).unwrap_or_default(),
            appointment_type: extract_appointment_type(text),
            ..FormRecord::default()
        };

        if !record.company_name.is_empty() {
            record.registered_office =
                locate_trailing_address(text, &record.company_name).unwrap_or_default();
        }
        if !record.auditor_name.is_empty() {
            record.auditor_address =
                locate_trailing_address(text, &record.auditor_name).unwrap_or_default();
        }

        let warnings: Vec<String> = record
            .missing_fields()
            .iter()
            .map(|field| format!("Could not extract {}", field))
            .collect();

        for warning in &warnings {
            debug!("{}", warning);
        }

        ExtractionResult {
            record,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}
