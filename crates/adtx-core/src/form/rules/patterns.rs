//! Common regex patterns for ADT-1 field extraction.
//!
//! These deliberately mirror the filing's observed layout rather than any
//! formal grammar, and several can over-match on noisy OCR text (the
//! registration-number pattern can pick up the CIN, for one). That
//! imprecision is a known property of the heuristic design; tightening a
//! pattern here needs checking against real filings first.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // CIN: exactly 21 uppercase alphanumerics, word-bounded.
    pub static ref CIN: Regex = Regex::new(r"\b[A-Z0-9]{21}\b").unwrap();

    // Company name, private-limited form first.
    pub static ref COMPANY_PRIVATE: Regex = Regex::new(
        r"\b[A-Za-z\s&.,]+PRIVATE LIMITED\b"
    ).unwrap();

    pub static ref COMPANY_OTHER: Regex = Regex::new(
        r"\b[A-Za-z\s&.,]+(?:LIMITED|LTD|PVT)\b"
    ).unwrap();

    // Appointment date: dd/mm/yyyy, no calendar validation.
    pub static ref DATE_DMY: Regex = Regex::new(r"\b(\d{2}/\d{2}/\d{4})\b").unwrap();

    // Partnership-style firm name: letters with a literal ampersand.
    pub static ref AUDITOR_PARTNERSHIP: Regex = Regex::new(
        r"\b([A-Za-z\s]+&[A-Za-z\s]+)\b"
    ).unwrap();

    // Firm names without an ampersand.
    pub static ref AUDITOR_FIRM: Regex = Regex::new(
        r"\b([A-Z][A-Za-z\s]+(?:ASSOCIATES|PARTNERS|& CO))\b"
    ).unwrap();

    // FRN or membership number: 6+ uppercase alphanumerics.
    pub static ref REGISTRATION_NUMBER: Regex = Regex::new(r"\b([A-Z0-9]{6,})\b").unwrap();

    // Address-like run immediately followed by a 6-digit PIN code.
    pub static ref ADDRESS_WITH_PIN: Regex = Regex::new(
        r"([A-Za-z0-9,\s\-]+)\s+(\d{6})"
    ).unwrap();

    // Appointment type phrases, checked in priority order.
    pub static ref APPOINTMENT_AGM: Regex = Regex::new(
        r"(?i)Appointment/Re-appointment in AGM"
    ).unwrap();

    pub static ref APPOINTMENT_RE: Regex = Regex::new(r"(?i)Re-appointment").unwrap();

    pub static ref APPOINTMENT_NEW: Regex = Regex::new(r"(?i)New Appointment").unwrap();
}
