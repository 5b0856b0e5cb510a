//! Auditor name and registration number extraction.

use super::patterns::{AUDITOR_FIRM, AUDITOR_PARTNERSHIP, REGISTRATION_NUMBER};

/// Partnership-style name (contains a literal `&`) first, then firm names
/// ending in ASSOCIATES, PARTNERS or "& CO".
pub fn extract_auditor_name(text: &str) -> Option<String> {
    if let Some(caps) = AUDITOR_PARTNERSHIP.captures(text) {
        return Some(caps[1].trim().to_string());
    }
    AUDITOR_FIRM
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// First word-bounded run of 6+ uppercase alphanumerics anywhere in the
/// text. Can coincide with the CIN or an unrelated code; that imprecision
/// is inherited from the form's loose FRN formatting.
pub fn extract_registration_number(text: &str) -> Option<String> {
    REGISTRATION_NUMBER
        .captures(text)
        .map(|caps| caps[1].to_string())
}
