//! Company name extraction.

use super::patterns::{COMPANY_OTHER, COMPANY_PRIVATE};

/// Longest run of name characters ending in "PRIVATE LIMITED", falling back
/// to the other incorporation suffixes (LIMITED / LTD / PVT).
pub fn extract_company_name(text: &str) -> Option<String> {
    COMPANY_PRIVATE
        .find(text)
        .or_else(|| COMPANY_OTHER.find(text))
        .map(|m| m.as_str().trim().to_string())
}
