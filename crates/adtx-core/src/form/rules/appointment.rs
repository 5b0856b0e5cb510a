//! Appointment type classification.

use super::patterns::{APPOINTMENT_AGM, APPOINTMENT_NEW, APPOINTMENT_RE};

/// Fallback label when no appointment phrase appears in the text.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Classify the appointment type by phrase lookup, in fixed priority order.
///
/// The AGM phrase is checked first because it contains "Re-appointment" as
/// a substring; reversing the order would misclassify every AGM filing.
pub fn extract_appointment_type(text: &str) -> String {
    if APPOINTMENT_AGM.is_match(text) {
        "Appointment/Re-appointment in AGM".to_string()
    } else if APPOINTMENT_RE.is_match(text) {
        "Re-appointment".to_string()
    } else if APPOINTMENT_NEW.is_match(text) {
        "New Appointment".to_string()
    } else {
        NOT_SPECIFIED.to_string()
    }
}
