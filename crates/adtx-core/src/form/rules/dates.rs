//! Appointment date extraction.

use super::patterns::DATE_DMY;

/// First dd/mm/yyyy date, kept as the literal string.
///
/// No calendar validation: the form is the source of truth and an OCR'd
/// "31/02/2023" is reported as-is rather than silently dropped.
pub fn extract_appointment_date(text: &str) -> Option<String> {
    DATE_DMY.captures(text).map(|caps| caps[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_date_wins() {
        let text = "AGM held on 29/09/2023 and appointment effective 01/10/2023";
        assert_eq!(extract_appointment_date(text), Some("29/09/2023".to_string()));
    }

    #[test]
    fn invalid_calendar_dates_are_accepted_verbatim() {
        assert_eq!(
            extract_appointment_date("dated 31/02/2023"),
            Some("31/02/2023".to_string())
        );
    }

    #[test]
    fn other_separators_do_not_match() {
        assert_eq!(extract_appointment_date("29-09-2023 or 2023/09/29"), None);
    }
}
