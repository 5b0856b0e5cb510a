//! Corporate Identification Number extraction.

use super::patterns::CIN;

/// First word-bounded 21-character uppercase alphanumeric token, verbatim.
pub fn extract_cin(text: &str) -> Option<String> {
    CIN.find(text).map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_a_21_char_token() {
        let text = "CIN of the company U72200TN2010PTC074678 as registered";
        assert_eq!(extract_cin(text), Some("U72200TN2010PTC074678".to_string()));
    }

    #[test]
    fn rejects_20_and_22_char_tokens() {
        assert_eq!(extract_cin("U72200TN2010PTC07467 only twenty"), None);
        assert_eq!(extract_cin("U72200TN2010PTC0746788 twenty two"), None);
    }

    #[test]
    fn rejects_lowercase_tokens() {
        assert_eq!(extract_cin("u72200tn2010ptc074678"), None);
    }

    #[test]
    fn takes_the_first_of_several() {
        let text = "L11111KA2001PLC000001 then U72200TN2010PTC074678";
        assert_eq!(extract_cin(text), Some("L11111KA2001PLC000001".to_string()));
    }
}
