//! Positional address extraction.

use super::patterns::ADDRESS_WITH_PIN;

/// Find the address that trails the first occurrence of `anchor`.
///
/// The search window starts after the first textual occurrence of the
/// anchor in the whole document, not the occurrence nearest to wherever the
/// anchor itself was matched. If the anchor string repeats earlier (inside
/// an unrelated clause, say) the window starts from that earlier point.
/// Known heuristic weakness, kept on purpose; change the policy here, not
/// at the call sites.
///
/// Within the window, an address is a run of address-like characters
/// immediately followed by a 6-digit PIN code, composed as
/// `"<address>, <pincode>"`. The PIN is not validated as a plausible
/// postal code.
pub fn locate_trailing_address(text: &str, anchor: &str) -> Option<String> {
    let start = text.find(anchor)? + anchor.len();
    let window = &text[start..];

    ADDRESS_WITH_PIN
        .captures(window)
        .map(|caps| format!("{}, {}", caps[1].trim(), &caps[2]))
}
