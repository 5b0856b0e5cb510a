//! The fixed eight-field record extracted from a Form ADT-1 filing.

use serde::{Deserialize, Serialize};

/// Extracted Form ADT-1 data.
///
/// All eight fields are always present; a field whose pattern did not match
/// is the empty string (the extractor fills `appointment_type` with the
/// literal `"Not specified"` instead). Field declaration order is the
/// serialization order and must not change: downstream consumers rely on
/// the stable key order of the JSON output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Legal name of the filing company.
    pub company_name: String,

    /// Corporate Identification Number, 21 uppercase alphanumerics.
    pub cin: String,

    /// Registered office address, composed as "<address>, <pincode>".
    pub registered_office: String,

    /// Auditor appointment date as found in the text (dd/mm/yyyy).
    pub appointment_date: String,

    /// Name of the appointed auditor or audit firm.
    pub auditor_name: String,

    /// Auditor address, composed as "<address>, <pincode>".
    pub auditor_address: String,

    /// Firm Registration Number or membership number.
    pub auditor_frn_or_membership: String,

    /// Appointment type label ("Re-appointment", "New Appointment", ...).
    pub appointment_type: String,
}

impl FormRecord {
    /// Field names in declaration (and serialization) order.
    pub const FIELD_NAMES: [&'static str; 8] = [
        "company_name",
        "cin",
        "registered_office",
        "appointment_date",
        "auditor_name",
        "auditor_address",
        "auditor_frn_or_membership",
        "appointment_type",
    ];

    /// Name/value pairs in stable field order.
    pub fn field_pairs(&self) -> [(&'static str, &str); 8] {
        [
            ("company_name", self.company_name.as_str()),
            ("cin", self.cin.as_str()),
            ("registered_office", self.registered_office.as_str()),
            ("appointment_date", self.appointment_date.as_str()),
            ("auditor_name", self.auditor_name.as_str()),
            ("auditor_address", self.auditor_address.as_str()),
            (
                "auditor_frn_or_membership",
                self.auditor_frn_or_membership.as_str(),
            ),
            ("appointment_type", self.appointment_type.as_str()),
        ]
    }

    /// Names of fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.field_pairs()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}
