//! Rule-based field extractors for Form ADT-1.
//!
//! Each rule is independent: a non-matching rule leaves its field at the
//! default and never affects the others.

pub mod address;
pub mod appointment;
pub mod auditor;
pub mod cin;
pub mod company;
pub mod dates;
pub mod patterns;

pub use address::locate_trailing_address;
pub use appointment::{NOT_SPECIFIED, extract_appointment_type};
pub use auditor::{extract_auditor_name, extract_registration_number};
pub use cin::extract_cin;
pub use company::extract_company_name;
pub use dates::extract_appointment_date;
