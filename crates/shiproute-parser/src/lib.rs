//! Customer free-text parsing and normalization.
//!
//! [`parse_customer_input`] turns one block of raw text (tab-separated,
//! space-separated, or prose) into a [`shiproute_core::CustomerRecord`];
//! [`normalize_customer`] canonicalizes phone/email/state/country formats.
//! Both are soft: malformed input yields `None` or pass-through values,
//! never an error.

mod detectors;
pub mod normalize;
pub mod parse;
pub mod quality;

pub use normalize::normalize_customer;
pub use parse::parse_customer_input;
pub use quality::{data_quality_score, validate_customer, ValidationWarning};
