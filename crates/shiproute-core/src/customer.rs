//! The customer record produced by the free-text parser.

use serde::{Deserialize, Serialize};

use crate::carrier::Carrier;

/// Which parse strategy produced a [`CustomerRecord`]. Diagnostic only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectedFormat {
    #[serde(rename = "Tab-separated format")]
    TabSeparated,
    #[serde(rename = "Space-separated format")]
    SpaceSeparated,
    #[serde(rename = "Heuristic format")]
    Heuristic,
}

impl std::fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DetectedFormat::TabSeparated => write!(f, "Tab-separated format"),
            DetectedFormat::SpaceSeparated => write!(f, "Space-separated format"),
            DetectedFormat::Heuristic => write!(f, "Heuristic format"),
        }
    }
}

/// A delivery recipient extracted from one block of raw customer text.
///
/// Created by the parser, canonicalized once by the normalizer, then read
/// by the routing engine. Never persisted by this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address_1: Option<String>,
    pub address_2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    /// ISO-2 country code after normalization. Defaults to `"US"`.
    pub country: String,
    /// Carrier parsed from the text or default-filled from the state.
    pub carrier: Option<Carrier>,
    /// Which parse strategy matched.
    pub detected_format: DetectedFormat,
    /// Parser's own completeness estimate in `[0, 100]`.
    pub confidence: f64,
    /// Weighted field-presence score in `[0, 1]`. Diagnostics only.
    pub data_quality_score: f64,
}

impl CustomerRecord {
    /// An otherwise-empty record with the given name and format tag.
    #[must_use]
    pub fn new(name: String, detected_format: DetectedFormat) -> Self {
        CustomerRecord {
            name,
            phone: None,
            email: None,
            address_1: None,
            address_2: None,
            city: None,
            state: None,
            postal_code: None,
            country: "US".to_string(),
            carrier: None,
            detected_format,
            confidence: 0.0,
            data_quality_score: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_defaults_country_to_us() {
        let record = CustomerRecord::new("Jane Doe".to_string(), DetectedFormat::Heuristic);
        assert_eq!(record.country, "US");
        assert!(record.phone.is_none());
        assert!(record.carrier.is_none());
    }

    #[test]
    fn detected_format_display_strings() {
        assert_eq!(
            DetectedFormat::TabSeparated.to_string(),
            "Tab-separated format"
        );
        assert_eq!(
            DetectedFormat::SpaceSeparated.to_string(),
            "Space-separated format"
        );
        assert_eq!(DetectedFormat::Heuristic.to_string(), "Heuristic format");
    }

    #[test]
    fn detected_format_serializes_as_display_string() {
        let json = serde_json::to_string(&DetectedFormat::TabSeparated).unwrap();
        assert_eq!(json, "\"Tab-separated format\"");
    }
}
