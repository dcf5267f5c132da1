//! Data quality scoring and diagnostic validation.
//!
//! The score and warnings inform the caller (validation banners, review
//! queues); they never block processing.

use shiproute_core::CustomerRecord;

/// Per-field presence weights. They sum to 1.0.
const FIELD_WEIGHTS: &[(RequiredField, f64)] = &[
    (RequiredField::Name, 0.20),
    (RequiredField::Phone, 0.15),
    (RequiredField::Email, 0.15),
    (RequiredField::Address1, 0.20),
    (RequiredField::City, 0.10),
    (RequiredField::State, 0.10),
    (RequiredField::PostalCode, 0.10),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequiredField {
    Name,
    Phone,
    Email,
    Address1,
    City,
    State,
    PostalCode,
}

impl RequiredField {
    fn label(self) -> &'static str {
        match self {
            RequiredField::Name => "name",
            RequiredField::Phone => "phone",
            RequiredField::Email => "email",
            RequiredField::Address1 => "address_1",
            RequiredField::City => "city",
            RequiredField::State => "state",
            RequiredField::PostalCode => "postal_code",
        }
    }

    fn is_present(self, record: &CustomerRecord) -> bool {
        let value = match self {
            RequiredField::Name => return !record.name.trim().is_empty(),
            RequiredField::Phone => &record.phone,
            RequiredField::Email => &record.email,
            RequiredField::Address1 => &record.address_1,
            RequiredField::City => &record.city,
            RequiredField::State => &record.state,
            RequiredField::PostalCode => &record.postal_code,
        };
        value.as_deref().is_some_and(|v| !v.trim().is_empty())
    }
}

/// Weighted field-presence score in `[0, 1]`.
#[must_use]
pub fn data_quality_score(record: &CustomerRecord) -> f64 {
    FIELD_WEIGHTS
        .iter()
        .filter(|(field, _)| field.is_present(record))
        .map(|&(_, weight)| weight)
        .sum::<f64>()
        .clamp(0.0, 1.0)
}

/// A soft diagnostic raised by [`validate_customer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    MissingField(&'static str),
    InvalidPostalCode {
        country: String,
        postal_code: String,
    },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::MissingField(field) => write!(f, "missing field: {field}"),
            ValidationWarning::InvalidPostalCode {
                country,
                postal_code,
            } => write!(
                f,
                "postal code '{postal_code}' does not match the {country} format"
            ),
        }
    }
}

/// Collect diagnostic warnings for a (normalized) record: missing
/// required fields and a postal code that fails its country's pattern.
#[must_use]
pub fn validate_customer(record: &CustomerRecord) -> Vec<ValidationWarning> {
    let mut warnings: Vec<ValidationWarning> = FIELD_WEIGHTS
        .iter()
        .filter(|(field, _)| !field.is_present(record))
        .map(|&(field, _)| ValidationWarning::MissingField(field.label()))
        .collect();

    if let Some(postal_code) = record.postal_code.as_deref().filter(|p| !p.trim().is_empty()) {
        if !postal_code_matches(&record.country, postal_code.trim()) {
            warnings.push(ValidationWarning::InvalidPostalCode {
                country: record.country.clone(),
                postal_code: postal_code.trim().to_string(),
            });
        }
    }

    warnings
}

/// Per-country postal patterns. Countries without a pattern accept
/// anything.
fn postal_code_matches(country: &str, postal_code: &str) -> bool {
    let pattern = match country {
        "US" => r"^\d{5}(?:-\d{4})?$",
        "CA" => r"^[A-Za-z]\d[A-Za-z] ?\d[A-Za-z]\d$",
        "GB" => r"^[A-Za-z]{1,2}\d[A-Za-z\d]? ?\d[A-Za-z]{2}$",
        "AU" | "PH" => r"^\d{4}$",
        _ => return true,
    };
    regex::Regex::new(pattern)
        .expect("valid regex")
        .is_match(postal_code)
}
