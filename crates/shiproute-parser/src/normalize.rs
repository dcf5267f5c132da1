//! Canonicalization of parsed customer records.
//!
//! Every rule here is soft: values the normalizer cannot map pass
//! through (state, country) or are cleared (email), never rejected.
//! Normalization is idempotent — applying it twice yields the same
//! record as applying it once.

use shiproute_core::{regions, CustomerRecord};

use crate::quality;

/// Canonicalize a parsed record.
///
/// Country is resolved first so the phone rule can pick the right
/// calling code. Recomputes the data quality score at the end, since
/// normalization can clear an invalid email.
#[must_use]
pub fn normalize_customer(mut record: CustomerRecord) -> CustomerRecord {
    record.name = record.name.trim().to_string();
    record.country = normalize_country(&record.country);
    record.phone = record
        .phone
        .as_deref()
        .and_then(|phone| normalize_phone(phone, &record.country));
    record.email = record.email.as_deref().and_then(normalize_email);
    record.state = record.state.as_deref().map(normalize_state);
    record.address_1 = record.address_1.as_deref().and_then(non_empty);
    record.address_2 = record.address_2.as_deref().and_then(non_empty);
    record.city = record.city.as_deref().and_then(non_empty);
    record.postal_code = record.postal_code.as_deref().and_then(non_empty);

    // Default-fill only: a carrier parsed from the text is never replaced,
    // and the router still applies its own default for unknown states.
    if record.carrier.is_none() {
        record.carrier = record
            .state
            .as_deref()
            .and_then(regions::preferred_carriers)
            .and_then(|preferences| preferences.first().copied());
    }

    record.data_quality_score = quality::data_quality_score(&record);
    record
}

/// Strip separators and apply the `+<country><digits>` shape.
///
/// A 10-digit number gets the country's calling code; 11 digits with a
/// leading `1` is a US trunk-prefixed number; anything else keeps its
/// digits (and leading `+`) untouched.
fn normalize_phone(raw: &str, country: &str) -> Option<String> {
    let raw = raw.trim();
    let has_plus = raw.starts_with('+');
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    if has_plus {
        return Some(format!("+{digits}"));
    }
    if digits.len() == 10 {
        return Some(format!("+{}{digits}", regions::calling_code(country)));
    }
    if digits.len() == 11 && digits.starts_with('1') {
        return Some(format!("+{digits}"));
    }
    Some(digits)
}

/// Lowercase and trim; require exactly one `@` and a dotted domain.
/// Invalid addresses are cleared rather than surfaced as errors.
fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim().to_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') || !domain.contains('.') {
        return None;
    }
    Some(email)
}

/// Expand recognized abbreviations and casings to the canonical full
/// state name; unknown values pass through unchanged.
fn normalize_state(raw: &str) -> String {
    let raw = raw.trim();
    regions::canonical_state(raw).map_or_else(|| raw.to_string(), str::to_string)
}

/// Resolve aliases to ISO-2; absent → `"US"`; unrecognized values are
/// upper-cased and passed through.
fn normalize_country(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return "US".to_string();
    }
    regions::country_code(raw).map_or_else(|| raw.to_uppercase(), str::to_string)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiproute_core::{Carrier, DetectedFormat};

    fn make_record() -> CustomerRecord {
        let mut record =
            CustomerRecord::new("Jane Smith".to_string(), DetectedFormat::SpaceSeparated);
        record.phone = Some("(555) 123-4567".to_string());
        record.email = Some(" Jane.Smith@Example.COM ".to_string());
        record.address_1 = Some("123 Elm Street".to_string());
        record.city = Some("Reno".to_string());
        record.state = Some("NV".to_string());
        record.postal_code = Some(" 89501 ".to_string());
        record.country = "usa".to_string();
        record
    }

    // -----------------------------------------------------------------------
    // idempotence
    // -----------------------------------------------------------------------

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize_customer(make_record());
        let twice = normalize_customer(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn normalize_is_idempotent_on_unrecognized_values() {
        let mut record = make_record();
        record.state = Some("Manila".to_string());
        record.country = "Atlantis".to_string();
        record.phone = Some("12345".to_string());
        let once = normalize_customer(record);
        let twice = normalize_customer(once.clone());
        assert_eq!(once, twice);
    }

    // -----------------------------------------------------------------------
    // phone
    // -----------------------------------------------------------------------

    #[test]
    fn ten_digit_phone_gets_country_calling_code() {
        let mut record = make_record();
        record.phone = Some("555-123-4567".to_string());
        let record = normalize_customer(record);
        assert_eq!(record.phone.as_deref(), Some("+15551234567"));
    }

    #[test]
    fn ten_digit_phone_uses_non_us_calling_code() {
        let mut record = make_record();
        record.phone = Some("969 164 5226".to_string());
        record.country = "Philippines".to_string();
        let record = normalize_customer(record);
        assert_eq!(record.phone.as_deref(), Some("+639691645226"));
    }

    #[test]
    fn eleven_digit_phone_with_trunk_one_becomes_plus_one() {
        let mut record = make_record();
        record.phone = Some("1-555-123-4567".to_string());
        let record = normalize_customer(record);
        assert_eq!(record.phone.as_deref(), Some("+15551234567"));
    }

    #[test]
    fn plus_prefixed_phone_keeps_digits() {
        let mut record = make_record();
        record.phone = Some("+63 969 164 5226".to_string());
        let record = normalize_customer(record);
        assert_eq!(record.phone.as_deref(), Some("+639691645226"));
    }

    #[test]
    fn odd_length_phone_passes_through_digits_only() {
        let mut record = make_record();
        record.phone = Some("12-34-56".to_string());
        let record = normalize_customer(record);
        assert_eq!(record.phone.as_deref(), Some("123456"));
    }

    // -----------------------------------------------------------------------
    // email
    // -----------------------------------------------------------------------

    #[test]
    fn email_is_lowercased_and_trimmed() {
        let record = normalize_customer(make_record());
        assert_eq!(record.email.as_deref(), Some("jane.smith@example.com"));
    }

    #[test]
    fn invalid_email_is_cleared_not_rejected() {
        for bad in ["no-at-sign.com", "two@@example.com", "a@b@c.com", "dot@less"] {
            let mut record = make_record();
            record.email = Some(bad.to_string());
            let record = normalize_customer(record);
            assert_eq!(record.email, None, "expected {bad:?} to be cleared");
        }
    }

    // -----------------------------------------------------------------------
    // state and country
    // -----------------------------------------------------------------------

    #[test]
    fn state_abbreviation_expands_to_full_name() {
        let record = normalize_customer(make_record());
        assert_eq!(record.state.as_deref(), Some("Nevada"));
    }

    #[test]
    fn unknown_state_passes_through_unchanged() {
        let mut record = make_record();
        record.state = Some("Manila".to_string());
        let record = normalize_customer(record);
        assert_eq!(record.state.as_deref(), Some("Manila"));
    }

    #[test]
    fn country_alias_resolves_to_iso_code() {
        let record = normalize_customer(make_record());
        assert_eq!(record.country, "US");
    }

    #[test]
    fn unrecognized_country_is_uppercased_pass_through() {
        let mut record = make_record();
        record.country = "Atlantis".to_string();
        let record = normalize_customer(record);
        assert_eq!(record.country, "ATLANTIS");
    }

    #[test]
    fn empty_country_defaults_to_us() {
        let mut record = make_record();
        record.country = "  ".to_string();
        let record = normalize_customer(record);
        assert_eq!(record.country, "US");
    }

    // -----------------------------------------------------------------------
    // carrier default-fill
    // -----------------------------------------------------------------------

    #[test]
    fn carrier_default_fills_from_state_preference() {
        let record = normalize_customer(make_record());
        assert_eq!(record.carrier, Some(Carrier::Fedex));
    }

    #[test]
    fn parsed_carrier_is_never_replaced() {
        let mut record = make_record();
        record.carrier = Some(Carrier::Usps);
        let record = normalize_customer(record);
        assert_eq!(record.carrier, Some(Carrier::Usps));
    }

    #[test]
    fn no_carrier_fill_for_states_outside_the_table() {
        let mut record = make_record();
        record.state = Some("Oregon".to_string());
        let record = normalize_customer(record);
        assert_eq!(record.carrier, None);
    }
}
