//! Fixed lookup tables for US states, country aliases, calling codes, and
//! per-state carrier preferences.

use crate::carrier::Carrier;

/// USPS state abbreviations paired with canonical full names.
pub const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];

/// Country name/alias to ISO-2 code. Keys are lowercase; the ISO codes
/// themselves are included so canonicalization is a no-op on canonical input.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("us", "US"),
    ("usa", "US"),
    ("u.s.", "US"),
    ("u.s.a.", "US"),
    ("america", "US"),
    ("united states", "US"),
    ("united states of america", "US"),
    ("gb", "GB"),
    ("uk", "GB"),
    ("united kingdom", "GB"),
    ("great britain", "GB"),
    ("england", "GB"),
    ("ca", "CA"),
    ("canada", "CA"),
    ("au", "AU"),
    ("australia", "AU"),
    ("ph", "PH"),
    ("philippines", "PH"),
    ("de", "DE"),
    ("germany", "DE"),
    ("fr", "FR"),
    ("france", "FR"),
    ("mx", "MX"),
    ("mexico", "MX"),
    ("jp", "JP"),
    ("japan", "JP"),
    ("cn", "CN"),
    ("china", "CN"),
    ("in", "IN"),
    ("india", "IN"),
];

/// International calling codes by ISO-2 country, without the `+` prefix.
const CALLING_CODES: &[(&str, &str)] = &[
    ("US", "1"),
    ("CA", "1"),
    ("GB", "44"),
    ("AU", "61"),
    ("PH", "63"),
    ("DE", "49"),
    ("FR", "33"),
    ("MX", "52"),
    ("JP", "81"),
    ("CN", "86"),
    ("IN", "91"),
];

/// Ordered carrier preferences by uppercase full state name. The first
/// entry is the default pick for that state.
pub const CARRIER_PREFERENCES: &[(&str, &[Carrier])] = &[
    ("NEVADA", &[Carrier::Fedex, Carrier::Ups]),
    ("CALIFORNIA", &[Carrier::Dhl, Carrier::Ups]),
    ("NEW YORK", &[Carrier::Ups, Carrier::Dhl]),
    ("FLORIDA", &[Carrier::Usps, Carrier::Ups]),
    ("TEXAS", &[Carrier::Ups, Carrier::Fedex]),
];

/// Expand a state abbreviation or full name to the canonical full name.
///
/// Matching is case-insensitive. Returns `None` for anything not in the
/// USPS table.
#[must_use]
pub fn canonical_state(value: &str) -> Option<&'static str> {
    let value = value.trim();
    US_STATES.iter().find_map(|&(abbrev, name)| {
        (value.eq_ignore_ascii_case(abbrev) || value.eq_ignore_ascii_case(name)).then_some(name)
    })
}

/// Look up the full name for a 2-letter USPS abbreviation.
#[must_use]
pub fn state_full_name(abbrev: &str) -> Option<&'static str> {
    let abbrev = abbrev.trim();
    US_STATES
        .iter()
        .find_map(|&(a, name)| abbrev.eq_ignore_ascii_case(a).then_some(name))
}

/// Resolve a country name or alias to its ISO-2 code.
#[must_use]
pub fn country_code(value: &str) -> Option<&'static str> {
    let value = value.trim().to_lowercase();
    COUNTRY_ALIASES
        .iter()
        .find_map(|&(alias, code)| (value == alias).then_some(code))
}

/// The international calling code for an ISO-2 country. Defaults to `"1"`.
#[must_use]
pub fn calling_code(country: &str) -> &'static str {
    let country = country.trim();
    CALLING_CODES
        .iter()
        .find_map(|&(code, calling)| country.eq_ignore_ascii_case(code).then_some(calling))
        .unwrap_or("1")
}

/// Ordered carrier preferences for a state (full name or abbreviation,
/// any casing). Returns `None` for states without an entry.
#[must_use]
pub fn preferred_carriers(state: &str) -> Option<&'static [Carrier]> {
    let name = canonical_state(state).unwrap_or(state.trim()).to_uppercase();
    CARRIER_PREFERENCES
        .iter()
        .find_map(|&(key, carriers)| (name == key).then_some(carriers))
}
