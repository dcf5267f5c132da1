//! Strategy-ordered parsing of raw customer text.
//!
//! Strategies run in priority order (tab-separated columns, whitespace
//! tokens, line-by-line heuristics) and the first one that extracts a
//! name wins; results are never merged across strategies.

use shiproute_core::{CustomerRecord, DetectedFormat};

use crate::detectors::{self, DetectedField};
use crate::quality;

/// Parse one block of raw customer text into a [`CustomerRecord`].
///
/// Returns `None` for empty or whitespace-only input, and for non-empty
/// input from which not even a name could be extracted. Never panics.
#[must_use]
pub fn parse_customer_input(input: &str) -> Option<CustomerRecord> {
    if input.trim().is_empty() {
        return None;
    }

    let record = if input.contains('\t') {
        parse_tab_separated(input)
    } else {
        parse_space_separated(input).or_else(|| parse_heuristic(input))
    };

    let mut record = record?;
    record.confidence = parser_confidence(&record);
    record.data_quality_score = quality::data_quality_score(&record);
    tracing::debug!(
        format = %record.detected_format,
        confidence = record.confidence,
        "parsed customer input"
    );
    Some(record)
}

/// Column order: name, phone+email, address 1, address 2, city, state,
/// postal code, country. Missing trailing columns are tolerated.
fn parse_tab_separated(input: &str) -> Option<CustomerRecord> {
    let columns: Vec<&str> = input.split(['\t', '\n']).map(str::trim).collect();
    let column = |i: usize| columns.get(i).copied().unwrap_or("");

    let name = column(0);
    if name.is_empty() {
        return None;
    }

    let mut record = CustomerRecord::new(name.to_string(), DetectedFormat::TabSeparated);

    // Phone and email usually arrive concatenated in the second column;
    // the email is cut out by pattern and the digit run that remains is
    // the phone.
    let contact = column(1);
    record.email = detectors::find_email(contact);
    let phone_part = record
        .email
        .as_deref()
        .map_or_else(|| contact.to_string(), |email| contact.replace(email, ""));
    let phone_part = phone_part.trim();
    if detectors::digit_count(phone_part) >= 7 {
        record.phone = Some(phone_part.to_string());
    }

    record.address_1 = non_empty(column(2));
    record.address_2 = non_empty(column(3));
    record.city = non_empty(column(4));
    record.state = non_empty(column(5));
    record.postal_code = non_empty(column(6));
    if let Some(country) = non_empty(column(7)) {
        record.country = country;
    }

    Some(record)
}

/// Whitespace tokens classified by pattern: email, phone, postal code,
/// and state tokens are claimed first (first match wins per field), the
/// name is the first remaining run of capitalized alphabetic tokens, and
/// whatever is left joins into the street address.
fn parse_space_separated(input: &str) -> Option<CustomerRecord> {
    // Token classification is only meaningful for one-line input; blocks
    // with line structure go to the line-based strategy.
    if input.trim().contains('\n') {
        return None;
    }

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let mut used = vec![false; tokens.len()];

    let mut email = None;
    let mut phone = None;
    let mut postal_code = None;
    let mut state = None;

    for (i, token) in tokens.iter().enumerate() {
        if email.is_none() && token.contains('@') {
            if let Some(matched) = detectors::find_email(token) {
                email = Some(matched);
                used[i] = true;
                continue;
            }
        }
        if phone.is_none() && detectors::is_phone_token(token) {
            phone = Some((*token).to_string());
            used[i] = true;
        } else if postal_code.is_none() && detectors::is_postal_token(token) {
            postal_code = Some((*token).to_string());
            used[i] = true;
        } else if state.is_none() {
            if let Some(full_name) = detectors::state_code_token(token) {
                state = Some(full_name.to_string());
                used[i] = true;
            }
        }
    }

    let name_range = {
        let mut found = None;
        let mut i = 0;
        while i < tokens.len() {
            if !used[i] && detectors::is_title_alpha(tokens[i]) {
                let start = i;
                while i < tokens.len() && !used[i] && detectors::is_title_alpha(tokens[i]) {
                    i += 1;
                }
                found = Some(start..i);
                break;
            }
            i += 1;
        }
        found?
    };

    let name = tokens[name_range.clone()].join(" ");
    for index in name_range {
        used[index] = true;
    }

    let mut record = CustomerRecord::new(name, DetectedFormat::SpaceSeparated);
    record.email = email;
    record.phone = phone;
    record.postal_code = postal_code;
    record.state = state;

    let address: Vec<&str> = tokens
        .iter()
        .zip(&used)
        .filter(|&(_, &claimed)| !claimed)
        .map(|(token, _)| *token)
        .collect();
    if !address.is_empty() {
        record.address_1 = Some(address.join(" "));
    }

    Some(record)
}

/// Line-by-line field detection for prose-like input.
///
/// Each line runs through the ordered detector list; a line no detector
/// claims falls back positionally — probable name, then street address
/// (contains digits), then city.
fn parse_heuristic(input: &str) -> Option<CustomerRecord> {
    let mut record = CustomerRecord::new(String::new(), DetectedFormat::Heuristic);

    for line in input.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some(field) = detectors::detect_line(line) {
            apply_detected(&mut record, field);
            continue;
        }
        if record.name.is_empty() && is_probable_name(line) {
            record.name = line.to_string();
        } else if record.address_1.is_none() && line.chars().any(|c| c.is_ascii_digit()) {
            record.address_1 = Some(line.to_string());
        } else if record.city.is_none() {
            record.city = Some(line.to_string());
        }
    }

    if record.name.is_empty() {
        return None;
    }
    Some(record)
}

/// First non-empty wins per field; later matches are dropped.
fn apply_detected(record: &mut CustomerRecord, field: DetectedField) {
    match field {
        DetectedField::Email(value) => {
            if record.email.is_none() {
                record.email = Some(value);
            }
        }
        DetectedField::Phone(value) => {
            if record.phone.is_none() {
                record.phone = Some(value);
            }
        }
        DetectedField::State(value) => {
            if record.state.is_none() {
                record.state = Some(value);
            }
        }
        DetectedField::PostalCode(value) => {
            if record.postal_code.is_none() {
                record.postal_code = Some(value);
            }
        }
    }
}

/// Short, purely alphabetic, title-case line — probably a person's name.
fn is_probable_name(line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    line.len() <= 40
        && (1..=4).contains(&words.len())
        && words.iter().all(|word| detectors::is_title_alpha(word))
}

/// Strategy base plus a small boost per populated field, capped at 100.
fn parser_confidence(record: &CustomerRecord) -> f64 {
    let base = match record.detected_format {
        DetectedFormat::TabSeparated => 90.0,
        DetectedFormat::SpaceSeparated => 70.0,
        DetectedFormat::Heuristic => 50.0,
    };
    let populated = [
        &record.phone,
        &record.email,
        &record.address_1,
        &record.address_2,
        &record.city,
        &record.state,
        &record.postal_code,
    ]
    .into_iter()
    .filter(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    .count();
    // At most 7 fields; exact in f64.
    #[allow(clippy::cast_precision_loss)]
    let boost = 2.0 * populated as f64;
    (base + boost).min(100.0)
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
