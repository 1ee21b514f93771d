//! Extraction of company records from the free text of a model response.
//!
//! The model is prompted to answer with a list of records, one per company,
//! each made of five `===` separated fields:
//!
//! ```text
//! name===cgpa===deadline===form_link===BRANCH/BRANCH
//! ```
//!
//! usually wrapped in a fenced JSON array of strings. Nothing here coerces
//! values; cgpa and deadline stay textual until the store converts them.

use serde::Serialize;
use thiserror::Error;

pub const DELIMITER: &str = "===";
const FIELD_COUNT: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected} fields separated by '===' but found {found} in {record:?}")]
    FieldCount {
        expected: usize,
        found: usize,
        record: String,
    },

    #[error("field `{field}` is blank in {record:?}")]
    BlankField { field: &'static str, record: String },

    #[error("no branches listed in {record:?}")]
    NoBranches { record: String },
}

/// One company as it appears in the text, before type coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyFields {
    pub name: String,
    pub cgpa: String,
    pub deadline: String,
    pub form_link: String,
    pub branches: Vec<String>,
}

pub fn parse(text: &str) -> Result<Vec<CompanyFields>, ParseError> {
    let cleaned = clean(text);
    split_records(&cleaned)
        .iter()
        .map(|record| parse_record(record))
        .collect()
}

fn clean(text: &str) -> String {
    normalize_delimiters(strip_fences(text))
        .chars()
        .filter(|c| !matches!(c, '\n' | '\r' | '[' | ']'))
        .collect()
}

fn strip_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = match rest.find('\n') {
            Some(idx) => &rest[idx + 1..],
            None => rest.strip_prefix("json").unwrap_or(rest),
        };
    }
    body.strip_suffix("```").unwrap_or(body)
}

fn normalize_delimiters(text: &str) -> String {
    text.split(DELIMITER)
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Splits on commas outside double quotes. Quote characters are consumed.
///
/// An unbalanced quote cannot delimit anything, so when the count is odd
/// quotes are only removed and every comma splits.
fn fragments(text: &str) -> Vec<String> {
    let balanced = text.matches('"').count() % 2 == 0;
    let mut out = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in text.chars() {
        match c {
            '"' => quoted = balanced && !quoted,
            ',' if !quoted => out.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    out.push(current);
    out
}

/// Regroups comma fragments into whole records.
///
/// A fragment extends the current record while that record still lacks
/// delimiters, or when it carries no delimiter itself (a comma inside the
/// branch list). Unquoted names containing a comma after a complete record
/// are ambiguous and end up appended to the previous record's branches.
/// Likewise a record one delimiter short followed by a short fragment is
/// rejoined across the comma: `A===7===2025-01-01===http://x, y===CS` yields
/// one record whose form link is `http://x, y`.
fn split_records(text: &str) -> Vec<String> {
    let mut records: Vec<String> = Vec::new();
    for fragment in fragments(text) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }
        let carries_delimiter = fragment.contains(DELIMITER);
        match records.last_mut() {
            Some(current)
                if current.matches(DELIMITER).count() < FIELD_COUNT - 1 || !carries_delimiter =>
            {
                current.push_str(", ");
                current.push_str(fragment);
            }
            _ => records.push(fragment.to_string()),
        }
    }
    records
}

fn parse_record(record: &str) -> Result<CompanyFields, ParseError> {
    let fields: Vec<&str> = record.split(DELIMITER).map(str::trim).collect();
    let [name, cgpa, deadline, form_link, branches] = fields.as_slice() else {
        return Err(ParseError::FieldCount {
            expected: FIELD_COUNT,
            found: fields.len(),
            record: record.to_string(),
        });
    };

    for (field, value) in [
        ("name", name),
        ("cgpa", cgpa),
        ("deadline", deadline),
        ("form_link", form_link),
        ("branches", branches),
    ] {
        if value.is_empty() {
            return Err(ParseError::BlankField {
                field,
                record: record.to_string(),
            });
        }
    }

    let branches: Vec<String> = branches
        .split(['/', ','])
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(String::from)
        .collect();
    if branches.is_empty() {
        return Err(ParseError::NoBranches {
            record: record.to_string(),
        });
    }

    Ok(CompanyFields {
        name: name.to_string(),
        cgpa: cgpa.to_string(),
        deadline: deadline.to_string(),
        form_link: form_link.to_string(),
        branches,
    })
}
