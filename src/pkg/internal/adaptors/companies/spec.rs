use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;

use crate::pkg::internal::parser::CompanyFields;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("invalid cgpa {value:?} for company {company:?}")]
    Cgpa { company: String, value: String },

    #[error("invalid deadline {value:?} for company {company:?}")]
    Deadline { company: String, value: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanyEntry {
    pub id: i32,
    pub name: String,
    pub cgpa: f64,
    pub deadline: NaiveDateTime,
    pub form_link: String,
    pub profiles: String,
    pub branches: Vec<String>,
}

/// A parsed company with typed values, ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCompany {
    pub name: String,
    pub cgpa: f64,
    pub deadline: NaiveDateTime,
    pub form_link: String,
    pub profiles: String,
    pub branches: Vec<String>,
}

impl NewCompany {
    pub fn from_fields(fields: CompanyFields, profiles: &str) -> Result<Self, ConversionError> {
        let cgpa = fields
            .cgpa
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ConversionError::Cgpa {
                company: fields.name.clone(),
                value: fields.cgpa.clone(),
            })?;
        let deadline = parse_deadline(&fields.deadline).ok_or_else(|| ConversionError::Deadline {
            company: fields.name.clone(),
            value: fields.deadline.clone(),
        })?;
        Ok(NewCompany {
            name: fields.name,
            cgpa,
            deadline,
            form_link: fields.form_link,
            profiles: profiles.to_string(),
            branches: fields.branches,
        })
    }
}

/// Deadlines are stored as UTC wall time. Zoned inputs (`Z` or an offset)
/// are shifted to UTC; naive inputs and bare dates are taken as UTC already.
pub fn parse_deadline(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}
