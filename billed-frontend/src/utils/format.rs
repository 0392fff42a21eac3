//! Display formatting of bill fields. Pure, no I/O.

use chrono::{Datelike, NaiveDate};

use crate::error::FieldError;
use crate::models::BillStatus;

const MONTHS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Outcome of formatting one field: the formatted value, or the raw input
/// kept as-is together with the reason it could not be formatted.
#[derive(Debug, Clone, PartialEq)]
pub enum Formatted<T> {
    Value(T),
    Fallback { raw: String, error: FieldError },
}

impl<T> Formatted<T> {
    pub fn new(raw: &str, format: impl FnOnce(&str) -> Result<T, FieldError>) -> Self {
        match format(raw) {
            Ok(value) => Formatted::Value(value),
            Err(error) => Formatted::Fallback {
                raw: raw.to_string(),
                error,
            },
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Formatted::Value(value) => Some(value),
            Formatted::Fallback { .. } => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Formatted<U> {
        match self {
            Formatted::Value(value) => Formatted::Value(f(value)),
            Formatted::Fallback { raw, error } => Formatted::Fallback { raw, error },
        }
    }

    pub fn error(&self) -> Option<&FieldError> {
        match self {
            Formatted::Value(_) => None,
            Formatted::Fallback { error, .. } => Some(error),
        }
    }
}

impl<T: Into<String>> Formatted<T> {
    /// The display string: formatted value or raw fallback.
    pub fn into_display(self) -> String {
        match self {
            Formatted::Value(value) => value.into(),
            Formatted::Fallback { raw, .. } => raw,
        }
    }
}

/// Display label of a status code.
///
/// The labels mix French and English (`Refused`); they are kept exactly as
/// the product shows them today.
pub fn format_status(code: &str) -> Result<&'static str, FieldError> {
    match BillStatus::from_code(code) {
        Some(BillStatus::Pending) => Ok("En attente"),
        Some(BillStatus::Accepted) => Ok("Accepté"),
        Some(BillStatus::Refused) => Ok("Refused"),
        None => Err(FieldError::UnknownStatus {
            code: code.to_string(),
        }),
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| FieldError::DateParse {
        raw: raw.to_string(),
    })
}

/// Render a calendar date as `"<day> <Mon>. <yy>"`, e.g. `"15 Avr. 23"`.
pub fn format_date(raw: &str) -> Result<String, FieldError> {
    parse_date(raw).map(|date| render_date(&date))
}

/// Display form of an already parsed date.
pub fn render_date(date: &NaiveDate) -> String {
    format!(
        "{} {}. {:02}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year().rem_euclid(100)
    )
}
