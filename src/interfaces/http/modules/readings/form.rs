//! Typed parsing of the reading form
//!
//! The form posts four raw strings. They are checked for presence by the
//! extractor, then parsed here into a [`ReadingPair`]; anything malformed is
//! an [`InputError`] and never reaches the billing engine.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::Validate;

use super::dto::FORM_DATE_FORMAT;
use crate::domain::ReadingPair;

/// Raw reading form as submitted by the browser
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReadingForm {
    #[validate(length(min = 1, message = "last reading date is required"))]
    pub date1: String,
    #[validate(length(min = 1, message = "last reading is required"))]
    pub num1: String,
    #[validate(length(min = 1, message = "current reading date is required"))]
    pub date2: String,
    #[validate(length(min = 1, message = "current reading is required"))]
    pub num2: String,
}

/// Malformed form input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field}: '{value}' is not a date in YYYY-MM-DD form")]
    MalformedDate { field: &'static str, value: String },

    #[error("{field}: '{value}' is not a non-negative whole number")]
    MalformedReading { field: &'static str, value: String },
}

impl ReadingForm {
    pub fn parse(&self) -> Result<ReadingPair, InputError> {
        Ok(ReadingPair {
            last_reading_date: parse_date("date1", &self.date1)?,
            last_reading: parse_reading("num1", &self.num1)?,
            current_reading_date: parse_date("date2", &self.date2)?,
            current_reading: parse_reading("num2", &self.num2)?,
        })
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(raw.trim(), FORM_DATE_FORMAT).map_err(|_| {
        InputError::MalformedDate {
            field,
            value: raw.to_string(),
        }
    })
}

fn parse_reading(field: &'static str, raw: &str) -> Result<u32, InputError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| InputError::MalformedReading {
            field,
            value: raw.to_string(),
        })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn form(date1: &str, num1: &str, date2: &str, num2: &str) -> ReadingForm {
        ReadingForm {
            date1: date1.into(),
            num1: num1.into(),
            date2: date2.into(),
            num2: num2.into(),
        }
    }

    #[test]
    fn parses_well_formed_input() {
        let pair = form("2024-01-01", "100", "2024-02-01", " 250 ").parse().unwrap();

        assert_eq!(pair.last_reading_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(pair.last_reading, 100);
        assert_eq!(pair.current_reading_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(pair.current_reading, 250);
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(
            form("01/02/2024", "1", "2024-02-01", "2").parse(),
            Err(InputError::MalformedDate {
                field: "date1",
                value: "01/02/2024".into()
            })
        );
        assert!(matches!(
            form("2024-01-01", "1", "2024-02-30", "2").parse(),
            Err(InputError::MalformedDate { field: "date2", .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_and_negative_readings() {
        assert!(matches!(
            form("2024-01-01", "abc", "2024-02-01", "2").parse(),
            Err(InputError::MalformedReading { field: "num1", .. })
        ));
        assert!(matches!(
            form("2024-01-01", "1", "2024-02-01", "-5").parse(),
            Err(InputError::MalformedReading { field: "num2", .. })
        ));
        assert!(matches!(
            form("2024-01-01", "1.5", "2024-02-01", "2").parse(),
            Err(InputError::MalformedReading { field: "num1", .. })
        ));
    }

    #[test]
    fn presence_is_validated() {
        assert!(form("", "1", "2024-02-01", "2").validate().is_err());
        assert!(form("2024-01-01", "1", "2024-02-01", "2").validate().is_ok());
    }
}
