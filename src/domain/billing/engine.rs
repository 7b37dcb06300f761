//! Reading validation and derivation of billed amounts

use chrono::NaiveDate;
use thiserror::Error;

use super::tariff::rate_per_unit;

/// Date format used inside the billing period label, e.g. `Jan 05, 2024`.
pub const BILLING_DATE_FORMAT: &str = "%b %d, %Y";

/// Two successive meter readings with the dates they were taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingPair {
    pub last_reading_date: NaiveDate,
    pub last_reading: u32,
    pub current_reading_date: NaiveDate,
    pub current_reading: u32,
}

/// Rejection reasons for a reading pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadingError {
    #[error("Current reading must be greater than Last reading")]
    NonIncreasingReading,

    #[error("Wrong Date Entries")]
    ReversedDateRange,
}

impl ReadingError {
    /// Stable label for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NonIncreasingReading => "non_increasing_reading",
            Self::ReversedDateRange => "reversed_date_range",
        }
    }
}

/// Values computed from a valid reading pair.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    pub total_units: u32,
    pub total_charge: f64,
    pub billing_period: String,
}

impl DerivedFields {
    /// Charge per unit that produced `total_charge`.
    pub fn rate_per_unit(&self) -> f64 {
        rate_per_unit(self.total_units)
    }
}

/// `"<from> - <to>"` with both dates in [`BILLING_DATE_FORMAT`].
pub fn format_billing_period(from: NaiveDate, to: NaiveDate) -> String {
    format!(
        "{} - {}",
        from.format(BILLING_DATE_FORMAT),
        to.format(BILLING_DATE_FORMAT)
    )
}

/// Validate a reading pair and compute the fields stored alongside it.
///
/// The reading check runs before the date check; the first failure is
/// returned. Zero consumption is valid and bills nothing.
pub fn validate_and_derive(pair: &ReadingPair) -> Result<DerivedFields, ReadingError> {
    if pair.current_reading < pair.last_reading {
        return Err(ReadingError::NonIncreasingReading);
    }

    if pair.current_reading_date < pair.last_reading_date {
        return Err(ReadingError::ReversedDateRange);
    }

    let total_units = pair.current_reading - pair.last_reading;
    let rate = rate_per_unit(total_units);

    Ok(DerivedFields {
        total_units,
        total_charge: f64::from(total_units) * rate,
        billing_period: format_billing_period(pair.last_reading_date, pair.current_reading_date),
    })
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pair(last: u32, last_date: NaiveDate, current: u32, current_date: NaiveDate) -> ReadingPair {
        ReadingPair {
            last_reading_date: last_date,
            last_reading: last,
            current_reading_date: current_date,
            current_reading: current,
        }
    }

    #[test]
    fn derives_fourth_tier_bill() {
        let derived =
            validate_and_derive(&pair(100, date(2024, 1, 1), 250, date(2024, 2, 1))).unwrap();

        assert_eq!(derived.total_units, 150);
        assert!((derived.rate_per_unit() - 35.2).abs() < 1e-12);
        assert_eq!(derived.total_charge, 150.0 * (32.0 + 480.0 / 150.0));
        assert!((derived.total_charge - 5280.0).abs() < 1e-9);
        assert_eq!(derived.billing_period, "Jan 01, 2024 - Feb 01, 2024");
    }

    #[test]
    fn derives_flat_rate_bill() {
        let derived =
            validate_and_derive(&pair(0, date(2024, 1, 1), 50, date(2024, 1, 15))).unwrap();

        assert_eq!(derived.total_units, 50);
        assert_eq!(derived.rate_per_unit(), 7.85);
        assert_eq!(derived.total_charge, 50.0 * 7.85);
        assert!((derived.total_charge - 392.5).abs() < 1e-9);
        assert_eq!(derived.billing_period, "Jan 01, 2024 - Jan 15, 2024");
    }

    #[test]
    fn lower_current_reading_is_rejected_regardless_of_dates() {
        let ordered = pair(200, date(2024, 1, 1), 150, date(2024, 2, 1));
        let reversed = pair(200, date(2024, 2, 1), 150, date(2024, 1, 1));

        assert_eq!(
            validate_and_derive(&ordered),
            Err(ReadingError::NonIncreasingReading)
        );
        assert_eq!(
            validate_and_derive(&reversed),
            Err(ReadingError::NonIncreasingReading)
        );
    }

    #[test]
    fn reversed_dates_are_rejected() {
        let p = pair(100, date(2024, 3, 1), 180, date(2024, 2, 28));
        assert_eq!(
            validate_and_derive(&p),
            Err(ReadingError::ReversedDateRange)
        );
    }

    #[test]
    fn zero_consumption_bills_nothing() {
        let derived =
            validate_and_derive(&pair(500, date(2024, 5, 1), 500, date(2024, 5, 1))).unwrap();

        assert_eq!(derived.total_units, 0);
        assert_eq!(derived.total_charge, 0.0);
        assert_eq!(derived.billing_period, "May 01, 2024 - May 01, 2024");
    }

    #[test]
    fn same_input_yields_same_output() {
        let p = pair(1234, date(2023, 12, 5), 1431, date(2024, 1, 5));
        let first = validate_and_derive(&p).unwrap();
        let second = validate_and_derive(&p).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.total_units, 197);
        assert_eq!(first.total_charge, 197.0 * (89.0 + 2360.0 / 197.0));
        assert_eq!(first.billing_period, "Dec 05, 2023 - Jan 05, 2024");
    }

    #[test]
    fn error_messages_are_human_readable() {
        assert_eq!(
            ReadingError::NonIncreasingReading.to_string(),
            "Current reading must be greater than Last reading"
        );
        assert_eq!(ReadingError::ReversedDateRange.to_string(), "Wrong Date Entries");
        assert_eq!(ReadingError::ReversedDateRange.kind(), "reversed_date_range");
    }
}
