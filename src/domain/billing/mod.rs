//! Billing engine
//!
//! Pure functions: the tiered rate schedule and the validation that turns a
//! pair of meter readings into units, charge and a billing period label.

pub mod engine;
pub mod tariff;

pub use engine::{
    format_billing_period, validate_and_derive, DerivedFields, ReadingError, ReadingPair,
    BILLING_DATE_FORMAT,
};
pub use tariff::{rate_per_unit, tier_for, Tier, FLAT_RATE, FLAT_RATE_CEILING, TIERS};
