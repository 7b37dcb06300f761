//! Tiered electricity rate schedule
//!
//! The charge per unit depends on how many units were consumed in the
//! billing period. Tiers are matched top-down: the first tier whose
//! threshold is exceeded wins, so a value sitting exactly on a threshold
//! belongs to the tier below it.

/// Rate applied when consumption does not exceed [`FLAT_RATE_CEILING`].
pub const FLAT_RATE: f64 = 7.85;

/// Highest consumption still billed at [`FLAT_RATE`].
pub const FLAT_RATE_CEILING: u32 = 60;

/// A band of the schedule that applies once consumption exceeds `above`.
///
/// The rate is `base_rate + surcharge / total_units`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub above: u32,
    pub base_rate: f64,
    pub surcharge: f64,
}

impl Tier {
    /// Rate for `total_units` in this tier. `total_units` must exceed `above`.
    pub fn rate_for(&self, total_units: u32) -> f64 {
        self.base_rate + self.surcharge / f64::from(total_units)
    }
}

/// Division-bearing tiers, highest threshold first.
pub const TIERS: [Tier; 4] = [
    Tier {
        above: 180,
        base_rate: 89.0,
        surcharge: 2360.0,
    },
    Tier {
        above: 120,
        base_rate: 32.0,
        surcharge: 480.0,
    },
    Tier {
        above: 90,
        base_rate: 27.75,
        surcharge: 480.0,
    },
    Tier {
        above: FLAT_RATE_CEILING,
        base_rate: 10.0,
        surcharge: 90.0,
    },
];

/// Tier that prices `total_units`, or `None` for the flat band.
pub fn tier_for(total_units: u32) -> Option<&'static Tier> {
    TIERS.iter().find(|tier| total_units > tier.above)
}

/// Charge per unit for a billing period that consumed `total_units`.
///
/// Every division-bearing tier sits above [`FLAT_RATE_CEILING`], so a zero
/// consumption always lands on the flat rate and never reaches a division.
/// Callers are expected to have rejected negative consumption already; the
/// unsigned argument makes that unrepresentable here.
pub fn rate_per_unit(total_units: u32) -> f64 {
    tier_for(total_units).map_or(FLAT_RATE, |tier| tier.rate_for(total_units))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_band_up_to_sixty() {
        for units in 0..=60 {
            assert_eq!(rate_per_unit(units), 7.85, "units = {units}");
        }
    }

    #[test]
    fn second_band_bounds() {
        assert_eq!(rate_per_unit(61), 10.0 + 90.0 / 61.0);
        assert_eq!(rate_per_unit(90), 11.0);
    }

    #[test]
    fn third_band_bounds() {
        assert_eq!(rate_per_unit(91), 27.75 + 480.0 / 91.0);
        assert_eq!(rate_per_unit(120), 31.75);
    }

    #[test]
    fn fourth_band_bounds() {
        assert_eq!(rate_per_unit(121), 32.0 + 480.0 / 121.0);
        assert_eq!(rate_per_unit(180), 32.0 + 480.0 / 180.0);
        assert!((rate_per_unit(180) - 34.667).abs() < 1e-3);
    }

    #[test]
    fn top_band_starts_after_one_eighty() {
        assert_eq!(rate_per_unit(181), 89.0 + 2360.0 / 181.0);
        assert_eq!(rate_per_unit(1000), 89.0 + 2360.0 / 1000.0);
    }

    #[test]
    fn boundary_values_fall_into_lower_tier() {
        assert_eq!(tier_for(60), None);
        assert_eq!(tier_for(90).map(|t| t.above), Some(60));
        assert_eq!(tier_for(120).map(|t| t.above), Some(90));
        assert_eq!(tier_for(180).map(|t| t.above), Some(120));
        assert_eq!(tier_for(181).map(|t| t.above), Some(180));
    }

    #[test]
    fn every_value_matches_exactly_one_row() {
        for units in 0..=400u32 {
            let rows = [
                units > 180,
                units > 120 && units <= 180,
                units > 90 && units <= 120,
                units > 60 && units <= 90,
                units <= 60,
            ];
            assert_eq!(rows.iter().filter(|hit| **hit).count(), 1);

            let expected = match units {
                u if u > 180 => 89.0 + 2360.0 / f64::from(u),
                u if u > 120 => 32.0 + 480.0 / f64::from(u),
                u if u > 90 => 27.75 + 480.0 / f64::from(u),
                u if u > 60 => 10.0 + 90.0 / f64::from(u),
                _ => 7.85,
            };
            assert_eq!(rate_per_unit(units), expected, "units = {units}");
        }
    }
}
