//! Energy-adjusted daily targets.
//!
//! The day's energy total selects a multiplier tier (first match wins):
//!
//! | total     | multiplier |
//! |-----------|------------|
//! | `> 90`    | 1.2        |
//! | `> 80`    | 1.1        |
//! | `>= 65`   | 1.0        |
//! | `>= 50`   | 0.9        |
//! | otherwise | 0.7        |
//!
//! Every base target is scaled and rounded up, so a positive base never
//! drops to zero.

use serde::{Deserialize, Serialize};

use crate::model::{ActivityCounts, DailyTargets};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedTargets {
    pub contacts: u32,
    pub conversations: u32,
    pub meetings: u32,
    pub sales: u32,
    pub multiplier: f64,
}

impl AdjustedTargets {
    pub fn counts(&self) -> ActivityCounts {
        ActivityCounts::new(self.contacts, self.conversations, self.meetings, self.sales)
    }

    /// Short label of the adjustment: "+20%", "(Base)", "-30%".
    pub fn label(&self) -> String {
        let percent = ((self.multiplier - 1.0) * 100.0).round() as i64;
        match percent {
            0 => "(Base)".to_string(),
            p if p > 0 => format!("+{p}%"),
            p => format!("{p}%"),
        }
    }
}

/// Multiplier tier in tenths, so scaling stays in integer arithmetic
/// (`100 * 1.1` in floating point would ceil to 111).
fn tier_tenths(total_energy_score: i32) -> u64 {
    match total_energy_score {
        s if s > 90 => 12,
        s if s > 80 => 11,
        s if s >= 65 => 10,
        s if s >= 50 => 9,
        _ => 7,
    }
}

/// Multiplier tier for an energy total.
pub fn multiplier_for(total_energy_score: i32) -> f64 {
    tier_tenths(total_energy_score) as f64 / 10.0
}

/// `ceil(base * tenths / 10)`, saturating at `u32::MAX`.
fn scale(base: u32, tenths: u64) -> u32 {
    let scaled = (u64::from(base) * tenths).div_ceil(10);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

/// Rescale the base targets by the energy tier.
pub fn adjust(total_energy_score: i32, base_targets: &DailyTargets) -> AdjustedTargets {
    let tenths = tier_tenths(total_energy_score);
    AdjustedTargets {
        contacts: scale(base_targets.contacts, tenths),
        conversations: scale(base_targets.conversations, tenths),
        meetings: scale(base_targets.meetings, tenths),
        sales: scale(base_targets.sales, tenths),
        multiplier: multiplier_for(total_energy_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> DailyTargets {
        ActivityCounts::new(10, 5, 2, 1)
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(multiplier_for(91), 1.2);
        assert_eq!(multiplier_for(90), 1.1);
        assert_eq!(multiplier_for(81), 1.1);
        assert_eq!(multiplier_for(80), 1.0);
        assert_eq!(multiplier_for(65), 1.0);
        assert_eq!(multiplier_for(64), 0.9);
        assert_eq!(multiplier_for(50), 0.9);
        assert_eq!(multiplier_for(49), 0.7);
        assert_eq!(multiplier_for(-5), 0.7);
        assert_eq!(multiplier_for(250), 1.2);
    }

    #[test]
    fn targets_round_up() {
        let low = adjust(30, &base());
        assert_eq!(low.counts(), ActivityCounts::new(7, 4, 2, 1));

        let high = adjust(95, &base());
        assert_eq!(high.counts(), ActivityCounts::new(12, 6, 3, 2));

        let neutral = adjust(70, &base());
        assert_eq!(neutral.counts(), base());
    }

    #[test]
    fn no_checkin_score_lands_in_reduced_tier() {
        let adjusted = adjust(53, &base());
        assert_eq!(adjusted.multiplier, 0.9);
        assert_eq!(adjusted.contacts, 9);
    }

    #[test]
    fn scaling_has_no_float_artifacts() {
        let adjusted = adjust(85, &ActivityCounts::new(100, 30, 0, 0));
        assert_eq!(adjusted.contacts, 110);
        assert_eq!(adjusted.conversations, 33);
    }

    #[test]
    fn zero_base_stays_zero() {
        let adjusted = adjust(95, &ActivityCounts::default());
        assert_eq!(adjusted.counts(), ActivityCounts::default());
    }

    #[test]
    fn labels_match_tiers() {
        assert_eq!(adjust(95, &base()).label(), "+20%");
        assert_eq!(adjust(85, &base()).label(), "+10%");
        assert_eq!(adjust(70, &base()).label(), "(Base)");
        assert_eq!(adjust(55, &base()).label(), "-10%");
        assert_eq!(adjust(10, &base()).label(), "-30%");
    }
}
