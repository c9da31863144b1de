//! Composite energy score for the current day.
//!
//! Only the physical check-in answers move the score. Mental, emotional and
//! social are fixed values until richer check-in data feeds them, and the
//! physical score is not clamped, so a perfect morning reads 110.

use serde::{Deserialize, Serialize};

use crate::model::{DailyLog, RestedLevel, UserConfig};

/// Starting point of the physical score.
const PHYSICAL_BASE: i32 = 50;
const SLEEP_GOAL_MET_BONUS: i32 = 30;
const BREAKFAST_BONUS: i32 = 10;

const MENTAL_SCORE: i32 = 72;
const EMOTIONAL_SCORE: i32 = 80;
const SOCIAL_SCORE: i32 = 75;

/// Sub-scores used before the day's check-in.
const NO_CHECKIN: (i32, i32, i32, i32) = (0, 70, 70, 70);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyScore {
    pub physical: i32,
    pub mental: i32,
    pub emotional: i32,
    pub social: i32,
    pub total: i32,
}

impl EnergyScore {
    fn from_parts(physical: i32, mental: i32, emotional: i32, social: i32) -> Self {
        Self {
            physical,
            mental,
            emotional,
            social,
            total: average_rounded(physical + mental + emotional + social),
        }
    }

    /// Whether the day reads as productive on the battery display.
    pub fn is_productive(&self) -> bool {
        self.total > 70
    }
}

/// `round(sum / 4)` with halves rounded up.
fn average_rounded(sum: i32) -> i32 {
    (sum + 2).div_euclid(4)
}

fn rested_bonus(level: RestedLevel) -> i32 {
    match level {
        RestedLevel::Energized => 20,
        RestedLevel::Ok => 10,
        RestedLevel::Tired => 0,
    }
}

/// Score today's energy from its log, if any.
pub fn score(today_log: Option<&DailyLog>, config: &UserConfig) -> EnergyScore {
    let Some(energy) = today_log.and_then(|log| log.energy.as_ref()) else {
        let (physical, mental, emotional, social) = NO_CHECKIN;
        return EnergyScore::from_parts(physical, mental, emotional, social);
    };

    let body = &energy.physical;
    let mut physical = PHYSICAL_BASE;
    if body.sleep_hours >= config.sleep_goal {
        physical += SLEEP_GOAL_MET_BONUS;
    }
    physical += rested_bonus(body.rested_level);
    if body.had_breakfast {
        physical += BREAKFAST_BONUS;
    }

    EnergyScore::from_parts(physical, MENTAL_SCORE, EMOTIONAL_SCORE, SOCIAL_SCORE)
}

/// Coarse level used to colour a battery bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyBand {
    High,
    Medium,
    Low,
}

impl EnergyBand {
    pub fn of(level: i32) -> Self {
        if level > 75 {
            EnergyBand::High
        } else if level > 40 {
            EnergyBand::Medium
        } else {
            EnergyBand::Low
        }
    }
}
