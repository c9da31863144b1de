//! Weekly rhythm classification.
//!
//! The rhythm is judged on contacts alone: the week's contacts against
//! `dailyTargets.contacts * daysPerWeek`.
//!
//! | contact progress | status  |
//! |------------------|---------|
//! | `>= 0.8`         | Healthy |
//! | `>= 0.5`         | Medium  |
//! | otherwise        | Low     |

use serde::{Deserialize, Serialize};

use crate::model::{ActivityCounts, DailyLog, Metric, UserConfig};

/// Progress ratio at or above which the week is healthy.
pub const HEALTHY_THRESHOLD: f64 = 0.8;
/// Progress ratio at or above which the week is medium.
pub const MEDIUM_THRESHOLD: f64 = 0.5;

/// Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RhythmStatus {
    Low,
    Medium,
    Healthy,
}

impl RhythmStatus {
    /// Fixed advisory shown with the status.
    pub fn message(&self) -> &'static str {
        match self {
            RhythmStatus::Healthy => {
                "With this week's volume, your consistency is solid enough for conversion."
            }
            RhythmStatus::Medium => {
                "At the current volume, the statistical chance of closing is moderate."
            }
            RhythmStatus::Low => "At the current pace, your statistical chance of closing is low.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RhythmStatus::Low => "LOW",
            RhythmStatus::Medium => "MEDIUM",
            RhythmStatus::Healthy => "HEALTHY",
        }
    }
}

/// Sums of each counter over a week.
pub type WeeklyTotals = ActivityCounts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RhythmReport {
    pub status: RhythmStatus,
    pub message: String,
    pub totals: WeeklyTotals,
}

/// Sum the counters of `logs`.
pub fn weekly_totals(logs: &[DailyLog]) -> WeeklyTotals {
    logs.iter()
        .fold(ActivityCounts::default(), |acc, log| acc.saturating_add(log.counts()))
}

/// Weekly goal for `metric`; a zero goal counts as 1.
pub fn weekly_target(config: &UserConfig, metric: Metric) -> u64 {
    let target = u64::from(config.daily_targets.get(metric)) * u64::from(config.days_per_week);
    target.max(1)
}

/// Classify the week's rhythm from its logs.
pub fn classify(weekly_logs: &[DailyLog], config: &UserConfig) -> RhythmReport {
    let totals = weekly_totals(weekly_logs);
    let contact_progress =
        f64::from(totals.contacts) / weekly_target(config, Metric::Contacts) as f64;

    let status = if contact_progress >= HEALTHY_THRESHOLD {
        RhythmStatus::Healthy
    } else if contact_progress >= MEDIUM_THRESHOLD {
        RhythmStatus::Medium
    } else {
        RhythmStatus::Low
    };

    RhythmReport {
        status,
        message: status.message().to_string(),
        totals,
    }
}

/// Completion of one weekly goal, for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricProgress {
    pub metric: Metric,
    pub total: u32,
    pub weekly_target: u64,
    /// 0.0 ..= 100.0
    pub percent: f64,
}

/// Per-metric completion of the weekly goals, capped at 100%.
///
/// Each goal is `daily * daysPerWeek`, the same denominator as [`classify`].
pub fn progress(totals: &WeeklyTotals, config: &UserConfig) -> Vec<MetricProgress> {
    Metric::ALL
        .iter()
        .map(|&metric| {
            let total = totals.get(metric);
            let weekly_target = weekly_target(config, metric);
            let percent = (f64::from(total) / weekly_target as f64 * 100.0).min(100.0);
            MetricProgress {
                metric,
                total,
                weekly_target,
                percent,
            }
        })
        .collect()
}

/// Contacts suggested to recover a low week: `ceil(daily * 0.8)`.
fn recovery_contacts(daily_contacts: u32) -> u64 {
    (u64::from(daily_contacts) * 4).div_ceil(5)
}

/// Concrete next step for the day given the week's status.
pub fn suggested_action(status: RhythmStatus, config: &UserConfig) -> String {
    match status {
        RhythmStatus::Low => {
            let contacts = recovery_contacts(config.daily_targets.contacts);
            format!("Try to make at least {contacts} contacts today to get back into rhythm.")
        }
        RhythmStatus::Medium | RhythmStatus::Healthy => {
            "Keep the current volume. Your consistency is creating future opportunities."
                .to_string()
        }
    }
}
