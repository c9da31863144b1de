//! Calendar week resolution.
//!
//! Weeks run Sunday through Saturday regardless of how many days per week
//! the user works; `days_per_week` only scales targets.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::model::DailyLog;

/// Inclusive Sunday..=Saturday range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBounds {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekBounds {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Week containing `date`.
pub fn week_bounds(date: NaiveDate) -> WeekBounds {
    let start = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    WeekBounds {
        start,
        end: start + Duration::days(6),
    }
}

/// Week containing the clock's today.
pub fn current_week_bounds(clock: &impl Clock) -> WeekBounds {
    week_bounds(clock.today())
}

/// Logs dated inside the current week, in their original order.
pub fn filter_to_current_week(logs: &[DailyLog], clock: &impl Clock) -> Vec<DailyLog> {
    filter_to_week(logs, current_week_bounds(clock))
}

pub fn filter_to_week(logs: &[DailyLog], bounds: WeekBounds) -> Vec<DailyLog> {
    logs.iter()
        .filter(|log| bounds.contains(log.date))
        .cloned()
        .collect()
}

/// A point of the weekly contacts trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub contacts: u32,
}

/// Contacts per logged day in ascending date order, labelled by short
/// weekday name. An empty week yields a single zero point labelled "Today".
pub fn chart_series(weekly_logs: &[DailyLog]) -> Vec<ChartPoint> {
    let mut logs: Vec<&DailyLog> = weekly_logs.iter().collect();
    logs.sort_by_key(|log| log.date);

    if logs.is_empty() {
        return vec![ChartPoint {
            label: "Today".to_string(),
            contacts: 0,
        }];
    }

    logs.into_iter()
        .map(|log| ChartPoint {
            label: log.date.format("%a").to_string(),
            contacts: log.contacts,
        })
        .collect()
}
