//! Persisted entities: user configuration, daily logs and energy check-ins.
//!
//! Field names serialize in camelCase so the stored values keep the shape
//! `{"date":"2024-03-07","contacts":4,...,"energy":{...}}`.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// ISO calendar date format used for log keys.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` key.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(value.to_string()))
}

/// One of the four tracked activity counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Contacts,
    Conversations,
    Meetings,
    Sales,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Contacts,
        Metric::Conversations,
        Metric::Meetings,
        Metric::Sales,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Contacts => "contacts",
            Metric::Conversations => "conversations",
            Metric::Meetings => "meetings",
            Metric::Sales => "sales",
        }
    }
}

/// A value for each activity counter.
///
/// Used for daily targets, weekly totals and increments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCounts {
    #[serde(default)]
    pub contacts: u32,
    #[serde(default)]
    pub conversations: u32,
    #[serde(default)]
    pub meetings: u32,
    #[serde(default)]
    pub sales: u32,
}

impl ActivityCounts {
    pub fn new(contacts: u32, conversations: u32, meetings: u32, sales: u32) -> Self {
        Self {
            contacts,
            conversations,
            meetings,
            sales,
        }
    }

    pub fn get(&self, metric: Metric) -> u32 {
        match metric {
            Metric::Contacts => self.contacts,
            Metric::Conversations => self.conversations,
            Metric::Meetings => self.meetings,
            Metric::Sales => self.sales,
        }
    }

    /// Field-wise saturating sum.
    pub fn saturating_add(self, other: ActivityCounts) -> ActivityCounts {
        ActivityCounts {
            contacts: self.contacts.saturating_add(other.contacts),
            conversations: self.conversations.saturating_add(other.conversations),
            meetings: self.meetings.saturating_add(other.meetings),
            sales: self.sales.saturating_add(other.sales),
        }
    }
}

/// Baseline daily goals configured by the user.
pub type DailyTargets = ActivityCounts;

/// What the user wants to concentrate on. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Focus {
    #[default]
    Prospecting,
    Meetings,
    Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SocialPreference {
    Solitary,
    #[default]
    Social,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeakProductivity {
    #[default]
    Morning,
    Afternoon,
    Night,
}

fn default_days_per_week() -> u32 {
    5
}
fn default_daily_targets() -> DailyTargets {
    ActivityCounts::new(10, 5, 2, 1)
}
fn default_sleep_goal() -> f64 {
    7.0
}

/// Per-user settings, replaced wholesale on every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserConfig {
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
    #[serde(default = "default_daily_targets")]
    pub daily_targets: DailyTargets,
    #[serde(default)]
    pub focus: Focus,
    #[serde(default)]
    pub is_onboarded: bool,
    #[serde(default)]
    pub social_preference: SocialPreference,
    #[serde(default)]
    pub peak_productivity: PeakProductivity,
    /// Hours of sleep the user aims for.
    #[serde(default = "default_sleep_goal")]
    pub sleep_goal: f64,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            days_per_week: default_days_per_week(),
            daily_targets: default_daily_targets(),
            focus: Focus::default(),
            is_onboarded: false,
            social_preference: SocialPreference::default(),
            peak_productivity: PeakProductivity::default(),
            sleep_goal: default_sleep_goal(),
        }
    }
}

impl UserConfig {
    /// Bounds enforced by editing surfaces before a save.
    ///
    /// The analytics accept any values and never call this.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=7).contains(&self.days_per_week) {
            return Err(ValidationError::InvalidValue {
                field: "daysPerWeek".into(),
                message: format!("must be between 1 and 7, got {}", self.days_per_week),
            });
        }
        if !(4.0..=10.0).contains(&self.sleep_goal) {
            return Err(ValidationError::InvalidValue {
                field: "sleepGoal".into(),
                message: format!("must be between 4 and 10 hours, got {}", self.sleep_goal),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestedLevel {
    Tired,
    Ok,
    Energized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalState {
    pub sleep_hours: f64,
    pub rested_level: RestedLevel,
    pub had_breakfast: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentalState {
    #[serde(default)]
    pub focus_blocks: u32,
    /// 0-100
    #[serde(default)]
    pub decision_fatigue: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalState {
    #[serde(default)]
    pub drainers: BTreeSet<String>,
    #[serde(default)]
    pub energizers: BTreeSet<String>,
    /// 0-100
    #[serde(default)]
    pub battery_level: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialState {
    #[serde(default)]
    pub interactions: u32,
    #[serde(default)]
    pub drained: bool,
}

/// Self-reported energy for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyLog {
    pub physical: PhysicalState,
    #[serde(default)]
    pub mental: MentalState,
    #[serde(default)]
    pub emotional: EmotionalState,
    #[serde(default)]
    pub social: SocialState,
}

impl EnergyLog {
    /// The record a morning check-in produces: physical answers plus
    /// initial values for the sub-records filled in later in the day.
    pub fn morning_checkin(physical: PhysicalState) -> Self {
        Self {
            physical,
            mental: MentalState::default(),
            emotional: EmotionalState {
                battery_level: 80,
                ..EmotionalState::default()
            },
            social: SocialState::default(),
        }
    }
}

/// Read a stored counter from any JSON number.
///
/// Negative values read as 0, values past `u32::MAX` saturate and
/// fractions are truncated.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    // `as` saturates and maps NaN to 0.
    Ok(value as u32)
}

/// One record per calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    #[serde(default, deserialize_with = "lenient_count")]
    pub contacts: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub conversations: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub meetings: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub sales: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<EnergyLog>,
}

impl DailyLog {
    /// An empty record for `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            contacts: 0,
            conversations: 0,
            meetings: 0,
            sales: 0,
            energy: None,
        }
    }

    pub fn counts(&self) -> ActivityCounts {
        ActivityCounts::new(self.contacts, self.conversations, self.meetings, self.sales)
    }

    pub fn has_checkin(&self) -> bool {
        self.energy.is_some()
    }
}

/// Write-side shape of a [`DailyLog`]: `None` means "leave as is".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogPatch {
    pub date: NaiveDate,
    pub contacts: Option<u32>,
    pub conversations: Option<u32>,
    pub meetings: Option<u32>,
    pub sales: Option<u32>,
    pub energy: Option<EnergyLog>,
}

impl DailyLogPatch {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            contacts: None,
            conversations: None,
            meetings: None,
            sales: None,
            energy: None,
        }
    }

    pub fn contacts(mut self, value: u32) -> Self {
        self.contacts = Some(value);
        self
    }

    pub fn conversations(mut self, value: u32) -> Self {
        self.conversations = Some(value);
        self
    }

    pub fn meetings(mut self, value: u32) -> Self {
        self.meetings = Some(value);
        self
    }

    pub fn sales(mut self, value: u32) -> Self {
        self.sales = Some(value);
        self
    }

    pub fn energy(mut self, energy: EnergyLog) -> Self {
        self.energy = Some(energy);
        self
    }

    pub fn set(mut self, metric: Metric, value: u32) -> Self {
        match metric {
            Metric::Contacts => self.contacts = Some(value),
            Metric::Conversations => self.conversations = Some(value),
            Metric::Meetings => self.meetings = Some(value),
            Metric::Sales => self.sales = Some(value),
        }
        self
    }

    /// Overwrite the fields present in this patch, keeping the rest of `log`.
    pub fn merge_into(&self, mut log: DailyLog) -> DailyLog {
        if let Some(v) = self.contacts {
            log.contacts = v;
        }
        if let Some(v) = self.conversations {
            log.conversations = v;
        }
        if let Some(v) = self.meetings {
            log.meetings = v;
        }
        if let Some(v) = self.sales {
            log.sales = v;
        }
        if let Some(energy) = &self.energy {
            log.energy = Some(energy.clone());
        }
        log
    }
}

impl From<DailyLog> for DailyLogPatch {
    fn from(log: DailyLog) -> Self {
        Self {
            date: log.date,
            contacts: Some(log.contacts),
            conversations: Some(log.conversations),
            meetings: Some(log.meetings),
            sales: Some(log.sales),
            energy: log.energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert_eq!(parse_date("2024-03-07").unwrap(), day(7));
        assert!(parse_date("07/03/2024").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn default_config_matches_first_run_values() {
        let cfg = UserConfig::default();
        assert_eq!(cfg.days_per_week, 5);
        assert_eq!(cfg.daily_targets, ActivityCounts::new(10, 5, 2, 1));
        assert_eq!(cfg.focus, Focus::Prospecting);
        assert_eq!(cfg.social_preference, SocialPreference::Social);
        assert_eq!(cfg.peak_productivity, PeakProductivity::Morning);
        assert_eq!(cfg.sleep_goal, 7.0);
        assert!(!cfg.is_onboarded);
    }

    #[test]
    fn config_uses_camel_case_wire_names() {
        let json = serde_json::to_value(UserConfig::default()).unwrap();
        assert_eq!(json["daysPerWeek"], 5);
        assert_eq!(json["dailyTargets"]["contacts"], 10);
        assert_eq!(json["socialPreference"], "SOCIAL");
        assert_eq!(json["peakProductivity"], "MORNING");
        assert_eq!(json["focus"], "prospecting");
        assert_eq!(json["isOnboarded"], false);
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let mut cfg = UserConfig::default();
        assert!(cfg.validate().is_ok());
        cfg.days_per_week = 0;
        assert!(cfg.validate().is_err());
        cfg.days_per_week = 5;
        cfg.sleep_goal = 11.5;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn daily_log_reads_missing_counters_as_zero() {
        let log: DailyLog = serde_json::from_str(r#"{"date":"2024-03-07","sales":2}"#).unwrap();
        assert_eq!(log.date, day(7));
        assert_eq!(log.contacts, 0);
        assert_eq!(log.sales, 2);
        assert!(log.energy.is_none());
    }

    #[test]
    fn out_of_range_counters_are_coerced() {
        let log: DailyLog = serde_json::from_str(
            r#"{"date":"2024-03-07","contacts":-1,"conversations":2.7,"meetings":1e12,"sales":3}"#,
        )
        .unwrap();
        assert_eq!(log.contacts, 0);
        assert_eq!(log.conversations, 2);
        assert_eq!(log.meetings, u32::MAX);
        assert_eq!(log.sales, 3);
        assert!(serde_json::from_str::<DailyLog>(r#"{"date":"2024-03-07","sales":"x"}"#).is_err());
    }

    #[test]
    fn energy_log_parses_original_shape() {
        let raw = r#"{
            "date": "2024-03-07",
            "physical": {"sleepHours": 7.5, "restedLevel": "ENERGIZED", "hadBreakfast": true},
            "mental": {"focusBlocks": 0, "decisionFatigue": 0},
            "emotional": {"drainers": [], "energizers": ["walk"], "batteryLevel": 80},
            "social": {"interactions": 0, "drained": false}
        }"#;
        let energy: EnergyLog = serde_json::from_str(raw).unwrap();
        assert_eq!(energy.physical.rested_level, RestedLevel::Energized);
        assert!(energy.emotional.energizers.contains("walk"));
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let existing = DailyLog {
            contacts: 5,
            ..DailyLog::new(day(7))
        };
        let merged = DailyLogPatch::for_date(day(7)).sales(2).merge_into(existing);
        assert_eq!(merged.contacts, 5);
        assert_eq!(merged.sales, 2);
        assert_eq!(merged.conversations, 0);
    }

    #[test]
    fn morning_checkin_initialises_other_dimensions() {
        let energy = EnergyLog::morning_checkin(PhysicalState {
            sleep_hours: 6.0,
            rested_level: RestedLevel::Tired,
            had_breakfast: false,
        });
        assert_eq!(energy.emotional.battery_level, 80);
        assert_eq!(energy.mental, MentalState::default());
        assert!(!energy.social.drained);
    }
}
