//! Integration tests for SQLite-backed persistence.

use chrono::NaiveDate;
use ritmo_core::{
    ActivityCounts, Database, DailyLogPatch, FixedClock, KeyValueStore, Ritmo, UserConfig,
};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
}

#[test]
fn test_data_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ritmo.db");

    {
        let db = Database::open_at(&path).unwrap();
        let ritmo = Ritmo::new(db, FixedClock::new(today()));
        ritmo
            .configs()
            .complete_onboarding(UserConfig::default())
            .unwrap();
        ritmo.record_activity(ActivityCounts::new(6, 2, 1, 0)).unwrap();
        ritmo.record_activity(ActivityCounts::new(1, 0, 0, 1)).unwrap();
    }

    let db = Database::open_at(&path).unwrap();
    let ritmo = Ritmo::new(db, FixedClock::new(today()));
    assert!(ritmo.config().is_onboarded);
    assert_eq!(
        ritmo.today_log().unwrap().counts(),
        ActivityCounts::new(7, 2, 1, 1)
    );
}

#[test]
fn test_corrupt_values_read_as_defaults() {
    let db = Database::open_memory().unwrap();
    db.set("ritmo_config", "{not json").unwrap();
    db.set("ritmo_logs", "[{\"date\": 12}]").unwrap();

    let ritmo = Ritmo::new(&db, FixedClock::new(today()));
    assert_eq!(ritmo.config(), UserConfig::default());
    assert!(ritmo.logs().get_all().is_empty());

    // The next write replaces the corrupt value.
    ritmo
        .logs()
        .upsert(DailyLogPatch::for_date(today()).contacts(3))
        .unwrap();
    assert_eq!(ritmo.logs().get_all().len(), 1);
}

#[test]
fn test_wire_format_is_camel_case() {
    let db = Database::open_memory().unwrap();
    let ritmo = Ritmo::new(&db, FixedClock::new(today()));
    ritmo
        .configs()
        .complete_onboarding(UserConfig::default())
        .unwrap();
    ritmo.record_activity(ActivityCounts::new(1, 0, 0, 0)).unwrap();

    let config: serde_json::Value =
        serde_json::from_str(&db.get("ritmo_config").unwrap().unwrap()).unwrap();
    assert_eq!(config["isOnboarded"], true);
    assert_eq!(config["daysPerWeek"], 5);
    assert_eq!(config["dailyTargets"]["contacts"], 10);

    let logs: serde_json::Value =
        serde_json::from_str(&db.get("ritmo_logs").unwrap().unwrap()).unwrap();
    assert_eq!(logs[0]["date"], "2024-03-06");
    assert_eq!(logs[0]["contacts"], 1);
}
