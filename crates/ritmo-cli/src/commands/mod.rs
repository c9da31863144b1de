pub mod checkin;
pub mod config;
pub mod log;
pub mod onboard;
pub mod report;
pub mod view;

use chrono::NaiveDate;
use ritmo_core::{Database, Ritmo, Settings, SystemClock};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

pub type App = Ritmo<Database, SystemClock>;

/// Open the database named in `settings` against the wall clock.
pub fn open(settings: &Settings) -> Result<App, Box<dyn std::error::Error>> {
    let db = Database::open(settings)?;
    Ok(Ritmo::new(db, SystemClock))
}

pub fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Parse an enum by its stored name, ignoring case.
pub fn parse_choice<T: DeserializeOwned>(value: &str) -> Result<T, String> {
    [value.to_lowercase(), value.to_uppercase()]
        .into_iter()
        .find_map(|candidate| serde_json::from_value(serde_json::Value::String(candidate)).ok())
        .ok_or_else(|| format!("invalid value '{value}'"))
}

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    ritmo_core::model::parse_date(value).map_err(|e| e.to_string())
}
