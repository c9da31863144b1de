use clap::Subcommand;
use ritmo_core::Settings;

use super::{open, print_json, CliResult};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "daysPerWeek", "dailyTargets.contacts")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults and restart onboarding
    Reset,
}

pub fn run(action: ConfigAction, settings: &Settings, json: bool) -> CliResult {
    let ritmo = open(settings)?;
    let configs = ritmo.configs();

    match action {
        ConfigAction::Get { key } => match configs.get(&key) {
            Some(value) => println!("{value}"),
            None => return Err(format!("unknown key: {key}").into()),
        },
        ConfigAction::Set { key, value } => {
            let config = configs.set(&key, &value)?;
            if json {
                return print_json(&config);
            }
            println!("ok");
        }
        ConfigAction::List => {
            print_json(&configs.load())?;
        }
        ConfigAction::Reset => {
            let config = configs.reset()?;
            if json {
                return print_json(&config);
            }
            println!("config reset to defaults");
        }
    }
    Ok(())
}
