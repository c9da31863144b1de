use clap::Args;
use ritmo_core::{Settings, ViewEvent, ViewState};

use super::{open, print_json, CliResult};

#[derive(Args)]
pub struct ViewArgs {
    /// Event to apply, e.g. "checkin_saved" or "navigate:goals" (repeatable)
    #[arg(long = "event", value_parser = parse_event)]
    events: Vec<ViewEvent>,
}

/// `name` or `navigate:<view>`, using the snake_case wire names.
fn parse_event(value: &str) -> Result<ViewEvent, String> {
    let event = match value.split_once(':') {
        Some((kind, target)) => serde_json::json!({ "type": kind, "target": target }),
        None => serde_json::json!({ "type": value }),
    };
    serde_json::from_value(event).map_err(|e| format!("invalid event '{value}': {e}"))
}

pub fn run(args: ViewArgs, settings: &Settings, json: bool) -> CliResult {
    let ritmo = open(settings)?;
    let mut machine = ritmo.view();
    let initial = machine.state();

    let mut visited: Vec<ViewState> = Vec::with_capacity(args.events.len());
    for event in args.events {
        visited.push(machine.handle(event)?);
    }

    if json {
        return print_json(&serde_json::json!({
            "initial": initial,
            "transitions": visited,
            "current": machine.state(),
        }));
    }
    println!("initial: {}", name(initial)?);
    for state in visited {
        println!("  -> {}", name(state)?);
    }
    Ok(())
}

fn name(state: ViewState) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_value(state)?
        .as_str()
        .unwrap_or_default()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_parse_from_wire_names() {
        assert_eq!(parse_event("checkin_saved"), Ok(ViewEvent::CheckinSaved));
        assert_eq!(parse_event("config_reset"), Ok(ViewEvent::ConfigReset));
        assert_eq!(
            parse_event("navigate:focus_mode"),
            Ok(ViewEvent::Navigate(ViewState::FocusMode))
        );
        assert!(parse_event("navigate:nowhere").is_err());
        assert!(parse_event("teleport").is_err());
    }
}
