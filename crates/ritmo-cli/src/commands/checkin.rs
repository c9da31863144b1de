use clap::Args;
use ritmo_core::{Checkout, PhysicalState, RestedLevel, Settings};

use super::{open, parse_choice, print_json, CliResult};

#[derive(Args)]
pub struct CheckinArgs {
    /// Hours slept last night
    #[arg(long)]
    sleep: f64,
    /// tired, ok or energized
    #[arg(long, value_parser = parse_choice::<RestedLevel>)]
    rested: RestedLevel,
    /// Had breakfast
    #[arg(long)]
    breakfast: bool,
}

#[derive(Args)]
pub struct CheckoutArgs {
    /// Something that drained energy today (repeatable)
    #[arg(long = "drainer")]
    drainers: Vec<String>,
    /// Something that gave energy today (repeatable)
    #[arg(long = "energizer")]
    energizers: Vec<String>,
    /// Emotional battery at the end of the day (0-100)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    battery: u8,
}

pub fn run_checkin(args: CheckinArgs, settings: &Settings, json: bool) -> CliResult {
    let ritmo = open(settings)?;
    let log = ritmo.check_in(PhysicalState {
        sleep_hours: args.sleep,
        rested_level: args.rested,
        had_breakfast: args.breakfast,
    })?;
    let energy = ritmo.energy();

    if json {
        return print_json(&serde_json::json!({ "log": log, "energy": energy }));
    }
    println!("checked in for {}", log.date);
    println!("energy: {} (physical {})", energy.total, energy.physical);
    Ok(())
}

pub fn run_checkout(args: CheckoutArgs, settings: &Settings, json: bool) -> CliResult {
    let ritmo = open(settings)?;
    let saved = ritmo.check_out(Checkout {
        drainers: args.drainers.into_iter().collect(),
        energizers: args.energizers.into_iter().collect(),
        battery_level: args.battery,
    })?;

    if json {
        return print_json(&saved);
    }
    match saved {
        Some(log) => println!("checked out for {}", log.date),
        None => println!("no check-in today, check-out not saved"),
    }
    Ok(())
}
