use clap::Args;
use ritmo_core::{Focus, PeakProductivity, Settings, SocialPreference};

use super::{open, parse_choice, print_json, CliResult};

#[derive(Args)]
pub struct OnboardArgs {
    /// Working days per week (1-7)
    #[arg(long)]
    days: Option<u32>,
    /// Daily contacts goal
    #[arg(long)]
    contacts: Option<u32>,
    /// Daily conversations goal
    #[arg(long)]
    conversations: Option<u32>,
    /// Daily meetings goal
    #[arg(long)]
    meetings: Option<u32>,
    /// Daily sales goal
    #[arg(long)]
    sales: Option<u32>,
    /// prospecting, meetings or conversion
    #[arg(long, value_parser = parse_choice::<Focus>)]
    focus: Option<Focus>,
    /// solitary or social
    #[arg(long, value_parser = parse_choice::<SocialPreference>)]
    social: Option<SocialPreference>,
    /// morning, afternoon or night
    #[arg(long, value_parser = parse_choice::<PeakProductivity>)]
    peak: Option<PeakProductivity>,
    /// Hours of sleep aimed for (4-10)
    #[arg(long)]
    sleep_goal: Option<f64>,
}

pub fn run(args: OnboardArgs, settings: &Settings, json: bool) -> CliResult {
    let ritmo = open(settings)?;
    let mut config = ritmo.config();

    if let Some(days) = args.days {
        config.days_per_week = days;
    }
    let targets = &mut config.daily_targets;
    targets.contacts = args.contacts.unwrap_or(targets.contacts);
    targets.conversations = args.conversations.unwrap_or(targets.conversations);
    targets.meetings = args.meetings.unwrap_or(targets.meetings);
    targets.sales = args.sales.unwrap_or(targets.sales);
    config.focus = args.focus.unwrap_or(config.focus);
    config.social_preference = args.social.unwrap_or(config.social_preference);
    config.peak_productivity = args.peak.unwrap_or(config.peak_productivity);
    config.sleep_goal = args.sleep_goal.unwrap_or(config.sleep_goal);

    let config = ritmo.configs().complete_onboarding(config)?;
    if json {
        return print_json(&config);
    }

    let t = config.daily_targets;
    println!("onboarded: {} days/week", config.days_per_week);
    println!(
        "daily targets: {} contacts, {} conversations, {} meetings, {} sales",
        t.contacts, t.conversations, t.meetings, t.sales
    );
    Ok(())
}
