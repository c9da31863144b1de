use chrono::NaiveDate;
use clap::{Args, Subcommand};
use ritmo_core::{ActivityCounts, DailyLog, DailyLogPatch, Settings};

use super::{open, parse_date, print_json, CliResult};

#[derive(Args)]
pub struct Counters {
    #[arg(long)]
    contacts: Option<u32>,
    #[arg(long)]
    conversations: Option<u32>,
    #[arg(long)]
    meetings: Option<u32>,
    #[arg(long)]
    sales: Option<u32>,
}

impl Counters {
    fn delta(&self) -> ActivityCounts {
        ActivityCounts::new(
            self.contacts.unwrap_or(0),
            self.conversations.unwrap_or(0),
            self.meetings.unwrap_or(0),
            self.sales.unwrap_or(0),
        )
    }

    fn patch(&self, date: NaiveDate) -> DailyLogPatch {
        DailyLogPatch {
            contacts: self.contacts,
            conversations: self.conversations,
            meetings: self.meetings,
            sales: self.sales,
            ..DailyLogPatch::for_date(date)
        }
    }
}

#[derive(Subcommand)]
pub enum LogAction {
    /// Add to a day's counters
    Add {
        /// Day to update (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[command(flatten)]
        counters: Counters,
    },
    /// Overwrite some of a day's counters
    Set {
        /// Day to update (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        #[command(flatten)]
        counters: Counters,
    },
    /// Show one day
    Show {
        /// Day to show (YYYY-MM-DD), defaults to today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// List the most recent days
    List {
        #[arg(long, default_value_t = 7)]
        limit: usize,
    },
}

pub fn run(action: LogAction, settings: &Settings, json: bool) -> CliResult {
    let ritmo = open(settings)?;
    let today = ritmo.today();

    match action {
        LogAction::Add { date, counters } => {
            let log = ritmo
                .logs()
                .add_activity(date.unwrap_or(today), counters.delta())?;
            print_log(&log, json)?;
        }
        LogAction::Set { date, counters } => {
            let log = ritmo.logs().upsert(counters.patch(date.unwrap_or(today)))?;
            print_log(&log, json)?;
        }
        LogAction::Show { date } => {
            let date = date.unwrap_or(today);
            match ritmo.logs().get_by_date(date) {
                Some(log) => print_log(&log, json)?,
                None if json => println!("null"),
                None => println!("no log for {date}"),
            }
        }
        LogAction::List { limit } => {
            let logs = ritmo.logs().recent(limit);
            if json {
                return print_json(&logs);
            }
            if logs.is_empty() {
                println!("no logs yet");
            }
            for log in &logs {
                println!("{}", summary_line(log));
            }
        }
    }
    Ok(())
}

fn print_log(log: &DailyLog, json: bool) -> CliResult {
    if json {
        return print_json(log);
    }
    println!("{}", summary_line(log));
    Ok(())
}

fn summary_line(log: &DailyLog) -> String {
    let checkin = if log.has_checkin() { "  checked in" } else { "" };
    format!(
        "{}  contacts {:>3}  conversations {:>3}  meetings {:>2}  sales {:>2}{checkin}",
        log.date, log.contacts, log.conversations, log.meetings, log.sales
    )
}
