//! Suggested shape of the working day.
//!
//! The heavy-focus block goes where the user says their energy peaks.
//! Morning people get it first thing; everyone else gets it after lunch.

use serde::{Deserialize, Serialize};

use crate::model::PeakProductivity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockKind {
    HeavyFocus,
    LightTasks,
    Lunch,
    Admin,
    Meetings,
}

impl BlockKind {
    pub fn title(&self) -> &'static str {
        match self {
            BlockKind::HeavyFocus => "Heavy block",
            BlockKind::LightTasks => "Light tasks",
            BlockKind::Lunch => "Lunch",
            BlockKind::Admin => "Admin/Emails",
            BlockKind::Meetings => "Meetings",
        }
    }
}

/// A block of the day in whole hours, `start_hour..end_hour`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanBlock {
    pub start_hour: u8,
    pub end_hour: u8,
    pub kind: BlockKind,
    pub note: String,
}

impl PlanBlock {
    fn new(start_hour: u8, end_hour: u8, kind: BlockKind, note: &str) -> Self {
        Self {
            start_hour,
            end_hour,
            kind,
            note: note.to_string(),
        }
    }

    /// "8h-11h"
    pub fn time_range(&self) -> String {
        format!("{}h-{}h", self.start_hour, self.end_hour)
    }
}

/// Heading for the plan: "Morning" or "Afternoon".
pub fn plan_label(peak: PeakProductivity) -> &'static str {
    match peak {
        PeakProductivity::Morning => "Morning",
        PeakProductivity::Afternoon | PeakProductivity::Night => "Afternoon",
    }
}

/// Blocks of the suggested day, in time order.
pub fn day_plan(peak: PeakProductivity) -> Vec<PlanBlock> {
    match peak {
        PeakProductivity::Morning => vec![
            PlanBlock::new(8, 11, BlockKind::HeavyFocus, "Work that needs focus"),
            PlanBlock::new(11, 12, BlockKind::LightTasks, "Emails, admin"),
            PlanBlock::new(12, 13, BlockKind::Lunch, "Mandatory"),
        ],
        PeakProductivity::Afternoon | PeakProductivity::Night => vec![
            PlanBlock::new(9, 10, BlockKind::Admin, "Warm-up"),
            PlanBlock::new(10, 12, BlockKind::Meetings, "Medium energy"),
            PlanBlock::new(14, 17, BlockKind::HeavyFocus, "Your energy peak"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn morning_people_start_with_heavy_block() {
        let plan = day_plan(PeakProductivity::Morning);
        let ranges: Vec<_> = plan.iter().map(PlanBlock::time_range).collect();
        assert_eq!(ranges, vec!["8h-11h", "11h-12h", "12h-13h"]);
        assert_eq!(plan[0].kind, BlockKind::HeavyFocus);
        assert_eq!(plan[2].kind, BlockKind::Lunch);
        assert_eq!(plan_label(PeakProductivity::Morning), "Morning");
    }

    #[test]
    fn afternoon_and_night_share_the_late_plan() {
        let afternoon = day_plan(PeakProductivity::Afternoon);
        assert_eq!(afternoon, day_plan(PeakProductivity::Night));
        let ranges: Vec<_> = afternoon.iter().map(PlanBlock::time_range).collect();
        assert_eq!(ranges, vec!["9h-10h", "10h-12h", "14h-17h"]);
        assert_eq!(afternoon[2].kind, BlockKind::HeavyFocus);
        assert_eq!(plan_label(PeakProductivity::Night), "Afternoon");
    }

    #[test]
    fn blocks_are_ordered_and_non_empty() {
        for peak in [
            PeakProductivity::Morning,
            PeakProductivity::Afternoon,
            PeakProductivity::Night,
        ] {
            let plan = day_plan(peak);
            for block in &plan {
                assert!(block.start_hour < block.end_hour);
            }
            for pair in plan.windows(2) {
                assert!(pair[0].end_hour <= pair[1].start_hour);
            }
        }
    }
}
