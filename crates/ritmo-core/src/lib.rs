//! # Ritmo Core Library
//!
//! Rhythm and energy analytics for salespeople. The library turns daily
//! activity counters and a morning check-in into three answers: how the
//! week's rhythm is going, how much energy is available today, and what
//! today's targets should be given that energy.
//!
//! ## Architecture
//!
//! - **Storage**: a key-value boundary ([`KeyValueStore`]) backed by SQLite,
//!   with typed stores for the user configuration and the daily logs
//! - **Analytics**: pure functions for the week window, rhythm
//!   classification, energy scoring, target adjustment and the suggested
//!   day plan
//! - **Pipeline**: [`Ritmo`] wires the stores to a [`Clock`] and runs the
//!   analytics for "today"
//! - **Views**: an explicit navigation state machine ([`ViewMachine`])
//!
//! The `ritmo` CLI is a thin layer over this crate.

pub mod clock;
pub mod dashboard;
pub mod energy;
pub mod error;
pub mod model;
pub mod plan;
pub mod rhythm;
pub mod storage;
pub mod targets;
pub mod view;
pub mod week;

pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{Checkout, DashboardSnapshot, Ritmo};
pub use energy::{EnergyBand, EnergyScore};
pub use error::{ConfigError, CoreError, Result, StorageError, ValidationError};
pub use model::{
    ActivityCounts, DailyLog, DailyLogPatch, DailyTargets, EmotionalState, EnergyLog, Focus,
    MentalState, Metric, PeakProductivity, PhysicalState, RestedLevel, SocialPreference,
    SocialState, UserConfig,
};
pub use plan::{BlockKind, PlanBlock};
pub use rhythm::{MetricProgress, RhythmReport, RhythmStatus, WeeklyTotals};
pub use storage::{ConfigStore, Database, KeyValueStore, LogStore, MemoryStore, Settings};
pub use targets::AdjustedTargets;
pub use view::{ViewEvent, ViewMachine, ViewState};
pub use week::{ChartPoint, WeekBounds};
