//! Navigation state machine.
//!
//! The initial view is derived once from persisted data; after that every
//! change goes through [`ViewMachine::handle`] with an explicit event.
//!
//! ```text
//! Onboarding --OnboardingCompleted--> MorningCheckin --CheckinSaved/Skipped--> Dashboard
//! Dashboard --Navigate(x)--> x
//! EveningCheckin --CheckoutSaved--> Log --LogSaved--> Dashboard
//! Goals --GoalsSaved/Cancelled--> Dashboard
//! FocusMode | BreakMode | MeetingMode --TimerFinished/Cancelled--> Dashboard
//! any --ConfigReset--> Onboarding
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{DailyLog, UserConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    Onboarding,
    MorningCheckin,
    Dashboard,
    Log,
    Goals,
    Guidance,
    Settings,
    FocusMode,
    BreakMode,
    MeetingMode,
    EveningCheckin,
}

impl ViewState {
    /// Views reachable from the navigation bar.
    fn has_navigation(&self) -> bool {
        matches!(
            self,
            ViewState::Dashboard
                | ViewState::Log
                | ViewState::Goals
                | ViewState::Guidance
                | ViewState::Settings
        )
    }

    fn is_timer(&self) -> bool {
        matches!(
            self,
            ViewState::FocusMode | ViewState::BreakMode | ViewState::MeetingMode
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "target", rename_all = "snake_case")]
pub enum ViewEvent {
    OnboardingCompleted,
    CheckinSaved,
    CheckinSkipped,
    CheckoutSaved,
    LogSaved,
    GoalsSaved,
    GoalsCancelled,
    TimerFinished,
    TimerCancelled,
    Navigate(ViewState),
    ConfigReset,
}

/// View shown at startup.
pub fn initial_view(config: &UserConfig, today_log: Option<&DailyLog>) -> ViewState {
    if !config.is_onboarded {
        ViewState::Onboarding
    } else if today_log.is_some_and(DailyLog::has_checkin) {
        ViewState::Dashboard
    } else {
        ViewState::MorningCheckin
    }
}

/// Target of `event` from `state`, or `None` if the event does not apply.
pub fn transition(state: ViewState, event: ViewEvent) -> Option<ViewState> {
    use ViewEvent as E;
    use ViewState as S;

    match (state, event) {
        (_, E::ConfigReset) => Some(S::Onboarding),
        (S::Onboarding, E::OnboardingCompleted) => Some(S::MorningCheckin),
        (S::MorningCheckin, E::CheckinSaved | E::CheckinSkipped) => Some(S::Dashboard),
        (S::EveningCheckin, E::CheckoutSaved) => Some(S::Log),
        (S::Log, E::LogSaved) => Some(S::Dashboard),
        (S::Goals, E::GoalsSaved | E::GoalsCancelled) => Some(S::Dashboard),
        (s, E::TimerFinished | E::TimerCancelled) if s.is_timer() => Some(S::Dashboard),
        (s, E::Navigate(target)) if s.has_navigation() && target != S::Onboarding => Some(target),
        _ => None,
    }
}

/// Current view plus the rules for moving between views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewMachine {
    state: ViewState,
}

impl ViewMachine {
    /// Start from the view derived from persisted data.
    pub fn start(config: &UserConfig, today_log: Option<&DailyLog>) -> Self {
        Self {
            state: initial_view(config, today_log),
        }
    }

    pub fn from_state(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Apply `event`; an event that does not apply leaves the view unchanged.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTransition`] for events not valid
    /// in the current view.
    pub fn handle(&mut self, event: ViewEvent) -> Result<ViewState, ValidationError> {
        let next = transition(self.state, event).ok_or(ValidationError::InvalidTransition {
            state: self.state,
            event,
        })?;
        tracing::debug!(from = ?self.state, to = ?next, ?event, "view transition");
        self.state = next;
        Ok(next)
    }
}
