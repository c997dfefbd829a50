use parking_lot::Mutex;
use scm_bias_core::Dimension;
use scm_bias_survey::{
    evaluate, pending_ratings, project, summary_json, ConfigError, GateStatus, GroupResult,
    Stage, SurveyConfig, SurveyError, SurveyState,
};
use serde::Serialize;
use serde_json::Value;

use crate::command::SessionCommand;

/// Derived view handed back after every command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub stage: Stage,
    pub gate: GateStatus,
    pub groups: Vec<String>,
    pub pending: usize,
    pub results: Vec<GroupResult>,
}

impl SessionView {
    fn of(state: &SurveyState, stage: Stage) -> Self {
        Self {
            stage,
            gate: evaluate(state),
            groups: state.group_names().map(str::to_string).collect(),
            pending: pending_ratings(state).len(),
            results: project(state),
        }
    }
}

#[derive(Debug)]
struct SessionInner {
    state: SurveyState,
    stage: Stage,
}

impl SessionInner {
    fn apply(&mut self, command: SessionCommand) -> Result<(), SurveyError> {
        match command {
            SessionCommand::AddGroup { name } => {
                self.state = self.state.add_group(&name)?;
            }
            SessionCommand::RemoveGroup { name } => {
                self.state = self.state.remove_group(&name);
            }
            SessionCommand::SetRating {
                group,
                dimension,
                item,
                value,
            } => {
                self.state = self.state.set_rating(&group, dimension, item, value)?;
            }
            SessionCommand::Advance => {
                self.stage = self.stage.advance(&self.state)?;
            }
            SessionCommand::Back => {
                self.stage = self.stage.back();
            }
            SessionCommand::Reset => {
                self.stage = self.stage.reset()?;
            }
        }
        Ok(())
    }
}

/// Survey state and stage behind one lock; every command runs to completion
/// before the next one starts.
pub struct SurveySession {
    inner: Mutex<SessionInner>,
}

impl Default for SurveySession {
    fn default() -> Self {
        Self::from_state(SurveyState::default())
    }
}

impl SurveySession {
    pub fn new(config: SurveyConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_state(SurveyState::new(config)?))
    }

    pub fn from_state(state: SurveyState) -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                state,
                stage: Stage::default(),
            }),
        }
    }

    pub fn apply(&self, command: SessionCommand) -> Result<SessionView, SurveyError> {
        let kind = command.kind();
        let mut inner = self.inner.lock();
        match inner.apply(command) {
            Ok(()) => {
                tracing::debug!(command = kind, stage = %inner.stage, groups = inner.state.len(), "command applied");
                Ok(SessionView::of(&inner.state, inner.stage))
            }
            Err(err) => {
                tracing::warn!(command = kind, stage = %inner.stage, error = %err, "command rejected");
                Err(err)
            }
        }
    }

    pub fn add_group(&self, name: &str) -> Result<SessionView, SurveyError> {
        self.apply(SessionCommand::AddGroup {
            name: name.to_string(),
        })
    }

    /// Removing an absent group succeeds and leaves the state as it was.
    pub fn remove_group(&self, name: &str) -> Result<SessionView, SurveyError> {
        self.apply(SessionCommand::RemoveGroup {
            name: name.to_string(),
        })
    }

    pub fn set_rating(
        &self,
        group: &str,
        dimension: Dimension,
        item: usize,
        value: i64,
    ) -> Result<SessionView, SurveyError> {
        self.apply(SessionCommand::SetRating {
            group: group.to_string(),
            dimension,
            item,
            value,
        })
    }

    pub fn advance(&self) -> Result<SessionView, SurveyError> {
        self.apply(SessionCommand::Advance)
    }

    pub fn back(&self) -> Result<SessionView, SurveyError> {
        self.apply(SessionCommand::Back)
    }

    pub fn reset(&self) -> Result<SessionView, SurveyError> {
        self.apply(SessionCommand::Reset)
    }

    pub fn stage(&self) -> Stage {
        self.inner.lock().stage
    }

    /// Owned copy of the current state; later commands do not affect it.
    pub fn snapshot(&self) -> SurveyState {
        self.inner.lock().state.clone()
    }

    pub fn view(&self) -> SessionView {
        let inner = self.inner.lock();
        SessionView::of(&inner.state, inner.stage)
    }

    pub fn results(&self) -> Vec<GroupResult> {
        project(&self.inner.lock().state)
    }

    pub fn summary(&self) -> Value {
        let inner = self.inner.lock();
        let mut summary = summary_json(&inner.state);
        if let Value::Object(map) = &mut summary {
            map.insert("stage".to_string(), serde_json::json!(inner.stage));
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_session_starts_selecting_with_reference_groups() {
        let session = SurveySession::default();
        let view = session.view();
        assert_eq!(view.stage, Stage::Selecting);
        assert_eq!(view.groups, vec!["Cloud Engineering", "Compliance (Regional)"]);
        assert!(view.gate.has_groups);
        assert!(!view.gate.all_rated);
        assert_eq!(view.pending, 20);
    }

    #[test]
    fn failed_command_keeps_state_and_stage() {
        let session = SurveySession::default();
        let before = session.snapshot();
        let err = session
            .set_rating("Ghost", Dimension::Warmth, 0, 5)
            .expect_err("unknown group");
        assert_eq!(err, SurveyError::UnknownGroup("Ghost".to_string()));
        assert_eq!(session.snapshot(), before);
        assert_eq!(session.stage(), Stage::Selecting);
    }

    #[test]
    fn snapshots_are_detached_from_later_commands() {
        let session = SurveySession::default();
        let before = session.snapshot();
        session.add_group("Ops").expect("add");
        assert!(!before.contains("Ops"));
        assert!(session.snapshot().contains("Ops"));
    }

    #[test]
    fn blocked_advance_reports_the_gate() {
        let session = SurveySession::default();
        session.advance().expect("selecting -> rating");
        let err = session.advance().expect_err("ratings missing");
        assert!(matches!(
            err,
            SurveyError::AdvanceBlocked {
                stage: Stage::Rating,
                ..
            }
        ));
        assert_eq!(session.stage(), Stage::Rating);
    }

    #[test]
    fn remove_and_back_go_through_the_command_path() {
        let session = SurveySession::default();
        let view = session.remove_group("Ghost").expect("absent remove");
        assert_eq!(view.groups.len(), 2);

        let view = session.remove_group("Cloud Engineering").expect("remove");
        assert_eq!(view.groups, vec!["Compliance (Regional)"]);
        assert_eq!(view.pending, 10);

        session.advance().expect("to rating");
        let view = session.back().expect("back");
        assert_eq!(view.stage, Stage::Selecting);
        assert_eq!(session.back().map(|v| v.stage), Ok(Stage::Selecting));
    }

    #[test]
    fn summary_carries_the_stage() {
        let session = SurveySession::default();
        let summary = session.summary();
        assert_eq!(summary["stage"], "selecting");
        assert_eq!(summary["groups"], 2);
    }
}
