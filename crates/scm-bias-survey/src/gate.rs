use std::fmt;

use scm_bias_core::Dimension;
use scm_bias_questionnaire::STAGE_LABELS;
use serde::{Deserialize, Serialize};

use crate::error::SurveyError;
use crate::state::SurveyState;

pub fn has_groups(state: &SurveyState) -> bool {
    !state.is_empty()
}

/// True once every slot of every group is answered. Vacuously true with no groups.
pub fn all_rated(state: &SurveyState) -> bool {
    state.groups().iter().all(|g| g.ratings().is_complete())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateStatus {
    pub has_groups: bool,
    pub all_rated: bool,
}

pub fn evaluate(state: &SurveyState) -> GateStatus {
    GateStatus {
        has_groups: has_groups(state),
        all_rated: all_rated(state),
    }
}

/// An unanswered slot that keeps [`all_rated`] false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingRating {
    pub group: String,
    pub dimension: Dimension,
    pub item: usize,
}

pub fn pending_ratings(state: &SurveyState) -> Vec<PendingRating> {
    let mut out = Vec::new();
    for entry in state.groups() {
        for dimension in Dimension::ALL {
            let set = entry.ratings().dimension(dimension);
            for (item, slot) in set.slots().iter().enumerate() {
                if slot.is_none() {
                    out.push(PendingRating {
                        group: entry.name().to_string(),
                        dimension,
                        item,
                    });
                }
            }
        }
    }
    out
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    #[default]
    Selecting,
    Rating,
    Viewing,
}

impl Stage {
    pub const ALL: [Self; 3] = [Self::Selecting, Self::Rating, Self::Viewing];

    pub fn label(self) -> &'static str {
        let [groups, survey, map] = STAGE_LABELS;
        match self {
            Self::Selecting => groups,
            Self::Rating => survey,
            Self::Viewing => map,
        }
    }

    /// Moves forward when the gate for the current stage passes.
    pub fn advance(self, state: &SurveyState) -> Result<Self, SurveyError> {
        let next = match self {
            Self::Selecting if has_groups(state) => Self::Rating,
            Self::Selecting => {
                return Err(SurveyError::AdvanceBlocked {
                    stage: self,
                    reason: "no groups selected",
                });
            }
            Self::Rating if all_rated(state) => Self::Viewing,
            Self::Rating => {
                return Err(SurveyError::AdvanceBlocked {
                    stage: self,
                    reason: "unanswered ratings remain",
                });
            }
            Self::Viewing => {
                return Err(SurveyError::InvalidTransition {
                    stage: self,
                    action: "advance",
                });
            }
        };
        Ok(next)
    }

    /// Steps back one stage; the first stage stays put.
    pub fn back(self) -> Self {
        match self {
            Self::Selecting | Self::Rating => Self::Selecting,
            Self::Viewing => Self::Rating,
        }
    }

    /// Returns to selection from the results view. Answers are kept.
    pub fn reset(self) -> Result<Self, SurveyError> {
        match self {
            Self::Viewing => Ok(Self::Selecting),
            stage => Err(SurveyError::InvalidTransition {
                stage,
                action: "reset",
            }),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
