use scm_bias_core::Dimension;
use thiserror::Error;

use crate::gate::Stage;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurveyError {
    #[error("group already exists: {0}")]
    DuplicateGroup(String),

    #[error("group name cannot be blank")]
    BlankGroupName,

    #[error("unknown group: {0}")]
    UnknownGroup(String),

    #[error("{dimension} item index {index} out of range (item count {count})")]
    IndexOutOfRange {
        dimension: Dimension,
        index: usize,
        count: usize,
    },

    #[error("rating {value} outside scale {min}..={max}")]
    InvalidRatingValue { value: i64, min: u8, max: u8 },

    #[error("cannot leave {stage}: {reason}")]
    AdvanceBlocked { stage: Stage, reason: &'static str },

    #[error("no {action} transition from {stage}")]
    InvalidTransition { stage: Stage, action: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
