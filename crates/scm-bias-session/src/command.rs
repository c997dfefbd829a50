use scm_bias_core::Dimension;
use serde::{Deserialize, Serialize};

/// A single user action against the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionCommand {
    AddGroup {
        name: String,
    },
    RemoveGroup {
        name: String,
    },
    SetRating {
        group: String,
        dimension: Dimension,
        item: usize,
        value: i64,
    },
    Advance,
    Back,
    Reset,
}

impl SessionCommand {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AddGroup { .. } => "add_group",
            Self::RemoveGroup { .. } => "remove_group",
            Self::SetRating { .. } => "set_rating",
            Self::Advance => "advance",
            Self::Back => "back",
            Self::Reset => "reset",
        }
    }
}
