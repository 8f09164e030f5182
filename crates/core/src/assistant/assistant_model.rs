//! AI assistant domain models.

use serde::{Deserialize, Serialize};

/// What the remote assistant function is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantTask {
    /// Short goal/habit ideas for a free-text interest.
    Suggestions,
    /// An ordered action plan for a stated goal.
    Plan,
}

/// A successful assistant response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssistantReply {
    Suggestions(Vec<String>),
    Steps(Vec<String>),
}

impl AssistantReply {
    /// The generated lines, whichever shape they arrived in.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            AssistantReply::Suggestions(lines) | AssistantReply::Steps(lines) => lines,
        }
    }
}
