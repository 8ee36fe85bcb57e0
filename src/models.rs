// models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A poll as stored and returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub options: Vec<PollOption>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

/// One selectable choice within a poll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: String,
    pub text: String,
    pub vote_count: u64,
}

/// Request body for creating a poll.
///
/// Carries no identifiers or vote counts: anything the client sends for
/// those is dropped during decoding.
#[derive(Debug, Default, Deserialize)]
pub struct PollDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<OptionDraft>,
    #[serde(default, alias = "expiresAt")]
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OptionDraft {
    #[serde(default)]
    pub text: String,
}

impl OptionDraft {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
