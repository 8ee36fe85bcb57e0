// src/poll.rs
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Poll, PollDraft, PollOption};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 1000;
pub const MAX_OPTION_TEXT_CHARS: usize = 200;
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("title is required")]
    TitleRequired,

    #[error("title must be at most 200 characters")]
    TitleTooLong,

    #[error("description must be at most 1000 characters")]
    DescriptionTooLong,

    #[error("poll must have at least 2 options")]
    TooFewOptions,

    #[error("poll cannot have more than 10 options")]
    TooManyOptions,

    #[error("option {index} text cannot be empty")]
    OptionTextRequired { index: usize },

    #[error("option {index} text must be at most 200 characters")]
    OptionTextTooLong { index: usize },

    #[error("expiration date must be in the future")]
    ExpiryNotInFuture,
}

/// Builds a poll from client input, assigning identities and timestamps.
///
/// Acceptance is decided separately by [`validate`].
pub fn prepare_for_creation(draft: PollDraft) -> Poll {
    let now = Utc::now();

    let options = draft
        .options
        .into_iter()
        .map(|option| PollOption {
            id: Uuid::new_v4().to_string(),
            text: option.text,
            vote_count: 0,
        })
        .collect();

    Poll {
        id: Uuid::new_v4().to_string(),
        title: draft.title,
        description: draft.description.unwrap_or_default(),
        options,
        created_at: now,
        updated_at: now,
        expires_at: draft.expires_at,
    }
}

pub fn validate(poll: &Poll) -> Result<(), ValidationError> {
    validate_at(poll, Utc::now())
}

/// Checks the poll invariants against `now`, returning the first violation.
pub fn validate_at(poll: &Poll, now: DateTime<Utc>) -> Result<(), ValidationError> {
    if poll.title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if poll.title.chars().count() > MAX_TITLE_CHARS {
        return Err(ValidationError::TitleTooLong);
    }

    if poll.description.chars().count() > MAX_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooLong);
    }

    if poll.options.len() < MIN_OPTIONS {
        return Err(ValidationError::TooFewOptions);
    }
    if poll.options.len() > MAX_OPTIONS {
        return Err(ValidationError::TooManyOptions);
    }

    for (position, option) in poll.options.iter().enumerate() {
        let index = position + 1;
        if option.text.is_empty() {
            return Err(ValidationError::OptionTextRequired { index });
        }
        if option.text.chars().count() > MAX_OPTION_TEXT_CHARS {
            return Err(ValidationError::OptionTextTooLong { index });
        }
    }

    match poll.expires_at {
        Some(expires_at) if expires_at <= now => Err(ValidationError::ExpiryNotInFuture),
        _ => Ok(()),
    }
}
