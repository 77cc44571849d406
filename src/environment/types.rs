use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Repository Types

/// The credential snapshot we keep on disk between runs. Reloaded once at
/// startup; written only by login and logout.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub username: String,
    pub saved_at: DateTime<Utc>,
}

impl StoredSession {
    pub fn new(token: String, username: String) -> Self {
        Self {
            token,
            username,
            saved_at: Utc::now(),
        }
    }
}

// Feedback

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FeedbackLevel {
    Info,
    Success,
    Error,
}

/// A transient user-visible notification. Reducers emit these; how they
/// are shown is up to the embedding UI.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Feedback {
    pub level: FeedbackLevel,
    pub message: String,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FeedbackLevel::Error,
            message: message.into(),
        }
    }
}
