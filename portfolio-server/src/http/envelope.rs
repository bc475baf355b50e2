//! Uniform response wrapper

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// `{message, status, data?}`; `data` is left out when there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status: Status::Success,
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success without a payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Status::Success,
            data: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: Status::Error,
            data: None,
        }
    }
}
