use serde::{Deserialize, Serialize};

use crate::error::Failure;

pub const ERROR_TITLE: &str = "Error";

/// What the front-end pops up for a finished operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub ok: bool,
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: true,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn failure(failure: &Failure) -> Self {
        Self {
            ok: false,
            title: ERROR_TITLE.to_string(),
            message: failure.description().to_string(),
        }
    }

    pub fn from_outcome<T, F>(title: &str, outcome: Result<T, Failure>, render: F) -> Self
    where
        F: FnOnce(T) -> String,
    {
        match outcome {
            Ok(value) => Alert::success(title, render(value)),
            Err(failure) => Alert::failure(&failure),
        }
    }
}
