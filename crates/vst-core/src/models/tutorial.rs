use crate::models::null_as_empty;
use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tutorial {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: String,
}

/// Body of `POST /api/tutorials` (administrators only).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewTutorial {
    pub title: String,
    pub content: String,
}

impl NewTutorial {
    #[track_caller]
    pub fn new(title: &str, content: &str) -> CoreResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation {
                message: "tutorial title is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if content.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "tutorial content is required".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }
}
