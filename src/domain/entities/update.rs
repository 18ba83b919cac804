use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// A placement announcement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Update {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub date: String,
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUpdate {
    #[validate(length(max = 200), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(length(max = 5000), custom(function = "validate_not_blank"))]
    pub content: String,

    #[validate(length(max = 50), custom(function = "validate_not_blank"))]
    pub date: String,

    #[serde(default = "default_is_new")]
    pub is_new: bool,
}

fn default_is_new() -> bool {
    true
}

impl NewUpdate {
    pub fn into_update(self) -> Update {
        Update {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            date: self.date.trim().to_string(),
            is_new: self.is_new,
            created_at: Utc::now(),
        }
    }
}
