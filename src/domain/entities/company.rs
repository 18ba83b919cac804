use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::{validate_not_blank, validate_roles};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub logo: String,
    pub description: String,
    pub eligibility: String,
    pub visit_date: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    pub name: String,

    #[validate(url(message = "Logo must be a valid URL"))]
    pub logo: String,

    #[validate(length(max = 2000), custom(function = "validate_not_blank"))]
    pub description: String,

    #[validate(length(max = 500), custom(function = "validate_not_blank"))]
    pub eligibility: String,

    #[validate(length(max = 50), custom(function = "validate_not_blank"))]
    pub visit_date: String,

    #[validate(custom(function = "validate_roles"))]
    pub roles: Vec<String>,
}

impl NewCompany {
    /// Builds the stored record. Text is trimmed and blank roles dropped.
    pub fn into_company(self) -> Company {
        Company {
            id: Uuid::new_v4(),
            name: self.name.trim().to_string(),
            logo: self.logo.trim().to_string(),
            description: self.description.trim().to_string(),
            eligibility: self.eligibility.trim().to_string(),
            visit_date: self.visit_date.trim().to_string(),
            roles: self
                .roles
                .iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect(),
            created_at: Utc::now(),
        }
    }
}
