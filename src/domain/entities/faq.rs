use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FaqType {
    Technical,
    Hr,
    Aptitude,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub company: String,
    #[serde(rename = "type")]
    pub faq_type: FaqType,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewFaq {
    #[validate(length(max = 500), custom(function = "validate_not_blank"))]
    pub question: String,

    #[validate(length(max = 5000), custom(function = "validate_not_blank"))]
    pub answer: String,

    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    pub company: String,

    #[serde(rename = "type", default = "default_faq_type")]
    pub faq_type: FaqType,
}

fn default_faq_type() -> FaqType {
    FaqType::Technical
}

impl NewFaq {
    pub fn into_faq(self) -> Faq {
        Faq {
            id: Uuid::new_v4(),
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            company: self.company.trim().to_string(),
            faq_type: self.faq_type,
            created_at: Utc::now(),
        }
    }
}

/// Optional filters for listing FAQs.
#[derive(Debug, Default, Deserialize)]
pub struct FaqQuery {
    pub company: Option<String>,
    #[serde(rename = "type")]
    pub faq_type: Option<FaqType>,
}

impl FaqQuery {
    pub fn matches(&self, faq: &Faq) -> bool {
        let company_ok = self
            .company
            .as_deref()
            .is_none_or(|c| faq.company.to_lowercase() == c.trim().to_lowercase());
        let type_ok = self.faq_type.is_none_or(|t| faq.faq_type == t);

        company_ok && type_ok
    }
}
