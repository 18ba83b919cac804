use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::faq::{Faq, FaqQuery},
    errors::AppError,
    repositories::memory_repo::{remove_by, MemoryCampusRepo},
};

#[async_trait]
pub trait FaqRepository: Send + Sync {
    async fn create_faq(&self, faq: &Faq) -> Result<Uuid, AppError>;
    async fn list_faqs(&self, query: &FaqQuery) -> Result<Vec<Faq>, AppError>;
    async fn count_faqs(&self) -> Result<u64, AppError>;
    async fn delete_faq(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl FaqRepository for MemoryCampusRepo {
    async fn create_faq(&self, faq: &Faq) -> Result<Uuid, AppError> {
        self.faqs.write().push(faq.clone());
        Ok(faq.id)
    }

    async fn list_faqs(&self, query: &FaqQuery) -> Result<Vec<Faq>, AppError> {
        Ok(self
            .faqs
            .read()
            .iter()
            .filter(|faq| query.matches(faq))
            .cloned()
            .collect())
    }

    async fn count_faqs(&self) -> Result<u64, AppError> {
        Ok(self.faqs.read().len() as u64)
    }

    async fn delete_faq(&self, id: &Uuid) -> Result<(), AppError> {
        if remove_by(&self.faqs, |f| f.id == *id) {
            Ok(())
        } else {
            Err(AppError::NotFound("FAQ not found".into()))
        }
    }
}
