use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::update::Update,
    errors::AppError,
    repositories::memory_repo::{remove_by, MemoryCampusRepo},
};

#[async_trait]
pub trait UpdateRepository: Send + Sync {
    async fn create_update(&self, update: &Update) -> Result<Uuid, AppError>;
    async fn list_updates(&self) -> Result<Vec<Update>, AppError>;
    async fn count_updates(&self) -> Result<u64, AppError>;
    async fn count_new_updates(&self) -> Result<u64, AppError>;
    async fn delete_update(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl UpdateRepository for MemoryCampusRepo {
    async fn create_update(&self, update: &Update) -> Result<Uuid, AppError> {
        self.updates.write().push(update.clone());
        Ok(update.id)
    }

    async fn list_updates(&self) -> Result<Vec<Update>, AppError> {
        Ok(self.updates.read().clone())
    }

    async fn count_updates(&self) -> Result<u64, AppError> {
        Ok(self.updates.read().len() as u64)
    }

    async fn count_new_updates(&self) -> Result<u64, AppError> {
        Ok(self.updates.read().iter().filter(|u| u.is_new).count() as u64)
    }

    async fn delete_update(&self, id: &Uuid) -> Result<(), AppError> {
        if remove_by(&self.updates, |u| u.id == *id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Update not found".into()))
        }
    }
}
