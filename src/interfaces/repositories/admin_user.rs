use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::{
    entities::admin_user::{AdminUser, AdminUserInsert},
    errors::AppError,
    repositories::memory_repo::MemoryAdminRepo,
};

#[async_trait]
pub trait AdminRepository: Send + Sync {
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError>;
    async fn create_admin(&self, admin: &AdminUserInsert) -> Result<Uuid, AppError>;
}

impl MemoryAdminRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdminRepository for MemoryAdminRepo {
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<AdminUser>, AppError> {
        let key = email.trim().to_lowercase();
        Ok(self.admins.get(&key).map(|entry| entry.value().clone()))
    }

    async fn create_admin(&self, admin: &AdminUserInsert) -> Result<Uuid, AppError> {
        match self.admins.entry(admin.email.clone()) {
            Entry::Occupied(_) => {
                Err(AppError::Conflict("Admin with this email already exists".to_string()))
            }
            Entry::Vacant(slot) => {
                let id = Uuid::new_v4();
                slot.insert(AdminUser {
                    id,
                    email: admin.email.clone(),
                    password_hash: admin.password_hash.clone(),
                    created_at: admin.created_at,
                });
                Ok(id)
            }
        }
    }
}
