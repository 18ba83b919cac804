use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::company::Company,
    errors::AppError,
    repositories::memory_repo::{remove_by, MemoryCampusRepo},
};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn create_company(&self, company: &Company) -> Result<Uuid, AppError>;
    async fn list_companies(&self) -> Result<Vec<Company>, AppError>;
    async fn get_company_by_id(&self, id: &Uuid) -> Result<Company, AppError>;
    async fn count_companies(&self) -> Result<u64, AppError>;
    async fn delete_company(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl CompanyRepository for MemoryCampusRepo {
    async fn create_company(&self, company: &Company) -> Result<Uuid, AppError> {
        let name = company.name.to_lowercase();
        let mut companies = self.companies.write();
        if companies.iter().any(|c| c.name.to_lowercase() == name) {
            return Err(AppError::Conflict(format!("Company '{}' already exists", company.name)));
        }
        companies.push(company.clone());
        Ok(company.id)
    }

    async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        Ok(self.companies.read().clone())
    }

    async fn get_company_by_id(&self, id: &Uuid) -> Result<Company, AppError> {
        self.companies
            .read()
            .iter()
            .find(|c| c.id == *id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Company not found".into()))
    }

    async fn count_companies(&self) -> Result<u64, AppError> {
        Ok(self.companies.read().len() as u64)
    }

    async fn delete_company(&self, id: &Uuid) -> Result<(), AppError> {
        if remove_by(&self.companies, |c| c.id == *id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Company not found".into()))
        }
    }
}
