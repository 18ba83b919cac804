use validator::Validate;

use crate::entities::{
    company::{Company, NewCompany},
    dashboard::DashboardSummary,
    faq::{Faq, FaqQuery, NewFaq},
    student::{NewStudent, Student, StudentSummary},
    update::{NewUpdate, Update},
};
use crate::errors::AppError;
use crate::repositories::{
    company::CompanyRepository, faq::FaqRepository, student::StudentRepository,
    update::UpdateRepository,
};
use crate::use_cases::seed;
use crate::utils::valid_uuid::valid_uuid;

/// Everything the admin content handler needs from storage.
pub trait CampusRepository:
    CompanyRepository + FaqRepository + UpdateRepository + StudentRepository
{
}

impl<T> CampusRepository for T where
    T: CompanyRepository + FaqRepository + UpdateRepository + StudentRepository
{
}

pub struct CampusHandler<R>
where
    R: CampusRepository,
{
    pub campus_repo: R,
}

impl<R> CampusHandler<R>
where
    R: CampusRepository,
{
    pub fn new(campus_repo: R) -> Self {
        CampusHandler { campus_repo }
    }

    pub async fn dashboard(&self) -> Result<DashboardSummary, AppError> {
        Ok(DashboardSummary {
            companies: self.campus_repo.count_companies().await?,
            faqs: self.campus_repo.count_faqs().await?,
            updates: self.campus_repo.count_updates().await?,
            new_updates: self.campus_repo.count_new_updates().await?,
            students: self.campus_repo.count_students().await?,
        })
    }

    pub async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        self.campus_repo.list_companies().await
    }

    pub async fn create_company(&self, request: NewCompany) -> Result<Company, AppError> {
        request.validate()?;

        let company = request.into_company();
        self.campus_repo.create_company(&company).await?;

        tracing::info!("Added company: {}", company.name);
        Ok(company)
    }

    pub async fn get_company(&self, id: &str) -> Result<Company, AppError> {
        let valid_id = valid_uuid(id)?;
        self.campus_repo.get_company_by_id(&valid_id).await
    }

    pub async fn delete_company(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.campus_repo.delete_company(&valid_id).await
    }

    pub async fn list_faqs(&self, query: &FaqQuery) -> Result<Vec<Faq>, AppError> {
        self.campus_repo.list_faqs(query).await
    }

    pub async fn create_faq(&self, request: NewFaq) -> Result<Faq, AppError> {
        request.validate()?;

        let faq = request.into_faq();
        self.campus_repo.create_faq(&faq).await?;

        tracing::info!("Added FAQ for {}", faq.company);
        Ok(faq)
    }

    pub async fn delete_faq(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.campus_repo.delete_faq(&valid_id).await
    }

    pub async fn list_updates(&self) -> Result<Vec<Update>, AppError> {
        self.campus_repo.list_updates().await
    }

    pub async fn create_update(&self, request: NewUpdate) -> Result<Update, AppError> {
        request.validate()?;

        let update = request.into_update();
        self.campus_repo.create_update(&update).await?;

        tracing::info!("Added update: {}", update.title);
        Ok(update)
    }

    pub async fn delete_update(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.campus_repo.delete_update(&valid_id).await
    }

    pub async fn list_students(&self) -> Result<Vec<StudentSummary>, AppError> {
        let students = self.campus_repo.list_students().await?;
        Ok(students.into_iter().map(StudentSummary::from).collect())
    }

    pub async fn create_student(&self, request: NewStudent) -> Result<Student, AppError> {
        request.validate()?;

        let student = request.into_student();
        self.campus_repo.create_student(&student).await?;

        tracing::info!("Registered student {}", student.id);
        Ok(student)
    }

    pub async fn get_student(&self, id: &str) -> Result<StudentSummary, AppError> {
        let valid_id = valid_uuid(id)?;
        self.campus_repo
            .get_student_by_id(&valid_id)
            .await
            .map(StudentSummary::from)
    }

    pub async fn delete_student(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.campus_repo.delete_student(&valid_id).await
    }

    /// Fills each empty collection with the portal's sample content.
    /// Collections that already hold data are left untouched.
    pub async fn seed_sample_data(&self) -> Result<(), AppError> {
        if self.campus_repo.count_companies().await? == 0 {
            for company in seed::sample_companies() {
                self.create_company(company).await?;
            }
        }
        if self.campus_repo.count_faqs().await? == 0 {
            for faq in seed::sample_faqs() {
                self.create_faq(faq).await?;
            }
        }
        if self.campus_repo.count_updates().await? == 0 {
            for update in seed::sample_updates() {
                self.create_update(update).await?;
            }
        }
        Ok(())
    }
}
