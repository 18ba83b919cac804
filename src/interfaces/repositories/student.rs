use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::student::Student,
    errors::AppError,
    repositories::memory_repo::{remove_by, MemoryCampusRepo},
};

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create_student(&self, student: &Student) -> Result<Uuid, AppError>;
    async fn list_students(&self) -> Result<Vec<Student>, AppError>;
    async fn get_student_by_id(&self, id: &Uuid) -> Result<Student, AppError>;
    async fn count_students(&self) -> Result<u64, AppError>;
    async fn delete_student(&self, id: &Uuid) -> Result<(), AppError>;
}

#[async_trait]
impl StudentRepository for MemoryCampusRepo {
    async fn create_student(&self, student: &Student) -> Result<Uuid, AppError> {
        let email = student.email.to_lowercase();
        let mut students = self.students.write();
        if students.iter().any(|s| s.email.to_lowercase() == email) {
            return Err(AppError::Conflict("Student with this email already exists".into()));
        }
        students.push(student.clone());
        Ok(student.id)
    }

    async fn list_students(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.students.read().clone())
    }

    async fn get_student_by_id(&self, id: &Uuid) -> Result<Student, AppError> {
        self.students
            .read()
            .iter()
            .find(|s| s.id == *id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Student not found".into()))
    }

    async fn count_students(&self) -> Result<u64, AppError> {
        Ok(self.students.read().len() as u64)
    }

    async fn delete_student(&self, id: &Uuid) -> Result<(), AppError> {
        if remove_by(&self.students, |s| s.id == *id) {
            Ok(())
        } else {
            Err(AppError::NotFound("Student not found".into()))
        }
    }
}
