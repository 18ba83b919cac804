use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

/// Number of profile fields counted towards completion.
const PROFILE_FIELDS: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub department: Option<String>,
    pub year: Option<String>,
    pub roll_number: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<String>,
    pub bio: Option<String>,
    pub cgpa: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Percentage (rounded down) of filled-in profile fields.
    pub fn profile_completion(&self) -> u8 {
        let filled = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());

        let completed = [!self.username.trim().is_empty(), !self.email.trim().is_empty()]
            .into_iter()
            .chain(
                [
                    &self.department,
                    &self.year,
                    &self.roll_number,
                    &self.phone,
                    &self.skills,
                    &self.bio,
                    &self.cgpa,
                ]
                .into_iter()
                .map(filled),
            )
            .filter(|done| *done)
            .count();

        (completed * 100 / PROFILE_FIELDS) as u8
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    #[validate(length(max = 100), custom(function = "validate_not_blank"))]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 100))]
    pub department: Option<String>,

    #[validate(length(max = 20))]
    pub year: Option<String>,

    #[validate(length(max = 50))]
    pub roll_number: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(length(max = 1000))]
    pub skills: Option<String>,

    #[validate(length(max = 2000))]
    pub bio: Option<String>,

    #[validate(length(max = 10))]
    pub cgpa: Option<String>,
}

impl NewStudent {
    pub fn into_student(self) -> Student {
        Student {
            id: Uuid::new_v4(),
            username: self.username.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            department: self.department,
            year: self.year,
            roll_number: self.roll_number,
            phone: self.phone,
            skills: self.skills,
            bio: self.bio,
            cgpa: self.cgpa,
            created_at: Utc::now(),
        }
    }
}

/// A student as shown in the admin's registered-students table.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSummary {
    #[serde(flatten)]
    pub student: Student,
    pub profile_completion: u8,
}

impl From<Student> for StudentSummary {
    fn from(student: Student) -> Self {
        let profile_completion = student.profile_completion();
        StudentSummary { student, profile_completion }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_student() -> Student {
        NewStudent {
            username: "asha".into(),
            email: "Asha@Campus.edu".into(),
            department: None,
            year: None,
            roll_number: None,
            phone: None,
            skills: None,
            bio: None,
            cgpa: None,
        }
        .into_student()
    }

    #[test]
    fn email_is_normalized_on_insert() {
        assert_eq!(bare_student().email, "asha@campus.edu");
    }

    #[test]
    fn completion_counts_username_and_email() {
        // 2 of 9 fields
        assert_eq!(bare_student().profile_completion(), 22);
    }

    #[test]
    fn blank_fields_do_not_count() {
        let mut student = bare_student();
        student.department = Some("CSE".into());
        student.bio = Some("   ".into());

        assert_eq!(student.profile_completion(), 33);
    }

    #[test]
    fn full_profile_is_complete() {
        let mut student = bare_student();
        for field in [
            &mut student.department,
            &mut student.year,
            &mut student.roll_number,
            &mut student.phone,
            &mut student.skills,
            &mut student.bio,
            &mut student.cgpa,
        ] {
            *field = Some("x".into());
        }

        assert_eq!(student.profile_completion(), 100);
    }
}
