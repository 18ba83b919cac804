use actix_web::{http::StatusCode, ResponseError};
use campus_backend::{
    entities::{
        company::NewCompany,
        faq::{FaqQuery, FaqType, NewFaq},
        student::NewStudent,
        update::NewUpdate,
    },
    errors::AppError,
    repositories::memory_repo::MemoryCampusRepo,
    use_cases::campus::CampusHandler,
};

fn handler() -> CampusHandler<MemoryCampusRepo> {
    CampusHandler::new(MemoryCampusRepo::default())
}

fn company(name: &str, roles: &[&str]) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        logo: "https://example.com/logo.png".to_string(),
        description: "Makes software.".to_string(),
        eligibility: "CGPA ≥ 7.0".to_string(),
        visit_date: "01 Jul 2025".to_string(),
        roles: roles.iter().map(|r| r.to_string()).collect(),
    }
}

fn student(email: &str) -> NewStudent {
    NewStudent {
        username: "meera".to_string(),
        email: email.to_string(),
        department: None,
        year: Some("4".to_string()),
        roll_number: None,
        phone: None,
        skills: None,
        bio: None,
        cgpa: None,
    }
}

#[actix_rt::test]
async fn company_roles_are_trimmed() {
    let handler = handler();

    let created = handler.create_company(company("Globex", &[" SDE", "", "QA "])).await.unwrap();

    assert_eq!(created.roles, vec!["SDE", "QA"]);
}

#[actix_rt::test]
async fn company_with_only_blank_roles_is_invalid() {
    let handler = handler();

    let result = handler.create_company(company("Globex", &["", "  "])).await;

    match result {
        Err(AppError::ValidationError(errors)) => assert_eq!(errors[0].field, "roles"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[actix_rt::test]
async fn company_with_bad_logo_url_is_invalid() {
    let handler = handler();
    let mut request = company("Globex", &["SDE"]);
    request.logo = "logo.png".to_string();

    let result = handler.create_company(request).await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn duplicate_company_name_conflicts() {
    let handler = handler();
    handler.create_company(company("Globex", &["SDE"])).await.unwrap();

    let result = handler.create_company(company("globex", &["SDE"])).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[actix_rt::test]
async fn whitespace_only_company_fields_are_invalid() {
    let handler = handler();
    let mut request = company("   ", &["SDE"]);
    request.visit_date = " \t ".to_string();

    let err = handler.create_company(request).await.unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    match err {
        AppError::ValidationError(errors) => {
            assert_eq!(errors.len(), 2);
            assert_eq!(errors[0].field, "name");
            assert_eq!(errors[0].message, "This field is required");
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert!(handler.list_companies().await.unwrap().is_empty());
}

#[actix_rt::test]
async fn company_text_is_trimmed_before_storing() {
    let handler = handler();
    let mut request = company("  Initech ", &["SDE"]);
    request.visit_date = " 02 Aug 2025 ".to_string();

    let created = handler.create_company(request).await.unwrap();

    assert_eq!(created.name, "Initech");
    assert_eq!(created.visit_date, "02 Aug 2025");
}

#[actix_rt::test]
async fn company_names_conflict_across_unicode_case() {
    let handler = handler();
    handler.create_company(company("Énergie", &["SDE"])).await.unwrap();

    let result = handler.create_company(company("éNERGIE", &["SDE"])).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[actix_rt::test]
async fn whitespace_only_username_is_invalid() {
    let handler = handler();
    let mut request = student("meera@campus.edu");
    request.username = "   ".to_string();

    let err = handler.create_student(request).await.unwrap_err();

    assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    assert!(matches!(err, AppError::ValidationError(_)));
    assert!(handler.list_students().await.unwrap().is_empty());
}

#[actix_rt::test]
async fn blank_faq_and_update_text_is_invalid() {
    let handler = handler();

    let faq = handler.create_faq(NewFaq {
        question: "  ".to_string(),
        answer: "Yes".to_string(),
        company: "Google".to_string(),
        faq_type: FaqType::Hr,
    }).await;
    let update = handler.create_update(NewUpdate {
        title: "Drive".to_string(),
        content: "\n".to_string(),
        date: "20 May 2025".to_string(),
        is_new: true,
    }).await;

    assert!(matches!(faq, Err(AppError::ValidationError(_))));
    assert!(matches!(update, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn deleting_unknown_ids() {
    let handler = handler();

    assert!(matches!(
        handler.delete_company("6f1c1f5e-3c1d-4a59-9d0e-6c3b9d1f2a10").await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(handler.delete_faq("42").await, Err(AppError::InvalidInput(_))));
}

#[actix_rt::test]
async fn faqs_filter_by_company_case_insensitively() {
    let handler = handler();
    handler.seed_sample_data().await.unwrap();
    handler.create_faq(NewFaq {
        question: "Find the next number: 2, 6, 12, 20, ?".to_string(),
        answer: "30".to_string(),
        company: "Google".to_string(),
        faq_type: FaqType::Aptitude,
    }).await.unwrap();

    let google = handler.list_faqs(&FaqQuery { company: Some("google".into()), faq_type: None }).await.unwrap();
    let google_aptitude = handler.list_faqs(&FaqQuery {
        company: Some("Google".into()),
        faq_type: Some(FaqType::Aptitude),
    }).await.unwrap();

    assert_eq!(google.len(), 2);
    assert_eq!(google_aptitude.len(), 1);
    assert_eq!(google_aptitude[0].answer, "30");
}

#[actix_rt::test]
async fn seeding_only_fills_empty_collections() {
    let handler = handler();
    handler.create_update(NewUpdate {
        title: "Orientation".to_string(),
        content: "Placement orientation in the main hall.".to_string(),
        date: "20 May 2025".to_string(),
        is_new: false,
    }).await.unwrap();

    handler.seed_sample_data().await.unwrap();
    handler.seed_sample_data().await.unwrap();

    let summary = handler.dashboard().await.unwrap();
    assert_eq!(summary.companies, 3);
    assert_eq!(summary.faqs, 3);
    assert_eq!(summary.updates, 1);
    assert_eq!(summary.new_updates, 0);
}

#[actix_rt::test]
async fn seeded_companies_keep_declaration_order() {
    let handler = handler();
    handler.seed_sample_data().await.unwrap();

    let names: Vec<String> = handler.list_companies().await.unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, vec!["Google", "Microsoft", "Amazon"]);
}

#[actix_rt::test]
async fn student_email_must_be_unique() {
    let handler = handler();
    handler.create_student(student("meera@campus.edu")).await.unwrap();

    let result = handler.create_student(student("MEERA@campus.edu")).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[actix_rt::test]
async fn student_lookup_includes_profile_completion() {
    let handler = handler();
    let created = handler.create_student(student("meera@campus.edu")).await.unwrap();

    let summary = handler.get_student(&created.id.to_string()).await.unwrap();

    // username, email, year
    assert_eq!(summary.profile_completion, 33);
    assert_eq!(summary.student.id, created.id);

    handler.delete_student(&created.id.to_string()).await.unwrap();
    assert!(handler.list_students().await.unwrap().is_empty());
}
