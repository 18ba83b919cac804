use actix_web::web;

use crate::handlers::{auth, companies, faqs, students, system, updates};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg
        .service(
            web::resource("/")
                .route(web::get().to(auth::dashboard))
        )
        .service(
            web::resource("/login/")
                .route(web::post().to(auth::login))
        )
        .service(
            web::resource("/health/")
                .route(web::get().to(system::admin_health_check))
        )
        .service(
            web::resource("/companies/")
                .route(web::get().to(companies::list_companies))
                .route(web::post().to(companies::create_company))
        )
        .service(
            web::resource("/companies/{company_id}/")
                .route(web::get().to(companies::get_company))
                .route(web::delete().to(companies::delete_company))
        )
        .service(
            web::resource("/faqs/")
                .route(web::get().to(faqs::list_faqs))
                .route(web::post().to(faqs::create_faq))
        )
        .service(
            web::resource("/faqs/{faq_id}/")
                .route(web::delete().to(faqs::delete_faq))
        )
        .service(
            web::resource("/updates/")
                .route(web::get().to(updates::list_updates))
                .route(web::post().to(updates::create_update))
        )
        .service(
            web::resource("/updates/{update_id}/")
                .route(web::delete().to(updates::delete_update))
        )
        .service(
            web::resource("/students/")
                .route(web::get().to(students::list_students))
                .route(web::post().to(students::create_student))
        )
        .service(
            web::resource("/students/{student_id}/")
                .route(web::get().to(students::get_student))
                .route(web::delete().to(students::delete_student))
        );
}
