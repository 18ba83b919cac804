pub mod routes;

pub mod handlers {
    pub mod auth;
    pub mod companies;
    pub mod faqs;
    pub mod json_error;
    pub mod ping;
    pub mod students;
    pub mod system;
    pub mod updates;
}

pub mod middlewares {
    pub mod auth;
}

pub mod repositories {
    pub mod admin_user;
    pub mod company;
    pub mod faq;
    pub mod memory_repo;
    pub mod student;
    pub mod token;
    pub mod update;
}
