pub mod entities {
    pub mod admin_user;
    pub mod company;
    pub mod dashboard;
    pub mod faq;
    pub mod student;
    pub mod token;
    pub mod update;
}

pub mod use_cases {
    pub mod auth;
    pub mod campus;
    pub mod extractors;
    pub mod seed;
}
