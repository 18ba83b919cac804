pub mod cors;

pub mod auth {
    pub mod jwt;
    pub mod password;
}

pub mod utils {
    pub mod valid_uuid;
    pub mod validation;
}
