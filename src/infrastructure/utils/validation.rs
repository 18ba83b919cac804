use std::borrow::Cow;

use validator::ValidationError;

/// Rejects empty and whitespace-only text.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "This field is required"));
    }
    Ok(())
}

pub fn validate_roles(roles: &[String]) -> Result<(), ValidationError> {
    if roles.iter().any(|r| !r.trim().is_empty()) {
        Ok(())
    } else {
        Err(new_validation_error("roles", "At least one role is required"))
    }
}

pub fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(validate_not_blank("").is_err());
        assert!(validate_not_blank(" \t\n ").is_err());
        assert!(validate_not_blank(" Globex ").is_ok());
    }

    #[test]
    fn roles_need_one_non_blank_entry() {
        assert!(validate_roles(&[]).is_err());
        assert!(validate_roles(&[" ".to_string()]).is_err());
        assert!(validate_roles(&["".to_string(), "SDE".to_string()]).is_ok());
    }
}
