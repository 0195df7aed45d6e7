//! Password policy for registration.

use blacklight_core::config::AuthConfig;
use blacklight_core::error::AppError;

#[derive(Debug, Clone)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Reject passwords shorter than the configured minimum or made of whitespace.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.chars().count() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }
        if password.trim().is_empty() {
            return Err(AppError::validation("Password must not be blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_length() {
        let v = PasswordValidator::new(&AuthConfig::default());
        assert!(v.validate("12345").is_err());
        assert!(v.validate("123456").is_ok());
        assert!(v.validate("      ").is_err());
    }
}
