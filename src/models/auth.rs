//! Authentication request/response types for FarmBook

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::{Gender, UserResponse, UserRole};

/// Request body for POST /auth/signup
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(custom = "validate_optional_email")]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 100, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(custom = "validate_mobile")]
    pub mobile: String,

    pub gender: Option<Gender>,

    pub address: Option<String>,

    #[validate(custom = "validate_otp")]
    pub otp: Option<String>,

    pub role: Option<UserRole>,
}

/// Request body for POST /auth/login. Accepts an email or a mobile number.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email or mobile number is required"))]
    pub email_or_mobile: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}

/// Mobile numbers are exactly 10 digits.
fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    let trimmed = mobile.trim();
    if trimmed.len() != 10 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("mobile");
        err.message = Some("Mobile must be exactly 10 digits".into());
        return Err(err);
    }
    Ok(())
}

/// Email is optional; an empty string counts as absent.
fn validate_optional_email(email: &str) -> Result<(), ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() || validator::validate_email(trimmed) {
        return Ok(());
    }
    let mut err = ValidationError::new("email");
    err.message = Some("Invalid email format".into());
    Err(err)
}

/// One-time codes are exactly 4 digits.
fn validate_otp(otp: &str) -> Result<(), ValidationError> {
    let trimmed = otp.trim();
    if trimmed.len() != 4 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        let mut err = ValidationError::new("otp");
        err.message = Some("OTP must be exactly 4 digits".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup(name: &str, email: Option<&str>, password: &str, mobile: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.map(str::to_string),
            password: password.to_string(),
            mobile: mobile.to_string(),
            gender: None,
            address: None,
            otp: None,
            role: None,
        }
    }

    #[test]
    fn test_valid_signup_passes() {
        let req = signup("Asha", Some("asha@example.com"), "secret1", "9876543210");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_empty_email_counts_as_absent() {
        let req = signup("Asha", Some(""), "secret1", "9876543210");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_bad_email_rejected() {
        let req = signup("Asha", Some("not-an-email"), "secret1", "9876543210");
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_mobile_must_be_ten_digits() {
        for mobile in ["12345", "98765432100", "98765abc10", ""] {
            let req = signup("Asha", None, "secret1", mobile);
            let errors = req.validate().unwrap_err();
            assert!(errors.field_errors().contains_key("mobile"), "{}", mobile);
        }

        // Surrounding whitespace is tolerated
        let req = signup("Asha", None, "secret1", " 9876543210 ");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_short_password_rejected() {
        let req = signup("Asha", None, "five5", "9876543210");
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_short_name_rejected() {
        let req = signup("A", None, "secret1", "9876543210");
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_otp_shape() {
        let mut req = signup("Asha", None, "secret1", "9876543210");
        req.otp = Some("1234".to_string());
        assert!(req.validate().is_ok());

        req.otp = Some("12a4".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_request_field_names() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"emailOrMobile":"9876543210","password":"secret1"}"#)
                .unwrap();
        assert_eq!(req.email_or_mobile, "9876543210");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_login_short_password_rejected() {
        let req = LoginRequest {
            email_or_mobile: "9876543210".to_string(),
            password: "abc".to_string(),
        };
        assert!(req.validate().is_err());
    }
}
