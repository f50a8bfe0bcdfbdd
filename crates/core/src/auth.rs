//! Login gate
//!
//! Credentials are checked against a fixed pair of literals. There is no
//! account store, lockout or retry counting.

use crate::error::{Error, Result};
use crate::models::{Credentials, LoggedInUser};
use crate::validation::{Field, ValidationErrors};

pub const VALID_USERNAME: &str = "admin";
pub const VALID_PASSWORD: &str = "1234";

pub const MIN_PASSWORD_LEN: usize = 4;

pub const INVALID_CREDENTIALS: &str = "Credenciales incorrectas. Usa admin/1234 para acceder.";

/// Check the login inputs are filled in before attempting a login.
///
/// Returns the credentials with the username trimmed.
pub fn validate_login_input(
    username: &str,
    password: &str,
) -> std::result::Result<Credentials, ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let username = username.trim();

    if username.is_empty() {
        errors.insert(Field::Username, "El nombre de usuario es obligatorio");
    }

    if password.trim().is_empty() {
        errors.insert(Field::Password, "La contraseña es obligatoria");
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            Field::Password,
            format!(
                "La contraseña debe tener al menos {} caracteres",
                MIN_PASSWORD_LEN
            ),
        );
    }

    if errors.is_empty() {
        Ok(Credentials::new(username, password))
    } else {
        Err(errors)
    }
}

/// Compare credentials against the fixed pair
pub fn authenticate(credentials: &Credentials) -> Result<LoggedInUser> {
    if credentials.username == VALID_USERNAME && credentials.password == VALID_PASSWORD {
        Ok(LoggedInUser {
            username: credentials.username.clone(),
        })
    } else {
        Err(Error::Authentication(INVALID_CREDENTIALS.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_1234_logs_in() {
        let user = authenticate(&Credentials::new("admin", "1234")).unwrap();
        assert_eq!(user.username, "admin");
    }

    #[test]
    fn test_other_pairs_fail_with_fixed_message() {
        for (u, p) in [("admin", "12345"), ("Admin", "1234"), ("root", "1234"), ("", "")] {
            match authenticate(&Credentials::new(u, p)) {
                Err(Error::Authentication(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
                other => panic!("expected authentication error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_input_requires_username_and_password() {
        let errors = validate_login_input("   ", "").unwrap_err();
        assert!(errors.contains(Field::Username));
        assert_eq!(errors.get(Field::Password), Some("La contraseña es obligatoria"));
    }

    #[test]
    fn test_input_short_password() {
        let errors = validate_login_input("admin", "123").unwrap_err();
        assert_eq!(
            errors.get(Field::Password),
            Some("La contraseña debe tener al menos 4 caracteres")
        );
        assert!(!errors.contains(Field::Username));
    }

    #[test]
    fn test_input_trims_username_only() {
        let creds = validate_login_input("  admin ", "1234").unwrap();
        assert_eq!(creds.username, "admin");
        assert!(authenticate(&creds).is_ok());

        let creds = validate_login_input("admin", " 1234").unwrap();
        assert!(authenticate(&creds).is_err());
    }
}
