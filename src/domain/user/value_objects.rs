use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object representing a valid email address
///
/// # Invariants
/// - Must contain '@' character
/// - Must be at least 3 characters long
/// - Is immutable after construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use socialnet_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("test@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "test@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("Invalid email: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        email.contains('@') && email.len() >= 3
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Username value object
///
/// # Invariants
/// - Between `Username::MIN_LEN` and `Username::MAX_LEN` characters
/// - No leading or trailing whitespace
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Username(String);

impl Username {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 64;

    /// Creates a new Username value object
    ///
    /// # Example
    /// ```
    /// use socialnet_api::domain::user::value_objects::Username;
    ///
    /// assert!(Username::new("alice").is_ok());
    /// assert!(Username::new("al").is_err());
    /// ```
    pub fn new(username: impl Into<String>) -> Result<Self, String> {
        let username = username.into();
        let len = username.chars().count();

        if username.trim() != username {
            return Err("Username cannot start or end with whitespace".to_string());
        }
        if len < Self::MIN_LEN || len > Self::MAX_LEN {
            return Err(format!(
                "Username must be between {} and {} characters",
                Self::MIN_LEN,
                Self::MAX_LEN
            ));
        }

        Ok(Username(username))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display name shown on a profile (at least 2 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    pub const MIN_LEN: usize = 2;

    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().chars().count() < Self::MIN_LEN {
            return Err(format!(
                "Name must be at least {} characters",
                Self::MIN_LEN
            ));
        }
        Ok(DisplayName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Longest plaintext password accepted at registration
pub const MAX_PASSWORD_LEN: usize = 64;

/// Checks the plaintext password length limit
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.chars().count() > MAX_PASSWORD_LEN {
        return Err(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LEN
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email() {
        assert!(Email::new("test@example.com").is_ok());
    }

    #[test]
    fn valid_email_minimum_length() {
        assert!(Email::new("a@b").is_ok());
    }

    #[test]
    fn invalid_email_no_at_symbol() {
        assert!(Email::new("invalid").is_err());
    }

    #[test]
    fn invalid_email_too_short() {
        assert!(Email::new("a@").is_err());
    }

    #[test]
    fn email_display() {
        let email = Email::new("test@example.com").unwrap();
        assert_eq!(format!("{}", email), "test@example.com");
    }

    #[test]
    fn username_bounds() {
        assert!(Username::new("abc").is_ok());
        assert!(Username::new("ab").is_err());
        assert!(Username::new("a".repeat(64)).is_ok());
        assert!(Username::new("a".repeat(65)).is_err());
    }

    #[test]
    fn username_counts_characters_not_bytes() {
        // three Cyrillic letters, six bytes
        assert!(Username::new("Ива").is_ok());
        assert!(Username::new("Ив").is_err());
    }

    #[test]
    fn username_rejects_surrounding_whitespace() {
        assert!(Username::new(" alice").is_err());
        assert!(Username::new("alice ").is_err());
    }

    #[test]
    fn display_name_minimum_length() {
        assert!(DisplayName::new("Al").is_ok());
        assert!(DisplayName::new("A").is_err());
        assert!(DisplayName::new("   ").is_err());
    }

    #[test]
    fn password_length_limit() {
        assert!(validate_password("").is_ok());
        assert!(validate_password(&"p".repeat(64)).is_ok());
        assert!(validate_password(&"p".repeat(65)).is_err());
    }
}
