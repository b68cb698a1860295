//! Username validation

use super::ValidationError;

/// Maximum length for usernames
const MAX_USERNAME_LEN: usize = 64;

/// Validated username
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 64 characters
    ///
    /// # Example
    /// ```
    /// use extrack_server::models::Username;
    ///
    /// assert!(Username::new("fcc_test").is_ok());
    /// assert!(Username::new("").is_err());
    /// assert!(Username::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }

        if trimmed.chars().count() > MAX_USERNAME_LEN {
            return Err(ValidationError::TooLong {
                field: "username",
                max: MAX_USERNAME_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the username as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}
