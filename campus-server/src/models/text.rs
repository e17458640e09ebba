//! Required text fields (names, titles, emails)

use super::ValidationError;

/// Non-blank text, stored exactly as given
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredText(String);

impl RequiredText {
    /// Create a new required text value for `field`.
    ///
    /// Rejects empty and whitespace-only input. Anything else, including surrounding
    /// whitespace, is kept verbatim so it reads back unchanged.
    ///
    /// # Example
    /// ```
    /// use campus_server::models::RequiredText;
    ///
    /// assert!(RequiredText::new("name", "Alice").is_ok());
    /// assert!(RequiredText::new("name", "   ").is_err());
    /// ```
    pub fn new(field: &'static str, s: &str) -> Result<Self, ValidationError> {
        if s.trim().is_empty() {
            return Err(ValidationError::Empty { field });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
