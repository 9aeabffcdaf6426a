//! Email address validation
//!
//! Drafts carry [`Email`] instead of a bare string, so a syntactically
//! invalid address is rejected while the body is being decoded.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::validation::MAX_NAME_LEN;
use super::ValidationError;

/// local@domain.tld with a dotted domain and an alphabetic TLD
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$")
        .expect("invalid email regex")
});

/// Syntactically valid email address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse an email address.
    ///
    /// # Example
    /// ```
    /// use registrar_server::models::Email;
    ///
    /// assert!(Email::parse("test.student@example.com").is_ok());
    /// assert!(Email::parse("not-an-email").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "email" });
        }

        if s.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "email",
                max: MAX_NAME_LEN,
            });
        }

        let local_len = s.split('@').next().map(str::len).unwrap_or(0);
        if !EMAIL_RE.is_match(s) || local_len > 64 || s.contains("..") {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "not a valid email address",
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
