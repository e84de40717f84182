//! Database URL Domain Model
//!
//! The connection string the pool is bound to, checked against a deny-list of
//! placeholder credentials before anything is allowed to use it.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::shared::errors::ConfigurationError;

/// Substrings that mark an unfilled template credential (matched case-insensitively)
pub const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your_password",
    "your-password",
    "change-me",
    "change_me",
    "changeme",
    "placeholder",
    "password123",
    "example",
    "test123",
];

/// Validated PostgreSQL connection URL.
///
/// Only obtainable through [`DatabaseUrl::parse`]. The buffer is wiped on drop
/// and the password never appears in `Debug` or `Display` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct DatabaseUrl(String);

impl DatabaseUrl {
    /// Validate a raw connection string
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Missing` if the value is empty or blank.
    /// Returns `ConfigurationError::Placeholder` if it contains any of
    /// [`PLACEHOLDER_PATTERNS`].
    pub fn parse(raw: impl Into<String>) -> Result<Self, ConfigurationError> {
        let raw = raw.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(ConfigurationError::Missing);
        }

        if let Some(pattern) = find_placeholder(trimmed) {
            return Err(ConfigurationError::Placeholder { pattern });
        }

        Ok(Self(trimmed.to_string()))
    }

    /// Get the raw connection string
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Connection string with any driver suffix removed from the scheme
    /// (`postgresql+asyncpg://` becomes `postgresql://`)
    #[must_use]
    pub fn without_driver_suffix(&self) -> String {
        match self.0.split_once("://") {
            Some((scheme, rest)) => match scheme.split_once('+') {
                Some((base, _driver)) => format!("{base}://{rest}"),
                None => self.0.clone(),
            },
            None => self.0.clone(),
        }
    }

    /// Connection string with the password replaced by `***`
    #[must_use]
    pub fn redacted(&self) -> String {
        let Some((scheme, rest)) = self.0.split_once("://") else {
            return "***".to_string();
        };

        // Userinfo ends at the last '@' before any query or fragment
        let authority_end = rest.find(['?', '#']).unwrap_or(rest.len());
        match rest[..authority_end].rfind('@') {
            Some(at) => match rest[..at].split_once(':') {
                Some((user, _password)) => format!("{scheme}://{user}:***{}", &rest[at..]),
                None => self.0.clone(),
            },
            // '@' only after a '?' or '#': the password itself holds one of them
            None if rest.contains('@') => format!("{scheme}://***"),
            None => self.0.clone(),
        }
    }
}

impl std::fmt::Debug for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("DatabaseUrl").field(&self.redacted()).finish()
    }
}

impl std::fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.redacted())
    }
}

/// Return the first deny-listed pattern found in `value`, ignoring case
fn find_placeholder(value: &str) -> Option<&'static str> {
    let lowered = value.to_lowercase();
    PLACEHOLDER_PATTERNS
        .iter()
        .copied()
        .find(|pattern| lowered.contains(pattern))
}
