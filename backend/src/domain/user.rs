//! User data model.
//!
//! Users are owned by the persistence layer. The notes service reads them to
//! resolve the owning path of a note and to serve the profile view.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`Username::new`] and [`User::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// The username was empty or whitespace.
    #[error("username must not be empty")]
    EmptyUsername,
    /// The username carried leading or trailing whitespace.
    #[error("username must not contain surrounding whitespace")]
    UntrimmedUsername,
    /// The username contained a path separator.
    #[error("username must not contain '/'")]
    UsernameContainsSlash,
}

/// Unique, URL-safe user handle.
///
/// Usernames appear verbatim in redirect paths such as
/// `/users/{username}/notes/{id}`, so a slash is never accepted.
///
/// # Examples
/// ```
/// use notes_backend::domain::Username;
///
/// let username = Username::new("kim").expect("valid username");
/// assert_eq!(username.as_ref(), "kim");
/// assert!(Username::new("  ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(username: impl Into<String>) -> Result<Self, UserValidationError> {
        Self::from_owned(username.into())
    }

    fn from_owned(username: String) -> Result<Self, UserValidationError> {
        if username.trim().is_empty() {
            return Err(UserValidationError::EmptyUsername);
        }
        if username.trim() != username {
            return Err(UserValidationError::UntrimmedUsername);
        }
        if username.contains('/') {
            return Err(UserValidationError::UsernameContainsSlash);
        }
        Ok(Self(username))
    }

    /// Borrow the username as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl TryFrom<String> for Username {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Application user.
///
/// ## Invariants
/// - `username` satisfies [`Username`] validation.
/// - `name` is optional; clients fall back to the username when it is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct User {
    username: Username,
    name: Option<String>,
}

impl User {
    /// Build a user from validated components.
    pub fn new(username: Username, name: Option<String>) -> Self {
        Self { username, name }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_parts(
        username: impl Into<String>,
        name: Option<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(Username::new(username)?, name))
    }

    /// Unique handle.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Optional human-readable name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Name shown in the profile header: the name if set, else the username.
    pub fn display_label(&self) -> &str {
        self.name().unwrap_or_else(|| self.username.as_ref())
    }
}

#[cfg(test)]
mod tests;
