//! Driving port for user profile queries.
//!
//! Inbound adapters use this port to load a user's public profile without
//! importing persistence details.

use async_trait::async_trait;

use crate::domain::{Error, User, Username};

/// Domain use-case port for reading a user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserProfileQuery: Send + Sync {
    /// Return the profile for `username`.
    async fn fetch_profile(&self, username: &Username) -> Result<User, Error>;
}
