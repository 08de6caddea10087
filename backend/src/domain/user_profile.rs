//! User profile domain service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{UserProfileQuery, UserRepository, UserRepositoryError};
use crate::domain::{Error, User, Username};

/// Profile service implementing [`UserProfileQuery`] over a [`UserRepository`].
#[derive(Clone)]
pub struct UserProfileService<R> {
    users: Arc<R>,
}

impl<R> UserProfileService<R> {
    /// Create a new service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

fn map_repository_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

#[async_trait]
impl<R> UserProfileQuery for UserProfileService<R>
where
    R: UserRepository,
{
    async fn fetch_profile(&self, username: &Username) -> Result<User, Error> {
        self.users
            .find_by_username(username)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                Error::not_found(format!("No user with the username \"{username}\" exists"))
                    .with_details(json!({
                        "username": username.as_str(),
                        "code": "user_not_found",
                    }))
            })
    }
}
