//! User profile HTTP handler.
//!
//! ```text
//! GET /users/{username}
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::User;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{USERNAME_FIELD, parse_username};

/// Profile payload for `GET /users/{username}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[schema(value_type = UserSchema)]
    pub user: User,
}

/// Fetch the public profile of a note owner.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use notes_backend::inbound::http::users::get_user_profile;
///
/// let app = App::new().service(get_user_profile);
/// ```
#[utoipa::path(
    get,
    path = "/users/{username}",
    params(("username" = String, Path, description = "Unique username")),
    responses(
        (status = 200, description = "User profile", body = UserProfileResponse),
        (status = 400, description = "Blank or invalid username", body = ErrorSchema),
        (status = 404, description = "No user with the username", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUserProfile"
)]
#[get("/users/{username}")]
pub async fn get_user_profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserProfileResponse>> {
    let username = parse_username(path.into_inner(), USERNAME_FIELD)?;
    let user = state.profile.fetch_profile(&username).await?;
    Ok(web::Json(UserProfileResponse { user }))
}

#[cfg(test)]
mod tests;
