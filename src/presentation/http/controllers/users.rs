// src/presentation/http/controllers/users.rs
use crate::application::{dto::UserDto, queries::users::GetUserQuery};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users ordered by username.", body = [UserDto]),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<UserDto>>> {
    state
        .services
        .user_queries
        .list_users()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "The requested user.", body = UserDto),
        (status = 404, description = "User doesn't exist.", body = ErrorResponse),
        (status = 500, description = "Unexpected server error.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Path(username): Path<String>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_user(GetUserQuery { username })
        .await
        .into_http()
        .map(Json)
}
