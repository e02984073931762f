//! User API handlers
//!
//! Thin wrappers over `UserService`; domain failures map to status codes
//! here and nowhere else.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{CreateUserRequest, ListUsersParams, UserDto};
use crate::application::users::UserService;
use crate::domain::{DomainError, UserFilter, UserId};
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

/// Shared state for all user routes.
#[derive(Clone)]
pub struct UserHandlerState {
    pub users: Arc<UserService>,
}

fn error_response(err: DomainError) -> (StatusCode, Json<ApiResponse<()>>) {
    let status = match &err {
        DomainError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::QuoteProvider(_) => StatusCode::BAD_GATEWAY,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created; body is the assigned id", body = i64),
        (status = 400, description = "Malformed JSON"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> Result<Json<UserId>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.users.add_user(request.into_dto()).await {
        Ok(user) => Ok(Json(user.id)),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User with a freshly fetched quote", body = UserDto),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<UserId>,
) -> Result<Json<UserDto>, (StatusCode, Json<ApiResponse<()>>)> {
    match state.users.get_user(id).await {
        Ok(Some(user)) => Ok(Json(UserDto::from(user))),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("User '{}' not found", id))),
        )),
        Err(e) => Err(error_response(e)),
    }
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users, each with a freshly fetched quote", body = [UserDto]),
        (status = 400, description = "Negative page or size")
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
    Query(params): Query<ListUsersParams>,
) -> Result<Json<Vec<UserDto>>, (StatusCode, Json<ApiResponse<()>>)> {
    let filter = UserFilter {
        name: params.name,
        username: params.username,
    };

    match state.users.get_users(params.page, params.size, filter).await {
        Ok(users) => Ok(Json(users.into_iter().map(UserDto::from).collect())),
        Err(e) => Err(error_response(e)),
    }
}
