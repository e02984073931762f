//! User DTOs

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{CreateUserDto, User, UserId};

/// User API representation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    /// Fetched from the quote provider at read time, never from storage.
    pub quote: Option<String>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            username: u.username,
            email: u.email,
            quote: u.quote,
        }
    }
}

/// Create user request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(email)]
    pub email: String,
}

impl CreateUserRequest {
    pub fn into_dto(self) -> CreateUserDto {
        CreateUserDto {
            name: self.name,
            username: self.username,
            email: self.email,
        }
    }
}

/// List users query parameters
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersParams {
    /// 0-indexed page number
    #[serde(default)]
    pub page: i64,
    /// Page size
    #[serde(default = "default_size")]
    pub size: i64,
    /// Case-sensitive name prefix
    pub name: Option<String>,
    /// Case-sensitive username prefix
    pub username: Option<String>,
}

fn default_size() -> i64 {
    20
}

// ── Tests ──────────────────────────────────────────────────────
