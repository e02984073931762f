use super::User;

/// Input for creating a user. Identifier and quote are repository/service
/// concerns and are never accepted from callers.
#[derive(Debug, Clone)]
pub struct CreateUserDto {
    pub name: String,
    pub username: String,
    pub email: String,
}

impl CreateUserDto {
    pub fn into_entity(self) -> User {
        User::new(self.name, self.username, self.email)
    }
}
