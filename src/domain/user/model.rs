use serde::{Deserialize, Serialize};

/// Identifier assigned by the repository. `0` marks a record that has not
/// been persisted yet; it is never a valid stored id.
pub type UserId = i64;

/// User model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: String,
    pub email: String,
    /// Display-time decoration. The stored column is a placeholder; the
    /// value callers see is always written by the enrichment step.
    pub quote: Option<String>,
}

impl User {
    /// New, not-yet-persisted user.
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            username: username.into(),
            email: email.into(),
            quote: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

/// Case-sensitive prefix filter applied to repository scans.
///
/// An absent field matches everything; both present fields must match.
#[derive(Clone, Debug, Default)]
pub struct UserFilter {
    pub name: Option<String>,
    pub username: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .map_or(true, |prefix| user.name.starts_with(prefix));
        let username_ok = self
            .username
            .as_deref()
            .map_or(true, |prefix| user.username.starts_with(prefix));
        name_ok && username_ok
    }
}

// ── Tests ──────────────────────────────────────────────────────
