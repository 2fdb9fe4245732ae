//! Wire DTOs for the remote user-management API.
//!
//! DESIGN
//! ======
//! The API speaks camelCase JSON. `User` mirrors the server record exactly so
//! the cached copy in `localStorage` round-trips losslessly, while `UserPatch`
//! is the partial form used for shallow merges into the signed-in user.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Authorization role assigned by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    /// Wire representation (`"admin"` / `"user"`), also used as a query value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Parse the wire representation. Unknown values yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "admin" => Some(Self::Admin),
            "user" => Some(Self::User),
            _ => None,
        }
    }
}

/// A user record as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Opaque server identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Creation timestamp (RFC 3339), if the server sent one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Last successful login (RFC 3339). The server sends `null` for users
    /// who never logged in.
    #[serde(default)]
    pub last_login_at: Option<String>,
}

impl User {
    /// First whitespace-separated token of the display name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Shallow merge: every field present in `patch` replaces the current one.
    pub fn apply(&mut self, patch: UserPatch) {
        let UserPatch { id, name, email, role, created_at, updated_at, last_login_at } = patch;
        if let Some(id) = id {
            self.id = id;
        }
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(created_at) = created_at {
            self.created_at = Some(created_at);
        }
        if let Some(updated_at) = updated_at {
            self.updated_at = Some(updated_at);
        }
        if let Some(last_login_at) = last_login_at {
            self.last_login_at = last_login_at;
        }
    }
}

/// Partial user used for context updates.
///
/// `last_login_at` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`), since the server may clear it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub last_login_at: Option<Option<String>>,
}

impl UserPatch {
    /// Patch that only renames the user.
    #[must_use]
    pub fn renamed(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// `POST /auth/register` body.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// `PATCH /users/profile` body. Password fields are sent only together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
}

/// Column the admin listing is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    Name,
    #[default]
    CreatedAt,
}

impl SortField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CreatedAt => "createdAt",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "name" => Some(Self::Name),
            "createdAt" => Some(Self::CreatedAt),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// Filter and sort options for `GET /users`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub role: Option<Role>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
}

impl UserListQuery {
    /// Query-string pairs; unset options are omitted.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, &'static str)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(role) = self.role {
            pairs.push(("role", role.as_str()));
        }
        if let Some(sort_by) = self.sort_by {
            pairs.push(("sortBy", sort_by.as_str()));
        }
        if let Some(order) = self.order {
            pairs.push(("order", order.as_str()));
        }
        pairs
    }
}
