use serde::Serialize;

/// Denormalized profile as shown to clients
///
/// Joins a user with its profile and the profile's city. `city` is `None`
/// when the profile points at a city that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct ProfileView {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub surname: Option<String>,
    pub photo_path: Option<String>,
    pub city: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}
