// User domain module
// Registered accounts and their validated fields

pub mod value_objects;

use chrono::{DateTime, Utc};

pub use value_objects::{DisplayName, Email, Username};

/// City assigned to a profile when none is given
pub const DEFAULT_CITY_ID: i64 = 1;

/// Persisted user account
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
    pub is_active: bool,
}

/// Everything written by a registration
///
/// Repositories persist the user row, its salt and its profile together.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: Username,
    pub email: Email,
    pub password_hash: String,
    pub salt: String,
    pub name: DisplayName,
    pub city_id: i64,
    pub created_at: DateTime<Utc>,
}
