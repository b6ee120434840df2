//! In-memory store shared by the integration tests
//!
//! Implements every repository port over a single mutex-guarded state so
//! services and handlers can be exercised without PostgreSQL. Constraint
//! behaviour mirrors the schema: unique usernames/emails, foreign keys on
//! cities and post authors, and all-or-nothing registration.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use socialnet_api::api::AppState;
use socialnet_api::domain::post::{NewPost, PageRange, Post};
use socialnet_api::domain::profile::ProfileView;
use socialnet_api::domain::repositories::{
    PostRepository, ProfileRepository, RepositoryError, UserRepository,
};
use socialnet_api::domain::user::{NewUser, User, DEFAULT_CITY_ID};

#[derive(Debug, Clone)]
struct StoredProfile {
    name: String,
    city_id: i64,
}

#[derive(Debug, Clone)]
struct State {
    users: Vec<User>,
    salts: HashMap<i64, String>,
    profiles: HashMap<i64, StoredProfile>,
    cities: HashMap<i64, String>,
    posts: Vec<Post>,
    next_user_id: i64,
    next_post_id: i64,
}

impl Default for State {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            salts: HashMap::new(),
            profiles: HashMap::new(),
            cities: HashMap::from([(DEFAULT_CITY_ID, "Unknown".to_string())]),
            posts: Vec::new(),
            next_user_id: 1,
            next_post_id: 1,
        }
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    fail_profile_insert: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes the next registrations fail after the user and salt rows
    pub fn fail_profile_insert(&self, fail: bool) {
        self.fail_profile_insert.store(fail, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn salt_count(&self) -> usize {
        self.state.lock().unwrap().salts.len()
    }

    pub fn profile_count(&self) -> usize {
        self.state.lock().unwrap().profiles.len()
    }

    pub fn remove_salt(&self, user_id: i64) {
        self.state.lock().unwrap().salts.remove(&user_id);
    }

    pub fn stored_digest(&self, user_id: i64) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.password_hash.clone())
    }

    pub fn set_active(&self, user_id: i64, active: bool) {
        let mut state = self.state.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| u.id == user_id) {
            user.is_active = active;
        }
    }

    pub fn add_city(&self, id: i64, name: &str) {
        self.state
            .lock()
            .unwrap()
            .cities
            .insert(id, name.to_string());
    }

    pub fn set_profile_city(&self, user_id: i64, city_id: i64) {
        if let Some(profile) = self.state.lock().unwrap().profiles.get_mut(&user_id) {
            profile.city_id = city_id;
        }
    }

    pub fn app_state(self: &Arc<Self>) -> AppState {
        AppState::new(self.clone(), self.clone(), self.clone())
    }

    fn view(state: &State, user: &User) -> Option<ProfileView> {
        let profile = state.profiles.get(&user.id)?;
        Some(ProfileView {
            id: user.id,
            username: user.username.to_string(),
            name: profile.name.clone(),
            surname: None,
            photo_path: None,
            city: state.cities.get(&profile.city_id).cloned(),
            status: None,
            description: None,
        })
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, user: NewUser) -> Result<i64, RepositoryError> {
        let mut guard = self.state.lock().unwrap();
        // Work on a copy and only publish it when every row was written
        let mut tx = guard.clone();

        if tx.users.iter().any(|u| u.username == user.username) {
            return Err(RepositoryError::UniqueViolation {
                constraint: "users_username_key".to_string(),
            });
        }
        if tx.users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::UniqueViolation {
                constraint: "users_email_key".to_string(),
            });
        }

        let id = tx.next_user_id;
        tx.next_user_id += 1;
        tx.users.push(User {
            id,
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            is_active: true,
        });
        tx.salts.insert(id, user.salt);

        if self.fail_profile_insert.load(Ordering::SeqCst) {
            return Err(RepositoryError::Database(
                "simulated failure while creating profile".to_string(),
            ));
        }
        if !tx.cities.contains_key(&user.city_id) {
            return Err(RepositoryError::ForeignKeyViolation {
                constraint: "profiles_city_id_fkey".to_string(),
            });
        }
        tx.profiles.insert(
            id,
            StoredProfile {
                name: user.name.as_str().to_string(),
                city_id: user.city_id,
            },
        );

        *guard = tx;
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.username.as_str() == username)
            .cloned())
    }

    async fn find_salt(&self, user_id: i64) -> Result<Option<String>, RepositoryError> {
        Ok(self.state.lock().unwrap().salts.get(&user_id).cloned())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryStore {
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<ProfileView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .find(|u| u.username.as_str() == username)
            .and_then(|u| Self::view(&state, u)))
    }

    async fn list_all(&self) -> Result<Vec<ProfileView>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .users
            .iter()
            .filter_map(|u| Self::view(&state, u))
            .collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryStore {
    async fn create(&self, post: NewPost) -> Result<i64, RepositoryError> {
        let mut state = self.state.lock().unwrap();
        if !state.profiles.contains_key(&post.author_id()) {
            return Err(RepositoryError::ForeignKeyViolation {
                constraint: "posts_author_id_fkey".to_string(),
            });
        }

        let id = state.next_post_id;
        state.next_post_id += 1;
        state.posts.push(post.into_post(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state.posts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_author(
        &self,
        author_id: i64,
        range: PageRange,
    ) -> Result<Vec<Post>, RepositoryError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .posts
            .iter()
            .filter(|p| p.author_id == author_id)
            .skip(range.offset() as usize)
            .take(range.limit() as usize)
            .cloned()
            .collect())
    }
}

/// Store whose username lookups never see existing users
///
/// Reproduces two registrations racing past the existence check.
pub struct BlindLookupStore(pub Arc<InMemoryStore>);

#[async_trait]
impl UserRepository for BlindLookupStore {
    async fn create(&self, user: NewUser) -> Result<i64, RepositoryError> {
        UserRepository::create(self.0.as_ref(), user).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepositoryError> {
        UserRepository::find_by_id(self.0.as_ref(), id).await
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, RepositoryError> {
        Ok(None)
    }

    async fn find_salt(&self, user_id: i64) -> Result<Option<String>, RepositoryError> {
        self.0.find_salt(user_id).await
    }
}
