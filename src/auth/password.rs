// Password salting and hashing utilities
// Digest is SHA-256 over password || salt, hex encoded

use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Shortest salt `generate_salt` will produce
pub const MIN_SALT_LEN: usize = 8;

/// Longest salt `generate_salt` will produce
pub const MAX_SALT_LEN: usize = 19;

/// Generates a random alphanumeric salt
///
/// The length is drawn uniformly from `MIN_SALT_LEN..=MAX_SALT_LEN` and every
/// character comes from the 62-character `[A-Za-z0-9]` alphabet. Both draws
/// use the operating system CSPRNG.
///
/// # Example
/// ```
/// use socialnet_api::auth::password::{generate_salt, MAX_SALT_LEN, MIN_SALT_LEN};
///
/// let salt = generate_salt();
/// assert!(salt.len() >= MIN_SALT_LEN && salt.len() <= MAX_SALT_LEN);
/// ```
pub fn generate_salt() -> String {
    let len = OsRng.gen_range(MIN_SALT_LEN..=MAX_SALT_LEN);
    OsRng
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Hashes a password together with its salt
///
/// # Arguments
/// * `password` - The plaintext password
/// * `salt` - The per-user salt appended to the password
///
/// # Returns
/// Lowercase hex SHA-256 digest (64 characters)
///
/// # Example
/// ```
/// use socialnet_api::auth::password::hash_password;
///
/// let digest = hash_password("my_password", "NaCl1234");
/// assert_eq!(digest.len(), 64);
/// assert_eq!(digest, hash_password("my_password", "NaCl1234"));
/// ```
pub fn hash_password(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verifies a password against a stored digest
///
/// Recomputes the digest from `password` and `salt` and compares it to
/// `expected_digest` in constant time.
pub fn verify_password(password: &str, salt: &str, expected_digest: &str) -> bool {
    let digest = hash_password(password, salt);
    digest.as_bytes().ct_eq(expected_digest.as_bytes()).into()
}
