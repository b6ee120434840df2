// Credential handling
// Salt generation, password digests and verification

pub mod password;
