// Application services
// Orchestrate domain rules over the repository ports

pub mod account_service;
pub mod errors;
pub mod post_service;

pub use account_service::AccountService;
pub use errors::{CredentialFailure, ServiceError, ServiceResult};
pub use post_service::PostService;
