// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod post;
pub mod profile;
pub mod repositories;
pub mod user;
