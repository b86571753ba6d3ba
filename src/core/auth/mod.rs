pub mod auth_models;
pub mod auth_service;
pub mod token_store;

pub use auth_models::Token;
pub use auth_service::{AuthError, AuthService, OAuthProvider, TokenPersistence};
