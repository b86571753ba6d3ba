// Google authorization infra.
// - `google_oauth_client.rs` talks to Google's OAuth2 endpoints.
// - `token_file.rs` persists the current token to disk.

pub mod google_oauth_client;
pub mod token_file;

pub use google_oauth_client::GoogleOAuthClient;
pub use token_file::JsonTokenFile;
