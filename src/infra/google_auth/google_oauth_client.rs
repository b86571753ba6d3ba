// =============================================================================
// GOOGLE OAUTH2 CLIENT (AUTHORIZATION CODE FLOW)
// =============================================================================
//
// Talks to Google's OAuth2 endpoints on behalf of a single operator:
//
// 1. `authorization_url()` sends the operator to the consent page with
//    offline access and a forced consent prompt, so Google hands out a
//    refresh token on every completed flow.
// 2. `exchange_code()` trades the one-time code from the callback for tokens.
// 3. `refresh()` mints a new access token from the refresh token.
//
// **Setup:**
// - Create an OAuth client of type "Web application" in Google Cloud Console
// - Enable the Google Slides API for the project
// - Add the redirect URI (default `http://localhost:8000/auth/callback`)
// - Put the credentials in `.env` as `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET`

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::core::auth::{AuthError, OAuthProvider, Token};

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

/// Scopes requested on the consent page: edit presentations, and manage
/// files this app created.
pub const SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/presentations",
    "https://www.googleapis.com/auth/drive.file",
];

pub struct GoogleOAuthClient {
    client: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    token_endpoint: String,
}

impl GoogleOAuthClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
        }
    }

    /// Override the token endpoint (for testing with wiremock).
    pub fn with_token_endpoint(mut self, url: &str) -> Self {
        self.token_endpoint = url.to_string();
        self
    }

    /// POSTs a form to the token endpoint. Non-success statuses come back as
    /// `Err` with the status and the body the server sent.
    async fn request_token(&self, params: &[(&str, &str)]) -> Result<Token, String> {
        let response = self
            .client
            .post(&self.token_endpoint)
            .form(params)
            .send()
            .await
            .map_err(|e| format!("token request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Token endpoint returned {}: {}", status, body);
            return Err(format!("({}) {}", status, body));
        }

        response
            .json::<Token>()
            .await
            .map_err(|e| format!("invalid token response: {}", e))
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn authorization_url(&self) -> String {
        let scope = SCOPES.join(" ");
        let params = [
            ("client_id", self.client_id.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("response_type", "code"),
            ("scope", scope.as_str()),
            ("access_type", "offline"),
            ("prompt", "consent"),
        ];

        match Url::parse_with_params(AUTH_ENDPOINT, &params) {
            Ok(url) => url.into(),
            Err(e) => {
                tracing::error!("Failed to build authorization URL: {}", e);
                AUTH_ENDPOINT.to_string()
            }
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<Token, AuthError> {
        tracing::info!("Exchanging authorization code for tokens");

        self.request_token(&[
            ("code", code),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("redirect_uri", self.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ])
        .await
        .map_err(AuthError::Exchange)
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Token, AuthError> {
        tracing::info!("Refreshing access token");

        self.request_token(&[
            ("refresh_token", refresh_token),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .await
        .map_err(AuthError::Refresh)
    }
}
