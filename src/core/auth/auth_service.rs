// Authorization lifecycle - core logic for the three-legged OAuth2 flow.
//
// This service handles:
// - Building the consent URL
// - Completing the code exchange and remembering the token
// - Refreshing, merging and re-persisting the token
//
// NO HTTP types here. Talking to the authorization server is the job of an
// `OAuthProvider`; writing the token somewhere durable is the job of a
// `TokenPersistence`. Both live in the infra layer.

use super::auth_models::Token;
use super::token_store::TokenStore;
use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to exchange code for token: {0}")]
    Exchange(String),

    #[error("Failed to refresh token: {0}")]
    Refresh(String),

    #[error("Not authenticated. Please authenticate first.")]
    NotAuthenticated,

    #[error("No refresh token is held; run the authorization flow again")]
    NoRefreshToken,

    #[error("Token storage error: {0}")]
    Store(String),
}

// ============================================================================
// PORTS
// ============================================================================

/// The authorization server as seen by the core.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Consent page URL. Pure construction, never fails.
    fn authorization_url(&self) -> String;

    /// Trades a one-time authorization code for a token.
    async fn exchange_code(&self, code: &str) -> Result<Token, AuthError>;

    /// Mints a new access token. The returned token may lack a refresh token.
    async fn refresh(&self, refresh_token: &str) -> Result<Token, AuthError>;
}

#[async_trait]
impl OAuthProvider for Box<dyn OAuthProvider> {
    fn authorization_url(&self) -> String {
        (**self).authorization_url()
    }

    async fn exchange_code(&self, code: &str) -> Result<Token, AuthError> {
        (**self).exchange_code(code).await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<Token, AuthError> {
        (**self).refresh(refresh_token).await
    }
}

/// Durable storage for the current token.
#[async_trait]
pub trait TokenPersistence: Send + Sync {
    /// Returns `None` when nothing has been persisted yet.
    async fn load(&self) -> Result<Option<Token>, AuthError>;
    async fn save(&self, token: &Token) -> Result<(), AuthError>;
}

#[async_trait]
impl TokenPersistence for Box<dyn TokenPersistence> {
    async fn load(&self) -> Result<Option<Token>, AuthError> {
        (**self).load().await
    }

    async fn save(&self, token: &Token) -> Result<(), AuthError> {
        (**self).save(token).await
    }
}

// ============================================================================
// SERVICE
// ============================================================================

pub struct AuthService<P: OAuthProvider, S: TokenPersistence> {
    provider: P,
    persistence: S,
    tokens: TokenStore,
}

impl<P, S> AuthService<P, S>
where
    P: OAuthProvider,
    S: TokenPersistence,
{
    /// Creates the service and loads any previously persisted token.
    ///
    /// An unreadable token file is logged and treated as "not authenticated"
    /// so the operator can simply run the authorization flow again.
    pub async fn new(provider: P, persistence: S) -> Self {
        let tokens = match persistence.load().await {
            Ok(Some(token)) => {
                tracing::info!("Loaded existing token data");
                TokenStore::with_token(token)
            }
            Ok(None) => {
                tracing::info!("No existing token data found. Please authenticate first.");
                TokenStore::new()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable token data: {}", e);
                TokenStore::new()
            }
        };

        Self {
            provider,
            persistence,
            tokens,
        }
    }

    pub fn authorization_url(&self) -> String {
        self.provider.authorization_url()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.tokens.get().await
    }

    pub async fn is_authenticated(&self) -> bool {
        self.access_token().await.is_some()
    }

    /// Finishes the consent flow: exchange, persist, remember.
    ///
    /// The token only becomes current once it is on disk, so a failed save
    /// leaves the service in its previous state.
    pub async fn complete_authorization(&self, code: &str) -> Result<Token, AuthError> {
        let token = self.provider.exchange_code(code).await?;
        self.persistence.save(&token).await?;
        self.tokens.set(token.clone()).await;

        tracing::info!("Authorization completed, token saved");
        Ok(token)
    }

    /// Refreshes using the refresh token remembered from a previous exchange.
    pub async fn refresh(&self) -> Result<Token, AuthError> {
        let current = self
            .tokens
            .current()
            .await
            .ok_or(AuthError::NotAuthenticated)?;
        let refresh_token = current.refresh_token.ok_or(AuthError::NoRefreshToken)?;

        self.refresh_with(&refresh_token).await
    }

    /// Refreshes with an explicit refresh token and merges the result over
    /// whatever token is currently held.
    pub async fn refresh_with(&self, refresh_token: &str) -> Result<Token, AuthError> {
        let refreshed = self.provider.refresh(refresh_token).await?;

        let mut merged = match self.tokens.current().await {
            Some(prior) => prior.merge_refreshed(refreshed),
            None => refreshed,
        };
        if merged.refresh_token.is_none() {
            merged.refresh_token = Some(refresh_token.to_string());
        }

        self.persistence.save(&merged).await?;
        self.tokens.set(merged.clone()).await;

        tracing::info!("Access token refreshed");
        Ok(merged)
    }
}
