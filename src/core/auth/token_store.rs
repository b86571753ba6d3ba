use super::auth_models::Token;
use tokio::sync::RwLock;

/// Holds the single current token for the process.
///
/// Reads and writes are not coordinated beyond the lock itself: two
/// authorization callbacks racing each other end with the last writer's token.
#[derive(Default)]
pub struct TokenStore {
    current: RwLock<Option<Token>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: Token) -> Self {
        Self {
            current: RwLock::new(Some(token)),
        }
    }

    /// Replaces the current token.
    pub async fn set(&self, token: Token) {
        *self.current.write().await = Some(token);
    }

    /// Returns the current access token, if any.
    pub async fn get(&self) -> Option<String> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }

    pub async fn current(&self) -> Option<Token> {
        self.current.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(access: &str) -> Token {
        Token {
            access_token: access.to_string(),
            refresh_token: None,
            expires_in: 3600,
            token_type: "Bearer".to_string(),
            scope: None,
        }
    }

    #[tokio::test]
    async fn empty_store_has_no_access_token() {
        let store = TokenStore::new();
        assert_eq!(store.get().await, None);
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn set_replaces_previous_token() {
        let store = TokenStore::with_token(token("first"));
        store.set(token("second")).await;

        assert_eq!(store.get().await.as_deref(), Some("second"));
    }
}
