use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::core::auth::{AuthError, Token, TokenPersistence};

/// Simple JSON file store for the current OAuth token.
///
/// Writes are not guarded against other processes sharing the same path.
pub struct JsonTokenFile {
    path: PathBuf,
}

impl JsonTokenFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl TokenPersistence for JsonTokenFile {
    async fn load(&self) -> Result<Option<Token>, AuthError> {
        let text = match fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AuthError::Store(format!(
                    "reading {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        let token: Token =
            serde_json::from_str(&text).map_err(|e| AuthError::Store(e.to_string()))?;
        Ok(Some(token))
    }

    async fn save(&self, token: &Token) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AuthError::Store(e.to_string()))?;
        }

        let text =
            serde_json::to_string_pretty(token).map_err(|e| AuthError::Store(e.to_string()))?;
        fs::write(&self.path, text)
            .await
            .map_err(|e| AuthError::Store(e.to_string()))
    }
}
