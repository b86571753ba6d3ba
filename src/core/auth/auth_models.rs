use serde::{Deserialize, Serialize};

/// OAuth2 token material as returned by the token endpoint.
///
/// The same shape is written to the token file, so a response body can be
/// persisted and reloaded without translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,

    /// Long-lived credential. Authorization servers usually send it only on
    /// the first exchange, so refreshes must not drop it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Lifetime in seconds at the moment the token was issued.
    #[serde(default)]
    pub expires_in: u64,

    #[serde(default = "default_token_type")]
    pub token_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

impl Token {
    /// Lays a refresh response over this token.
    ///
    /// Fields present in `refreshed` win; a missing refresh token or scope
    /// keeps the value already known.
    pub fn merge_refreshed(self, refreshed: Token) -> Token {
        Token {
            access_token: refreshed.access_token,
            refresh_token: refreshed.refresh_token.or(self.refresh_token),
            expires_in: refreshed.expires_in,
            token_type: refreshed.token_type,
            scope: refreshed.scope.or(self.scope),
        }
    }
}
