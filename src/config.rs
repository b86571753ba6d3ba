// Runtime configuration, read from the environment (a `.env` file is loaded
// by `main` before this runs).
//
// **Environment Variables:**
// - `GOOGLE_CLIENT_ID` / `GOOGLE_CLIENT_SECRET` - OAuth client credentials (required)
// - `PORT` - listen port (default 8000)
// - `GOOGLE_REDIRECT_URI` - callback URL registered with Google
//   (default `http://localhost:{PORT}/auth/callback`)
// - `TOKEN_FILE` - where the current token is persisted (default `tokens.json`)

use anyhow::{bail, Context};
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TOKEN_FILE: &str = "tokens.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub token_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        let (client_id, client_secret) = match (get("GOOGLE_CLIENT_ID"), get("GOOGLE_CLIENT_SECRET")) {
            (Some(id), Some(secret)) => (id, secret),
            _ => bail!(
                "Missing required environment variables: GOOGLE_CLIENT_ID and GOOGLE_CLIENT_SECRET. \
                 Create a .env file with your OAuth client credentials."
            ),
        };

        let redirect_uri = get("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|| format!("http://localhost:{}/auth/callback", port));
        let token_path = get("TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TOKEN_FILE));

        Ok(Self {
            port,
            client_id,
            client_secret,
            redirect_uri,
            token_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_follow_port() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GOOGLE_CLIENT_ID", "id"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
            ("PORT", "9090"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9090);
        assert_eq!(config.redirect_uri, "http://localhost:9090/auth/callback");
        assert_eq!(config.token_path, PathBuf::from("tokens.json"));
    }

    #[test]
    fn explicit_values_win() {
        let config = AppConfig::from_lookup(lookup(&[
            ("GOOGLE_CLIENT_ID", "id"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
            ("GOOGLE_REDIRECT_URI", "https://slides.example/auth/callback"),
            ("TOKEN_FILE", "/var/lib/slides/tokens.json"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.redirect_uri, "https://slides.example/auth/callback");
        assert_eq!(
            config.token_path,
            PathBuf::from("/var/lib/slides/tokens.json")
        );
    }

    #[test]
    fn missing_credentials_fail() {
        let err = AppConfig::from_lookup(lookup(&[("GOOGLE_CLIENT_ID", "id")])).unwrap_err();
        assert!(err.to_string().contains("GOOGLE_CLIENT_SECRET"));
    }

    #[test]
    fn bad_port_fails() {
        let result = AppConfig::from_lookup(lookup(&[
            ("GOOGLE_CLIENT_ID", "id"),
            ("GOOGLE_CLIENT_SECRET", "secret"),
            ("PORT", "eighty"),
        ]));
        assert!(result.is_err());
    }
}
