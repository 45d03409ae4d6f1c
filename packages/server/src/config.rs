//! Environment configuration for the service binary.

use crate::content::Post;
use crate::error::{Result, ServerError};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Anti-forgery token the host platform issued for this deployment.
    pub token: String,
    /// Content served by the built-in in-memory source. Real deployments
    /// plug in their own `ContentSource` instead.
    pub posts: Vec<Post>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            std::env::var("READMORE_BIND").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

        let token = std::env::var("READMORE_TOKEN")
            .map_err(|_| ServerError::Config("READMORE_TOKEN not set".into()))?;
        if token.trim().is_empty() {
            return Err(ServerError::Config("READMORE_TOKEN is empty".into()));
        }

        let posts = match std::env::var("READMORE_CONTENT") {
            Ok(json) => serde_json::from_str(&json)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            bind_addr,
            token,
            posts,
        })
    }
}
