//! Server configuration read once at startup from environment variables.
//!
//! | variable                | default           |
//! |-------------------------|-------------------|
//! | `FEEDBACK_HOST`         | `127.0.0.1`       |
//! | `FEEDBACK_PORT`         | `5000`            |
//! | `FEEDBACK_DB`           | `feedback.sqlite` |
//! | `FEEDBACK_OPEN_BROWSER` | off               |

use log::warn;
use std::path::PathBuf;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_DB: &str = "feedback.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub open_browser: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("FEEDBACK_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid FEEDBACK_PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: lookup("FEEDBACK_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_path: lookup("FEEDBACK_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB)),
            open_browser: lookup("FEEDBACK_OPEN_BROWSER")
                .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
