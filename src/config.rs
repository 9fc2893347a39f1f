//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use actix_web::cookie::Key;

/// Session key under which the authenticated principal is stored.
pub const SESSION_USER_KEY: &str = "user";

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_DATABASE_URL: &str = "sqlite://data/games.db?mode=rwc";
    pub const DEV_SESSION_SECRET: &str =
        "dev-session-secret-do-not-use-in-production-0123456789abcdef0123456789";
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8080;
    pub const DEV_POSTS_PATH: &str = "data/posts.json";
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL (SQLite connection string, `sqlite:` scheme)
    pub database_url: String,
    /// Secret used to derive the session cookie signing key
    pub session_secret: String,
    /// Path to the JSON file backing the blog
    pub posts_path: PathBuf,
    /// Directory for static assets (optional)
    pub static_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// In development mode (GSS_ENV=development, the default):
    /// - All variables have sensible defaults
    ///
    /// In production mode (GSS_ENV=production):
    /// - GSS_DATABASE_URL and GSS_SESSION_SECRET are required
    /// - Values must not match development defaults
    pub fn from_env() -> Result<Self, String> {
        let environment = match env::var("GSS_ENV") {
            Ok(val) => Environment::parse(&val)
                .ok_or_else(|| format!("Invalid GSS_ENV value: {val}"))?,
            Err(_) => Environment::Development,
        };

        let host = env::var("GSS_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());
        let port = match env::var("GSS_PORT") {
            Ok(val) => val
                .parse::<u16>()
                .map_err(|_| format!("Invalid GSS_PORT value: {val}"))?,
            Err(_) => defaults::DEV_PORT,
        };

        let database_url = match env::var("GSS_DATABASE_URL") {
            Ok(val) => val,
            Err(_) if environment.is_development() => defaults::DEV_DATABASE_URL.to_string(),
            Err(_) => return Err("GSS_DATABASE_URL must be set in production".to_string()),
        };

        if !database_url.starts_with("sqlite:") {
            return Err(format!(
                "Invalid GSS_DATABASE_URL format: {database_url}. Expected 'sqlite:' scheme"
            ));
        }

        let session_secret = match env::var("GSS_SESSION_SECRET") {
            Ok(val) => val,
            Err(_) if environment.is_development() => defaults::DEV_SESSION_SECRET.to_string(),
            Err(_) => return Err("GSS_SESSION_SECRET must be set in production".to_string()),
        };

        if session_secret.len() < 32 {
            return Err("GSS_SESSION_SECRET must be at least 32 bytes".to_string());
        }

        let posts_path = env::var("GSS_POSTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(defaults::DEV_POSTS_PATH));

        let static_dir = env::var("GSS_STATIC_DIR").ok().map(PathBuf::from);

        let config = Config {
            environment,
            host,
            port,
            database_url,
            session_secret,
            posts_path,
            static_dir,
        };

        config.validate()?;
        Ok(config)
    }

    /// Reject development defaults when running in production.
    fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() {
            if self.database_url == defaults::DEV_DATABASE_URL {
                return Err(
                    "GSS_DATABASE_URL matches the development default in production".to_string(),
                );
            }
            if self.session_secret == defaults::DEV_SESSION_SECRET {
                return Err(
                    "GSS_SESSION_SECRET matches the development default in production".to_string(),
                );
            }
        }
        Ok(())
    }

    /// Address the HTTP server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Derive the session cookie signing key from the configured secret.
    pub fn session_key(&self) -> Key {
        Key::derive_from(self.session_secret.as_bytes())
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}
