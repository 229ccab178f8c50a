use std::env;

use thiserror::Error;

/// Fallback session secret for local development only.
const LOCAL_JWT_SECRET: &str = "super-secure-test-secret-value-local";

/// AppConfig
///
/// Holds the application's configuration. Immutable once loaded and pulled
/// into handlers and extractors through `FromRef`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls the log format and the local session bypass.
    pub env: Env,
    // HS256 secret used to validate session tokens.
    pub jwt_secret: String,
    // Socket address the HTTP server binds to.
    pub bind_address: String,
    // Name of the cookie carrying the session token on full page loads.
    pub session_cookie: String,
    // Document title of the HTML shell.
    pub app_title: String,
    // Directory holding the built browser bundle, served under `/assets`.
    pub assets_dir: String,
}

/// Env
///
/// Runtime context. `Local` enables development conveniences (pretty logs,
/// the `x-user-id` session bypass); `Production` disables them.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

/// ConfigError
///
/// Startup failures while reading the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set in production")]
    MissingVar(&'static str),
}

impl Default for AppConfig {
    /// Safe values for test setup; no environment variables are read.
    fn default() -> Self {
        Self {
            env: Env::Local,
            jwt_secret: LOCAL_JWT_SECRET.to_string(),
            bind_address: "0.0.0.0:3000".to_string(),
            session_cookie: "session".to_string(),
            app_title: "Food Donation Portal".to_string(),
            assets_dir: "dist/assets".to_string(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables, falling back to
    /// the defaults for everything optional.
    ///
    /// # Errors
    /// Fails fast with `ConfigError::MissingVar` when `SESSION_JWT_SECRET`
    /// is absent in production.
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let jwt_secret = match (env::var("SESSION_JWT_SECRET"), &env) {
            (Ok(secret), _) => secret,
            (Err(_), Env::Production) => {
                return Err(ConfigError::MissingVar("SESSION_JWT_SECRET"));
            }
            (Err(_), Env::Local) => defaults.jwt_secret,
        };

        Ok(Self {
            env,
            jwt_secret,
            bind_address: env::var("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            session_cookie: env::var("SESSION_COOKIE").unwrap_or(defaults.session_cookie),
            app_title: env::var("APP_TITLE").unwrap_or(defaults.app_title),
            assets_dir: env::var("ASSETS_DIR").unwrap_or(defaults.assets_dir),
        })
    }
}
