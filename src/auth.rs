use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use cookie::Cookie;
use jsonwebtoken::{DecodingKey, Validation, decode, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{AppConfig, Env};

/// Header accepted as a session in `Env::Local` only.
pub const DEV_USER_HEADER: &str = "x-user-id";

/// Claims
///
/// Payload expected inside a session token. Tokens are issued elsewhere;
/// this crate only validates them.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the signed-in user's id.
    pub sub: Uuid,
    /// Expiration Time (exp): the token is rejected from this instant on.
    pub exp: usize,
    /// Issued At (iat).
    pub iat: usize,
}

/// Session
///
/// The authentication status of one request, read fresh every time.
/// `user_id` is set only when a valid credential was presented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub user_id: Option<Uuid>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// Reads the session from request headers.
    ///
    /// Sources, first hit wins:
    /// 1. `x-user-id: <uuid>` in `Env::Local` (development bypass).
    /// 2. `Authorization: Bearer <jwt>`.
    /// 3. The session cookie named by `config.session_cookie`.
    ///
    /// Any missing, malformed, expired or wrongly signed credential yields an
    /// anonymous session rather than an error.
    pub fn from_parts(parts: &Parts, config: &AppConfig) -> Self {
        if config.env == Env::Local {
            if let Some(user_id) = dev_user_id(parts) {
                return Self {
                    user_id: Some(user_id),
                };
            }
        }

        let token = bearer_token(parts).or_else(|| cookie_token(parts, &config.session_cookie));

        Self {
            user_id: token.and_then(|token| validate_token(&token, &config.jwt_secret)),
        }
    }
}

/// Session Extractor Implementation
///
/// Never rejects: an unauthenticated request is a normal input to route
/// resolution, not a failure.
impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);
        Ok(Session::from_parts(parts, &config))
    }
}

fn dev_user_id(parts: &Parts) -> Option<Uuid> {
    parts
        .headers
        .get(DEV_USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|id| Uuid::parse_str(id).ok())
}

fn bearer_token(parts: &Parts) -> Option<String> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::to_owned)
}

fn cookie_token(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == name)
        .map(|cookie| cookie.value().to_owned())
}

/// Decodes an HS256 session token and returns its subject if it is valid
/// and unexpired.
pub fn validate_token(token: &str, secret: &str) -> Option<Uuid> {
    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::default();
    validation.validate_exp = true;

    match decode::<Claims>(token, &decoding_key, &validation) {
        Ok(data) => Some(data.claims.sub),
        Err(e) => {
            match e.kind() {
                ErrorKind::ExpiredSignature => tracing::debug!("session token expired"),
                kind => tracing::debug!(?kind, "session token rejected"),
            }
            None
        }
    }
}
