//! Request authorization.
//!
//! The policy is a fixed allow-list of public paths. Everything else needs
//! HTTP Basic credentials matching the single configured user, and any
//! failure is an outright 403: there is no login challenge.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};

use crate::config::Config;
use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;

/// Outcome of checking a path against the allow-list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Permit,
    RequireAuth,
}

/// Username and password presented with a request
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a Authorization<Basic>> for Credentials<'a> {
    fn from(header: &'a Authorization<Basic>) -> Self {
        Credentials {
            username: header.username(),
            password: header.password(),
        }
    }
}

/// Immutable authorization policy, built once at startup
pub struct SecurityPolicy {
    public_paths: &'static [&'static str],
    username: String,
    password: String,
}

impl SecurityPolicy {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            public_paths: &routes::PUBLIC_PATHS,
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.auth_username.clone(), config.auth_password.clone())
    }

    /// Exact, case-sensitive match against the allow-list.
    pub fn decide(&self, path: &str) -> Decision {
        if self.public_paths.contains(&path) {
            Decision::Permit
        } else {
            Decision::RequireAuth
        }
    }

    pub fn authenticate(&self, credentials: Option<Credentials<'_>>) -> Result<(), ApiError> {
        match credentials {
            Some(c)
                if constant_time_eq(c.username.as_bytes(), self.username.as_bytes())
                    & constant_time_eq(c.password.as_bytes(), self.password.as_bytes()) =>
            {
                Ok(())
            }
            _ => Err(ApiError::AuthorizationDenied),
        }
    }

    /// Full per-request check: public paths pass, the rest must authenticate.
    pub fn authorize(&self, path: &str, credentials: Option<Credentials<'_>>) -> Result<(), ApiError> {
        match self.decide(path) {
            Decision::Permit => Ok(()),
            Decision::RequireAuth => self.authenticate(credentials),
        }
    }
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Middleware that runs the security policy before routing.
///
/// A malformed `Authorization` header is treated the same as a missing one.
pub async fn authorize(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request.headers().typed_get::<Authorization<Basic>>();
    let credentials = header.as_ref().map(Credentials::from);

    if let Err(err) = state.policy.authorize(request.uri().path(), credentials) {
        tracing::debug!(path = %request.uri().path(), "Request denied");
        return Err(err);
    }

    Ok(next.run(request).await)
}
