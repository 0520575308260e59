// crates/server/src/auth.rs
//! Bearer-token authentication and capability gates.
//!
//! [`authenticate`] runs on every request and attaches [`Claims`] when the
//! `Authorization: Bearer <jwt>` header carries a valid token. Handlers that
//! mutate data take an [`Authorized<C>`] extractor, which rejects with 401
//! before the body is read unless the capability `C` permits the caller.

use std::marker::PhantomData;
use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// JWT claims carried by a jobly token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    /// Expiration (Unix timestamp).
    pub exp: usize,
}

/// Signing secret and token lifetime.
#[derive(Clone)]
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl AuthKeys {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Sign a token for `username`.
    pub fn create_token(&self, username: &str, is_admin: bool) -> Result<String, ApiError> {
        let claims = Claims {
            username: username.to_string(),
            is_admin,
            exp: (Utc::now() + self.ttl).timestamp().max(0) as usize,
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| ApiError::Internal(format!("JWT encoding error: {e}")))
    }

    /// Decode and verify a token. `None` for anything malformed, forged or expired.
    pub fn verify(&self, token: &str) -> Option<Claims> {
        match decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256)) {
            Ok(data) => Some(data.claims),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                None
            }
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
}

/// Middleware: attach [`Claims`] for a valid bearer token.
///
/// Missing or invalid tokens leave the request anonymous; gates decide later.
pub async fn authenticate(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(claims) = bearer_token(request.headers()).and_then(|t| state.auth.verify(t)) {
        request.extensions_mut().insert(claims);
    }
    next.run(request).await
}

/// A permission check over the caller's claims.
pub trait Capability {
    fn permits(claims: &Claims) -> bool;
}

/// Caller holds an admin token.
pub struct Admin;

impl Capability for Admin {
    fn permits(claims: &Claims) -> bool {
        claims.is_admin
    }
}

/// Extractor that succeeds only when capability `C` permits the caller.
pub struct Authorized<C> {
    pub claims: Claims,
    _capability: PhantomData<fn() -> C>,
}

impl<S, C> FromRequestParts<S> for Authorized<C>
where
    S: Send + Sync,
    C: Capability,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<Claims>() {
            Some(claims) if C::permits(claims) => Ok(Self {
                claims: claims.clone(),
                _capability: PhantomData,
            }),
            _ => Err(ApiError::Unauthorized),
        }
    }
}
