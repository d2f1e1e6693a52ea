use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use tuition_db::models::account::AccountModel;
use tuition_db::models::common_enums::UserRole;

use crate::state::AppState;

pub const TOKEN_TTL_HOURS: i64 = 24;

pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// What a bearer token encodes. Self-service routes key on `id`, role
/// checks on `role`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub id: i64,
    pub username: String,
    pub role: UserRole,
    pub exp: usize,
}

impl Claims {
    pub fn for_account(account: &AccountModel) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            role: account.role,
            exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
        }
    }
}

pub fn issue_token(keys: &JwtKeys, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
    encode(&Header::default(), claims, &keys.encoding)
}

/// Bearer extraction: a missing or unparseable header is 401, a token
/// that fails verification (or has expired) is 403.
#[async_trait]
impl FromRequestParts<Arc<AppState>> for Claims {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(StatusCode::UNAUTHORIZED)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or(StatusCode::UNAUTHORIZED)?;

        let data = decode::<Claims>(token, &state.jwt.decoding, &Validation::default())
            .map_err(|_| StatusCode::FORBIDDEN)?;

        Ok(data.claims)
    }
}

/// Claims plus the admin role check; every `/api/admin` route takes this.
pub struct AdminClaims(pub Claims);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for AdminClaims {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let claims = Claims::from_request_parts(parts, state).await?;
        if claims.role != UserRole::Admin {
            return Err(StatusCode::FORBIDDEN);
        }
        Ok(AdminClaims(claims))
    }
}
