//! Credential HTTP handlers.
//!
//! ```text
//! POST /v1/auth     {"email":"…","password":"…"}
//! POST /v1/register {"email":"…","password":"…","repassword":"…"}
//! ```
//!
//! Both answer `{"auth_token":"…","refresh_token":""}` on success.

use actix_web::{post, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use zeroize::Zeroizing;

use crate::domain::ports::{LoginRequest, RegistrationRequest};
use crate::domain::{Error, ErrorCode, SessionClaims};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Login body.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

/// Registration body.
#[derive(Default, Deserialize)]
#[serde(default)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub repassword: String,
}

/// Token pair returned after login or registration.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub auth_token: String,
    /// Refresh tokens are not issued; always empty.
    pub refresh_token: String,
}

fn sign_claims(state: &HttpState, claims: &SessionClaims) -> ApiResult<web::Json<TokenResponse>> {
    let token = state.tokens.sign(claims).map_err(|err| {
        error!(kind = err.kind(), error = %err, "session token signing failed");
        Error::internal("session token signing failed")
    })?;
    Ok(web::Json(TokenResponse {
        auth_token: token.into_inner(),
        refresh_token: String::new(),
    }))
}

/// Unknown email and wrong password look the same to the client.
fn hide_login_failure(error: Error) -> Error {
    match error.code() {
        ErrorCode::NotFound | ErrorCode::Unauthorized => Error::unauthorized("invalid credentials"),
        _ => error,
    }
}

#[post("/auth")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<AuthRequest>,
) -> ApiResult<web::Json<TokenResponse>> {
    let AuthRequest { email, password } = payload.into_inner();
    let request = LoginRequest {
        email,
        password: Zeroizing::new(password),
    };
    let claims = state
        .login
        .authenticate(&request)
        .await
        .map_err(hide_login_failure)?;
    sign_claims(&state, &claims)
}

#[post("/register")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<web::Json<TokenResponse>> {
    let RegisterRequest {
        email,
        password,
        repassword,
    } = payload.into_inner();
    let request = RegistrationRequest {
        email,
        password: Zeroizing::new(password),
        repassword: Zeroizing::new(repassword),
    };
    let claims = state.registration.register(&request).await?;
    sign_claims(&state, &claims)
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
