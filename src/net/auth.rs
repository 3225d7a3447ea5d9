//! Auth gateway: login, signup, logout, and current-user calls.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): these endpoints are only meaningful in the browser,
//! so the HTTP shells are compiled out entirely.
//!
//! DESIGN
//! ======
//! Each HTTP shell is a thin wrapper that obtains `(status, body)` and
//! hands them to a pure `*_outcome` helper. The helpers implement the
//! whole failure taxonomy and are unit-tested natively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::error::{AuthError, extract_detail};
use crate::net::types::{LoginRequest, LoginResponse, SignupRequest, SignupResponse};
use crate::state::session::{Role, Session, SessionUser};

const LOGIN_FALLBACK: &str = "Login failed. Please try again.";
const SIGNUP_FALLBACK: &str = "Signup failed. Please try again.";
const ACCESS_DENIED_FALLBACK: &str = "Access denied for this portal.";
const MALFORMED_FALLBACK: &str = "Unexpected response from the server.";
const FETCH_USER_FALLBACK: &str = "Failed to fetch user.";

// =============================================================================
// VALIDATION (pre-network)
// =============================================================================

/// Syntactic email pre-check: both `@` and `.` must be present. This is not
/// RFC validation; the backend performs the real check.
pub fn email_looks_valid(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Validate a login form before any request is made.
pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if !email_looks_valid(email) {
        return Err(AuthError::Validation("Please enter a valid email address.".to_owned()));
    }
    if password.is_empty() {
        return Err(AuthError::Validation("Please enter your password.".to_owned()));
    }
    Ok(())
}

/// Validate a signup form before any request is made.
pub fn validate_signup(form: &SignupRequest) -> Result<(), AuthError> {
    if form.first_name.trim().is_empty() || form.last_name.trim().is_empty() {
        return Err(AuthError::Validation("Please enter your full name.".to_owned()));
    }
    validate_login(&form.email, &form.password)?;
    if form.role == Role::Student && form.year.is_none() {
        return Err(AuthError::Validation("Please select your year.".to_owned()));
    }
    Ok(())
}

// =============================================================================
// RESPONSE NORMALIZATION (pure, natively testable)
// =============================================================================

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Classify a non-2xx auth response.
fn failure(status: u16, body: &str, fallback: &str) -> AuthError {
    let parsed: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
    let detail = extract_detail(&parsed);
    if status == 403 {
        AuthError::AccessDenied(detail.unwrap_or_else(|| ACCESS_DENIED_FALLBACK.to_owned()))
    } else {
        AuthError::Rejected(detail.unwrap_or_else(|| fallback.to_owned()))
    }
}

/// Normalize a login response into the taxonomy.
pub fn login_outcome(status: u16, body: &str) -> Result<LoginResponse, AuthError> {
    if !is_success(status) {
        return Err(failure(status, body, LOGIN_FALLBACK));
    }
    serde_json::from_str::<LoginResponse>(body)
        .map_err(|_| AuthError::Malformed(MALFORMED_FALLBACK.to_owned()))
}

/// Normalize a signup response into the taxonomy.
pub fn signup_outcome(status: u16, body: &str) -> Result<SignupResponse, AuthError> {
    if !is_success(status) {
        return Err(failure(status, body, SIGNUP_FALLBACK));
    }
    // The success body is arbitrary JSON; tolerate an empty one.
    Ok(serde_json::from_str::<SignupResponse>(body).unwrap_or_default())
}

/// Normalize a `GET /users/me` response.
///
/// Absent, expired, and rejected tokens are deliberately collapsed into a
/// single condition; callers that need to distinguish must add that.
pub fn me_outcome(status: u16, body: &str) -> Result<SessionUser, AuthError> {
    if !is_success(status) {
        return Err(AuthError::Rejected(FETCH_USER_FALLBACK.to_owned()));
    }
    serde_json::from_str::<SessionUser>(body)
        .map_err(|_| AuthError::Rejected(FETCH_USER_FALLBACK.to_owned()))
}

/// Build the session a successful login establishes.
///
/// The response's `user.role` overrides the submitted role; a response
/// whose role string is unrecognized is rejected rather than defaulted.
pub fn session_from_login(request: &LoginRequest, response: LoginResponse) -> Result<Session, AuthError> {
    let user = response.user.unwrap_or_else(|| SessionUser {
        id: String::new(),
        email: request.email.clone(),
        role: request.role.as_str().to_owned(),
        first_name: None,
        last_name: None,
        year: None,
        extra: serde_json::Map::new(),
    });
    Session::establish(response.access_token, user, request.role)
        .map_err(|unknown| AuthError::Rejected(format!("Your account has an unrecognized role ({}).", unknown.0)))
}

// =============================================================================
// HTTP SHELLS (browser only)
// =============================================================================

#[cfg(feature = "hydrate")]
fn transport(err: &gloo_net::Error) -> AuthError {
    AuthError::Transport(format!("Network error: {err}"))
}

/// `POST /auth/login` — authenticate against the selected portal.
///
/// # Errors
///
/// Returns the full `AuthError` taxonomy; see `login_outcome`.
#[cfg(feature = "hydrate")]
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, AuthError> {
    let resp = gloo_net::http::Request::post(&format!("{}/auth/login", super::API_BASE))
        .json(request)
        .map_err(|e| transport(&e))?
        .send()
        .await
        .map_err(|e| transport(&e))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    login_outcome(status, &body)
}

/// `POST /auth/signup` — create an account. Does not establish a session.
///
/// # Errors
///
/// Returns `Validation`/`Rejected`/`Malformed`/`Transport`; see
/// `signup_outcome`.
#[cfg(feature = "hydrate")]
pub async fn signup(request: &SignupRequest) -> Result<SignupResponse, AuthError> {
    let resp = gloo_net::http::Request::post(&format!("{}/auth/signup", super::API_BASE))
        .json(request)
        .map_err(|e| transport(&e))?
        .send()
        .await
        .map_err(|e| transport(&e))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    signup_outcome(status, &body)
}

/// `POST /auth/logout` — best-effort server notification.
///
/// Failures are logged, never surfaced: the local session is cleared by the
/// caller regardless of what happens here.
#[cfg(feature = "hydrate")]
pub async fn logout(token: Option<&str>) {
    let mut req = gloo_net::http::Request::post(&format!("{}/auth/logout", super::API_BASE));
    if let Some(token) = token {
        req = req.header("Authorization", &format!("Bearer {token}"));
    }
    match req.send().await {
        Ok(resp) if !resp.ok() => {
            leptos::logging::warn!("logout returned {}", resp.status());
        }
        Ok(_) => {}
        Err(e) => {
            leptos::logging::warn!("logout request failed: {e}");
        }
    }
}

/// `GET /users/me` — fetch the current user with the stored token.
///
/// # Errors
///
/// A single "failed to fetch user" condition regardless of cause.
#[cfg(feature = "hydrate")]
pub async fn me(token: Option<&str>) -> Result<SessionUser, AuthError> {
    let Some(token) = token else {
        return Err(AuthError::Rejected(FETCH_USER_FALLBACK.to_owned()));
    };
    let resp = gloo_net::http::Request::get(&format!("{}/users/me", super::API_BASE))
        .header("Authorization", &format!("Bearer {token}"))
        .send()
        .await
        .map_err(|_| AuthError::Rejected(FETCH_USER_FALLBACK.to_owned()))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    me_outcome(status, &body)
}
