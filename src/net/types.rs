//! Request and response shapes for the auth endpoints.

use crate::state::session::{Role, SessionUser};

/// Body of `POST /auth/login`.
///
/// The `role` field selects the portal and triggers the backend's
/// role-vs-portal access check; it is advisory only. The authoritative
/// role comes back inside the response's `user` record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

/// Body of `POST /auth/signup`.
///
/// `year` is serialized only when present; the constructor drops it for
/// teachers so the key never appears in a teacher signup payload.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl SignupRequest {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        role: Role,
        year: Option<String>,
    ) -> Self {
        let year = match role {
            Role::Student => year.filter(|y| !y.is_empty()),
            Role::Teacher => None,
        };
        Self { first_name, last_name, email, password, role, year }
    }
}

/// Successful signup response. The backend returns arbitrary JSON here;
/// both fields are optional and unused beyond logging.
#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
pub struct SignupResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
