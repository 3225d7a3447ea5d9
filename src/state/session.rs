//! Session state: the client-held proof of authentication.
//!
//! DESIGN
//! ======
//! A session is the triple (token, user, role). The three are written and
//! cleared together; a half-present session is treated as no session at all.
//! The server-returned `user.role` is always authoritative over whatever
//! role the login form submitted — the submitted role only selects the
//! portal and triggers the backend's access check.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

/// The role a user authenticated as.
///
/// Parsing is exhaustive: any string other than the two known literals is
/// an error, never a silent default. The privileged teacher view must not
/// be reachable through an unrecognized role value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Parse a role string from the backend or from durable storage.
    pub fn parse(raw: &str) -> Result<Self, UnknownRole> {
        match raw {
            "student" => Ok(Self::Student),
            "teacher" => Ok(Self::Teacher),
            other => Err(UnknownRole(other.to_owned())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role value that is neither `student` nor `teacher`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0:?}")]
pub struct UnknownRole(pub String);

/// The user record returned by the backend on login.
///
/// Only `id`, `email`, and `role` are required; the backend may attach
/// further metadata fields which are preserved verbatim so they survive a
/// round-trip through durable storage.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SessionUser {
    /// Display name: "First Last" when available, otherwise the email.
    pub fn display_name(&self) -> String {
        match (self.first_name.as_deref(), self.last_name.as_deref()) {
            (Some(first), Some(last)) if !first.is_empty() => format!("{first} {last}"),
            (Some(first), None) if !first.is_empty() => first.to_owned(),
            _ => self.email.clone(),
        }
    }
}

/// An established session: bearer token plus cached identity.
///
/// Invariant: constructing a `Session` requires all three parts, so a token
/// can never exist without a role or vice versa.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub token: String,
    pub user: SessionUser,
    pub role: Role,
}

impl Session {
    /// Build a session from a successful login response.
    ///
    /// The role embedded in `user` wins over `submitted`, which is only a
    /// portal hint. A user record whose role string is unknown is rejected
    /// rather than being admitted under a default role.
    pub fn establish(token: String, user: SessionUser, submitted: Role) -> Result<Self, UnknownRole> {
        let role = if user.role.is_empty() {
            submitted
        } else {
            Role::parse(&user.role)?
        };
        Ok(Self { token, user, role })
    }
}

/// Session state provided as a context signal to the whole component tree.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
    /// Generation counter guarding against stale login responses. Each
    /// login attempt takes a ticket from `begin_login`; only the response
    /// holding the newest ticket may write the session.
    auth_generation: u64,
}

impl SessionState {
    /// Start a login attempt and return its generation ticket.
    pub fn begin_login(&mut self) -> u64 {
        self.auth_generation += 1;
        self.auth_generation
    }

    /// Apply a successful login if `generation` is still the newest attempt.
    /// Returns `false` when the response is stale and was discarded.
    pub fn apply_login(&mut self, generation: u64, session: Session) -> bool {
        if generation != self.auth_generation {
            return false;
        }
        self.session = Some(session);
        true
    }

    /// Drop the session. Logout always succeeds locally.
    pub fn clear(&mut self) {
        self.session = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}

/// Which variant of a role-conditional view to render.
///
/// `Unknown` surfaces an explicit error panel instead of falling open into
/// the teacher view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Student,
    Teacher,
    Unknown,
}

impl ViewMode {
    pub fn for_state(state: &SessionState) -> Self {
        match state.role() {
            Some(Role::Student) => Self::Student,
            Some(Role::Teacher) => Self::Teacher,
            None => Self::Unknown,
        }
    }
}
