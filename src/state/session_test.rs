use super::*;

fn user(role: &str) -> SessionUser {
    SessionUser {
        id: "u-1".to_owned(),
        email: "ada@example.edu".to_owned(),
        role: role.to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        year: None,
        extra: serde_json::Map::new(),
    }
}

fn session(role: Role) -> Session {
    Session {
        token: "tok-1".to_owned(),
        user: user(role.as_str()),
        role,
    }
}

// =============================================================
// Role parsing
// =============================================================

#[test]
fn role_parses_known_literals() {
    assert_eq!(Role::parse("student"), Ok(Role::Student));
    assert_eq!(Role::parse("teacher"), Ok(Role::Teacher));
}

#[test]
fn role_rejects_anything_else() {
    assert_eq!(Role::parse("admin"), Err(UnknownRole("admin".to_owned())));
    assert_eq!(Role::parse("Student"), Err(UnknownRole("Student".to_owned())));
    assert_eq!(Role::parse(""), Err(UnknownRole(String::new())));
}

#[test]
fn role_round_trips_through_as_str() {
    for role in [Role::Student, Role::Teacher] {
        assert_eq!(Role::parse(role.as_str()), Ok(role));
    }
}

// =============================================================
// Session establishment
// =============================================================

#[test]
fn establish_prefers_server_role_over_submitted() {
    let s = Session::establish("tok".to_owned(), user("teacher"), Role::Student).expect("session");
    assert_eq!(s.role, Role::Teacher);
    assert_eq!(s.role.as_str(), s.user.role);
}

#[test]
fn establish_rejects_unknown_server_role() {
    let err = Session::establish("tok".to_owned(), user("superuser"), Role::Student).unwrap_err();
    assert_eq!(err, UnknownRole("superuser".to_owned()));
}

#[test]
fn establish_falls_back_to_submitted_when_role_empty() {
    let s = Session::establish("tok".to_owned(), user(""), Role::Teacher).expect("session");
    assert_eq!(s.role, Role::Teacher);
}

// =============================================================
// Display name
// =============================================================

#[test]
fn display_name_uses_full_name_when_present() {
    assert_eq!(user("student").display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let mut u = user("student");
    u.first_name = None;
    u.last_name = None;
    assert_eq!(u.display_name(), "ada@example.edu");
}

// =============================================================
// SessionState and the staleness guard
// =============================================================

#[test]
fn apply_login_sets_whole_session_atomically() {
    let mut state = SessionState::default();
    let generation = state.begin_login();
    assert!(state.apply_login(generation, session(Role::Student)));

    let s = state.session.as_ref().expect("session set");
    assert!(!s.token.is_empty());
    assert_eq!(s.role.as_str(), s.user.role);
    assert_eq!(state.role(), Some(Role::Student));
}

#[test]
fn stale_login_response_is_discarded() {
    let mut state = SessionState::default();
    let first = state.begin_login();
    let second = state.begin_login();

    // The newer attempt resolves first and wins.
    assert!(state.apply_login(second, session(Role::Teacher)));
    // The older attempt resolves late and must not overwrite.
    assert!(!state.apply_login(first, session(Role::Student)));

    assert_eq!(state.role(), Some(Role::Teacher));
}

#[test]
fn clear_drops_token_and_role_together() {
    let mut state = SessionState::default();
    let generation = state.begin_login();
    assert!(state.apply_login(generation, session(Role::Student)));

    state.clear();
    assert!(state.token().is_none());
    assert!(state.role().is_none());
}

// =============================================================
// View mode dispatch
// =============================================================

#[test]
fn view_mode_student_for_student_role() {
    let mut state = SessionState::default();
    let generation = state.begin_login();
    state.apply_login(generation, session(Role::Student));
    assert_eq!(ViewMode::for_state(&state), ViewMode::Student);
}

#[test]
fn view_mode_teacher_for_teacher_role() {
    let mut state = SessionState::default();
    let generation = state.begin_login();
    state.apply_login(generation, session(Role::Teacher));
    assert_eq!(ViewMode::for_state(&state), ViewMode::Teacher);
}

#[test]
fn view_mode_unknown_when_no_session() {
    assert_eq!(ViewMode::for_state(&SessionState::default()), ViewMode::Unknown);
}
