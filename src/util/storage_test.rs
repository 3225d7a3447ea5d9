use super::*;

fn sample_session() -> Session {
    let mut extra = serde_json::Map::new();
    extra.insert("avatar_url".to_owned(), serde_json::json!("https://example.edu/a.png"));
    Session {
        token: "tok-abc".to_owned(),
        user: SessionUser {
            id: "u-1".to_owned(),
            email: "ada@example.edu".to_owned(),
            role: "student".to_owned(),
            first_name: Some("Ada".to_owned()),
            last_name: None,
            year: Some("SE".to_owned()),
            extra,
        },
        role: Role::Student,
    }
}

// =============================================================
// Save / load round trip
// =============================================================

#[test]
fn saved_session_loads_back_intact() {
    let store = MemoryStore::default();
    let session = sample_session();
    save_session(&store, &session);

    let loaded = load_session(&store).expect("session loads");
    assert_eq!(loaded, session);
}

#[test]
fn unknown_backend_fields_survive_the_round_trip() {
    let store = MemoryStore::default();
    save_session(&store, &sample_session());

    let loaded = load_session(&store).expect("session loads");
    assert_eq!(
        loaded.user.extra.get("avatar_url"),
        Some(&serde_json::json!("https://example.edu/a.png"))
    );
}

// =============================================================
// Partial or corrupt state loads as logged out
// =============================================================

#[test]
fn empty_store_loads_as_none() {
    assert!(load_session(&MemoryStore::default()).is_none());
}

#[test]
fn token_without_role_loads_as_none() {
    let store = MemoryStore::default();
    store.set("lectern_token", "tok-abc");
    assert!(load_session(&store).is_none());
}

#[test]
fn empty_token_loads_as_none() {
    let store = MemoryStore::default();
    save_session(&store, &sample_session());
    store.set("lectern_token", "");
    assert!(load_session(&store).is_none());
}

#[test]
fn unknown_role_string_loads_as_none() {
    let store = MemoryStore::default();
    save_session(&store, &sample_session());
    store.set("lectern_role", "superuser");
    assert!(load_session(&store).is_none());
}

#[test]
fn corrupt_user_record_loads_as_none() {
    let store = MemoryStore::default();
    save_session(&store, &sample_session());
    store.set("lectern_user", "{not json");
    assert!(load_session(&store).is_none());
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn cleared_session_loads_as_none() {
    let store = MemoryStore::default();
    save_session(&store, &sample_session());
    clear_session(&store);
    assert!(load_session(&store).is_none());
    assert!(store.get("lectern_token").is_none());
    assert!(store.get("lectern_user").is_none());
    assert!(store.get("lectern_role").is_none());
}

#[test]
fn clear_is_safe_on_empty_store() {
    let store = MemoryStore::default();
    clear_session(&store);
    assert!(load_session(&store).is_none());
}
