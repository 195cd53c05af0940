use super::*;

fn session(token: &str) -> Session {
    Session {
        access_token: token.to_owned(),
        refresh_token: format!("{token}-refresh"),
        user_id: 42,
    }
}

#[test]
fn save_writes_expected_keys() {
    let store = MemorySessionStore::new();
    store.save(&session("abc"));
    assert_eq!(store.get_item("access_token").as_deref(), Some("abc"));
    assert_eq!(store.get_item("refresh_token").as_deref(), Some("abc-refresh"));
    assert_eq!(store.get_item("user_id").as_deref(), Some("42"));
    assert_eq!(store.refresh_token().as_deref(), Some("abc-refresh"));
}

#[test]
fn clear_removes_every_credential() {
    let store = MemorySessionStore::with_session(&session("abc"));
    store.clear();
    assert!(store.is_empty());
    assert_eq!(store.access_token(), None);
    assert_eq!(store.refresh_token(), None);
}

#[test]
fn blank_access_token_counts_as_missing() {
    let store = MemorySessionStore::new();
    store.set_item(ACCESS_TOKEN_KEY, "  ");
    assert_eq!(store.access_token(), None);
}

#[test]
fn set_access_token_keeps_refresh_token() {
    let store = MemorySessionStore::with_session(&session("old"));
    store.set_access_token("new");
    assert_eq!(store.access_token().as_deref(), Some("new"));
    assert_eq!(store.refresh_token().as_deref(), Some("old-refresh"));
    assert_eq!(store.get_item(USER_ID_KEY).as_deref(), Some("42"));
}

#[test]
fn clones_share_storage() {
    let store = MemorySessionStore::new();
    let view = store.clone();
    store.save(&session("shared"));
    assert_eq!(view.access_token().as_deref(), Some("shared"));
}

#[test]
fn session_from_login_response() {
    let resp = LoginResponse {
        access_token: "a".to_owned(),
        refresh_token: "r".to_owned(),
        token_type: Some("bearer".to_owned()),
        user_id: 5,
    };
    assert_eq!(
        Session::from(resp),
        Session { access_token: "a".to_owned(), refresh_token: "r".to_owned(), user_id: 5 }
    );
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_store_is_empty_natively() {
    let store = LocalSessionStore;
    store.save(&session("abc"));
    assert_eq!(store.access_token(), None);
}
