use super::*;

fn ada() -> User {
    User {
        id: "uid-1".into(),
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        provider: "password".into(),
    }
}

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    assert_ne!(generate_token(), generate_token());
}

// =============================================================================
// user_from_account
// =============================================================================

#[test]
fn user_from_account_maps_fields() {
    let user = user_from_account(IdentityAccount {
        local_id: "uid-9".into(),
        email: "g@example.com".into(),
        display_name: "Grace".into(),
        provider: "google.com".into(),
    });
    assert_eq!(user.id, "uid-9");
    assert_eq!(user.name, "Grace");
    assert_eq!(user.email, "g@example.com");
    assert_eq!(user.provider, "google.com");
}

// =============================================================================
// SessionStore
// =============================================================================

#[tokio::test]
async fn create_then_get_returns_user() {
    let store = SessionStore::new();
    let token = store.create(ada()).await;
    assert_eq!(store.get(&token).await, Some(ada()));
}

#[tokio::test]
async fn unknown_token_returns_none() {
    let store = SessionStore::new();
    store.create(ada()).await;
    assert_eq!(store.get("nope").await, None);
}

#[tokio::test]
async fn remove_ends_session() {
    let store = SessionStore::new();
    let token = store.create(ada()).await;
    assert!(store.remove(&token).await);
    assert_eq!(store.get(&token).await, None);
    assert!(!store.remove(&token).await);
}

#[tokio::test]
async fn clones_share_the_table() {
    let store = SessionStore::new();
    let other = store.clone();
    let token = store.create(ada()).await;
    assert_eq!(other.get(&token).await, Some(ada()));
    assert_eq!(other.active_count().await, 1);
}

#[tokio::test]
async fn each_session_gets_its_own_token() {
    let store = SessionStore::new();
    let a = store.create(ada()).await;
    let b = store.create(ada()).await;
    assert_ne!(a, b);
    assert_eq!(store.active_count().await, 2);
}
