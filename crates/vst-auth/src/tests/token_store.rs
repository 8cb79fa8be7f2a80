use crate::{AuthError, FileTokenStore, MemoryTokenStore, TokenStore};

use googletest::prelude::*;
use tempfile::TempDir;

#[test]
fn given_fresh_file_store_when_loaded_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::for_origin(temp.path(), "http://localhost:8081").unwrap();

    assert_that!(store.load().unwrap(), none());
}

#[test]
fn given_saved_token_when_loaded_by_new_instance_then_survives() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::for_origin(temp.path(), "http://localhost:8081").unwrap();
    store.save("abc.def.ghi").unwrap();

    let reopened = FileTokenStore::for_origin(temp.path(), "http://localhost:8081/").unwrap();

    assert_that!(reopened.load().unwrap(), some(eq("abc.def.ghi")));
}

#[test]
fn given_saved_token_when_saved_again_then_replaced_wholesale() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::for_origin(temp.path(), "http://localhost:8081").unwrap();
    store.save("first.token.value-that-is-longer").unwrap();
    store.save("second").unwrap();

    assert_that!(store.load().unwrap(), some(eq("second")));
}

#[test]
fn given_token_when_cleared_then_none_and_clear_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::for_origin(temp.path(), "http://localhost:8081").unwrap();
    store.save("abc").unwrap();

    store.clear().unwrap();
    store.clear().unwrap();

    assert_that!(store.load().unwrap(), none());
    assert_that!(store.path().exists(), eq(false));
}

#[test]
fn given_two_origins_when_saved_then_isolated() {
    let temp = TempDir::new().unwrap();
    let local = FileTokenStore::for_origin(temp.path(), "http://localhost:8081").unwrap();
    let remote = FileTokenStore::for_origin(temp.path(), "https://trader.example.com").unwrap();

    local.save("local-token").unwrap();

    assert_that!(remote.load().unwrap(), none());
    assert_that!(local.load().unwrap(), some(eq("local-token")));
}

#[test]
fn given_blank_file_when_loaded_then_none() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::at_path(temp.path().join("blank.token"));
    std::fs::write(store.path(), "  \n").unwrap();

    assert_that!(store.load().unwrap(), none());
}

#[test]
fn test_origin_key_uses_default_port() {
    assert_eq!(
        FileTokenStore::origin_key("https://Trader.Example.com/api").unwrap(),
        "https_trader_example_com_443"
    );
    assert_eq!(
        FileTokenStore::origin_key("http://127.0.0.1:8081").unwrap(),
        "http_127_0_0_1_8081"
    );
}

#[test]
fn test_origin_key_rejects_garbage() {
    assert!(matches!(
        FileTokenStore::origin_key("localhost"),
        Err(AuthError::InvalidOrigin { .. })
    ));
}

#[cfg(unix)]
#[test]
fn test_saved_token_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::for_origin(temp.path(), "http://localhost:8081").unwrap();
    store.save("abc").unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryTokenStore::new();
    assert_that!(store.load().unwrap(), none());

    store.save("abc").unwrap();
    assert_that!(store.load().unwrap(), some(eq("abc")));

    store.clear().unwrap();
    assert_that!(store.load().unwrap(), none());
}
