use crate::Client;

use std::sync::Arc;
use std::time::Duration;

use vst_auth::MemoryTokenStore;

fn client_for(base_url: &str) -> Client {
    Client::new(
        base_url,
        Arc::new(MemoryTokenStore::new()),
        Duration::from_secs(5),
    )
    .unwrap()
}

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = client_for("http://localhost:8081/");
    assert_eq!(client.base_url, "http://localhost:8081");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = client_for("http://localhost:8081");
    assert_eq!(client.base_url, "http://localhost:8081");
}
