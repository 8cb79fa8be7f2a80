#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};
use vst_auth::{Claims, MemoryTokenStore, RoleGrant};
use vst_cli::Client;

const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

pub fn create_test_token(sub: &str, ttl_secs: i64, roles: &[&str]) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: sub.to_string(),
        exp: now + ttl_secs,
        iat: Some(now),
        roles: roles.iter().map(|r| RoleGrant::new(r)).collect(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub fn client_with_store(base_url: &str, store: Arc<MemoryTokenStore>) -> Client {
    Client::new(base_url, store, Duration::from_secs(5)).unwrap()
}

/// Provider-shaped quote body as proxied by the backend.
pub fn global_quote(symbol: &str, price: &str) -> Value {
    json!({
        "Global Quote": {
            "01. symbol": symbol,
            "02. open": "100.0000",
            "03. high": "110.0000",
            "04. low": "95.0000",
            "05. price": price,
            "06. volume": "123456",
            "07. latest trading day": "2026-10-16",
            "08. previous close": "99.0000",
            "09. change": "1.5000",
            "10. change percent": "1.5152%"
        }
    })
}
