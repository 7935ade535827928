use std::collections::HashMap;

use axum::http::{header, HeaderMap};

/// Read-only view of wherever the client keeps its token.
///
/// The guard only ever reads; issuing and clearing tokens is the login
/// flow's business.
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
}

impl<S: TokenStore + ?Sized> TokenStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Plain map-backed store for tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// Adapts a request's headers to the store contract: the token travels as
/// a bearer `Authorization` header. A request carries a single credential,
/// so the key is irrelevant here.
pub struct BearerHeaderStore<'h> {
    headers: &'h HeaderMap,
}

impl<'h> BearerHeaderStore<'h> {
    pub fn new(headers: &'h HeaderMap) -> Self {
        Self { headers }
    }
}

impl TokenStore for BearerHeaderStore<'_> {
    fn get(&self, _key: &str) -> Option<String> {
        self.headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer ").or_else(|| v.strip_prefix("bearer ")))
            .map(|t| t.trim().to_string())
    }
}
