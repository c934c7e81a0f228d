//! Session tokens and the shared visit counter.
//!
//! The counter lives in an external store shared by every app-server
//! instance behind the load balancer; this module only does key-value
//! read/increment/write against it. The store is responsible for
//! cross-instance consistency of the increment.

mod memory;
mod redis_store;

pub use memory::MemoryStore;
pub use redis_store::RedisSessionStore;

use async_trait::async_trait;
use axum::http::HeaderMap;
use uuid::Uuid;

use crate::utils::error::SessionError;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Atomically add one to the session's visit counter and return the new
    /// value. Absent counters start at zero, so the first call returns 1.
    async fn increment(&self, session_id: &str) -> Result<u64, SessionError>;

    /// Current counter value without mutating it. 0 for unknown sessions.
    async fn peek(&self, session_id: &str) -> Result<u64, SessionError>;
}

/// Issue a fresh opaque session token.
pub fn new_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Pull the session token out of the request's `Cookie` header, if present.
pub fn cookie_session_id(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let raw = headers.get(axum::http::header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name.trim() == cookie_name && !value.trim().is_empty() {
            Some(value.trim().to_string())
        } else {
            None
        }
    })
}

/// `Set-Cookie` value binding a new session token to the client.
pub fn session_cookie(cookie_name: &str, session_id: &str) -> String {
    format!("{cookie_name}={session_id}; Path=/; HttpOnly; SameSite=Lax")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, value.parse().unwrap());
        headers
    }

    #[test]
    fn finds_token_among_multiple_cookies() {
        let headers = headers_with_cookie("theme=dark; status_sid=abc-123; lang=en");
        assert_eq!(
            cookie_session_id(&headers, "status_sid"),
            Some("abc-123".to_string())
        );
    }

    #[test]
    fn missing_or_empty_cookie_yields_none() {
        assert_eq!(cookie_session_id(&HeaderMap::new(), "status_sid"), None);

        let headers = headers_with_cookie("status_sid=");
        assert_eq!(cookie_session_id(&headers, "status_sid"), None);

        let headers = headers_with_cookie("other=value");
        assert_eq!(cookie_session_id(&headers, "status_sid"), None);
    }

    #[test]
    fn set_cookie_is_scoped_to_root_path() {
        let value = session_cookie("status_sid", "abc-123");
        assert!(value.starts_with("status_sid=abc-123"));
        assert!(value.contains("Path=/"));
        assert!(value.contains("HttpOnly"));
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(new_session_id(), new_session_id());
    }
}
