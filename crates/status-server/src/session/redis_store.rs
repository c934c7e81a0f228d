//! Redis-backed session store.
//!
//! `INCR` gives the atomic read-modify-write the counter needs when several
//! app-server instances serve the same session concurrently.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;

use super::SessionStore;
use crate::utils::error::SessionError;

pub struct RedisSessionStore {
    conn: ConnectionManager,
    ttl_seconds: i64,
}

impl RedisSessionStore {
    pub async fn connect(url: &str, ttl_seconds: i64) -> Result<Self, SessionError> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        Ok(Self { conn, ttl_seconds })
    }

    fn visits_key(session_id: &str) -> String {
        format!("session:{session_id}:visits")
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn increment(&self, session_id: &str) -> Result<u64, SessionError> {
        let mut conn = self.conn.clone();
        let key = Self::visits_key(session_id);
        let visits: u64 = conn.incr(&key, 1).await?;
        // Touching the session refreshes its expiry, like a cookie-backed
        // session store would.
        let _: () = conn.expire(&key, self.ttl_seconds).await?;
        Ok(visits)
    }

    async fn peek(&self, session_id: &str) -> Result<u64, SessionError> {
        let mut conn = self.conn.clone();
        let visits: Option<u64> = conn.get(Self::visits_key(session_id)).await?;
        Ok(visits.unwrap_or(0))
    }
}
