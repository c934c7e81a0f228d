//! In-process session store, used by the test suite.

use async_trait::async_trait;
use dashmap::DashMap;

use super::SessionStore;
use crate::utils::error::SessionError;

#[derive(Default)]
pub struct MemoryStore {
    visits: DashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemoryStore {
    async fn increment(&self, session_id: &str) -> Result<u64, SessionError> {
        let mut entry = self.visits.entry(session_id.to_string()).or_insert(0);
        *entry += 1;
        Ok(*entry)
    }

    async fn peek(&self, session_id: &str) -> Result<u64, SessionError> {
        Ok(self.visits.get(session_id).map(|v| *v).unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_increment_initializes_to_one() {
        let store = MemoryStore::new();
        assert_eq!(store.increment("s1").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn counter_is_monotonic_per_session() {
        let store = MemoryStore::new();
        for expected in 1..=5 {
            assert_eq!(store.increment("s1").await.unwrap(), expected);
        }
        // Other sessions are independent.
        assert_eq!(store.increment("s2").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn peek_does_not_mutate() {
        let store = MemoryStore::new();
        assert_eq!(store.peek("s1").await.unwrap(), 0);

        store.increment("s1").await.unwrap();
        assert_eq!(store.peek("s1").await.unwrap(), 1);
        assert_eq!(store.peek("s1").await.unwrap(), 1);
    }
}
