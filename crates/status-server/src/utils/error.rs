//! Application error types

use thiserror::Error;

/// Failures talking to the external session store.
///
/// These never surface as HTTP errors: the page handler contains them and
/// renders with a degraded visit count instead.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("session store unavailable: {0}")]
    Store(#[from] redis::RedisError),
}
