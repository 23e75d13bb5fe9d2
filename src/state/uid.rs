//! Session identifier generation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier of one connected session.
///
/// Rendered as six base36 characters (e.g. "AAAAAC") in logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Wrap a raw counter value.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Pick one of `shards` buckets; the same id always maps to the same bucket.
    pub fn shard(&self, shards: usize) -> usize {
        (self.0 % shards.max(1) as u64) as usize
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&base36_encode_6(self.0))
    }
}

/// Generates unique session ids.
///
/// Note: Counter starts at 1 so that `AAAAAA` never names a live session.
pub struct SessionIdGenerator {
    counter: AtomicU64,
}

const ID_COUNTER_START: u64 = 1;

impl SessionIdGenerator {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(ID_COUNTER_START),
        }
    }

    /// Generate the next unique id.
    pub fn next(&self) -> SessionId {
        SessionId::new(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SessionIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a number as a 6-character base36 string.
fn base36_encode_6(mut n: u64) -> String {
    const CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut result = [b'A'; 6];

    for i in (0..6).rev() {
        result[i] = CHARS[(n % 36) as usize];
        n /= 36;
    }

    String::from_utf8_lossy(&result).into_owned()
}
