//! Single-use notices: set during one request, shown by the next rendered page, then gone.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// How long an undelivered notice is kept before it is dropped.
pub const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(10 * 60);
/// Upper bound on undelivered notices; the oldest is dropped when full.
pub const DEFAULT_NOTICE_CAPACITY: usize = 10_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Pending notices keyed by session id. At most one per session; a newer one replaces it.
/// Entries older than the TTL are dropped on every push and the map never exceeds its
/// capacity, so sessions that never come back (clients ignoring the cookie) do not accumulate.
#[derive(Clone, Debug)]
pub struct NoticeStore {
    pending: Arc<Mutex<HashMap<String, (Notice, Instant)>>>,
    ttl: Duration,
    capacity: usize,
}

impl Default for NoticeStore {
    fn default() -> Self {
        Self::with_limits(DEFAULT_NOTICE_TTL, DEFAULT_NOTICE_CAPACITY)
    }
}

impl NoticeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self::with_limits(ttl, DEFAULT_NOTICE_CAPACITY)
    }

    pub fn with_limits(ttl: Duration, capacity: usize) -> Self {
        Self {
            pending: Arc::new(Mutex::new(HashMap::new())),
            ttl,
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, session: &str, notice: Notice) {
        let now = Instant::now();
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.retain(|_, (_, at)| now.duration_since(*at) < self.ttl);
        if !pending.contains_key(session) && pending.len() >= self.capacity {
            let oldest = pending
                .iter()
                .min_by_key(|(_, (_, at))| *at)
                .map(|(k, _)| k.clone());
            if let Some(key) = oldest {
                pending.remove(&key);
            }
        }
        pending.insert(session.to_string(), (notice, now));
    }

    /// Remove and return the pending notice, if any and not expired.
    pub fn take(&self, session: &str) -> Option<Notice> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending
            .remove(session)
            .filter(|(_, at)| at.elapsed() < self.ttl)
            .map(|(notice, _)| notice)
    }

    /// Number of undelivered notices.
    pub fn len(&self) -> usize {
        self.pending.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
