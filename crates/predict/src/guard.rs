//! Stale-request guard

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request generation counter.
///
/// Each submission takes a token from [`begin`](Self::begin); a newer
/// submission supersedes all older tokens, so a late-resolving request
/// can check [`is_current`](Self::is_current) before writing its
/// outcome to the display.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    current: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, superseding any in-flight one.
    pub fn begin(&self) -> u64 {
        self.current.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `token` still identifies the most recent request.
    pub fn is_current(&self, token: u64) -> bool {
        self.current.load(Ordering::SeqCst) == token
    }
}
