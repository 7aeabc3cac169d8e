use std::time::{Duration, Instant};

/// Holds one value for a fixed time-to-live.
#[derive(Debug)]
pub struct TtlCache<T> {
    ttl: Duration,
    entry: Option<(Instant, T)>,
}

impl<T> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    /// The stored value, unless it is older than the TTL.
    pub fn get(&self) -> Option<&T> {
        match &self.entry {
            Some((stored_at, value)) if stored_at.elapsed() < self.ttl => Some(value),
            _ => None,
        }
    }

    pub fn insert(&mut self, value: T) {
        self.entry = Some((Instant::now(), value));
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
