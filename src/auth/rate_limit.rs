use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const MAX_FAILURES: usize = 10;
const WINDOW_SECS: u64 = 600;

/// Sliding-window login throttle keyed by client IP. State is in-process
/// only; a restart clears it.
#[derive(Clone, Default)]
pub struct RateLimiter {
    failures: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
}

impl RateLimiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the IP has exceeded the allowed failures inside the window.
    /// Stale entries for the checked IP are pruned on the way.
    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        let mut map = self.failures.lock().unwrap_or_else(|e| e.into_inner());
        let cutoff = Instant::now() - Duration::from_secs(WINDOW_SECS);
        match map.get_mut(&ip) {
            Some(stamps) => {
                stamps.retain(|t| *t > cutoff);
                stamps.len() >= MAX_FAILURES
            }
            None => false,
        }
    }

    pub fn record_failure(&self, ip: IpAddr) {
        let mut map = self.failures.lock().unwrap_or_else(|e| e.into_inner());
        map.entry(ip).or_default().push(Instant::now());
    }

    /// Forget the IP's failures, called after a successful login.
    pub fn clear(&self, ip: IpAddr) {
        let mut map = self.failures.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&ip);
    }
}
