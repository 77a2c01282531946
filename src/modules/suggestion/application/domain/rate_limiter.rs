use std::collections::HashMap;
use std::env;
use std::sync::{Mutex, PoisonError};

/// Counters for stale windows are pruned once the map grows past this.
/// Keys are API keys or peer addresses, so the population stays small.
const MAX_TRACKED_KEYS: usize = 1024;

//
// ──────────────────────────────────────────────────────────
// Clock
// ──────────────────────────────────────────────────────────
//

pub trait Clock: Send + Sync {
    fn now_millis(&self) -> u64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        chrono::Utc::now().timestamp_millis() as u64
    }
}

//
// ──────────────────────────────────────────────────────────
// Config
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub max_requests: u32,
    pub window_ms: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 3,
            window_ms: 60_000,
        }
    }
}

impl RateLimitConfig {
    /// Load rate limit configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let max_requests = env::var("RATE_LIMIT_MAX_REQUESTS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u32>()
            .expect("Invalid RATE_LIMIT_MAX_REQUESTS value");

        let window_ms = env::var("RATE_LIMIT_WINDOW_MS")
            .unwrap_or_else(|_| "60000".to_string())
            .parse::<u64>()
            .expect("Invalid RATE_LIMIT_WINDOW_MS value");

        if !(1..=10).contains(&max_requests) {
            panic!("RATE_LIMIT_MAX_REQUESTS must be between 1 and 10");
        }
        if !(1_000..=3_600_000).contains(&window_ms) {
            panic!("RATE_LIMIT_WINDOW_MS must be between 1000 and 3600000");
        }

        Self {
            max_requests,
            window_ms,
        }
    }

    /// Whole seconds a limited caller waits before the window rolls over.
    pub fn retry_after_secs(&self) -> u64 {
        self.window_ms / 1000
    }
}

//
// ──────────────────────────────────────────────────────────
// Fixed-window limiter
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed { remaining: u32 },
    Limited { retry_after_secs: u64 },
}

#[derive(Debug)]
struct Window {
    count: u32,
    started_at: u64,
}

/// Per-key request counter with hard window boundaries: the count resets when
/// a window expires and never carries over. State is in-memory only and lost
/// on restart.
#[derive(Debug)]
pub struct FixedWindowRateLimiter<C: Clock> {
    config: RateLimitConfig,
    clock: C,
    windows: Mutex<HashMap<String, Window>>,
}

impl<C: Clock> FixedWindowRateLimiter<C> {
    pub fn new(config: RateLimitConfig, clock: C) -> Self {
        Self {
            config,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Atomically counts the call against `key` and decides it. The first
    /// `max_requests` calls in a window are allowed, every later one is
    /// rejected until the window has fully elapsed.
    pub fn check(&self, key: &str) -> RateLimitDecision {
        let now = self.clock.now_millis();
        let window_ms = self.config.window_ms;

        // A poisoned lock means a panic elsewhere while counting; the map
        // itself is still coherent.
        let mut windows = self
            .windows
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if windows.len() >= MAX_TRACKED_KEYS && !windows.contains_key(key) {
            windows.retain(|_, w| now.saturating_sub(w.started_at) < window_ms);
        }

        let window = windows.entry(key.to_string()).or_insert(Window {
            count: 0,
            started_at: now,
        });

        if now.saturating_sub(window.started_at) >= window_ms {
            window.count = 0;
            window.started_at = now;
        }

        if window.count >= self.config.max_requests {
            return RateLimitDecision::Limited {
                retry_after_secs: self.config.retry_after_secs(),
            };
        }

        window.count += 1;
        RateLimitDecision::Allowed {
            remaining: self.config.max_requests - window.count,
        }
    }
}
