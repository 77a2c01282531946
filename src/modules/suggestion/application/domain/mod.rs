mod rate_limiter;
mod sanitizer;

pub use rate_limiter::{
    Clock, FixedWindowRateLimiter, RateLimitConfig, RateLimitDecision, SystemClock,
};
pub use sanitizer::{has_template_markup, sanitize_html, sanitize_plain};
