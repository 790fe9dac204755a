//! Retry policy configuration
//!
//! A [`RetryPolicy`] is a plain value handed to each invocation site. There
//! is deliberately no process-wide default state: concurrent callers with
//! different policies cannot interfere with each other.

use std::time::Duration;

/// Caps the backoff exponent so the shift below cannot overflow; delays this
/// large are clamped by `max_delay` anyway.
const MAX_BACKOFF_EXPONENT: u32 = 20;

/// Exponential backoff configuration for the resilient invoker.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use store_traits::RetryPolicy;
///
/// let policy = RetryPolicy {
///     max_attempts: 3,
///     base_delay: Duration::from_millis(500),
///     max_delay: Duration::from_secs(16),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Upper bound on any single backoff delay
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(32),
        }
    }
}

impl RetryPolicy {
    /// Un-jittered delay after the attempt numbered `attempt` (0-based):
    /// `min(max_delay, base_delay * 2^attempt)`.
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let factor = 1u32 << attempt.min(MAX_BACKOFF_EXPONENT);
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_doubles_until_cap() {
        let policy = RetryPolicy {
            max_attempts: 10,
            base_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(32000),
        };

        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(1000));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(2000));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_millis(4000));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(8000));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_millis(16000));
        assert_eq!(policy.delay_for_attempt(5), Duration::from_millis(32000));
        // Capped from here on.
        assert_eq!(policy.delay_for_attempt(6), Duration::from_millis(32000));
        assert_eq!(policy.delay_for_attempt(30), Duration::from_millis(32000));
    }

    #[test]
    fn test_huge_attempt_does_not_overflow() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for_attempt(u32::MAX), policy.max_delay);
    }
}
