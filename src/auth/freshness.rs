//! Timestamp freshness window.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::config::FreshnessConfig;
use crate::error::{AuthError, FreshnessErrorKind};

/// Application-level freshness policy for reading timestamps.
///
/// A valid signature proves a reading is authentic, not that it is recent:
/// an attacker can replay a captured tuple unchanged. Bounding the accepted
/// timestamp window bounds that replay exposure. This is deliberately
/// separate from [`Verifier`](super::Verifier) so staleness and signature
/// mismatch stay distinguishable outcomes.
///
/// Only meaningful when both endpoints stamp readings in Unix seconds.
pub struct FreshnessWindow {
    max_age: Duration,
    max_future_skew: Duration,
}

impl FreshnessWindow {
    /// Create a window accepting readings up to `max_age_seconds` old and
    /// at most `max_future_skew_seconds` ahead of the local clock.
    pub fn new(max_age_seconds: u64, max_future_skew_seconds: u64) -> Self {
        Self {
            max_age: Duration::from_secs(max_age_seconds),
            max_future_skew: Duration::from_secs(max_future_skew_seconds),
        }
    }

    /// Build a window from configuration.
    pub fn from_config(config: &FreshnessConfig) -> Self {
        Self::new(config.max_age_seconds, config.max_future_skew_seconds)
    }

    /// Check a timestamp against the local wall clock.
    pub fn check(&self, timestamp: u64) -> Result<(), AuthError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| AuthError::Config {
                message: format!("System time error: {}", e),
            })?
            .as_secs();

        self.check_at(timestamp, now)
    }

    /// Check a timestamp against an explicit notion of "now".
    pub fn check_at(&self, timestamp: u64, now: u64) -> Result<(), AuthError> {
        let age = now.saturating_sub(timestamp);
        if age > self.max_age.as_secs() {
            return Err(AuthError::Freshness {
                kind: FreshnessErrorKind::Stale { age_seconds: age },
            });
        }

        // Clock skew protection: reject readings from the future
        if timestamp > now + self.max_future_skew.as_secs() {
            return Err(AuthError::Freshness {
                kind: FreshnessErrorKind::FromFuture {
                    skew_seconds: timestamp - now,
                },
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_reading_accepted() {
        let window = FreshnessWindow::new(300, 60);
        assert!(window.check_at(1_000_000, 1_000_010).is_ok());
    }

    #[test]
    fn test_boundary_age_accepted() {
        let window = FreshnessWindow::new(300, 60);
        assert!(window.check_at(1_000_000, 1_000_300).is_ok());
    }

    #[test]
    fn test_stale_reading_rejected() {
        let window = FreshnessWindow::new(300, 60);
        assert!(matches!(
            window.check_at(1_000_000, 1_000_301),
            Err(AuthError::Freshness {
                kind: FreshnessErrorKind::Stale { age_seconds: 301 }
            })
        ));
    }

    #[test]
    fn test_small_future_skew_tolerated() {
        let window = FreshnessWindow::new(300, 60);
        assert!(window.check_at(1_000_060, 1_000_000).is_ok());
    }

    #[test]
    fn test_far_future_rejected() {
        let window = FreshnessWindow::new(300, 60);
        assert!(matches!(
            window.check_at(1_000_061, 1_000_000),
            Err(AuthError::Freshness {
                kind: FreshnessErrorKind::FromFuture { skew_seconds: 61 }
            })
        ));
    }
}
