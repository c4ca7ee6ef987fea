//! Pluggable session expiry
//!
//! The backend issues opaque tokens; the client enforces its own cutoff from
//! the stored creation timestamp. The policy is a trait so tests can freeze
//! or disable expiry without touching the clock.

use chrono::{DateTime, Duration, Utc};

/// Decides whether a stored session is still usable
pub trait ExpiryPolicy: Send + Sync + 'static {
    /// Returns true if a session created at `created_at` is expired at `now`
    fn is_expired(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool;

    /// When the session will expire, if the policy expires at all
    fn expires_at(&self, created_at: DateTime<Utc>) -> Option<DateTime<Utc>>;
}

/// Fixed time-to-live from token creation
///
/// The default is 24 hours, matching the cutoff the portal has always
/// enforced on stored tokens.
#[derive(Debug, Clone, Copy)]
pub struct FixedTtl {
    ttl: Duration,
}

impl FixedTtl {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// The standard 24-hour client-side expiry
    pub fn twenty_four_hours() -> Self {
        Self {
            ttl: Duration::hours(24),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for FixedTtl {
    fn default() -> Self {
        Self::twenty_four_hours()
    }
}

impl ExpiryPolicy for FixedTtl {
    fn is_expired(&self, created_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        now - created_at > self.ttl
    }

    fn expires_at(&self, created_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Some(created_at + self.ttl)
    }
}

/// Policy that never expires a session; for tests and local tooling
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverExpires;

impl ExpiryPolicy for NeverExpires {
    fn is_expired(&self, _created_at: DateTime<Utc>, _now: DateTime<Utc>) -> bool {
        false
    }

    fn expires_at(&self, _created_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ttl_within_window() {
        let policy = FixedTtl::twenty_four_hours();
        let created = Utc::now();
        let later = created + Duration::hours(23);

        assert!(!policy.is_expired(created, later));
    }

    #[test]
    fn test_fixed_ttl_past_window() {
        let policy = FixedTtl::twenty_four_hours();
        let created = Utc::now();
        let later = created + Duration::hours(24) + Duration::seconds(1);

        assert!(policy.is_expired(created, later));
    }

    #[test]
    fn test_fixed_ttl_exact_boundary_is_not_expired() {
        let policy = FixedTtl::twenty_four_hours();
        let created = Utc::now();
        let boundary = created + Duration::hours(24);

        assert!(!policy.is_expired(created, boundary));
    }

    #[test]
    fn test_expires_at() {
        let policy = FixedTtl::new(Duration::hours(1));
        let created = Utc::now();

        assert_eq!(policy.expires_at(created), Some(created + Duration::hours(1)));
    }

    #[test]
    fn test_never_expires() {
        let policy = NeverExpires;
        let created = Utc::now() - Duration::days(365);

        assert!(!policy.is_expired(created, Utc::now()));
        assert_eq!(policy.expires_at(created), None);
    }
}
