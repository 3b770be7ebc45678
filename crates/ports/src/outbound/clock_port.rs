//! Clock abstraction port for time operations
//!
//! Casting ids are derived from wall-clock milliseconds; injecting the
//! clock keeps id allocation deterministic in tests.

/// Time operations abstraction.
///
/// Services that need current time should inject this port rather than
/// reading `SystemTime` directly.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait ClockPort: Send + Sync {
    /// Current time as Unix timestamp in milliseconds
    fn now_millis(&self) -> u64;
}
