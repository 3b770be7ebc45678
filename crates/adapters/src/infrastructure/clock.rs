//! System clock adapter

use std::time::{SystemTime, UNIX_EPOCH};

use fancast_ports::outbound::ClockPort;

/// Wall clock backed by `std::time`.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}
