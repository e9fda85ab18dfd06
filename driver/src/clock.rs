use time::{OffsetDateTime, UtcOffset};

use kernel::interface::clock::Clock;

/// Wall clock pinned to one UTC offset.
///
/// The local offset can only be read reliably while the process is still
/// single-threaded, so resolve it with [`SystemClock::local`] before the
/// runtime or any logging thread starts.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Falls back to UTC when the local offset is unknown.
    pub fn local() -> Self {
        Self::new(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    fn localize(&self, instant: OffsetDateTime) -> OffsetDateTime {
        instant.to_offset(self.offset)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        self.localize(OffsetDateTime::now_utc())
    }
}

#[cfg(test)]
mod test {
    use time::macros::{date, datetime, offset};

    use kernel::interface::clock::Clock;

    use super::SystemClock;

    #[test]
    fn now_carries_the_configured_offset() {
        let clock = SystemClock::new(offset!(-8));
        assert_eq!(clock.now().offset(), offset!(-8));
        assert_eq!(SystemClock::new(offset!(+9)).now().offset(), offset!(+9));
    }

    #[test]
    fn calendar_day_follows_the_offset() {
        let instant = datetime!(2026-03-11 01:00:00 UTC);
        assert_eq!(SystemClock::new(offset!(-8)).localize(instant).date(), date!(2026 - 03 - 10));
        assert_eq!(SystemClock::new(offset!(+9)).localize(instant).date(), date!(2026 - 03 - 11));
    }
}
