use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use chrono::{Local, Timelike};

use crate::error::ParseTimeError;

pub const SECONDS_PER_DAY: u32 = 86_400;

/// Seconds elapsed since local midnight, always in `[0, 86399]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self(0);

    /// Out-of-range input is clamped to the last second of the day.
    pub const fn from_seconds(seconds: u32) -> Self {
        if seconds >= SECONDS_PER_DAY {
            Self(SECONDS_PER_DAY - 1)
        } else {
            Self(seconds)
        }
    }

    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        let total = hours
            .saturating_mul(3600)
            .saturating_add(minutes.saturating_mul(60))
            .saturating_add(seconds);
        Self::from_seconds(total)
    }

    pub const fn seconds(self) -> u32 {
        self.0
    }

    pub const fn hours(self) -> u32 {
        self.0 / 3600
    }

    pub const fn minutes(self) -> u32 {
        self.0 / 60 % 60
    }

    pub const fn secs(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours(), self.minutes(), self.secs())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    /// Accepts `HH:MM:SS` or `HH:MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .trim()
            .split(':')
            .map(|part| part.parse::<u32>().map_err(|_| ParseTimeError::Field(part.to_string())))
            .collect::<Result<Vec<_>, _>>()?;

        let (h, m, sec) = match fields.as_slice() {
            [h, m] => (*h, *m, 0),
            [h, m, sec] => (*h, *m, *sec),
            _ => return Err(ParseTimeError::Shape(s.to_string())),
        };
        if h > 23 || m > 59 || sec > 59 {
            return Err(ParseTimeError::OutOfRange(s.to_string()));
        }
        Ok(Self::from_hms(h, m, sec))
    }
}

// ============================================================================
// TIME SOURCES
// ============================================================================

pub trait TimeSource: Send + 'static {
    fn now(&self) -> TimeOfDay;
}

/// The local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> TimeOfDay {
        TimeOfDay::from_seconds(Local::now().num_seconds_from_midnight())
    }
}

/// Time-of-day cell written by the ticker thread and read by the UI thread.
///
/// Stores pair with loads through release/acquire, so a render pass always
/// sees a whole sampled value.
#[derive(Debug, Clone, Default)]
pub struct SharedTime(Arc<AtomicU32>);

impl SharedTime {
    pub fn new(initial: TimeOfDay) -> Self {
        Self(Arc::new(AtomicU32::new(initial.seconds())))
    }

    pub fn load(&self) -> TimeOfDay {
        TimeOfDay(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, time: TimeOfDay) {
        self.0.store(time.seconds(), Ordering::Release);
    }
}
