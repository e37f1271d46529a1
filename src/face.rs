use std::time::Duration;

use crate::config::WatchConfig;
use crate::error::WatchError;
use crate::geometry::Size;
use crate::measure::{measure, MeasureSpec};
use crate::scene::{render, Scene};
use crate::scheduler::{RedrawSignal, Ticker};
use crate::time::{LocalClock, SharedTime, TimeOfDay, TimeSource};

/// Analog watch widget.
///
/// A ticking face owns a [`Ticker`] that refreshes the stored time once per
/// period; a frozen face shows a fixed time and never asks for redraws.
#[derive(Debug)]
pub struct WatchFace {
    time: SharedTime,
    ticker: Option<Ticker>,
    fallback_size: u32,
}

impl WatchFace {
    /// A face following the local wall clock, or a frozen one when
    /// `config.frozen_at` is set.
    pub fn new<R: RedrawSignal>(config: &WatchConfig, redraw: R) -> Result<Self, WatchError> {
        match config.frozen_at {
            Some(time) => Ok(Self::frozen(config, time)),
            None => Self::with_clock(config, LocalClock, redraw),
        }
    }

    pub fn with_clock<C, R>(config: &WatchConfig, clock: C, redraw: R) -> Result<Self, WatchError>
    where
        C: TimeSource,
        R: RedrawSignal,
    {
        let period = effective_period(config.tick_period);
        let time = SharedTime::new(clock.now());
        let ticker = Ticker::start(period, clock, time.clone(), redraw)?;
        log::debug!("watch face ticking every {:?}, starting at {}", period, time.load());
        Ok(Self {
            time,
            ticker: Some(ticker),
            fallback_size: config.fallback_size,
        })
    }

    pub fn frozen(config: &WatchConfig, time: TimeOfDay) -> Self {
        log::debug!("static watch face at {time}");
        Self {
            time: SharedTime::new(time),
            ticker: None,
            fallback_size: config.fallback_size,
        }
    }

    pub fn time(&self) -> TimeOfDay {
        self.time.load()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        measure(width, height, self.fallback_size)
    }

    /// Lays out the face for the time sampled most recently.
    pub fn draw(&self, surface: Size) -> Scene {
        render(self.time.load(), surface)
    }

    /// Stops the ticker. Calling this again, or dropping the face afterwards,
    /// has no further effect.
    pub fn teardown(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
            log::debug!("watch face torn down");
        }
    }
}

impl Drop for WatchFace {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// A zero period would spin the ticker; it falls back to the default.
pub(crate) fn effective_period(period: Duration) -> Duration {
    if period.is_zero() {
        crate::config::DEFAULT_TICK_PERIOD
    } else {
        period
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;
    use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Instant;

    #[derive(Clone, Default)]
    struct Counter(Arc<AtomicUsize>);

    impl RedrawSignal for Counter {
        fn request_redraw(&self) -> bool {
            self.0.fetch_add(1, Ordering::SeqCst);
            true
        }
    }

    /// Advances one second per sample.
    #[derive(Clone)]
    struct SteppingClock(Arc<AtomicU32>);

    impl TimeSource for SteppingClock {
        fn now(&self) -> TimeOfDay {
            TimeOfDay::from_seconds(self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    fn fast_config() -> WatchConfig {
        WatchConfig::builder().tick_period(Duration::from_millis(5)).build()
    }

    fn wait_for(mut cond: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn ticking_face_follows_clock() {
        let counter = Counter::default();
        let clock = SteppingClock(Arc::new(AtomicU32::new(100)));
        let face = WatchFace::with_clock(&fast_config(), clock, counter.clone()).unwrap();

        assert!(face.is_ticking());
        assert!(wait_for(|| face.time().seconds() >= 105));
        assert!(counter.0.load(Ordering::SeqCst) >= 4);
    }

    #[test]
    fn teardown_silences_redraws() {
        let counter = Counter::default();
        let clock = SteppingClock(Arc::new(AtomicU32::new(0)));
        let mut face = WatchFace::with_clock(&fast_config(), clock, counter.clone()).unwrap();
        assert!(wait_for(|| counter.0.load(Ordering::SeqCst) >= 2));

        face.teardown();
        assert!(!face.is_ticking());
        let frozen_time = face.time();
        let seen = counter.0.load(Ordering::SeqCst);
        thread::sleep(Duration::from_millis(50));
        assert_eq!(counter.0.load(Ordering::SeqCst), seen);
        assert_eq!(face.time(), frozen_time);

        face.teardown();
    }

    #[test]
    fn frozen_face_never_ticks() {
        let config = WatchConfig::builder()
            .frozen_at(TimeOfDay::from_hms(10, 10, 30))
            .build();
        let counter = Counter::default();
        let face = WatchFace::new(&config, counter.clone()).unwrap();

        assert!(!face.is_ticking());
        thread::sleep(Duration::from_millis(20));
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
        assert_eq!(face.time(), TimeOfDay::from_hms(10, 10, 30));
    }

    #[test]
    fn measure_and_draw() {
        let face = WatchFace::frozen(&WatchConfig::default(), TimeOfDay::from_seconds(45_000));
        assert_eq!(
            face.measure(MeasureSpec::Exactly(800), MeasureSpec::Exactly(600)),
            Size::square(600)
        );
        assert_eq!(
            face.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified),
            Size::square(500)
        );

        let first = face.draw(Size::square(600));
        let second = face.draw(Size::square(600));
        assert_eq!(first, second);
        assert!(matches!(first.primitives()[0], Primitive::Disc { .. }));
    }

    #[test]
    fn zero_period_falls_back_to_default() {
        assert_eq!(effective_period(Duration::ZERO), Duration::from_secs(1));
        assert_eq!(effective_period(Duration::from_millis(250)), Duration::from_millis(250));
    }
}
