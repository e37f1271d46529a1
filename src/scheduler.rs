//! Fixed-rate ticker that samples the clock and asks the host for a redraw.
//!
//! The worker thread is owned by a [`Ticker`] handle. Cancelling the handle
//! (explicitly or by dropping it) stops and joins the worker, so once
//! [`Ticker::cancel`] returns no further redraw requests are issued.

use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::error::WatchError;
use crate::time::{SharedTime, TimeSource};

/// Host hook marking the watch's visual content as stale.
pub trait RedrawSignal: Send + 'static {
    /// Returns `false` once the host can no longer accept requests.
    fn request_redraw(&self) -> bool;
}

#[derive(Debug)]
pub struct Ticker {
    stop: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts ticking immediately: the first sample and redraw happen before
    /// the first period elapses.
    pub fn start<C, R>(
        period: Duration,
        clock: C,
        time: SharedTime,
        redraw: R,
    ) -> Result<Self, WatchError>
    where
        C: TimeSource,
        R: RedrawSignal,
    {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        let worker = thread::Builder::new()
            .name("watch-ticker".to_string())
            .spawn(move || {
                log::debug!("ticker started, period {:?}", period);
                let mut deadline = Instant::now();
                loop {
                    let now = clock.now();
                    time.store(now);
                    log::trace!("tick {now}");
                    if !redraw.request_redraw() {
                        log::warn!("redraw target closed, stopping ticker");
                        break;
                    }

                    deadline += period;
                    let wait = deadline.saturating_duration_since(Instant::now());
                    match stop_rx.recv_timeout(wait) {
                        Err(RecvTimeoutError::Timeout) => continue,
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                log::debug!("ticker stopped");
            })?;

        Ok(Self {
            stop: Some(stop_tx),
            worker: Some(worker),
        })
    }

    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.is_finished())
    }

    /// Stops the worker and waits for it. Later calls do nothing.
    pub fn cancel(&mut self) {
        if let Some(stop) = self.stop.take() {
            // The worker may already have exited on its own.
            let _ = stop.send(());
        }
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                log::error!("ticker thread panicked");
            }
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::TimeOfDay;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct CountingSignal {
        count: Arc<AtomicUsize>,
        closed: Arc<AtomicBool>,
    }

    impl CountingSignal {
        fn count(&self) -> usize {
            self.count.load(Ordering::SeqCst)
        }
    }

    impl RedrawSignal for CountingSignal {
        fn request_redraw(&self) -> bool {
            self.count.fetch_add(1, Ordering::SeqCst);
            !self.closed.load(Ordering::SeqCst)
        }
    }

    struct FixedClock(TimeOfDay);

    impl TimeSource for FixedClock {
        fn now(&self) -> TimeOfDay {
            self.0
        }
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
    fn first_tick_is_immediate() {
        let signal = CountingSignal::default();
        let shared = SharedTime::new(TimeOfDay::MIDNIGHT);
        let sampled = TimeOfDay::from_hms(9, 41, 0);
        let mut ticker = Ticker::start(
            Duration::from_secs(3600),
            FixedClock(sampled),
            shared.clone(),
            signal.clone(),
        )
        .unwrap();

        assert!(wait_for(|| signal.count() == 1));
        assert_eq!(shared.load(), sampled);
        ticker.cancel();
        assert_eq!(signal.count(), 1);
    }

    #[test]
    fn keeps_ticking_each_period() {
        let signal = CountingSignal::default();
        let ticker = Ticker::start(
            Duration::from_millis(10),
            FixedClock(TimeOfDay::MIDNIGHT),
            SharedTime::default(),
            signal.clone(),
        )
        .unwrap();

        assert!(wait_for(|| signal.count() >= 4));
        assert!(ticker.is_running());
    }

    #[test]
    fn no_redraws_after_cancel() {
        let signal = CountingSignal::default();
        let mut ticker = Ticker::start(
            Duration::from_millis(5),
            FixedClock(TimeOfDay::MIDNIGHT),
            SharedTime::default(),
            signal.clone(),
        )
        .unwrap();
        assert!(wait_for(|| signal.count() >= 2));

        ticker.cancel();
        assert!(!ticker.is_running());
        let after_cancel = signal.count();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(signal.count(), after_cancel);

        ticker.cancel();
        assert_eq!(signal.count(), after_cancel);
    }

    #[test]
    fn drop_stops_the_worker() {
        let signal = CountingSignal::default();
        {
            let _ticker = Ticker::start(
                Duration::from_millis(5),
                FixedClock(TimeOfDay::MIDNIGHT),
                SharedTime::default(),
                signal.clone(),
            )
            .unwrap();
            assert!(wait_for(|| signal.count() >= 1));
        }
        let after_drop = signal.count();
        thread::sleep(Duration::from_millis(50));
        assert_eq!(signal.count(), after_drop);
    }

    #[test]
    fn closed_host_ends_the_loop() {
        let signal = CountingSignal::default();
        signal.closed.store(true, Ordering::SeqCst);
        let ticker = Ticker::start(
            Duration::from_millis(5),
            FixedClock(TimeOfDay::MIDNIGHT),
            SharedTime::default(),
            signal.clone(),
        )
        .unwrap();

        assert!(wait_for(|| !ticker.is_running()));
        assert_eq!(signal.count(), 1);
    }
}
