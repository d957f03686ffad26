use std::{
    cell::Cell,
    rc::Rc,
    thread,
    time::{Duration, Instant},
};

/// Monotonic wall-clock reading with an arbitrary origin.
pub trait TimeSource {
    fn now(&self) -> Duration;
}

/// Host frame pacing: `next_frame` returns when the host is ready for another
/// tick. One registration per tick; the caller re-invokes it to continue.
pub trait FrameScheduler {
    fn next_frame(&mut self);
}

pub struct MonotonicTime {
    origin: Instant,
}

impl MonotonicTime {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicTime {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for MonotonicTime {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Best-effort pacing by sleeping a fixed interval between frames.
pub struct FixedRateScheduler {
    interval: Duration,
}

impl FixedRateScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs_f64(1.0 / f64::from(fps.max(1))))
    }
}

impl FrameScheduler for FixedRateScheduler {
    fn next_frame(&mut self) {
        thread::sleep(self.interval);
    }
}

/// Deterministic clock for tests: time moves only when its paired scheduler
/// advances it.
#[derive(Clone)]
pub struct VirtualTime {
    micros: Rc<Cell<u64>>,
}

impl VirtualTime {
    pub fn advance(&self, by: Duration) {
        self.micros.set(self.micros.get() + by.as_micros() as u64);
    }
}

impl TimeSource for VirtualTime {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.get())
    }
}

pub struct VirtualScheduler {
    time: VirtualTime,
    step: Duration,
}

impl FrameScheduler for VirtualScheduler {
    fn next_frame(&mut self) {
        self.time.advance(self.step);
    }
}

/// A virtual clock and the scheduler that drives it, stepping `step` per frame.
pub fn virtual_clock(step: Duration) -> (VirtualTime, VirtualScheduler) {
    let time = VirtualTime {
        micros: Rc::new(Cell::new(0)),
    };
    let scheduler = VirtualScheduler {
        time: time.clone(),
        step,
    };
    (time, scheduler)
}
