use std::time::Duration;

use crate::{geom::GeoPoint, interpolate::position_along, path::FlightPlan};

/// Lifecycle of the animation: Idle until a valid start call, Running while
/// ticks advance, Completed once progress reaches 1. Completed has no outgoing
/// transition except a brand-new run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Idle,
    Running,
    Completed,
}

/// Maps wall-clock time to a progress ratio. Purely time-driven: frame-rate
/// variance changes how many samples are taken, never the wall duration.
#[derive(Clone, Copy, Debug)]
pub struct ProgressClock {
    started_at: Duration,
    duration: Duration,
}

impl ProgressClock {
    pub fn new(started_at: Duration, duration: Duration) -> Self {
        Self {
            started_at,
            duration,
        }
    }

    pub fn progress(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.started_at);
        elapsed.as_secs_f64() / self.duration.as_secs_f64()
    }
}

/// One logical run, from start to completion or supersession. A new run
/// invalidates the previous session before replacing it; an invalidated
/// session refuses to advance.
#[derive(Debug)]
pub struct AnimationSession {
    plan: FlightPlan,
    clock: ProgressClock,
    cancelled: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    Advanced { progress: f64, position: GeoPoint },
    Finished,
    Superseded,
}

impl AnimationSession {
    pub fn begin(plan: FlightPlan, started_at: Duration) -> Self {
        let clock = ProgressClock::new(started_at, Duration::from_secs_f64(plan.duration_secs));
        Self {
            plan,
            clock,
            cancelled: false,
        }
    }

    pub fn plan(&self) -> &FlightPlan {
        &self.plan
    }

    pub fn invalidate(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    pub fn tick(&mut self, now: Duration) -> TickOutcome {
        if self.cancelled {
            return TickOutcome::Superseded;
        }

        let progress = self.clock.progress(now);
        if progress < 1.0 {
            let traveled = self.plan.traveled_at(progress);
            let position = position_along(&self.plan.path, traveled);
            TickOutcome::Advanced { progress, position }
        } else {
            TickOutcome::Finished
        }
    }
}
