use crate::{
    clock::{AnimationSession, AnimationState, TickOutcome},
    error::{SkytraceError, SkytraceResult},
    finalize,
    path::{FlightPlan, MotionRequest},
    scheduler::{FrameScheduler, TimeSource},
    settings::MotionSettings,
    surface::RenderSurface,
    tracking::CameraTracker,
};

/// Owns one render surface and runs motion sessions against it, one at a
/// time. Starting a new run invalidates the previous session and tears down
/// its marker before anything else touches the surface.
pub struct MotionEngine<S: RenderSurface, T: TimeSource> {
    surface: S,
    time: T,
    settings: MotionSettings,
    state: AnimationState,
    session: Option<AnimationSession>,
}

impl<S: RenderSurface, T: TimeSource> MotionEngine<S, T> {
    pub fn new(surface: S, time: T) -> Self {
        Self::with_settings(surface, time, MotionSettings::default())
    }

    pub fn with_settings(surface: S, time: T, settings: MotionSettings) -> Self {
        Self {
            surface,
            time,
            settings,
            state: AnimationState::Idle,
            session: None,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Validates the request, supersedes any run in flight, and begins a new
    /// session: eased approach to the start point, marker placed, clock armed.
    #[tracing::instrument(skip(self))]
    pub fn start(&mut self, request: MotionRequest) -> SkytraceResult<()> {
        let plan = FlightPlan::build(&request, self.settings.unit)?;
        tracing::debug!(
            distance = plan.distance.value(),
            duration_secs = plan.duration_secs,
            "starting run"
        );

        if let Some(previous) = self.session.as_mut() {
            previous.invalidate();
        }
        self.session = None;

        let tracker = CameraTracker::new(&self.settings);
        tracker.approach(&mut self.surface, plan.path.start)?;

        if self.state == AnimationState::Running {
            self.surface.remove_marker()?;
        }
        self.surface.place_marker(plan.path.start)?;

        let started_at = self.time.now();
        self.session = Some(AnimationSession::begin(plan, started_at));
        self.state = AnimationState::Running;
        Ok(())
    }

    /// Advances the active session by one frame: interpolate and track while
    /// progress < 1, settle and publish the trace at the terminal frame.
    pub fn tick(&mut self) -> SkytraceResult<AnimationState> {
        let now = self.time.now();
        let Some(session) = self.session.as_mut() else {
            return Err(SkytraceError::animation("no active run to tick"));
        };
        let outcome = session.tick(now);
        let path = session.plan().path;

        match outcome {
            TickOutcome::Advanced { progress, position } => {
                tracing::trace!(progress, "advance");
                let tracker = CameraTracker::new(&self.settings);
                tracker.track(&mut self.surface, position)?;
                Ok(AnimationState::Running)
            }
            TickOutcome::Finished => {
                let tracker = CameraTracker::new(&self.settings);
                tracker.settle(&mut self.surface, path.end)?;

                let overlay = finalize::traced_overlay(&path, &self.settings);
                finalize::replace_overlay(&mut self.surface, &overlay)?;

                self.session = None;
                self.state = AnimationState::Completed;
                tracing::debug!("run completed");
                Ok(AnimationState::Completed)
            }
            TickOutcome::Superseded => Ok(self.state),
        }
    }

    /// Pumps the frame loop until the active run completes. Control returns
    /// to the scheduler between ticks; nothing advances outside of it.
    pub fn run(&mut self, scheduler: &mut dyn FrameScheduler) -> SkytraceResult<()> {
        while self.tick()? == AnimationState::Running {
            scheduler.next_frame();
        }
        Ok(())
    }
}

/// One-shot entry point: animate a drone from start to end over
/// `duration_secs`, then hand the surface back with the traced path on it.
#[tracing::instrument(skip(surface, time, scheduler))]
pub fn simulate_motion<S: RenderSurface, T: TimeSource>(
    surface: S,
    time: T,
    scheduler: &mut dyn FrameScheduler,
    start_lng: f64,
    start_lat: f64,
    end_lng: f64,
    end_lat: f64,
    duration_secs: f64,
) -> SkytraceResult<S> {
    let mut engine = MotionEngine::new(surface, time);
    engine.start(MotionRequest::new(
        start_lng,
        start_lat,
        end_lng,
        end_lat,
        duration_secs,
    ))?;
    engine.run(scheduler)?;
    Ok(engine.into_surface())
}
