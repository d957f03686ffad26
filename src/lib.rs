#![forbid(unsafe_code)]

pub mod clock;
pub mod error;
pub mod finalize;
pub mod geom;
pub mod interpolate;
pub mod path;
pub mod scheduler;
pub mod settings;
pub mod simulate;
pub mod surface;
pub mod surface_recording;
pub mod tracking;

pub use clock::{AnimationSession, AnimationState, ProgressClock, TickOutcome};
pub use error::{SkytraceError, SkytraceResult};
pub use geom::{Distance, DistanceUnit, GeoPoint, Speed};
pub use interpolate::position_along;
pub use path::{FlightPath, FlightPlan, MotionRequest};
pub use scheduler::{
    FixedRateScheduler, FrameScheduler, MonotonicTime, TimeSource, VirtualScheduler, VirtualTime,
    virtual_clock,
};
pub use settings::{CameraBias, MotionSettings, StrokeStyle};
pub use simulate::{MotionEngine, simulate_motion};
pub use surface::{CameraPose, PathOverlay, RenderSurface};
pub use surface_recording::{RecordingSurface, SurfaceEvent};
pub use tracking::CameraTracker;
