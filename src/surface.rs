use crate::{error::SkytraceResult, geom::GeoPoint, settings::StrokeStyle};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraPose {
    pub center: GeoPoint,
    pub zoom: f64,
    pub bearing: f64,
}

/// Named, persistent line rendering of a traveled path. Distinct from the
/// transient per-frame marker.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathOverlay {
    pub name: String,
    pub coords: Vec<GeoPoint>,
    pub stroke: StrokeStyle,
}

/// Capability seam to the host map. The engine owns no rendering state of its
/// own; everything visible goes through this trait, and failures from a real
/// surface propagate unrecovered.
pub trait RenderSurface {
    /// Eased transition to a new center and zoom over `duration_ms`.
    fn fly_to(&mut self, center: GeoPoint, zoom: f64, duration_ms: u64) -> SkytraceResult<()>;

    fn set_center(&mut self, center: GeoPoint) -> SkytraceResult<()>;

    /// Immediate camera change, no easing.
    fn jump_to(&mut self, pose: CameraPose) -> SkytraceResult<()>;

    fn place_marker(&mut self, at: GeoPoint) -> SkytraceResult<()>;

    fn move_marker(&mut self, to: GeoPoint) -> SkytraceResult<()>;

    fn remove_marker(&mut self) -> SkytraceResult<()>;

    fn has_source(&self, name: &str) -> bool;

    /// Removes both the rendering layer and its backing data source.
    fn remove_overlay(&mut self, name: &str) -> SkytraceResult<()>;

    fn publish_overlay(&mut self, overlay: &PathOverlay) -> SkytraceResult<()>;
}
