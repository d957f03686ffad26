use crate::geom::DistanceUnit;

/// Fixed camera-center offset in degrees, a visual anchor correction applied
/// on top of the tracked position. Not a geodesic computation.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CameraBias {
    pub lng: f64,
    pub lat: f64,
}

impl Default for CameraBias {
    fn default() -> Self {
        Self {
            lng: -0.013,
            lat: -0.013,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "#FF0000".to_string(),
            width: 2.0,
        }
    }
}

/// Per-run configuration. The defaults are the engine's stock framing.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MotionSettings {
    pub unit: DistanceUnit,
    /// Zoom for the eased approach flight to the start point.
    pub approach_zoom: f64,
    pub approach_duration_ms: u64,
    /// Zoom held for every frame while the marker is in motion.
    pub in_motion_zoom: f64,
    /// Wider framing applied once at completion.
    pub overview_zoom: f64,
    pub bearing: f64,
    pub camera_bias: CameraBias,
    pub overlay_name: String,
    pub stroke: StrokeStyle,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            unit: DistanceUnit::default(),
            approach_zoom: 7.0,
            approach_duration_ms: 1_000,
            in_motion_zoom: 15.0,
            overview_zoom: 4.0,
            bearing: 0.0,
            camera_bias: CameraBias::default(),
            overlay_name: "flight-path".to_string(),
            stroke: StrokeStyle::default(),
        }
    }
}
