use std::collections::BTreeMap;

use crate::{
    error::{SkytraceError, SkytraceResult},
    geom::GeoPoint,
    surface::{CameraPose, PathOverlay, RenderSurface},
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceEvent {
    FlyTo {
        center: GeoPoint,
        zoom: f64,
        duration_ms: u64,
    },
    SetCenter {
        center: GeoPoint,
    },
    JumpTo {
        center: GeoPoint,
        zoom: f64,
        bearing: f64,
    },
    MarkerPlaced {
        at: GeoPoint,
    },
    MarkerMoved {
        to: GeoPoint,
    },
    MarkerRemoved,
    OverlayRemoved {
        name: String,
    },
    OverlayPublished {
        overlay: PathOverlay,
    },
}

/// In-memory render surface: records every operation as a `SurfaceEvent` and
/// tracks the live camera, marker, and overlay sources. Serves tests, the CLI,
/// and any host that wants an event feed instead of a real map.
///
/// Sequencing misuse (moving a marker that was never placed, publishing over
/// an existing source) is a hard error rather than a silent overwrite.
#[derive(Debug)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
    camera: CameraPose,
    marker: Option<GeoPoint>,
    overlays: BTreeMap<String, PathOverlay>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            camera: CameraPose {
                center: GeoPoint::new(0.0, 0.0),
                zoom: 1.0,
                bearing: 0.0,
            },
            marker: None,
            overlays: BTreeMap::new(),
        }
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn marker(&self) -> Option<GeoPoint> {
        self.marker
    }

    pub fn overlay(&self, name: &str) -> Option<&PathOverlay> {
        self.overlays.get(name)
    }

    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for RecordingSurface {
    fn fly_to(&mut self, center: GeoPoint, zoom: f64, duration_ms: u64) -> SkytraceResult<()> {
        self.camera.center = center;
        self.camera.zoom = zoom;
        self.events.push(SurfaceEvent::FlyTo {
            center,
            zoom,
            duration_ms,
        });
        Ok(())
    }

    fn set_center(&mut self, center: GeoPoint) -> SkytraceResult<()> {
        self.camera.center = center;
        self.events.push(SurfaceEvent::SetCenter { center });
        Ok(())
    }

    fn jump_to(&mut self, pose: CameraPose) -> SkytraceResult<()> {
        self.camera = pose;
        self.events.push(SurfaceEvent::JumpTo {
            center: pose.center,
            zoom: pose.zoom,
            bearing: pose.bearing,
        });
        Ok(())
    }

    fn place_marker(&mut self, at: GeoPoint) -> SkytraceResult<()> {
        if self.marker.is_some() {
            return Err(SkytraceError::surface("marker already placed"));
        }
        self.marker = Some(at);
        self.events.push(SurfaceEvent::MarkerPlaced { at });
        Ok(())
    }

    fn move_marker(&mut self, to: GeoPoint) -> SkytraceResult<()> {
        if self.marker.is_none() {
            return Err(SkytraceError::surface("no marker to move"));
        }
        self.marker = Some(to);
        self.events.push(SurfaceEvent::MarkerMoved { to });
        Ok(())
    }

    fn remove_marker(&mut self) -> SkytraceResult<()> {
        if self.marker.take().is_none() {
            return Err(SkytraceError::surface("no marker to remove"));
        }
        self.events.push(SurfaceEvent::MarkerRemoved);
        Ok(())
    }

    fn has_source(&self, name: &str) -> bool {
        self.overlays.contains_key(name)
    }

    fn remove_overlay(&mut self, name: &str) -> SkytraceResult<()> {
        if self.overlays.remove(name).is_none() {
            return Err(SkytraceError::surface(format!(
                "unknown overlay source '{name}'"
            )));
        }
        self.events.push(SurfaceEvent::OverlayRemoved {
            name: name.to_string(),
        });
        Ok(())
    }

    fn publish_overlay(&mut self, overlay: &PathOverlay) -> SkytraceResult<()> {
        if self.overlays.contains_key(&overlay.name) {
            return Err(SkytraceError::surface(format!(
                "overlay source '{}' already exists",
                overlay.name
            )));
        }
        self.overlays.insert(overlay.name.clone(), overlay.clone());
        self.events.push(SurfaceEvent::OverlayPublished {
            overlay: overlay.clone(),
        });
        Ok(())
    }
}
