use crate::{
    error::SkytraceResult,
    geom::GeoPoint,
    settings::MotionSettings,
    surface::{CameraPose, RenderSurface},
};

/// Drives the marker and the camera framing for one run. Holds no state of
/// its own; every call is a straight sequence of surface operations.
pub struct CameraTracker<'a> {
    settings: &'a MotionSettings,
}

impl<'a> CameraTracker<'a> {
    pub fn new(settings: &'a MotionSettings) -> Self {
        Self { settings }
    }

    /// One eased flight to the start point before per-frame updates begin.
    pub fn approach<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        start: GeoPoint,
    ) -> SkytraceResult<()> {
        surface.fly_to(
            start,
            self.settings.approach_zoom,
            self.settings.approach_duration_ms,
        )
    }

    /// Per-tick update while running: marker first, then the biased camera
    /// jump at the in-motion zoom.
    pub fn track<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        position: GeoPoint,
    ) -> SkytraceResult<()> {
        surface.move_marker(position)?;
        surface.set_center(position)?;
        surface.jump_to(CameraPose {
            center: self.biased(position),
            zoom: self.settings.in_motion_zoom,
            bearing: self.settings.bearing,
        })
    }

    /// Terminal framing: the marker snaps to the literal end point, the camera
    /// pulls out to the overview zoom, and the marker leaves the surface.
    pub fn settle<S: RenderSurface + ?Sized>(
        &self,
        surface: &mut S,
        end: GeoPoint,
    ) -> SkytraceResult<()> {
        surface.move_marker(end)?;
        surface.set_center(end)?;
        surface.jump_to(CameraPose {
            center: self.biased(end),
            zoom: self.settings.overview_zoom,
            bearing: self.settings.bearing,
        })?;
        surface.remove_marker()
    }

    fn biased(&self, point: GeoPoint) -> GeoPoint {
        point.offset_by(self.settings.camera_bias.lng, self.settings.camera_bias.lat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface_recording::{RecordingSurface, SurfaceEvent};

    #[test]
    fn track_moves_marker_then_recenters_with_bias() {
        let settings = MotionSettings::default();
        let tracker = CameraTracker::new(&settings);
        let mut surface = RecordingSurface::new();
        surface.place_marker(GeoPoint::new(10.0, 20.0)).unwrap();

        let position = GeoPoint::new(10.5, 20.5);
        tracker.track(&mut surface, position).unwrap();

        let events = surface.events();
        assert_eq!(events[1], SurfaceEvent::MarkerMoved { to: position });
        assert_eq!(events[2], SurfaceEvent::SetCenter { center: position });
        assert_eq!(
            events[3],
            SurfaceEvent::JumpTo {
                center: GeoPoint::new(10.5 - 0.013, 20.5 - 0.013),
                zoom: 15.0,
                bearing: 0.0,
            }
        );
    }

    #[test]
    fn settle_frames_the_end_and_removes_the_marker() {
        let settings = MotionSettings::default();
        let tracker = CameraTracker::new(&settings);
        let mut surface = RecordingSurface::new();
        surface.place_marker(GeoPoint::new(10.0, 20.0)).unwrap();

        let end = GeoPoint::new(11.0, 21.0);
        tracker.settle(&mut surface, end).unwrap();

        assert_eq!(surface.marker(), None);
        assert_eq!(surface.camera().zoom, 4.0);
        assert_eq!(surface.camera().center, GeoPoint::new(11.0 - 0.013, 21.0 - 0.013));
        assert_eq!(surface.events().last(), Some(&SurfaceEvent::MarkerRemoved));
    }

    #[test]
    fn approach_is_a_single_eased_flight() {
        let settings = MotionSettings::default();
        let tracker = CameraTracker::new(&settings);
        let mut surface = RecordingSurface::new();

        tracker
            .approach(&mut surface, GeoPoint::new(-74.0, 40.7))
            .unwrap();

        assert_eq!(
            surface.events(),
            &[SurfaceEvent::FlyTo {
                center: GeoPoint::new(-74.0, 40.7),
                zoom: 7.0,
                duration_ms: 1_000,
            }]
        );
    }
}
