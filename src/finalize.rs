use crate::{
    error::SkytraceResult,
    path::FlightPath,
    settings::MotionSettings,
    surface::{PathOverlay, RenderSurface},
};

/// The persistent trace for a completed run, built from the run's two
/// original endpoints — never from the sampled interpolation points.
pub fn traced_overlay(path: &FlightPath, settings: &MotionSettings) -> PathOverlay {
    PathOverlay {
        name: settings.overlay_name.clone(),
        coords: path.coords().to_vec(),
        stroke: settings.stroke.clone(),
    }
}

/// Publishes the trace, tearing down any prior overlay of the same name first
/// so the surface never holds two generations of the layer or its source.
pub fn replace_overlay<S: RenderSurface + ?Sized>(
    surface: &mut S,
    overlay: &PathOverlay,
) -> SkytraceResult<()> {
    if surface.has_source(&overlay.name) {
        surface.remove_overlay(&overlay.name)?;
    }
    surface.publish_overlay(overlay)
}
