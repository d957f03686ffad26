use geo::{Haversine, InterpolatePoint};

use crate::{
    geom::{Distance, GeoPoint},
    path::FlightPath,
};

/// The point lying `traveled` along the great-circle line from the path's
/// start to its end. Geodesic, not a linear lng/lat interpolation.
///
/// Callers clamp `traveled` to [0, total) while a run is live; the terminal
/// frame snaps to the literal end point instead of calling this.
pub fn position_along(path: &FlightPath, traveled: Distance) -> GeoPoint {
    Haversine::point_at_distance_between(
        geo::Point::from(path.start),
        geo::Point::from(path.end),
        traveled.to_meters(),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::DistanceUnit;
    use approx::assert_abs_diff_eq;

    fn equator_path() -> FlightPath {
        FlightPath {
            start: GeoPoint::new(0.0, 0.0),
            end: GeoPoint::new(90.0, 0.0),
        }
    }

    #[test]
    fn zero_distance_is_the_start_point() {
        let path = equator_path();
        let p = position_along(&path, Distance::new(0.0, DistanceUnit::Miles));
        assert_abs_diff_eq!(p.lng, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.lat, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn total_distance_is_the_end_point() {
        let path = equator_path();
        let total = Distance::great_circle(path.start, path.end, DistanceUnit::Kilometers);
        let p = position_along(&path, total);
        assert_abs_diff_eq!(p.lng, 90.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.lat, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn halfway_along_the_equator_is_the_midpoint() {
        let path = equator_path();
        let total = Distance::great_circle(path.start, path.end, DistanceUnit::Meters);
        let p = position_along(&path, total.scaled(0.5));
        assert_abs_diff_eq!(p.lng, 45.0, epsilon = 1e-6);
        assert_abs_diff_eq!(p.lat, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn interpolation_is_unit_consistent() {
        let path = FlightPath {
            start: GeoPoint::new(-74.0, 40.7),
            end: GeoPoint::new(-73.9, 40.8),
        };
        let miles = Distance::great_circle(path.start, path.end, DistanceUnit::Miles);
        let meters = Distance::great_circle(path.start, path.end, DistanceUnit::Meters);
        let a = position_along(&path, miles.scaled(0.25));
        let b = position_along(&path, meters.scaled(0.25));
        assert_abs_diff_eq!(a.lng, b.lng, epsilon = 1e-9);
        assert_abs_diff_eq!(a.lat, b.lat, epsilon = 1e-9);
    }
}
