use crate::{
    error::{SkytraceError, SkytraceResult},
    geom::{Distance, DistanceUnit, GeoPoint, Speed},
};

/// Raw entry payload for one motion run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MotionRequest {
    pub start_lng: f64,
    pub start_lat: f64,
    pub end_lng: f64,
    pub end_lat: f64,
    pub duration_secs: f64,
}

impl MotionRequest {
    pub fn new(
        start_lng: f64,
        start_lat: f64,
        end_lng: f64,
        end_lat: f64,
        duration_secs: f64,
    ) -> Self {
        Self {
            start_lng,
            start_lat,
            end_lng,
            end_lat,
            duration_secs,
        }
    }

    pub fn start(&self) -> GeoPoint {
        GeoPoint::new(self.start_lng, self.start_lat)
    }

    pub fn end(&self) -> GeoPoint {
        GeoPoint::new(self.end_lng, self.end_lat)
    }

    pub fn validate(&self) -> SkytraceResult<()> {
        for (name, value) in [
            ("start_lng", self.start_lng),
            ("start_lat", self.start_lat),
            ("end_lng", self.end_lng),
            ("end_lat", self.end_lat),
        ] {
            if !value.is_finite() {
                return Err(SkytraceError::validation(format!("{name} must be finite")));
            }
            // An exactly-zero coordinate is rejected along with non-finite
            // ones; callers treat 0.0 as "unset".
            if value == 0.0 {
                return Err(SkytraceError::validation(format!("{name} must be non-zero")));
            }
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(SkytraceError::validation(
                "duration_secs must be a positive number of seconds",
            ));
        }
        Ok(())
    }
}

/// Two-point path for one run: start and end. Replaced wholesale per run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlightPath {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl FlightPath {
    pub fn coords(&self) -> [GeoPoint; 2] {
        [self.start, self.end]
    }
}

/// Derived figures for one run, computed once at start and immutable after.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlightPlan {
    pub path: FlightPath,
    pub distance: Distance,
    pub speed: Speed,
    pub duration_secs: f64,
}

impl FlightPlan {
    pub fn build(request: &MotionRequest, unit: DistanceUnit) -> SkytraceResult<Self> {
        request.validate()?;

        let path = FlightPath {
            start: request.start(),
            end: request.end(),
        };
        let distance = Distance::great_circle(path.start, path.end, unit);
        let speed = Speed::from_distance_duration(distance, request.duration_secs);

        Ok(Self {
            path,
            distance,
            speed,
            duration_secs: request.duration_secs,
        })
    }

    /// Distance covered at `progress` in [0, 1); stays strictly below the
    /// total for progress < 1.
    pub fn traveled_at(&self, progress: f64) -> Distance {
        self.distance.scaled(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SkytraceError;

    fn request() -> MotionRequest {
        MotionRequest::new(-74.0, 40.7, -73.9, 40.8, 5.0)
    }

    #[test]
    fn build_computes_distance_and_speed() {
        let plan = FlightPlan::build(&request(), DistanceUnit::Miles).unwrap();
        assert!(plan.distance.value() > 0.0);
        assert_eq!(plan.distance.unit(), DistanceUnit::Miles);
        assert_eq!(
            plan.speed.distance_after(plan.duration_secs).value(),
            plan.distance.value()
        );
    }

    #[test]
    fn zero_coordinate_is_rejected() {
        let mut req = request();
        req.start_lng = 0.0;
        let err = FlightPlan::build(&req, DistanceUnit::Miles).unwrap_err();
        assert!(matches!(err, SkytraceError::Validation(_)));
        assert!(err.to_string().contains("start_lng"));
    }

    #[test]
    fn non_finite_coordinate_is_rejected() {
        let mut req = request();
        req.end_lat = f64::NAN;
        let err = FlightPlan::build(&req, DistanceUnit::Miles).unwrap_err();
        assert!(err.to_string().contains("end_lat"));

        req.end_lat = f64::INFINITY;
        assert!(FlightPlan::build(&req, DistanceUnit::Miles).is_err());
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        for bad in [0.0, -2.0, f64::NAN] {
            let mut req = request();
            req.duration_secs = bad;
            let err = FlightPlan::build(&req, DistanceUnit::Miles).unwrap_err();
            assert!(matches!(err, SkytraceError::Validation(_)));
        }
    }

    #[test]
    fn traveled_stays_below_total_before_completion() {
        let plan = FlightPlan::build(&request(), DistanceUnit::Miles).unwrap();
        let near_end = plan.traveled_at(0.999_999);
        assert!(near_end.value() < plan.distance.value());
        assert_eq!(plan.traveled_at(0.0).value(), 0.0);
    }
}
