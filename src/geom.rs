use geo::{Distance as _, Haversine};

/// Longitude/latitude pair in degrees, WGS84 convention. Immutable value type.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// A copy shifted by the given deltas in degrees. Never mutates in place.
    pub fn offset_by(self, d_lng: f64, d_lat: f64) -> Self {
        Self {
            lng: self.lng + d_lng,
            lat: self.lat + d_lat,
        }
    }
}

impl From<GeoPoint> for geo::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Point::new(p.lng, p.lat)
    }
}

impl From<geo::Point<f64>> for GeoPoint {
    fn from(p: geo::Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceUnit {
    Meters,
    Kilometers,
    #[default]
    Miles,
    NauticalMiles,
    Feet,
}

impl DistanceUnit {
    pub fn meters_per_unit(self) -> f64 {
        match self {
            Self::Meters => 1.0,
            Self::Kilometers => 1_000.0,
            Self::Miles => 1_609.344,
            Self::NauticalMiles => 1_852.0,
            Self::Feet => 0.3048,
        }
    }
}

/// Unit-tagged scalar distance.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    pub fn new(value: f64, unit: DistanceUnit) -> Self {
        Self { value, unit }
    }

    /// Great-circle distance between two points, expressed in `unit`.
    pub fn great_circle(a: GeoPoint, b: GeoPoint, unit: DistanceUnit) -> Self {
        let meters = Haversine::distance(geo::Point::from(a), geo::Point::from(b));
        Self {
            value: meters / unit.meters_per_unit(),
            unit,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> DistanceUnit {
        self.unit
    }

    pub fn to_meters(&self) -> f64 {
        self.value * self.unit.meters_per_unit()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            unit: self.unit,
        }
    }
}

/// Average speed for one run, kept as the (distance, duration) ratio so that
/// `distance_after(duration) == distance` holds exactly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Speed {
    distance: Distance,
    duration_secs: f64,
}

impl Speed {
    pub fn from_distance_duration(distance: Distance, duration_secs: f64) -> Self {
        Self {
            distance,
            duration_secs,
        }
    }

    pub fn unit(&self) -> DistanceUnit {
        self.distance.unit()
    }

    pub fn per_second(&self) -> f64 {
        self.distance.value() / self.duration_secs
    }

    pub fn distance_after(&self, secs: f64) -> Distance {
        self.distance.scaled(secs / self.duration_secs)
    }
}
