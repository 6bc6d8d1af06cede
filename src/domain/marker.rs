use crate::domain::measure::LatLng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Source,
    Destination,
    /// Standalone point placed with the point tool
    Point,
}

/// A map marker at a clicked position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub latlng: LatLng,
    pub role: MarkerRole,
}

impl Marker {
    pub fn source(latlng: LatLng) -> Self {
        Self {
            latlng,
            role: MarkerRole::Source,
        }
    }

    pub fn destination(latlng: LatLng) -> Self {
        Self {
            latlng,
            role: MarkerRole::Destination,
        }
    }

    pub fn point(latlng: LatLng) -> Self {
        Self {
            latlng,
            role: MarkerRole::Point,
        }
    }
}
