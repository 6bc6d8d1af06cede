//! Distance measurement along a clicked polyline.

use serde::{Deserialize, Serialize};

/// Sphere radius used for map distances (WGS84 semi-major axis, metres)
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle (haversine) distance in metres.
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let sin_dlat = ((other.lat - self.lat).to_radians() / 2.0).sin();
        let sin_dlng = ((other.lng - self.lng).to_radians() / 2.0).sin();
        // rounding can push `a` past 1 for near-antipodal points
        let a = (sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlng * sin_dlng)
            .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_M * c
    }
}

/// Distances between consecutive points.
pub fn segment_lengths(points: &[LatLng]) -> Vec<f64> {
    points.windows(2).map(|w| w[0].distance_to(&w[1])).collect()
}

/// Total length of a polyline; zero for fewer than two points.
pub fn polyline_length(points: &[LatLng]) -> f64 {
    segment_lengths(points).iter().sum()
}

/// Measuring tool state.
///
/// While drawing, clicks append points. Once finished the shape stays
/// visible; the next click clears it and starts a new drawing without
/// adding the clicked point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurement {
    points: Vec<LatLng>,
    drawing: bool,
}

impl Measurement {
    /// A measurement that is already drawing.
    pub fn start() -> Self {
        Self {
            points: Vec::new(),
            drawing: true,
        }
    }

    pub fn click(&mut self, at: LatLng) {
        if !self.drawing {
            self.points.clear();
            self.drawing = true;
            return;
        }
        self.points.push(at);
    }

    pub fn finish(&mut self) {
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.drawing = false;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn points(&self) -> &[LatLng] {
        &self.points
    }

    pub fn segments(&self) -> Vec<f64> {
        segment_lengths(&self.points)
    }

    /// Current length in metres
    pub fn length(&self) -> f64 {
        polyline_length(&self.points)
    }
}
