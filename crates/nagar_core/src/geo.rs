//! Degree-space geometry for complaint and staff locations.
//!
//! Distances are plain Euclidean over raw latitude/longitude degrees.
//! At city scale the error against geodesic distance is irrelevant and
//! the comparison stays exact and dependency-free.

use serde::{Deserialize, Serialize};

/// A raw latitude/longitude point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Euclidean distance between two points in degree space.
pub fn distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let dx = a.lat - b.lat;
    let dy = a.lng - b.lng;
    (dx * dx + dy * dy).sqrt()
}

/// Rectangular city extent used to project points onto the unit square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CityBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// Sample-city bounds (Mumbai-ish).
pub const CITY_BOUNDS: CityBounds = CityBounds {
    min_lat: 18.89,
    max_lat: 19.3,
    min_lng: 72.75,
    max_lng: 73.05,
};

impl CityBounds {
    /// Project a point onto the unit square, clamped to [0, 1].
    /// y grows downward (screen convention), so latitude is inverted.
    pub fn normalize(&self, p: GeoPoint) -> (f64, f64) {
        let x = (p.lng - self.min_lng) / (self.max_lng - self.min_lng);
        let y = 1.0 - (p.lat - self.min_lat) / (self.max_lat - self.min_lat);
        (x.clamp(0.0, 1.0), y.clamp(0.0, 1.0))
    }
}

impl Default for CityBounds {
    fn default() -> Self {
        CITY_BOUNDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = GeoPoint::new(19.1, 72.86);
        assert_eq!(distance(p, p), 0.0);
    }

    #[test]
    fn test_distance_symmetric() {
        let a = GeoPoint::new(19.0, 72.8);
        let b = GeoPoint::new(19.2, 72.9);
        assert_eq!(distance(a, b), distance(b, a));
    }

    #[test]
    fn test_distance_pythagorean() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
    }

    #[test]
    fn test_normalize_corners() {
        let b = CITY_BOUNDS;
        // South-west corner: x=0, y=1 (bottom of the screen)
        let (x, y) = b.normalize(GeoPoint::new(b.min_lat, b.min_lng));
        assert_eq!((x, y), (0.0, 1.0));
        // North-east corner: x=1, y=0
        let (x, y) = b.normalize(GeoPoint::new(b.max_lat, b.max_lng));
        assert_eq!((x, y), (1.0, 0.0));
    }

    #[test]
    fn test_normalize_clamps_outside_points() {
        let b = CITY_BOUNDS;
        let (x, y) = b.normalize(GeoPoint::new(0.0, 0.0));
        assert_eq!((x, y), (0.0, 1.0));
        let (x, y) = b.normalize(GeoPoint::new(90.0, 180.0));
        assert_eq!((x, y), (1.0, 0.0));
    }
}
