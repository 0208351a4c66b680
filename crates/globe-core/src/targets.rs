use crate::constants::MARKER_RADIUS;
use crate::geometry::lat_lng_to_position;
use glam::Vec3;

/// A named location shown as a marker on the globe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub latitude: f32,
    pub longitude: f32,
    pub name: &'static str,
    /// Relative marker size, 1.0 is nominal.
    pub size: f32,
}

impl Target {
    pub const fn new(latitude: f32, longitude: f32, name: &'static str, size: f32) -> Self {
        Self {
            latitude,
            longitude,
            name,
            size,
        }
    }

    /// Marker anchor in the globe's local frame.
    #[inline]
    pub fn position(&self) -> Vec3 {
        lat_lng_to_position(self.latitude, self.longitude, MARKER_RADIUS)
    }
}

pub const TARGETS: [Target; 15] = [
    Target::new(37.39, -122.08, "Intel", 1.2),
    Target::new(19.07, 72.87, "Paytm", 1.0),
    Target::new(37.77, -122.41, "Yelp", 1.0),
    Target::new(51.50, -0.12, "Deliveroo", 1.1),
    Target::new(37.39, -121.97, "Instacart", 1.0),
    Target::new(48.14, 11.57, "ESET", 0.9),
    Target::new(37.77, -122.39, "HackerOne", 1.1),
    Target::new(12.97, 77.59, "Goibibo", 0.9),
    Target::new(28.61, 77.20, "Redbus", 0.9),
    Target::new(37.77, -122.41, "Airtable", 1.0),
    Target::new(37.77, -122.41, "Udemy", 0.9),
    Target::new(50.10, 8.68, "Open-Xchange", 0.9),
    Target::new(37.77, -122.41, "Greenhouse", 0.9),
    Target::new(52.52, 13.40, "ZenMate", 0.9),
    Target::new(40.71, -74.00, "Constant Contact", 0.9),
];

/// Pairs of indices into [`TARGETS`] joined by an animated arc.
pub const CONNECTIONS: [(usize, usize); 8] = [
    (0, 4),
    (0, 2),
    (2, 10),
    (1, 8),
    (1, 11),
    (3, 13),
    (5, 11),
    (7, 8),
];
