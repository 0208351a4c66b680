//! Projection and curve helpers.
//!
//! Everything here is pure and works in the globe's unrotated local frame:
//! +Y is the north pole and the prime meridian faces the camera once the
//! longitude offset of 180° is applied.

use glam::{Quat, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

/// Project geographic degrees onto a sphere of the given radius.
///
/// The polar angle is measured from +Y, the azimuth is offset by 180° and the
/// X axis is mirrored so that markers line up with the sphere's front face.
#[inline]
pub fn lat_lng_to_position(latitude: f32, longitude: f32, radius: f32) -> Vec3 {
    let phi = (90.0 - latitude).to_radians();
    let theta = (longitude + 180.0).to_radians();
    Vec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Quadratic Bézier through `p0` and `p2` with control point `p1`.
#[inline]
pub fn quadratic_curve_point(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Control point for a connection arc: the endpoint average pushed out to
/// `radius`. Antipodal endpoints have no average direction; they bulge
/// towards the north pole instead.
#[inline]
pub fn arc_control_point(a: Vec3, b: Vec3, radius: f32) -> Vec3 {
    let mid = (a + b) * 0.5;
    mid.try_normalize().unwrap_or(Vec3::Y) * radius
}

/// A quadratic curve defined in the globe's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticCurve {
    pub start: Vec3,
    pub control: Vec3,
    pub end: Vec3,
}

impl QuadraticCurve {
    pub fn bulged(start: Vec3, end: Vec3, bulge_radius: f32) -> Self {
        Self {
            start,
            control: arc_control_point(start, end, bulge_radius),
            end,
        }
    }

    #[inline]
    pub fn point(&self, t: f32) -> Vec3 {
        quadratic_curve_point(self.start, self.control, self.end, t)
    }

    /// Evenly spaced samples in parameter space, `segments + 1` points.
    pub fn sample(&self, segments: u32) -> Vec<Vec3> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point(i as f32 / segments as f32))
            .collect()
    }
}

/// Rotation for Euler angles applied in X, Y, Z order (`Rx * Ry * Rz`).
#[inline]
pub fn euler_xyz(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_rotation_x(x) * Quat::from_rotation_y(y) * Quat::from_rotation_z(z)
}

/// Rotation that turns a ring's +Z normal towards `target`, as seen from `position`.
#[inline]
pub fn facing(position: Vec3, target: Vec3) -> Quat {
    match (target - position).try_normalize() {
        Some(dir) => Quat::from_rotation_arc(Vec3::Z, dir),
        None => Quat::IDENTITY,
    }
}

/// Uniformly distributed direction scaled by a radius drawn from `[r_min, r_max)`.
pub fn random_shell_point<R: Rng + ?Sized>(rng: &mut R, r_min: f32, r_max: f32) -> Vec3 {
    let radius = r_min + rng.gen::<f32>() * (r_max - r_min);
    let theta = rng.gen::<f32>() * TAU;
    let phi = (2.0 * rng.gen::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Random phase offset in `[0, 2π)`.
#[inline]
pub fn random_phase<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    rng.gen::<f32>() * PI * 2.0
}
