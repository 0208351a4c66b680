// Host-side tests for projection and curve helpers.

use globe_core::*;
use glam::{Quat, Vec3};
use rand::prelude::*;

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    (a - b).length() < eps
}

#[test]
fn projection_lands_on_sphere_surface() {
    // Property: every lat/lng pair projects to a point at exactly `radius`
    for radius in [0.5_f32, 1.0, 1.02, 3.0] {
        for lat in (-90..=90).step_by(15) {
            for lng in (-180..=180).step_by(20) {
                let p = lat_lng_to_position(lat as f32, lng as f32, radius);
                assert!(
                    (p.length() - radius).abs() < 1e-4 * radius.max(1.0),
                    "lat={lat} lng={lng} r={radius} -> |p|={}",
                    p.length()
                );
            }
        }
    }
}

#[test]
fn north_pole_is_straight_up_for_any_longitude() {
    for lng in [-180.0_f32, -77.0, 0.0, 45.0, 180.0] {
        let p = lat_lng_to_position(90.0, lng, 2.0);
        assert!(approx(p, Vec3::new(0.0, 2.0, 0.0), 1e-5), "lng={lng} -> {p:?}");
    }
    let south = lat_lng_to_position(-90.0, 10.0, 1.0);
    assert!(approx(south, Vec3::new(0.0, -1.0, 0.0), 1e-5));
}

#[test]
fn equator_reference_points() {
    // Prime meridian sits on +X once the 180° azimuth offset and mirror are applied
    let p = lat_lng_to_position(0.0, 0.0, 1.5);
    assert!(approx(p, Vec3::new(1.5, 0.0, 0.0), 1e-5), "{p:?}");

    let east = lat_lng_to_position(0.0, 90.0, 1.0);
    assert!(approx(east, Vec3::new(0.0, 0.0, -1.0), 1e-5), "{east:?}");

    let west = lat_lng_to_position(0.0, -90.0, 1.0);
    assert!(approx(west, Vec3::new(0.0, 0.0, 1.0), 1e-5), "{west:?}");
}

#[test]
fn curve_endpoints_are_exact() {
    let p0 = Vec3::new(0.3, -0.7, 0.9);
    let p1 = Vec3::new(1.1, 1.2, -0.4);
    let p2 = Vec3::new(-0.6, 0.2, 0.5);
    assert_eq!(quadratic_curve_point(p0, p1, p2, 0.0), p0);
    assert_eq!(quadratic_curve_point(p0, p1, p2, 1.0), p2);
}

#[test]
fn curve_midpoint_blends_quarter_half_quarter() {
    let p0 = Vec3::new(1.0, 0.0, 0.0);
    let p1 = Vec3::new(0.0, 2.0, 0.0);
    let p2 = Vec3::new(-1.0, 0.0, 0.0);
    let mid = quadratic_curve_point(p0, p1, p2, 0.5);
    assert_eq!(mid, Vec3::new(0.0, 1.0, 0.0));

    let q0 = Vec3::new(0.2, 0.4, 0.6);
    let q1 = Vec3::new(1.0, -1.0, 2.0);
    let q2 = Vec3::new(-0.4, 0.8, 0.0);
    let expected = q0 * 0.25 + q1 * 0.5 + q2 * 0.25;
    assert!(approx(quadratic_curve_point(q0, q1, q2, 0.5), expected, 1e-6));
}

#[test]
fn arc_control_point_bulges_outward() {
    let a = lat_lng_to_position(37.39, -122.08, MARKER_RADIUS);
    let b = lat_lng_to_position(51.50, -0.12, MARKER_RADIUS);
    let c = arc_control_point(a, b, ARC_BULGE_RADIUS);
    assert!((c.length() - ARC_BULGE_RADIUS).abs() < 1e-5);
    // same direction as the plain average
    let avg = ((a + b) * 0.5).normalize();
    assert!(c.normalize().dot(avg) > 0.9999);
    assert!(c.length() > a.length());
}

#[test]
fn antipodal_arc_falls_back_to_up_axis() {
    let a = Vec3::new(1.0, 0.0, 0.0);
    let b = Vec3::new(-1.0, 0.0, 0.0);
    let c = arc_control_point(a, b, 1.35);
    assert!(approx(c, Vec3::new(0.0, 1.35, 0.0), 1e-6));
}

#[test]
fn sampled_curve_has_segments_plus_one_points() {
    let curve = QuadraticCurve::bulged(
        lat_lng_to_position(19.07, 72.87, MARKER_RADIUS),
        lat_lng_to_position(28.61, 77.20, MARKER_RADIUS),
        ARC_BULGE_RADIUS,
    );
    let pts = curve.sample(ARC_SEGMENTS);
    assert_eq!(pts.len(), ARC_SEGMENTS as usize + 1);
    assert_eq!(pts[0], curve.start);
    assert_eq!(*pts.last().unwrap(), curve.end);
}

#[test]
fn euler_xyz_applies_x_after_y() {
    let v = Vec3::new(0.3, -0.5, 0.8);
    let (x, y) = (0.4_f32, 1.1_f32);
    let composed = euler_xyz(x, y, 0.0) * v;
    let manual = Quat::from_rotation_x(x) * (Quat::from_rotation_y(y) * v);
    assert!(approx(composed, manual, 1e-5));
}

#[test]
fn rings_face_the_origin() {
    let p = lat_lng_to_position(48.14, 11.57, MARKER_RADIUS);
    let q = facing(p, Vec3::ZERO);
    let normal = q * Vec3::Z;
    assert!(approx(normal, -p.normalize(), 1e-5), "{normal:?}");
    assert_eq!(facing(Vec3::ZERO, Vec3::ZERO), Quat::IDENTITY);
}

#[test]
fn shell_points_stay_within_radius_band() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..2000 {
        let p = random_shell_point(&mut rng, PARTICLE_SHELL_MIN, PARTICLE_SHELL_MAX);
        let r = p.length();
        assert!(r >= PARTICLE_SHELL_MIN - 1e-4 && r <= PARTICLE_SHELL_MAX + 1e-4, "r={r}");
    }
}

#[test]
fn phases_cover_a_full_turn() {
    let mut rng = StdRng::seed_from_u64(11);
    let phases: Vec<f32> = (0..500).map(|_| random_phase(&mut rng)).collect();
    assert!(phases.iter().all(|p| (0.0..=std::f32::consts::TAU).contains(p)));
    assert!(phases.iter().any(|p| *p > std::f32::consts::PI));
}
