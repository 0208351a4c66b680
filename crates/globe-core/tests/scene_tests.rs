// Host-side tests for scene construction and mesh generation.

use globe_core::mesh::{self, MeshSpec};
use globe_core::*;

fn build(config: &GlobeConfig, seed: u64) -> Scene {
    Scene::build(config, &TARGETS, &CONNECTIONS, seed).expect("scene")
}

#[test]
fn desktop_scene_has_every_marker_and_arc() {
    let scene = build(&GlobeConfig::desktop(), 42);
    assert_eq!(scene.markers.len(), 15);
    for (i, m) in scene.markers.iter().enumerate() {
        assert_eq!(m.target, i);
        assert_eq!(m.primitives.len(), 3);
    }
    assert_eq!(scene.connections.len(), 8);
    let lines = scene
        .connections
        .iter()
        .filter(|c| scene.meshes.get(c.line.mesh).map(|m| m.topology) == Some(Topology::LineStrip))
        .count();
    assert_eq!(lines, 8);
    assert!(scene.inner_glow.is_some());
    assert!(scene.halo.is_some());
    assert_eq!(scene.particles.points.len(), 200);
}

#[test]
fn reduced_scene_drops_expensive_layers() {
    let scene = build(&GlobeConfig::reduced(), 42);
    assert_eq!(scene.markers.len(), 15);
    assert!(scene.markers.iter().all(|m| m.primitives.len() == 3));
    assert!(scene.connections.is_empty());
    assert!(scene.inner_glow.is_none());
    assert!(scene.halo.is_none());
    assert_eq!(scene.particles.points.len(), 50);
    let globe = scene.meshes.get(scene.globe.mesh).expect("globe mesh");
    assert_eq!(globe.vertex_count(), 6 * 20 * 19);
}

#[test]
fn markers_sit_on_marker_sphere_and_face_inward() {
    let scene = build(&GlobeConfig::desktop(), 1);
    for m in &scene.markers {
        let t = &scene.targets[m.target];
        let dot = m.dot();
        assert!((dot.position.length() - MARKER_RADIUS).abs() < 1e-4);
        assert_eq!(dot.position, t.position());
        for ring in [m.inner_ring(), m.outer_ring()] {
            assert_eq!(ring.position, dot.position);
            let normal = ring.rotation * glam::Vec3::Z;
            assert!((normal + dot.position.normalize()).length() < 1e-4);
        }
    }
}

#[test]
fn arcs_pass_through_their_targets() {
    let scene = build(&GlobeConfig::desktop(), 9);
    for (arc, &(a, b)) in scene.connections.iter().zip(CONNECTIONS.iter()) {
        assert_eq!(arc.endpoints, (a, b));
        assert_eq!(arc.curve.point(0.0), TARGETS[a].position());
        assert_eq!(arc.curve.point(1.0), TARGETS[b].position());
        assert!((arc.curve.control.length() - ARC_BULGE_RADIUS).abs() < 1e-4);
        let line = scene.meshes.get(arc.line.mesh).expect("arc mesh");
        assert_eq!(line.vertex_count(), ARC_SEGMENTS + 1);
        assert_eq!(line.vertices[0].position, TARGETS[a].position().to_array());
        assert!((0.15..0.35).contains(&arc.speed));
        assert!((0.0..1.0).contains(&arc.progress));
    }
}

#[test]
fn randomness_is_fixed_by_seed() {
    let a = build(&GlobeConfig::desktop(), 1234);
    let b = build(&GlobeConfig::desktop(), 1234);
    let c = build(&GlobeConfig::desktop(), 4321);
    let phases = |s: &Scene| s.markers.iter().map(|m| m.phase).collect::<Vec<_>>();
    assert_eq!(phases(&a), phases(&b));
    assert_ne!(phases(&a), phases(&c));
    assert_eq!(a.particles.points, b.particles.points);
    for p in &a.particles.points {
        let r = p.length();
        assert!(r >= PARTICLE_SHELL_MIN - 1e-4 && r < PARTICLE_SHELL_MAX + 1e-4);
    }
}

#[test]
fn bad_connections_are_rejected() {
    let err = Scene::build(&GlobeConfig::desktop(), &TARGETS, &[(0, 15)], 0).err();
    assert_eq!(
        err,
        Some(SceneError::ConnectionOutOfRange {
            connection: 0,
            target: 15,
            len: 15
        })
    );
    let err = Scene::build(&GlobeConfig::desktop(), &TARGETS, &[(0, 1), (3, 3)], 0).err();
    assert_eq!(
        err,
        Some(SceneError::DegenerateConnection {
            connection: 1,
            target: 3
        })
    );
    // reduced profile still validates the list even though it skips arcs
    assert!(Scene::build(&GlobeConfig::reduced(), &TARGETS, &[(99, 0)], 0).is_err());
}

#[test]
fn out_of_range_coordinates_still_build() {
    let odd = [
        Target::new(120.0, 400.0, "odd", 1.0),
        Target::new(-95.0, -200.0, "odder", 1.0),
    ];
    let scene = Scene::build(&GlobeConfig::desktop(), &odd, &[(0, 1)], 0).expect("scene");
    for m in &scene.markers {
        assert!(m.dot().position.is_finite());
    }
}

#[test]
fn identical_marker_meshes_are_shared() {
    let scene = build(&GlobeConfig::desktop(), 3);
    // targets 5 and 7 both have size 0.9
    assert_eq!(scene.markers[5].dot().mesh, scene.markers[7].dot().mesh);
    assert_eq!(
        scene.markers[5].outer_ring().mesh,
        scene.markers[7].outer_ring().mesh
    );
    // Intel is the only 1.2
    assert_ne!(scene.markers[0].dot().mesh, scene.markers[1].dot().mesh);
    let mut lib = MeshLibrary::default();
    let a = lib.shared(MeshSpec::ring(0.01, 0.04, 16));
    let b = lib.shared(MeshSpec::ring(0.01, 0.04, 16));
    assert_eq!(a, b);
    assert_eq!(lib.len(), 1);
}

#[test]
fn mesh_vertex_counts() {
    assert_eq!(mesh::wire_sphere(1.0, 32, 32).vertex_count(), 6 * 32 * 31);
    assert_eq!(mesh::solid_sphere(1.0, 8, 8).vertex_count(), 6 * 8 * 7);
    assert_eq!(mesh::ring(0.5, 1.0, 16, 0.0, 1.0).vertex_count(), 96);
    let pts = [glam::Vec3::ZERO, glam::Vec3::X, glam::Vec3::Y];
    assert_eq!(mesh::point_cloud(&pts, 0.1).vertex_count(), 72);
    assert_eq!(mesh::polyline(&pts).topology, Topology::LineStrip);
}

#[test]
fn wire_sphere_vertices_lie_on_radius() {
    let m = mesh::wire_sphere(1.0, 12, 9);
    assert_eq!(m.topology, Topology::Lines);
    assert_eq!(m.vertices.len() % 2, 0);
    for v in &m.vertices {
        let r = glam::Vec3::from(v.position).length();
        assert!((r - 1.0).abs() < 1e-5);
    }
}

#[test]
fn wire_sphere_matches_solid_sphere_edges() {
    // every edge of the triangulated sphere appears once in the wireframe
    let (w, h) = (10, 7);
    let key = |p: [f32; 3]| p.map(|c| (c * 1e4).round() as i32);
    let edge = |a: [f32; 3], b: [f32; 3]| {
        let (a, b) = (key(a), key(b));
        if a <= b { (a, b) } else { (b, a) }
    };
    let wire: std::collections::BTreeSet<_> = mesh::wire_sphere(1.0, w, h)
        .vertices
        .chunks_exact(2)
        .map(|l| edge(l[0].position, l[1].position))
        .collect();
    let solid: std::collections::BTreeSet<_> = mesh::solid_sphere(1.0, w, h)
        .vertices
        .chunks_exact(3)
        .flat_map(|t| {
            let [a, b, c] = [t[0].position, t[1].position, t[2].position];
            [edge(a, b), edge(b, c), edge(c, a)]
        })
        .collect();
    assert_eq!(wire, solid);

    let grid = 2 * w * (2 * h - 1);
    let diagonals = mesh::wire_sphere(1.0, w, h).vertex_count() - grid;
    assert_eq!(diagonals, 2 * w * (h - 2));
}

#[test]
fn scan_ring_is_a_partial_sweep() {
    let scene = build(&GlobeConfig::desktop(), 0);
    let ring = scene.meshes.get(scene.scan_ring.mesh).expect("scan ring");
    let max_angle = ring
        .vertices
        .iter()
        .map(|v| v.position[1].atan2(v.position[0]))
        .fold(f32::MIN, f32::max);
    assert!((max_angle - SCAN_RING_SWEEP).abs() < 1e-4);
}

#[test]
fn draw_list_counts_match_configuration() {
    let desktop = build(&GlobeConfig::desktop(), 5);
    let items = desktop.draw_list();
    assert_eq!(items.len(), desktop.draw_count());
    assert_eq!(items.len(), 2 + 1 + 2 + 1 + 15 * 3 + 8 * 2);
    assert!(items.iter().all(|d| desktop.meshes.get(d.mesh).is_some()));
    assert_eq!(
        items.iter().filter(|d| d.blend == Blend::Additive).count(),
        1
    );

    let reduced = build(&GlobeConfig::reduced(), 5);
    assert_eq!(reduced.draw_list().len(), 1 + 2 + 1 + 15 * 3);
    assert_eq!(reduced.draw_list().len(), reduced.draw_count());
}

#[test]
fn glow_shells_draw_back_faces_only() {
    let desktop = build(&GlobeConfig::desktop(), 5);
    let items = desktop.draw_list();
    assert_eq!(items[0].side, Side::Back);
    assert_eq!(items[1].side, Side::Back);
    assert_eq!(items.iter().filter(|d| d.side == Side::Back).count(), 2);

    // dots and pulses are solid spheres seen from outside
    let dots = desktop.markers.iter().map(|m| m.dot());
    let pulses = desktop.connections.iter().map(|c| &c.pulse);
    assert!(dots.chain(pulses).all(|n| n.side == Side::Front));

    let reduced = build(&GlobeConfig::reduced(), 5);
    assert!(reduced.draw_list().iter().all(|d| d.side != Side::Back));
}

#[test]
fn solid_sphere_winds_counter_clockwise_outward() {
    let sphere = mesh::solid_sphere(2.1, 32, 32);
    for tri in sphere.vertices.chunks_exact(3) {
        let [a, b, c] = [0, 1, 2].map(|i| glam::Vec3::from(tri[i].position));
        let normal = (b - a).cross(c - a);
        let centroid = (a + b + c) / 3.0;
        assert!(normal.dot(centroid) > 0.0, "{a} {b} {c}");
    }
}

#[test]
fn draw_list_places_markers_in_globe_frame() {
    let mut scene = build(&GlobeConfig::desktop(), 5);
    scene.orientation = Orientation {
        pitch: 0.1,
        yaw: 1.3,
    };
    let items = scene.draw_list();
    // shells(2) + globe + equator + scan ring + particles come first
    let first_marker = &items[6];
    let world = first_marker.model.transform_point3(glam::Vec3::ZERO);
    let expected = scene.orientation.quat() * scene.markers[0].dot().position;
    assert!((world - expected).length() < 1e-5);
    for d in &items {
        assert!((0.0..=1.0).contains(&d.color[3]));
    }
}
