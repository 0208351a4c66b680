//! Static scene construction and flattening into draw items.
//!
//! The scene is built once from the target list; afterwards only node
//! transforms, opacities and pulse progress change (see `animation`).

use crate::config::GlobeConfig;
use crate::constants::*;
use crate::error::SceneError;
use crate::geometry::{euler_xyz, facing, random_phase, random_shell_point, QuadraticCurve};
use crate::mesh::{self, MeshKey, MeshLibrary, MeshSpec};
use crate::targets::Target;
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Blend {
    Alpha,
    Additive,
}

/// Which faces of a closed triangle mesh get rasterised. Outward faces wind
/// counter-clockwise; line and point meshes ignore this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Front,
    Back,
    Double,
}

/// A drawable primitive with its own transform relative to its parent.
#[derive(Clone, Debug)]
pub struct Node {
    pub mesh: MeshKey,
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub color: [f32; 3],
    pub opacity: f32,
    pub blend: Blend,
    pub side: Side,
}

impl Node {
    pub fn new(mesh: MeshKey, color: [f32; 3], opacity: f32) -> Self {
        Self {
            mesh,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
            color,
            opacity,
            blend: Blend::Alpha,
            side: Side::Double,
        }
    }

    fn at(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    fn facing_origin(mut self) -> Self {
        self.rotation = facing(self.position, Vec3::ZERO);
        self
    }

    fn additive(mut self) -> Self {
        self.blend = Blend::Additive;
        self
    }

    fn sided(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    #[inline]
    pub fn local_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    #[inline]
    pub fn rgba(&self) -> [f32; 4] {
        [
            self.color[0],
            self.color[1],
            self.color[2],
            self.opacity.clamp(0.0, 1.0),
        ]
    }
}

/// Yaw/pitch pair shared by the globe and everything locked to it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
}

impl Orientation {
    #[inline]
    pub fn quat(&self) -> Quat {
        euler_xyz(self.pitch, self.yaw, 0.0)
    }
}

/// Dot, inner pulse ring and outer ripple ring for one target.
#[derive(Clone, Debug)]
pub struct Marker {
    pub target: usize,
    pub phase: f32,
    pub primitives: SmallVec<[Node; 3]>,
}

impl Marker {
    pub const DOT: usize = 0;
    pub const INNER_RING: usize = 1;
    pub const OUTER_RING: usize = 2;

    #[inline]
    pub fn dot(&self) -> &Node {
        &self.primitives[Self::DOT]
    }

    #[inline]
    pub fn inner_ring(&self) -> &Node {
        &self.primitives[Self::INNER_RING]
    }

    #[inline]
    pub fn outer_ring(&self) -> &Node {
        &self.primitives[Self::OUTER_RING]
    }

    /// Collision radius of the dot in the marker group's frame.
    #[inline]
    pub fn dot_radius(&self, size: f32) -> f32 {
        DOT_RADIUS * size * self.dot().scale.max_element()
    }
}

/// Arc between two targets with its travelling pulse.
#[derive(Clone, Debug)]
pub struct Connection {
    pub endpoints: (usize, usize),
    pub curve: QuadraticCurve,
    pub line: Node,
    pub pulse: Node,
    pub speed: f32,
    pub progress: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub node: Node,
    pub points: Vec<Vec3>,
    pub pitch: f32,
    pub yaw: f32,
}

pub struct Scene {
    pub config: GlobeConfig,
    pub targets: Vec<Target>,
    pub meshes: MeshLibrary,
    pub globe: Node,
    pub inner_glow: Option<Node>,
    pub halo: Option<Node>,
    pub equator: Node,
    pub scan_ring: Node,
    pub scan_roll: f32,
    pub particles: ParticleField,
    pub markers: Vec<Marker>,
    pub connections: Vec<Connection>,
    pub orientation: Orientation,
}

/// One draw call worth of state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKey,
    pub model: Mat4,
    pub color: [f32; 4],
    pub blend: Blend,
    pub side: Side,
}

fn check_connections(connections: &[(usize, usize)], len: usize) -> Result<(), SceneError> {
    for (i, &(a, b)) in connections.iter().enumerate() {
        for target in [a, b] {
            if target >= len {
                return Err(SceneError::ConnectionOutOfRange {
                    connection: i,
                    target,
                    len,
                });
            }
        }
        if a == b {
            return Err(SceneError::DegenerateConnection {
                connection: i,
                target: a,
            });
        }
    }
    Ok(())
}

impl Scene {
    pub fn build(
        config: &GlobeConfig,
        targets: &[Target],
        connections: &[(usize, usize)],
        seed: u64,
    ) -> Result<Self, SceneError> {
        check_connections(connections, targets.len())?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut meshes = MeshLibrary::default();

        let globe_mesh = meshes.add(mesh::wire_sphere(
            GLOBE_RADIUS,
            config.segment_count,
            config.segment_count,
        ));
        let globe = Node::new(globe_mesh, PRIMARY_RGB, GLOBE_OPACITY);

        let (inner_glow, halo) = if config.enable_glow_layers {
            let inner = meshes.shared(MeshSpec::solid_sphere(
                INNER_GLOW_RADIUS,
                INNER_GLOW_SEGMENTS,
            ));
            let outer = meshes.shared(MeshSpec::solid_sphere(HALO_RADIUS, HALO_SEGMENTS));
            (
                // seen from inside only, so the far wall tints the globe once
                Some(Node::new(inner, PRIMARY_RGB, INNER_GLOW_OPACITY).sided(Side::Back)),
                Some(Node::new(outer, PRIMARY_RGB, HALO_OPACITY).sided(Side::Back)),
            )
        } else {
            (None, None)
        };

        let equator_mesh = meshes.shared(MeshSpec::ring(EQUATOR_INNER, EQUATOR_OUTER, RING_SEGMENTS));
        let equator = Node::new(equator_mesh, PRIMARY_RGB, EQUATOR_OPACITY);

        let scan_mesh = meshes.add(mesh::ring(
            SCAN_RING_INNER,
            SCAN_RING_OUTER,
            RING_SEGMENTS,
            0.0,
            SCAN_RING_SWEEP,
        ));
        let mut scan_ring = Node::new(scan_mesh, PRIMARY_RGB, SCAN_RING_OPACITY);
        scan_ring.rotation = euler_xyz(SCAN_RING_TILT, 0.0, 0.0);

        let points: Vec<Vec3> = (0..config.particle_count)
            .map(|_| random_shell_point(&mut rng, PARTICLE_SHELL_MIN, PARTICLE_SHELL_MAX))
            .collect();
        let cloud = meshes.add(mesh::point_cloud(&points, PARTICLE_SIZE));
        let particles = ParticleField {
            node: Node::new(cloud, PRIMARY_RGB, PARTICLE_OPACITY).additive(),
            points,
            pitch: 0.0,
            yaw: 0.0,
        };

        let markers = targets
            .iter()
            .enumerate()
            .map(|(i, t)| {
                let pos = t.position();
                let dot = meshes.shared(MeshSpec::solid_sphere(DOT_RADIUS * t.size, DOT_SEGMENTS));
                let inner = meshes.shared(MeshSpec::ring(
                    MARKER_RING_HOLE,
                    INNER_RING_OUTER * t.size,
                    MARKER_RING_SEGMENTS,
                ));
                let outer = meshes.shared(MeshSpec::ring(
                    MARKER_RING_HOLE,
                    OUTER_RING_OUTER * t.size,
                    MARKER_RING_SEGMENTS,
                ));
                Marker {
                    target: i,
                    phase: random_phase(&mut rng),
                    primitives: smallvec![
                        Node::new(dot, PRIMARY_RGB, DOT_OPACITY)
                            .at(pos)
                            .sided(Side::Front),
                        Node::new(inner, PRIMARY_RGB, INNER_RING_OPACITY)
                            .at(pos)
                            .facing_origin(),
                        Node::new(outer, PRIMARY_RGB, OUTER_RING_OPACITY)
                            .at(pos)
                            .facing_origin(),
                    ],
                }
            })
            .collect::<Vec<_>>();

        let mut arcs = Vec::new();
        if config.enable_arcs {
            let pulse_mesh = meshes.shared(MeshSpec::solid_sphere(PULSE_RADIUS, PULSE_SEGMENTS));
            for &(a, b) in connections {
                let curve = QuadraticCurve::bulged(
                    targets[a].position(),
                    targets[b].position(),
                    ARC_BULGE_RADIUS,
                );
                let line_mesh = meshes.add(mesh::polyline(&curve.sample(ARC_SEGMENTS)));
                let speed = PULSE_SPEED_MIN + rng.gen::<f32>() * PULSE_SPEED_SPAN;
                let progress = rng.gen::<f32>();
                arcs.push(Connection {
                    endpoints: (a, b),
                    curve,
                    line: Node::new(line_mesh, PRIMARY_RGB, ARC_OPACITY),
                    pulse: Node::new(pulse_mesh, PULSE_RGB, PULSE_OPACITY)
                        .at(curve.point(progress))
                        .sided(Side::Front),
                    speed,
                    progress,
                });
            }
        }

        log::debug!(
            "[scene] device={} meshes={} markers={} arcs={} particles={}",
            config.device.name(),
            meshes.len(),
            markers.len(),
            arcs.len(),
            particles.points.len()
        );

        Ok(Self {
            config: config.clone(),
            targets: targets.to_vec(),
            meshes,
            globe,
            inner_glow,
            halo,
            equator,
            scan_ring,
            scan_roll: 0.0,
            particles,
            markers,
            connections: arcs,
            orientation: Orientation::default(),
        })
    }

    /// Target backing a marker, if the index is valid.
    #[inline]
    pub fn marker_target(&self, marker: usize) -> Option<&Target> {
        self.markers
            .get(marker)
            .and_then(|m| self.targets.get(m.target))
    }

    /// World transform of the marker group (and equator, globe, arcs).
    #[inline]
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.orientation.quat())
    }

    /// Number of items [`Scene::draw_list`] produces.
    pub fn draw_count(&self) -> usize {
        1 + usize::from(self.inner_glow.is_some())
            + usize::from(self.halo.is_some())
            + 2
            + 1
            + self.markers.iter().map(|m| m.primitives.len()).sum::<usize>()
            + self.connections.len() * 2
    }

    /// Flatten the scene in painter's order: shells, rings, particles,
    /// markers, arcs, pulses.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut out = Vec::with_capacity(self.draw_count());
        let push = |out: &mut Vec<DrawItem>, node: &Node, parent: Mat4| {
            out.push(DrawItem {
                mesh: node.mesh,
                model: parent * node.local_matrix(),
                color: node.rgba(),
                blend: node.blend,
                side: node.side,
            });
        };
        let group = self.group_matrix();

        if let Some(glow) = &self.inner_glow {
            push(&mut out, glow, Mat4::IDENTITY);
        }
        if let Some(halo) = &self.halo {
            push(&mut out, halo, Mat4::IDENTITY);
        }
        push(&mut out, &self.globe, Mat4::IDENTITY);
        push(&mut out, &self.equator, Mat4::IDENTITY);
        push(&mut out, &self.scan_ring, Mat4::IDENTITY);
        push(&mut out, &self.particles.node, Mat4::IDENTITY);
        for marker in &self.markers {
            for node in &marker.primitives {
                push(&mut out, node, group);
            }
        }
        for arc in &self.connections {
            push(&mut out, &arc.line, group);
        }
        for arc in &self.connections {
            push(&mut out, &arc.pulse, Mat4::IDENTITY);
        }
        out
    }
}

/// Wrap an angle into `[0, 2π)` so long-running rotations keep precision.
#[inline]
pub(crate) fn wrap_angle(a: f32) -> f32 {
    a.rem_euclid(TAU)
}
