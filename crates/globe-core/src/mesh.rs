//! CPU-side mesh generation.
//!
//! Meshes are non-indexed vertex lists in their own local frame. The renderer
//! uploads each one once; per-frame motion is expressed through node
//! transforms only.

use fnv::FnvHashMap;
use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl From<Vec3> for Vertex {
    fn from(v: Vec3) -> Self {
        Self {
            position: v.to_array(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    Triangles,
    Lines,
    LineStrip,
}

#[derive(Clone, Debug)]
pub struct Mesh {
    pub label: &'static str,
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    fn new(label: &'static str, topology: Topology, points: impl IntoIterator<Item = Vec3>) -> Self {
        Self {
            label,
            topology,
            vertices: points.into_iter().map(Vertex::from).collect(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

#[inline]
fn sphere_point(radius: f32, u: f32, v: f32) -> Vec3 {
    let phi = u * TAU;
    let theta = v * PI;
    Vec3::new(
        -radius * phi.cos() * theta.sin(),
        radius * theta.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Triangulated latitude/longitude grid as a line list: parallels, meridians
/// and one diagonal per quad off the pole rows, `6 * w * (h - 1)` vertices.
pub fn wire_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut points = Vec::with_capacity((6 * w * (h - 1)) as usize);
    // parallels, poles excluded
    for iy in 1..h {
        let v = iy as f32 / h as f32;
        for ix in 0..w {
            points.push(sphere_point(radius, ix as f32 / w as f32, v));
            points.push(sphere_point(radius, (ix + 1) as f32 / w as f32, v));
        }
    }
    // meridians
    for ix in 0..w {
        let u = ix as f32 / w as f32;
        for iy in 0..h {
            points.push(sphere_point(radius, u, iy as f32 / h as f32));
            points.push(sphere_point(radius, u, (iy + 1) as f32 / h as f32));
        }
    }
    // quad diagonals; on the pole rows they fold onto a meridian
    for iy in 1..h - 1 {
        let v0 = iy as f32 / h as f32;
        let v1 = (iy + 1) as f32 / h as f32;
        for ix in 0..w {
            let u0 = ix as f32 / w as f32;
            let u1 = (ix + 1) as f32 / w as f32;
            points.push(sphere_point(radius, u0, v1));
            points.push(sphere_point(radius, u1, v0));
        }
    }
    Mesh::new("wire_sphere", Topology::Lines, points)
}

/// Filled sphere as a triangle list: `6 * w * (h - 1)` vertices.
pub fn solid_sphere(radius: f32, width_segments: u32, height_segments: u32) -> Mesh {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut points = Vec::with_capacity((6 * w * (h - 1)) as usize);
    for iy in 0..h {
        let v0 = iy as f32 / h as f32;
        let v1 = (iy + 1) as f32 / h as f32;
        for ix in 0..w {
            let u0 = ix as f32 / w as f32;
            let u1 = (ix + 1) as f32 / w as f32;
            let a = sphere_point(radius, u0, v0);
            let b = sphere_point(radius, u0, v1);
            let c = sphere_point(radius, u1, v1);
            let d = sphere_point(radius, u1, v0);
            if iy != 0 {
                points.extend([a, b, d]);
            }
            if iy != h - 1 {
                points.extend([b, c, d]);
            }
        }
    }
    Mesh::new("solid_sphere", Topology::Triangles, points)
}

/// Flat annulus (or annular sector) in the XY plane, normal +Z.
pub fn ring(inner: f32, outer: f32, segments: u32, theta_start: f32, theta_length: f32) -> Mesh {
    let segments = segments.max(3);
    let mut points = Vec::with_capacity((segments * 6) as usize);
    let at = |r: f32, a: f32| Vec3::new(r * a.cos(), r * a.sin(), 0.0);
    for i in 0..segments {
        let a0 = theta_start + theta_length * i as f32 / segments as f32;
        let a1 = theta_start + theta_length * (i + 1) as f32 / segments as f32;
        let (i0, o0, i1, o1) = (at(inner, a0), at(outer, a0), at(inner, a1), at(outer, a1));
        points.extend([i0, o0, o1, i0, o1, i1]);
    }
    Mesh::new("ring", Topology::Triangles, points)
}

/// Connected polyline through `points`.
pub fn polyline(points: &[Vec3]) -> Mesh {
    Mesh::new("polyline", Topology::LineStrip, points.iter().copied())
}

/// One small octahedron per point, 24 vertices each, so points read at any
/// orientation without camera-facing sprites.
pub fn point_cloud(points: &[Vec3], size: f32) -> Mesh {
    let s = size * 0.5;
    let axes = [
        Vec3::X * s,
        Vec3::Y * s,
        Vec3::Z * s,
        -Vec3::X * s,
        -Vec3::Y * s,
        -Vec3::Z * s,
    ];
    let faces: [[usize; 3]; 8] = [
        [0, 1, 2],
        [2, 1, 3],
        [3, 1, 5],
        [5, 1, 0],
        [0, 2, 4],
        [2, 3, 4],
        [3, 5, 4],
        [5, 0, 4],
    ];
    let mut out = Vec::with_capacity(points.len() * 24);
    for p in points {
        for f in faces {
            out.extend(f.iter().map(|&k| *p + axes[k]));
        }
    }
    Mesh::new("point_cloud", Topology::Triangles, out)
}

/// Index into [`MeshLibrary`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshKey(pub usize);

/// Parameters of shareable meshes. Floats are keyed by their bit pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MeshSpec {
    SolidSphere { radius: u32, segments: u32 },
    Ring { inner: u32, outer: u32, segments: u32 },
}

impl MeshSpec {
    pub fn solid_sphere(radius: f32, segments: u32) -> Self {
        MeshSpec::SolidSphere {
            radius: radius.to_bits(),
            segments,
        }
    }

    pub fn ring(inner: f32, outer: f32, segments: u32) -> Self {
        MeshSpec::Ring {
            inner: inner.to_bits(),
            outer: outer.to_bits(),
            segments,
        }
    }

    fn build(self) -> Mesh {
        match self {
            MeshSpec::SolidSphere { radius, segments } => {
                solid_sphere(f32::from_bits(radius), segments, segments)
            }
            MeshSpec::Ring {
                inner,
                outer,
                segments,
            } => ring(f32::from_bits(inner), f32::from_bits(outer), segments, 0.0, TAU),
        }
    }
}

/// Owns every mesh in the scene; identical marker meshes are built once.
#[derive(Default, Debug)]
pub struct MeshLibrary {
    meshes: Vec<Mesh>,
    shared: FnvHashMap<MeshSpec, MeshKey>,
}

impl MeshLibrary {
    pub fn add(&mut self, mesh: Mesh) -> MeshKey {
        self.meshes.push(mesh);
        MeshKey(self.meshes.len() - 1)
    }

    pub fn shared(&mut self, spec: MeshSpec) -> MeshKey {
        if let Some(key) = self.shared.get(&spec) {
            return *key;
        }
        let key = self.add(spec.build());
        self.shared.insert(spec, key);
        key
    }

    #[inline]
    pub fn get(&self, key: MeshKey) -> Option<&Mesh> {
        self.meshes.get(key.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshKey, &Mesh)> {
        self.meshes.iter().enumerate().map(|(i, m)| (MeshKey(i), m))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}
