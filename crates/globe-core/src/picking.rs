use crate::scene::Scene;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// `dir` is normalized; a zero direction stays zero and hits nothing.
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Distance along a normalized ray to the first sphere hit in front of the origin.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerHit {
    pub marker: usize,
    pub target: usize,
    pub distance: f32,
}

impl Scene {
    /// Nearest marker dot along `ray`, using the markers' current orientation.
    ///
    /// Equal distances resolve to the lower marker index.
    pub fn pick_marker(&self, ray: &Ray) -> Option<MarkerHit> {
        if ray.dir == Vec3::ZERO {
            return None;
        }
        let group = self.orientation.quat();
        let mut best = None::<MarkerHit>;
        for (i, marker) in self.markers.iter().enumerate() {
            let size = self.targets.get(marker.target).map_or(1.0, |t| t.size);
            let center = group * marker.dot().position;
            if let Some(t) = ray_sphere(ray.origin, ray.dir, center, marker.dot_radius(size)) {
                match best {
                    Some(b) if t >= b.distance => {}
                    _ => {
                        best = Some(MarkerHit {
                            marker: i,
                            target: marker.target,
                            distance: t,
                        })
                    }
                }
            }
        }
        best
    }
}
