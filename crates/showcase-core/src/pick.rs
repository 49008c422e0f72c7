//! Ray casting primitives and the intersection seam.

use glam::{Mat4, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    /// Express the ray in the local space of `transform`. The direction is not
    /// renormalized, so `t` values stay comparable with world-space hits.
    pub fn to_local(&self, transform: &Mat4) -> Ray {
        let inv = transform.inverse();
        Ray {
            origin: inv.transform_point3(self.origin),
            dir: inv.transform_vector3(self.dir),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::EMPTY
    }
}

impl Aabb {
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };

    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            Vec3::ZERO
        } else {
            self.max - self.min
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn max_dimension(&self) -> f32 {
        self.size().max_element()
    }

    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    pub fn include(&mut self, p: Vec3) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Scale about the centre.
    pub fn scaled(&self, factor: f32) -> Aabb {
        let c = self.center();
        let half = self.size() * 0.5 * factor;
        Aabb::new(c - half, c + half)
    }

    pub fn translated(&self, offset: Vec3) -> Aabb {
        Aabb::new(self.min + offset, self.max + offset)
    }

    /// Bounds of this box after an affine transform (all eight corners).
    pub fn transformed(&self, m: &Mat4) -> Aabb {
        let mut out = Aabb::EMPTY;
        for i in 0..8 {
            let corner = Vec3::new(
                if i & 1 == 0 { self.min.x } else { self.max.x },
                if i & 2 == 0 { self.min.y } else { self.max.y },
                if i & 4 == 0 { self.min.z } else { self.max.z },
            );
            out.include(m.transform_point3(corner));
        }
        out
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let a = ray_dir.dot(ray_dir);
    if a <= f32::EPSILON {
        return None;
    }
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - a * c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = (-b - sq) / a;
    if t_near >= 0.0 {
        return Some(t_near);
    }
    // Origin inside the sphere: report the exit point.
    let t_far = (-b + sq) / a;
    (t_far >= 0.0).then_some(t_far)
}

/// Slab test. Returns the entry distance, or 0 when the origin is inside.
#[inline]
pub fn ray_aabb(ray: &Ray, bounds: &Aabb) -> Option<f32> {
    if bounds.is_empty() {
        return None;
    }
    let mut t_min = 0.0_f32;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let o = ray.origin[axis];
        let d = ray.dir[axis];
        let (lo, hi) = (bounds.min[axis], bounds.max[axis]);
        if d.abs() < 1e-12 {
            if o < lo || o > hi {
                return None;
            }
            continue;
        }
        let inv = 1.0 / d;
        let mut t0 = (lo - o) * inv;
        let mut t1 = (hi - o) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    Some(t_min)
}

/// Non-owning handle to a mesh in the externally owned model scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub mesh: MeshId,
    pub distance: f32,
}

/// Ray intersection service: hits against `transform`-placed geometry,
/// recursive over all sub-meshes, sorted nearest first.
pub trait RayIntersect {
    fn intersect(&self, ray: &Ray, transform: &Mat4) -> Vec<Hit>;
}

pub fn sort_nearest_first(hits: &mut [Hit]) {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}
