//! Ray picking over a lattice of cubes
//!
//! The grid is never materialized: cubes are enumerated on demand and each is
//! tested against the ray with the slab method.

use crate::constants::{GRID_CUBE_SIZE, GRID_MAX, GRID_MIN};
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Cubes of edge `size` centered on every lattice point `(i, j, k) * size`
/// with each coordinate in `min..max`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeGrid {
    pub min: i32,
    pub max: i32,
    pub size: f32,
}

impl Default for CubeGrid {
    fn default() -> Self {
        Self {
            min: GRID_MIN,
            max: GRID_MAX,
            size: GRID_CUBE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cube {
    /// Position in x-major, then y, then z order
    pub index: usize,
    pub center: Vec3,
    pub half_extent: f32,
}

impl Cube {
    pub fn aabb(&self) -> (Vec3, Vec3) {
        let half = Vec3::splat(self.half_extent);
        (self.center - half, self.center + half)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub index: usize,
    /// Ray parameter at the hit, in units of `direction`
    pub distance: f32,
}

impl CubeGrid {
    fn side(&self) -> usize {
        self.max.saturating_sub(self.min).max(0) as usize
    }

    /// Number of cubes, saturating at `usize::MAX` for absurd bounds
    pub fn cube_count(&self) -> usize {
        self.side().checked_pow(3).unwrap_or(usize::MAX)
    }

    pub fn cubes(&self) -> impl Iterator<Item = Cube> + '_ {
        let range = self.min..self.max.max(self.min);

        range
            .clone()
            .flat_map(move |x| {
                let range = range.clone();
                range.clone().flat_map(move |y| range.clone().map(move |z| (x, y, z)))
            })
            .enumerate()
            .map(|(index, (x, y, z))| Cube {
                index,
                center: Vec3::new(x as f32, y as f32, z as f32) * self.size,
                half_extent: self.size * 0.5,
            })
    }

    /// All cubes the ray passes through, nearest first.
    pub fn pick(&self, ray: &Ray) -> Vec<Hit> {
        let mut hits: Vec<Hit> = self
            .cubes()
            .filter_map(|cube| {
                let (min, max) = cube.aabb();
                ray_aabb(ray, min, max).map(|distance| Hit {
                    index: cube.index,
                    distance,
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }
}

/// Slab-method ray/AABB intersection.
///
/// Returns the entry distance, or the exit distance when the origin is inside
/// the box. `None` if the ray misses or the box is entirely behind the origin.
pub fn ray_aabb(ray: &Ray, min: Vec3, max: Vec3) -> Option<f32> {
    if ray.direction == Vec3::ZERO {
        return None;
    }

    let mut t_near = f32::NEG_INFINITY;
    let mut t_far = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let direction = ray.direction[axis];

        if direction == 0.0 {
            // Parallel to this slab: inside it or never
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let inv = 1.0 / direction;
        let mut t0 = (min[axis] - origin) * inv;
        let mut t1 = (max[axis] - origin) * inv;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        t_near = t_near.max(t0);
        t_far = t_far.min(t1);
        if t_near > t_far {
            return None;
        }
    }

    if t_far < 0.0 {
        return None;
    }

    Some(if t_near >= 0.0 { t_near } else { t_far })
}
