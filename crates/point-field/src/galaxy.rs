//! Spiral galaxy point clouds
//!
//! Points are dealt round-robin onto evenly spaced arms, pushed out to a
//! random radius, and twisted by an angle proportional to that radius.

use crate::buffer::PointBuffer;
use crate::color::Rgb;
use crate::constants::*;
use crate::error::ConfigurationError;
use crate::random::RandomSource;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

/// Parameters for a single [`generate`] call
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationParams {
    /// Number of points
    pub count: usize,
    /// Maximum radial distance from the origin in the XZ plane
    pub radius: f32,
    /// Number of spiral arms, at least 1
    pub branch_count: u32,
    /// Extra angle per unit of distance (radians)
    pub rotation_factor: f32,
    /// Color at the center
    pub inner_color: Rgb,
    /// Color at `radius`
    pub outer_color: Rgb,
    /// Maximum per-axis jitter; 0 puts every point exactly on its arm
    pub random_spread: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        let [ir, ig, ib] = GALAXY_INNER_RGB8;
        let [or, og, ob] = GALAXY_OUTER_RGB8;

        Self {
            count: GALAXY_COUNT,
            radius: GALAXY_RADIUS,
            branch_count: GALAXY_BRANCHES,
            rotation_factor: GALAXY_ROTATION,
            inner_color: Rgb::from_rgb8(ir, ig, ib),
            outer_color: Rgb::from_rgb8(or, og, ob),
            random_spread: GALAXY_SPREAD,
        }
    }
}

impl GenerationParams {
    /// Check the parameters before [`generate`] uses them.
    ///
    /// Only a zero `branch_count` is rejected; every other value passes through.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.branch_count == 0 {
            return Err(ConfigurationError::InvalidBranchCount(self.branch_count));
        }
        Ok(())
    }

    /// Largest possible distance of a point from the Y axis
    pub fn max_planar_extent(&self) -> f32 {
        self.radius + std::f32::consts::SQRT_2 * self.random_spread.abs()
    }
}

/// Signed cube of a uniform sample in [-1, 1)
///
/// Keeps the sign while pulling most samples towards zero, so arms stay thin
/// with a few stray points.
#[inline]
pub fn shaped_jitter(rng: &mut impl RandomSource) -> f32 {
    let u = rng.uniform_range(-1.0, 1.0);
    u * u * u
}

/// Generate a spiral galaxy.
///
/// Each point consumes four draws from `rng` in a fixed order: distance, then
/// jitter on x, y and z. The draws are taken even when `random_spread` is 0.
pub fn generate(
    params: &GenerationParams,
    rng: &mut impl RandomSource,
) -> Result<PointBuffer, ConfigurationError> {
    params.validate()?;

    let branch_step = TAU / params.branch_count as f32;
    let mut buffer = PointBuffer::with_capacity(params.count);

    for i in 0..params.count {
        let branch_angle = (i % params.branch_count as usize) as f32 * branch_step;
        let distance = rng.next_uniform() * params.radius;

        let jitter = Vec3::new(
            shaped_jitter(rng),
            shaped_jitter(rng),
            shaped_jitter(rng),
        ) * params.random_spread;

        let angle = branch_angle + distance * params.rotation_factor;
        let position = Vec3::new(angle.cos() * distance, 0.0, angle.sin() * distance) + jitter;

        let t = if params.radius == 0.0 {
            0.0
        } else {
            distance / params.radius
        };
        let color = params.inner_color.lerp(params.outer_color, t);

        buffer.push(position, color);
    }

    log::debug!(
        "Generated galaxy: {} points, {} branches, radius {:.2}",
        buffer.len(),
        params.branch_count,
        params.radius
    );

    Ok(buffer)
}
