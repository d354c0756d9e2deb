//! Uniformly scattered point fields with random vertex colors

use crate::buffer::PointBuffer;
use crate::color::Rgb;
use crate::constants::{SCATTER_COUNT, SCATTER_EXTENT};
use crate::random::RandomSource;
use glam::Vec3;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScatterParams {
    pub count: usize,
    /// Edge length of the origin-centered cube the points fill
    pub extent: f32,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            count: SCATTER_COUNT,
            extent: SCATTER_EXTENT,
        }
    }
}

/// Scatter points uniformly through a cube, each with a random color.
///
/// Draw order per point: x, y, z, then r, g, b.
pub fn scatter(params: &ScatterParams, rng: &mut impl RandomSource) -> PointBuffer {
    let mut buffer = PointBuffer::with_capacity(params.count);
    let half = Vec3::splat(0.5);

    for _ in 0..params.count {
        let unit = Vec3::new(rng.next_uniform(), rng.next_uniform(), rng.next_uniform());
        let position = (unit - half) * params.extent;
        let color = Rgb::new(rng.next_uniform(), rng.next_uniform(), rng.next_uniform());
        buffer.push(position, color);
    }

    log::debug!(
        "Scattered {} points in a cube of edge {:.1}",
        buffer.len(),
        params.extent
    );

    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_points_fill_cube() {
        let params = ScatterParams {
            count: 1000,
            extent: 20.0,
        };
        let buffer = scatter(&params, &mut StdRng::seed_from_u64(11));
        let (min, max) = buffer.bounds().unwrap();

        assert_eq!(buffer.len(), 1000);
        assert!(min.cmpge(Vec3::splat(-10.0)).all());
        assert!(max.cmplt(Vec3::splat(10.0)).all());
        assert!(buffer.colors().iter().all(|c| (0.0..1.0).contains(c)));
    }

    #[test]
    fn test_draw_order() {
        let params = ScatterParams {
            count: 1,
            extent: 10.0,
        };
        let mut rng = SequenceSource::new(vec![0.0, 0.5, 0.9, 0.1, 0.2, 0.3]);
        let buffer = scatter(&params, &mut rng);

        let p = buffer.position(0).unwrap();
        assert_eq!(p.x, -5.0);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 4.0).abs() < 1e-5);
        assert_eq!(buffer.color(0), Some(Rgb::new(0.1, 0.2, 0.3)));
    }
}
