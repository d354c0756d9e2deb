//! Point buffers ready for upload as vertex attributes

use crate::color::Rgb;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Interleaved vertex layout for a single point
/// Matches a `@location(0) position: vec3<f32>, @location(1) color: vec3<f32>` vertex input
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Generated points as two parallel, index-aligned attribute buffers
///
/// Both buffers always hold exactly `3 * len()` floats. A buffer is never
/// modified after generation; regenerate to change it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointBuffer {
    positions: Vec<f32>,
    colors: Vec<f32>,
}

impl PointBuffer {
    pub(crate) fn with_capacity(count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(count * 3),
            colors: Vec::with_capacity(count * 3),
        }
    }

    pub(crate) fn push(&mut self, position: Vec3, color: Rgb) {
        self.positions.extend_from_slice(&position.to_array());
        self.colors.extend_from_slice(&color.to_array());
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flat `x, y, z` triples
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat `r, g, b` triples
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn position(&self, index: usize) -> Option<Vec3> {
        triple(&self.positions, index).map(Vec3::from_slice)
    }

    pub fn color(&self, index: usize) -> Option<Rgb> {
        triple(&self.colors, index).map(|c| Rgb::new(c[0], c[1], c[2]))
    }

    pub fn vertices(&self) -> impl Iterator<Item = PointVertex> + '_ {
        self.positions
            .chunks_exact(3)
            .zip(self.colors.chunks_exact(3))
            .map(|(p, c)| PointVertex {
                position: [p[0], p[1], p[2]],
                color: [c[0], c[1], c[2]],
            })
    }

    pub fn interleaved(&self) -> Vec<PointVertex> {
        self.vertices().collect()
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Axis-aligned bounds of all positions, `None` when empty
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.positions.chunks_exact(3).map(Vec3::from_slice);
        let first = points.next()?;

        Some(points.fold((first, first), |(min, max), p| (min.min(p), max.max(p))))
    }
}

/// Three floats starting at `3 * index`, `None` past the end or on overflow
fn triple(values: &[f32], index: usize) -> Option<&[f32]> {
    let start = index.checked_mul(3)?;
    values.get(start..start.checked_add(3)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PointBuffer {
        let mut buffer = PointBuffer::with_capacity(2);
        buffer.push(Vec3::new(1.0, 2.0, 3.0), Rgb::new(1.0, 0.0, 0.0));
        buffer.push(Vec3::new(-1.0, 5.0, 0.0), Rgb::new(0.0, 0.0, 1.0));
        buffer
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = PointBuffer::default();
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.position(0), None);
        assert_eq!(buffer.bounds(), None);
    }

    #[test]
    fn test_accessors_are_index_aligned() {
        let buffer = sample();

        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.positions().len(), 6);
        assert_eq!(buffer.colors().len(), 6);
        assert_eq!(buffer.position(1), Some(Vec3::new(-1.0, 5.0, 0.0)));
        assert_eq!(buffer.color(1), Some(Rgb::new(0.0, 0.0, 1.0)));
        assert_eq!(buffer.color(2), None);
    }

    #[test]
    fn test_huge_index_is_none() {
        let buffer = sample();

        for index in [usize::MAX / 3 + 1, usize::MAX / 3, usize::MAX] {
            assert_eq!(buffer.position(index), None, "{index}");
            assert_eq!(buffer.color(index), None, "{index}");
        }
    }

    #[test]
    fn test_interleaved_layout() {
        let vertices = sample().interleaved();

        assert_eq!(std::mem::size_of::<PointVertex>(), 24);
        assert_eq!(vertices[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0]);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&vertices).len(), 48);
    }

    #[test]
    fn test_byte_views() {
        let buffer = sample();
        assert_eq!(buffer.position_bytes().len(), 24);
        assert_eq!(buffer.color_bytes().len(), 24);
    }

    #[test]
    fn test_bounds() {
        let (min, max) = sample().bounds().unwrap();
        assert_eq!(min, Vec3::new(-1.0, 2.0, 0.0));
        assert_eq!(max, Vec3::new(1.0, 5.0, 3.0));
    }
}
