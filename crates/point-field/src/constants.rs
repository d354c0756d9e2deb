//! Default parameters for the point field generators
//!
//! Values match the reference scenes: a five-unit galaxy seen from ten units
//! away, and a hundred-unit cube of scattered points.

/// Number of points in the galaxy scene
pub const GALAXY_COUNT: usize = 5000;

/// Maximum radial extent of the galaxy
pub const GALAXY_RADIUS: f32 = 5.0;

/// Number of spiral arms
pub const GALAXY_BRANCHES: u32 = 6;

/// Angular twist per unit of radial distance (radians)
pub const GALAXY_ROTATION: f32 = 0.3;

/// Per-axis jitter magnitude
pub const GALAXY_SPREAD: f32 = 1.0;

/// Core color, `#ff6030`
pub const GALAXY_INNER_RGB8: [u8; 3] = [0xff, 0x60, 0x30];

/// Rim color, `#1b3984`
pub const GALAXY_OUTER_RGB8: [u8; 3] = [0x1b, 0x39, 0x84];

/// Points in the single-color spiral arm scene
pub const SPIRAL_ARM_COUNT: usize = 100;

/// Arms in the single-color spiral arm scene
pub const SPIRAL_ARM_BRANCHES: u32 = 3;

/// Number of points in the scattered field
pub const SCATTER_COUNT: usize = 5000;

/// Edge length of the cube the scattered field fills
pub const SCATTER_EXTENT: f32 = 100.0;

/// Lower lattice bound of the picking grid (inclusive)
pub const GRID_MIN: i32 = -5;

/// Upper lattice bound of the picking grid (exclusive)
pub const GRID_MAX: i32 = 5;

/// Edge length of each cube in the picking grid
pub const GRID_CUBE_SIZE: f32 = 1.0;
