//! Galaxy Point Cloud Generator
//!
//! Generates spiral galaxies and scattered point fields as GPU-ready vertex
//! buffers, and answers ray picks against the demo cube grid.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::GalaxyOverrides;
use glam::Vec3;
use point_field::{generate, scatter, CubeGrid, PointBuffer, Preset, Ray, Rgb, ScatterParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "galaxy-points")]
#[command(about = "Procedural point clouds for point-sprite rendering", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Suppress progress output (only show errors)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a spiral galaxy
    Galaxy {
        /// Starting parameter set (spiral-arm, galaxy)
        #[arg(long, default_value_t = Preset::Galaxy)]
        preset: Preset,

        /// JSON parameter file, replaces the preset
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        count: Option<usize>,

        #[arg(long)]
        radius: Option<f32>,

        /// Number of spiral arms
        #[arg(long)]
        branches: Option<u32>,

        /// Twist per unit of distance (radians)
        #[arg(long, allow_negative_numbers = true)]
        rotation: Option<f32>,

        /// Core color as hex, e.g. "#ff6030"
        #[arg(long)]
        inner: Option<Rgb>,

        /// Rim color as hex, e.g. "#1b3984"
        #[arg(long)]
        outer: Option<Rgb>,

        /// Maximum per-axis jitter
        #[arg(long)]
        spread: Option<f32>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Write interleaved position/color vertices here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Scatter points uniformly through a cube
    Scatter {
        #[arg(long)]
        count: Option<usize>,

        /// Edge length of the cube
        #[arg(long)]
        extent: Option<f32>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the cubes of the 10x10x10 demo grid hit by a ray
    Pick {
        /// Ray origin as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        origin: Vec3,

        /// Ray direction as x,y,z
        #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
        direction: Vec3,
    },
}

fn parse_vec3(s: &str) -> Result<Vec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected x,y,z but got {s:?}"));
    };

    let parse = |v: &str| v.parse::<f32>().map_err(|e| format!("{v:?}: {e}"));
    Ok(Vec3::new(parse(*x)?, parse(*y)?, parse(*z)?))
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

/// Write the buffer as a packed `PointVertex` array in native byte order
fn write_vertices(buffer: &PointBuffer, path: &Path) -> Result<()> {
    let vertices = buffer.interleaved();
    fs::write(path, bytemuck::cast_slice::<_, u8>(&vertices))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!(
        "✓ Wrote {} vertices ({} bytes) to {}",
        vertices.len(),
        std::mem::size_of_val(vertices.as_slice()),
        path.display()
    );
    Ok(())
}

fn log_summary(buffer: &PointBuffer) {
    log::info!("✓ Generated {} points", buffer.len());
    if let Some((min, max)) = buffer.bounds() {
        log::info!("  Bounds: min={:.3} max={:.3}", min, max);
    }
    for (i, vertex) in buffer.vertices().take(5).enumerate() {
        log::debug!(
            "    [{}] position={:?} color={:?}",
            i,
            vertex.position,
            vertex.color
        );
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Galaxy {
            preset,
            config: config_path,
            count,
            radius,
            branches,
            rotation,
            inner,
            outer,
            spread,
            seed,
            output,
        } => {
            let overrides = GalaxyOverrides {
                count,
                radius,
                branch_count: branches,
                rotation_factor: rotation,
                inner_color: inner,
                outer_color: outer,
                random_spread: spread,
            };
            let params = config::resolve(preset, config_path.as_deref(), &overrides)?;
            log::info!("Generating galaxy: {:?}", params);

            let buffer = generate(&params, &mut seeded_rng(seed))?;
            log_summary(&buffer);

            if let Some(path) = output {
                write_vertices(&buffer, &path)?;
            }
        }
        Commands::Scatter {
            count,
            extent,
            seed,
            output,
        } => {
            let defaults = ScatterParams::default();
            let params = ScatterParams {
                count: count.unwrap_or(defaults.count),
                extent: extent.unwrap_or(defaults.extent),
            };
            log::info!("Scattering points: {:?}", params);

            let buffer = scatter(&params, &mut seeded_rng(seed));
            log_summary(&buffer);

            if let Some(path) = output {
                write_vertices(&buffer, &path)?;
            }
        }
        Commands::Pick { origin, direction } => {
            let grid = CubeGrid::default();
            let hits = grid.pick(&Ray::new(origin, direction));
            log::info!("✓ {} of {} cubes hit", hits.len(), grid.cube_count());

            for hit in hits {
                println!("{}\t{:.4}", hit.index, hit.distance);
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();
    }

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
