//! Galaxy parameters assembled from a preset, an optional JSON file, and
//! command-line overrides (in that order of precedence).

use anyhow::{Context, Result};
use point_field::{GenerationParams, Preset, Rgb};
use std::fs;
use std::path::Path;

/// Per-field overrides; `None` keeps the underlying value
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GalaxyOverrides {
    pub count: Option<usize>,
    pub radius: Option<f32>,
    pub branch_count: Option<u32>,
    pub rotation_factor: Option<f32>,
    pub inner_color: Option<Rgb>,
    pub outer_color: Option<Rgb>,
    pub random_spread: Option<f32>,
}

impl GalaxyOverrides {
    pub fn apply(&self, base: GenerationParams) -> GenerationParams {
        GenerationParams {
            count: self.count.unwrap_or(base.count),
            radius: self.radius.unwrap_or(base.radius),
            branch_count: self.branch_count.unwrap_or(base.branch_count),
            rotation_factor: self.rotation_factor.unwrap_or(base.rotation_factor),
            inner_color: self.inner_color.unwrap_or(base.inner_color),
            outer_color: self.outer_color.unwrap_or(base.outer_color),
            random_spread: self.random_spread.unwrap_or(base.random_spread),
        }
    }
}

/// Parse a JSON config. Fields it omits take the galaxy defaults, not the
/// preset's, matching `GenerationParams`'s serde defaults.
pub fn parse_config(json: &str) -> Result<GenerationParams> {
    serde_json::from_str(json).context("Invalid galaxy config")
}

pub fn load_config(path: &Path) -> Result<GenerationParams> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    parse_config(&json).with_context(|| format!("In {}", path.display()))
}

pub fn resolve(
    preset: Preset,
    config: Option<&Path>,
    overrides: &GalaxyOverrides,
) -> Result<GenerationParams> {
    let base = match config {
        Some(path) => load_config(path)?,
        None => preset.params(),
    };
    Ok(overrides.apply(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_prefer_set_fields() {
        let overrides = GalaxyOverrides {
            count: Some(12),
            inner_color: Some(Rgb::BLACK),
            ..Default::default()
        };
        let params = overrides.apply(Preset::Galaxy.params());

        assert_eq!(params.count, 12);
        assert_eq!(params.inner_color, Rgb::BLACK);
        assert_eq!(params.radius, Preset::Galaxy.params().radius);
    }

    #[test]
    fn test_empty_overrides_keep_preset() {
        let base = Preset::SpiralArm.params();
        assert_eq!(GalaxyOverrides::default().apply(base), base);
    }

    #[test]
    fn test_resolve_without_config_uses_preset() {
        let params = resolve(Preset::SpiralArm, None, &GalaxyOverrides::default()).unwrap();
        assert_eq!(params, Preset::SpiralArm.params());
    }

    #[test]
    fn test_parse_config() {
        let params = parse_config(r##"{ "branch_count": 4, "outer_color": "#000" }"##).unwrap();
        assert_eq!(params.branch_count, 4);
        assert_eq!(params.outer_color, Rgb::BLACK);
    }

    #[test]
    fn test_parse_config_rejects_bad_color() {
        assert!(parse_config(r#"{ "inner_color": "orange" }"#).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = load_config(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }
}
