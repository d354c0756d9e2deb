//! Named galaxy parameter sets

use crate::color::Rgb;
use crate::constants::*;
use crate::galaxy::GenerationParams;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preset {
    /// Three straight white arms, no twist or jitter
    SpiralArm,
    /// Six twisted arms fading from orange to deep blue
    #[default]
    Galaxy,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::SpiralArm, Preset::Galaxy];

    pub fn name(self) -> &'static str {
        match self {
            Preset::SpiralArm => "spiral-arm",
            Preset::Galaxy => "galaxy",
        }
    }

    pub fn params(self) -> GenerationParams {
        match self {
            Preset::SpiralArm => GenerationParams {
                count: SPIRAL_ARM_COUNT,
                radius: GALAXY_RADIUS,
                branch_count: SPIRAL_ARM_BRANCHES,
                rotation_factor: 0.0,
                inner_color: Rgb::WHITE,
                outer_color: Rgb::WHITE,
                random_spread: 0.0,
            },
            Preset::Galaxy => GenerationParams::default(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| {
                let names: Vec<_> = Preset::ALL.iter().map(|p| p.name()).collect();
                format!("unknown preset {s:?}, expected one of: {}", names.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("galaxy".parse::<Preset>(), Ok(Preset::Galaxy));
        assert_eq!("spiral-arm".parse::<Preset>(), Ok(Preset::SpiralArm));
        assert!("nebula".parse::<Preset>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for preset in Preset::ALL {
            assert_eq!(preset.to_string().parse::<Preset>(), Ok(preset));
        }
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::ALL {
            assert!(preset.params().validate().is_ok(), "{preset}");
        }
    }

    #[test]
    fn test_galaxy_colors() {
        let params = Preset::Galaxy.params();
        assert_eq!(params.inner_color, Rgb::from_hex("#ff6030").unwrap());
        assert_eq!(params.outer_color, Rgb::from_hex("#1b3984").unwrap());
        assert_eq!(params.branch_count, 6);
    }
}
