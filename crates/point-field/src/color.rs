//! RGB colors for per-vertex coloring

use crate::error::ConfigurationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// RGB color with components nominally in [0, 1]
///
/// Components are never clamped; out-of-range values pass through to the
/// renderer untouched.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RgbRepr", into = "[f32; 3]")]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb`, `#rgb` or `rgb`.
    ///
    /// Each channel maps to `byte / 255` with no gamma conversion.
    pub fn from_hex(hex: &str) -> Result<Self, ConfigurationError> {
        let invalid = || ConfigurationError::InvalidColor(hex.to_string());
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
        let (r, g, b) = match digits.len() {
            6 => (
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ),
            // #rgb expands each nibble: #f63 == #ff6633
            3 => (
                channel(&digits[0..1])? * 17,
                channel(&digits[1..2])? * 17,
                channel(&digits[2..3])? * 17,
            ),
            _ => return Err(invalid()),
        };

        Ok(Self::from_rgb8(r, g, b))
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Componentwise `self + t * (other - self)`, `t` unclamped.
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    pub const fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 3]> for Rgb {
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [f32; 3] {
    fn from(color: Rgb) -> Self {
        color.to_array()
    }
}

impl FromStr for Rgb {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Accepted serialized forms: `"#ff6030"` or `[1.0, 0.376, 0.188]`
#[derive(Deserialize)]
#[serde(untagged)]
enum RgbRepr {
    Hex(String),
    Array([f32; 3]),
}

impl TryFrom<RgbRepr> for Rgb {
    type Error = ConfigurationError;

    fn try_from(repr: RgbRepr) -> Result<Self, Self::Error> {
        match repr {
            RgbRepr::Hex(hex) => Self::from_hex(&hex),
            RgbRepr::Array(array) => Ok(array.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_form() {
        let color = Rgb::from_hex("#ff6030").unwrap();
        assert_eq!(color, Rgb::from_rgb8(0xff, 0x60, 0x30));
        assert_eq!(color.r, 1.0);
    }

    #[test]
    fn test_from_hex_without_hash() {
        assert_eq!(
            Rgb::from_hex("1b3984").unwrap(),
            Rgb::from_rgb8(0x1b, 0x39, 0x84)
        );
    }

    #[test]
    fn test_from_hex_short_form() {
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(
            Rgb::from_hex("#f63").unwrap(),
            Rgb::from_rgb8(0xff, 0x66, 0x33)
        );
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        for bad in [
            "",
            "#",
            "#ff60",
            "#gg0000",
            "#ff603012",
            "#ffé000",
            "#+f+f+f",
            "+f+f+f",
            "##fff",
            "#-ff",
        ] {
            assert_eq!(
                Rgb::from_hex(bad),
                Err(ConfigurationError::InvalidColor(bad.to_string())),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        let red = Rgb::new(1.0, 0.0, 0.0);
        let blue = Rgb::new(0.0, 0.0, 1.0);

        assert_eq!(red.lerp(blue, 0.0), red);
        assert_eq!(red.lerp(blue, 1.0), blue);
        assert_eq!(red.lerp(blue, 0.5), Rgb::new(0.5, 0.0, 0.5));
    }

    #[test]
    fn test_lerp_is_unclamped() {
        let color = Rgb::BLACK.lerp(Rgb::WHITE, 2.0);
        assert_eq!(color, Rgb::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn test_deserialize_hex_or_array() {
        let hex: Rgb = serde_json::from_str("\"#ffffff\"").unwrap();
        let array: Rgb = serde_json::from_str("[0.0, 0.5, 1.0]").unwrap();

        assert_eq!(hex, Rgb::WHITE);
        assert_eq!(array, Rgb::new(0.0, 0.5, 1.0));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&Rgb::new(0.0, 0.5, 1.0)).unwrap();
        assert_eq!(json, "[0.0,0.5,1.0]");
    }
}
