//! Sketch-level configuration.
//!
//! Hosts hand this over as JSON (the wasm bridge does) or build it directly.
//! Missing fields take the sketch defaults: right-handed coordinates,
//! degrees, RGB.
//!
//! ```json
//! { "coordinate_mode": "left-hand", "angle_mode": "radians" }
//! ```

use crate::modes::{AngleMode, ColorMode, CoordinateMode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub coordinate_mode: CoordinateMode,
    pub angle_mode: AngleMode,
    pub color_mode: ColorMode,
}

impl SketchConfig {
    /// Parse a JSON config object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // Plain enums and a flat struct cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_uses_defaults() {
        let config = SketchConfig::from_json("{}").unwrap();
        assert_eq!(config, SketchConfig::default());
    }

    #[test]
    fn partial_object_overrides_named_fields() {
        let config = SketchConfig::from_json(r#"{"coordinate_mode": "left-hand"}"#).unwrap();
        assert_eq!(config.coordinate_mode, CoordinateMode::LeftHand);
        assert_eq!(config.angle_mode, AngleMode::Degrees);
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        assert!(SketchConfig::from_json(r#"{"angle_mode": "gradians"}"#).is_err());
    }

    #[test]
    fn serializes_kebab_case_names() {
        let config = SketchConfig {
            coordinate_mode: CoordinateMode::RightHand,
            angle_mode: AngleMode::Radians,
            color_mode: ColorMode::Hsl,
        };
        assert_eq!(
            config.to_json(),
            r#"{"coordinate_mode":"right-hand","angle_mode":"radians","color_mode":"hsl"}"#
        );
    }
}
