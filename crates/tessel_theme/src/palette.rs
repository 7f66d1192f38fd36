//! Palette tokens consumed by list and menu rows

use serde::{Deserialize, Serialize};

/// Colors and opacities for interactive rows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Divider line color
    pub divider: String,
    /// Row background on hover
    pub action_hover: String,
    /// Row background when selected
    pub action_selected: String,
    /// Opacity applied to disabled rows
    pub action_disabled_opacity: f64,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            divider: "rgba(0, 0, 0, 0.12)".to_string(),
            action_hover: "rgba(0, 0, 0, 0.04)".to_string(),
            action_selected: "rgba(25, 118, 210, 0.08)".to_string(),
            action_disabled_opacity: 0.38,
        }
    }
}
