//! iTerm2 color presets (`.itermcolors`, XML property list).
//!
//! Each color is a dictionary of floating point components rather than a hex
//! string, so the fields go through [`components`] instead of `Color`'s own
//! serde impls.

use facet::Facet;
use hueport_core as hueport;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::adapter::impl_adapter;

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct ItermScheme {
    #[serde(rename = "Ansi 0 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.black")]
    pub ansi_0: Option<Color>,
    #[serde(rename = "Ansi 1 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.red")]
    pub ansi_1: Option<Color>,
    #[serde(rename = "Ansi 2 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.green")]
    pub ansi_2: Option<Color>,
    #[serde(rename = "Ansi 3 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.yellow")]
    pub ansi_3: Option<Color>,
    #[serde(rename = "Ansi 4 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.blue")]
    pub ansi_4: Option<Color>,
    #[serde(rename = "Ansi 5 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.magenta")]
    pub ansi_5: Option<Color>,
    #[serde(rename = "Ansi 6 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.cyan")]
    pub ansi_6: Option<Color>,
    #[serde(rename = "Ansi 7 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.white")]
    pub ansi_7: Option<Color>,
    #[serde(rename = "Ansi 8 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_black")]
    pub ansi_8: Option<Color>,
    #[serde(rename = "Ansi 9 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_red")]
    pub ansi_9: Option<Color>,
    #[serde(rename = "Ansi 10 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_green")]
    pub ansi_10: Option<Color>,
    #[serde(rename = "Ansi 11 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_yellow")]
    pub ansi_11: Option<Color>,
    #[serde(rename = "Ansi 12 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_blue")]
    pub ansi_12: Option<Color>,
    #[serde(rename = "Ansi 13 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_magenta")]
    pub ansi_13: Option<Color>,
    #[serde(rename = "Ansi 14 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_cyan")]
    pub ansi_14: Option<Color>,
    #[serde(rename = "Ansi 15 Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_white")]
    pub ansi_15: Option<Color>,
    #[serde(rename = "Background Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.background")]
    pub background: Option<Color>,
    #[serde(rename = "Foreground Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground")]
    pub foreground: Option<Color>,
    #[serde(rename = "Bold Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground_bright")]
    pub bold: Option<Color>,
    #[serde(rename = "Cursor Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor")]
    pub cursor: Option<Color>,
    #[serde(rename = "Cursor Text Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor_text")]
    pub cursor_text: Option<Color>,
    #[serde(rename = "Cursor Guide Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.find_match")]
    pub cursor_guide: Option<Color>,
    #[serde(rename = "Link Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.links")]
    pub link: Option<Color>,
    #[serde(rename = "Selected Text Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selected_text")]
    pub selected_text: Option<Color>,
    #[serde(rename = "Selection Color", with = "components", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selection")]
    pub selection: Option<Color>,
}

impl_adapter!(ItermScheme, name: "iterm", aliases: ["itermcolors", "iterm2"], format: Plist);

/// Serde glue between `Option<Color>` and iTerm's component dictionaries.
mod components {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::Color;

    const COLOR_SPACE: &str = "sRGB";

    #[derive(Debug, Serialize, Deserialize)]
    struct Components {
        #[serde(rename = "Alpha Component", default = "opaque")]
        alpha: f64,
        #[serde(rename = "Blue Component")]
        blue: f64,
        #[serde(rename = "Color Space", default, skip_serializing_if = "Option::is_none")]
        color_space: Option<String>,
        #[serde(rename = "Green Component")]
        green: f64,
        #[serde(rename = "Red Component")]
        red: f64,
    }

    // Presets written before iTerm2 3.x carry no alpha.
    fn opaque() -> f64 {
        1.0
    }

    pub fn serialize<S: Serializer>(color: &Option<Color>, serializer: S) -> Result<S::Ok, S::Error> {
        match color {
            Some(color) => serializer.serialize_some(&Components {
                alpha: color.alpha,
                blue: color.blue,
                color_space: Some(COLOR_SPACE.to_string()),
                green: color.green,
                red: color.red,
            }),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Color>, D::Error> {
        let components = Option::<Components>::deserialize(deserializer)?;
        Ok(components.map(|c| Color::new(c.red, c.green, c.blue, c.alpha)))
    }
}
