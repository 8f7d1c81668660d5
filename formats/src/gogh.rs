//! Gogh terminal themes (YAML).

use facet::Facet;
use hueport_core as hueport;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::adapter::impl_adapter;

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct GoghScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "metadata.name")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "metadata.author")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.black")]
    pub color_01: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.red")]
    pub color_02: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.green")]
    pub color_03: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.yellow")]
    pub color_04: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.blue")]
    pub color_05: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.magenta")]
    pub color_06: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.cyan")]
    pub color_07: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.white")]
    pub color_08: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_black")]
    pub color_09: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_red")]
    pub color_10: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_green")]
    pub color_11: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_yellow")]
    pub color_12: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_blue")]
    pub color_13: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_magenta")]
    pub color_14: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_cyan")]
    pub color_15: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_white")]
    pub color_16: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.background")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor")]
    pub cursor: Option<Color>,
}

impl_adapter!(GoghScheme, name: "gogh", aliases: [], format: Yaml);
