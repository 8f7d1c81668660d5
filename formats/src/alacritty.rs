//! Alacritty color configuration (TOML).
//!
//! Colors live in nested tables under `[colors]`. The tables are held by
//! value so that a destination-driven mapping can reach every leaf without
//! allocating intermediate nodes.

use facet::Facet;
use hueport_core as hueport;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::adapter::impl_adapter;

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct Primary {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.background")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground_bright")]
    pub bright_foreground: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct CursorColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor")]
    pub cursor: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor_text")]
    pub text: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.black")]
    pub black: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.red")]
    pub red: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.green")]
    pub green: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.yellow")]
    pub yellow: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.blue")]
    pub blue: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.magenta")]
    pub magenta: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.cyan")]
    pub cyan: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.white")]
    pub white: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct BrightColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_black")]
    pub black: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_red")]
    pub red: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_green")]
    pub green: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_yellow")]
    pub yellow: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_blue")]
    pub blue: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_magenta")]
    pub magenta: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_cyan")]
    pub cyan: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_white")]
    pub white: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionColors {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selection")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selected_text")]
    pub text: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct AlacrittyColors {
    pub primary: Primary,
    pub cursor: CursorColors,
    pub normal: NormalColors,
    pub bright: BrightColors,
    pub selection: SelectionColors,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct AlacrittyScheme {
    pub colors: AlacrittyColors,
}

impl_adapter!(AlacrittyScheme, name: "alacritty", aliases: [], format: Toml);
