//! Windows Terminal color schemes (JSON).

use facet::Facet;
use hueport_core as hueport;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::adapter::impl_adapter;

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WindowsTerminalScheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "metadata.name")]
    pub name: Option<String>,
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
    pub purple: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.cyan")]
    pub cyan: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.white")]
    pub white: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_black")]
    pub bright_black: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_red")]
    pub bright_red: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_green")]
    pub bright_green: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_yellow")]
    pub bright_yellow: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_blue")]
    pub bright_blue: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_magenta")]
    pub bright_purple: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_cyan")]
    pub bright_cyan: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_white")]
    pub bright_white: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.background")]
    pub background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground")]
    pub foreground: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selection")]
    pub selection_background: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor")]
    pub cursor_color: Option<Color>,
}

impl_adapter!(WindowsTerminalScheme, name: "windows-terminal", aliases: ["wt"], format: Json);
