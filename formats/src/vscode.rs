//! Visual Studio Code color themes (JSON).
//!
//! Only the workbench `colors` object is read. Token colors are keyed by
//! TextMate scope selectors, which have no fixed field layout.

use facet::Facet;
use hueport_core as hueport;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::adapter::impl_adapter;

/// Workbench colors, keyed by VS Code's dotted color ids.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct VsCodeColors {
    #[serde(rename = "editor.background", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.background")]
    pub editor_background: Option<Color>,
    #[serde(rename = "editor.foreground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground")]
    pub editor_foreground: Option<Color>,
    #[serde(rename = "editorCursor.foreground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor")]
    pub cursor_foreground: Option<Color>,
    #[serde(rename = "editorCursor.background", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor_text")]
    pub cursor_background: Option<Color>,
    #[serde(rename = "editor.selectionBackground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selection")]
    pub selection_background: Option<Color>,
    #[serde(rename = "editor.selectionForeground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selected_text")]
    pub selection_foreground: Option<Color>,
    #[serde(rename = "textLink.foreground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.links")]
    pub link_foreground: Option<Color>,
    #[serde(rename = "editor.findMatchBackground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.find_match")]
    pub find_match_background: Option<Color>,
    #[serde(rename = "terminal.ansiBlack", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.black")]
    pub terminal_black: Option<Color>,
    #[serde(rename = "terminal.ansiRed", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.red")]
    pub terminal_red: Option<Color>,
    #[serde(rename = "terminal.ansiGreen", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.green")]
    pub terminal_green: Option<Color>,
    #[serde(rename = "terminal.ansiYellow", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.yellow")]
    pub terminal_yellow: Option<Color>,
    #[serde(rename = "terminal.ansiBlue", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.blue")]
    pub terminal_blue: Option<Color>,
    #[serde(rename = "terminal.ansiMagenta", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.magenta")]
    pub terminal_magenta: Option<Color>,
    #[serde(rename = "terminal.ansiCyan", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.cyan")]
    pub terminal_cyan: Option<Color>,
    #[serde(rename = "terminal.ansiWhite", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.white")]
    pub terminal_white: Option<Color>,
    #[serde(rename = "terminal.ansiBrightBlack", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_black")]
    pub terminal_bright_black: Option<Color>,
    #[serde(rename = "terminal.ansiBrightRed", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_red")]
    pub terminal_bright_red: Option<Color>,
    #[serde(rename = "terminal.ansiBrightGreen", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_green")]
    pub terminal_bright_green: Option<Color>,
    #[serde(rename = "terminal.ansiBrightYellow", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_yellow")]
    pub terminal_bright_yellow: Option<Color>,
    #[serde(rename = "terminal.ansiBrightBlue", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_blue")]
    pub terminal_bright_blue: Option<Color>,
    #[serde(rename = "terminal.ansiBrightMagenta", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_magenta")]
    pub terminal_bright_magenta: Option<Color>,
    #[serde(rename = "terminal.ansiBrightCyan", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_cyan")]
    pub terminal_bright_cyan: Option<Color>,
    #[serde(rename = "terminal.ansiBrightWhite", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_white")]
    pub terminal_bright_white: Option<Color>,
    #[serde(rename = "editor.lineHighlightBackground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "scope_colors.editor.cursor_line")]
    pub line_highlight_background: Option<Color>,
    #[serde(rename = "editorLineNumber.foreground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "scope_colors.editor.line_numbers")]
    pub line_number_foreground: Option<Color>,
    #[serde(rename = "editor.wordHighlightBackground", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "scope_colors.editor.highlight")]
    pub word_highlight_background: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct VsCodeTheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "metadata.name")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "metadata.author")]
    pub author: Option<String>,
    pub colors: VsCodeColors,
}

impl_adapter!(VsCodeTheme, name: "vscode", aliases: ["code", "vs-code"], format: Json);
