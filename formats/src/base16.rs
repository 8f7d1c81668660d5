//! Base16 scheme files (YAML).
//!
//! ```yaml
//! scheme: "Tomorrow Night"
//! author: "Chris Kempson"
//! base00: "1d1f21"
//! base05: "c5c8c6"
//! base08: "cc6666"
//! ```

use facet::Facet;
use hueport_core as hueport;
use serde::{Deserialize, Serialize};

use crate::Color;
use crate::adapter::impl_adapter;

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct Base16Scheme {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "metadata.name")]
    pub scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "metadata.author")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.background")]
    pub base00: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selection")]
    pub base01: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor")]
    pub base02: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.cursor_text")]
    pub base03: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.selected_text")]
    pub base04: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground")]
    pub base05: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "special_colors.foreground_bright")]
    pub base06: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.white")]
    pub base07: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.red")]
    pub base08: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.yellow")]
    pub base09: Option<Color>,
    #[serde(rename = "base0A", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.blue")]
    pub base0a: Option<Color>,
    #[serde(rename = "base0B", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.green")]
    pub base0b: Option<Color>,
    #[serde(rename = "base0C", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.cyan")]
    pub base0c: Option<Color>,
    #[serde(rename = "base0D", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_blue")]
    pub base0d: Option<Color>,
    #[serde(rename = "base0E", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.magenta")]
    pub base0e: Option<Color>,
    #[serde(rename = "base0F", skip_serializing_if = "Option::is_none")]
    #[facet(hueport::canonical = "ansi_colors.bright_magenta")]
    pub base0f: Option<Color>,
}

impl_adapter!(Base16Scheme, name: "base16", aliases: ["16"], format: Yaml);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Adapter;

    #[test]
    fn test_parse_accepts_bare_hex_and_upper_keys() {
        let mut scheme = Base16Scheme::default();
        scheme
            .parse("scheme: Ocean\nbase00: \"2b303b\"\nbase0A: \"#ebcb8b\"\n")
            .unwrap();
        assert_eq!(scheme.scheme.as_deref(), Some("Ocean"));
        assert_eq!(scheme.base00, Some(Color::rgb(0x2b, 0x30, 0x3b)));
        assert_eq!(scheme.base0a, Some(Color::rgb(0xeb, 0xcb, 0x8b)));
        assert_eq!(scheme.base01, None);
    }

    #[test]
    fn test_render_skips_absent_fields() {
        let scheme = Base16Scheme {
            scheme: Some("Ocean".into()),
            base0d: Some(Color::rgb(0x8f, 0xa1, 0xb3)),
            ..Base16Scheme::default()
        };
        let rendered = scheme.render().unwrap();
        assert!(rendered.starts_with("scheme: Ocean\n"));
        assert!(rendered.contains("base0D: "));
        assert!(rendered.contains("#8fa1b3"));
        assert!(!rendered.contains("base00"));
        assert!(!rendered.contains("author"));
    }
}
