//! The canonical scheme every adapter maps to and from.
//!
//! [`AbstractScheme`] is the only type adapters are coupled to. All of its
//! leaves are optional so that "not provided by the source format" survives
//! the trip through it and can be filled by [`FALLBACK_GROUPS`].

use facet::Facet;
use hueport_core::{Accessor, FallbackGroup};
use serde::{Deserialize, Serialize};

use crate::Color;

/// Descriptive metadata.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub name: Option<String>,
    pub author: Option<String>,
    /// Free-form creation or publication date, as the source wrote it.
    pub date: Option<String>,
}

/// The sixteen ANSI terminal colors.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct AnsiColors {
    pub black: Option<Color>,
    pub red: Option<Color>,
    pub green: Option<Color>,
    pub yellow: Option<Color>,
    pub blue: Option<Color>,
    pub magenta: Option<Color>,
    pub cyan: Option<Color>,
    pub white: Option<Color>,
    pub bright_black: Option<Color>,
    pub bright_red: Option<Color>,
    pub bright_green: Option<Color>,
    pub bright_yellow: Option<Color>,
    pub bright_blue: Option<Color>,
    pub bright_magenta: Option<Color>,
    pub bright_cyan: Option<Color>,
    pub bright_white: Option<Color>,
}

/// Colors with a role beyond the ANSI palette.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecialColors {
    pub foreground: Option<Color>,
    pub foreground_bright: Option<Color>,
    pub background: Option<Color>,
    pub cursor: Option<Color>,
    pub cursor_text: Option<Color>,
    pub selection: Option<Color>,
    pub selected_text: Option<Color>,
    pub links: Option<Color>,
    pub find_match: Option<Color>,
}

/// Core syntax highlighting.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicScope {
    pub comment: Option<Color>,
    pub keyword: Option<Color>,
    pub constant: Option<Color>,
    pub string: Option<Color>,
    pub number: Option<Color>,
    pub function: Option<Color>,
    pub variable: Option<Color>,
    pub operator: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedScope {
    pub class: Option<Color>,
    pub type_name: Option<Color>,
    pub property: Option<Color>,
    pub attribute: Option<Color>,
    pub tag: Option<Color>,
    pub namespace: Option<Color>,
    pub parameter: Option<Color>,
    pub selector: Option<Color>,
}

/// Prose and markup documents.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkupScope {
    pub heading: Option<Color>,
    pub bold: Option<Color>,
    pub italic: Option<Color>,
    pub underline: Option<Color>,
    pub link: Option<Color>,
    pub quote: Option<Color>,
    pub list: Option<Color>,
    pub code_block: Option<Color>,
    pub raw_text: Option<Color>,
    pub template_tag: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticScope {
    pub invalid: Option<Color>,
    pub deprecated: Option<Color>,
}

/// Editor chrome around the text.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorScope {
    pub cursor: Option<Color>,
    pub cursor_line: Option<Color>,
    pub line_numbers: Option<Color>,
    pub highlight: Option<Color>,
}

#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct MiscScope {
    pub meta: Option<Color>,
    pub annotation: Option<Color>,
    pub regex: Option<Color>,
    pub background: Option<Color>,
    pub foreground: Option<Color>,
}

/// Editor syntax colors, grouped by kind of token.
///
/// Terminal formats carry none of these; editor themes fill what they can.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeColors {
    pub basic: BasicScope,
    pub advanced: AdvancedScope,
    pub markup: MarkupScope,
    pub diagnostics: DiagnosticScope,
    pub editor: EditorScope,
    pub misc: MiscScope,
}

/// Canonical intermediate scheme.
#[derive(Debug, Clone, Default, PartialEq, Facet, Serialize, Deserialize)]
#[serde(default)]
pub struct AbstractScheme {
    pub metadata: Meta,
    pub ansi_colors: AnsiColors,
    pub special_colors: SpecialColors,
    pub scope_colors: ScopeColors,
}

/// Builds a [`FallbackGroup`] over `AbstractScheme` color fields.
macro_rules! fallback_group {
    ($name:literal: $($section:ident . $field:ident),+ $(,)?) => {
        FallbackGroup::new($name, &[
            $({
                fn member(scheme: &mut AbstractScheme) -> &mut Option<Color> {
                    &mut scheme.$section.$field
                }
                member as Accessor<AbstractScheme, Color>
            }),+
        ])
    };
}

/// Groups of equivalent colors, evaluated in order.
pub static FALLBACK_GROUPS: &[FallbackGroup<AbstractScheme, Color>] = &[
    fallback_group!("background": special_colors.background, ansi_colors.black),
    fallback_group!("foreground": special_colors.foreground, ansi_colors.white),
    fallback_group!(
        "foreground_bright": special_colors.foreground_bright, ansi_colors.bright_white
    ),
    fallback_group!("black": ansi_colors.black, ansi_colors.bright_black),
    fallback_group!("red": ansi_colors.red, ansi_colors.bright_red),
    fallback_group!("green": ansi_colors.green, ansi_colors.bright_green),
    fallback_group!("yellow": ansi_colors.yellow, ansi_colors.bright_yellow),
    fallback_group!("blue": ansi_colors.blue, ansi_colors.bright_blue),
    fallback_group!("magenta": ansi_colors.magenta, ansi_colors.bright_magenta),
    fallback_group!("cyan": ansi_colors.cyan, ansi_colors.bright_cyan),
    fallback_group!("white": ansi_colors.white, ansi_colors.bright_white),
];

/// Names of all fallback groups in evaluation order.
pub fn fallback_group_names() -> impl Iterator<Item = &'static str> {
    FALLBACK_GROUPS.iter().map(|group| group.name)
}
