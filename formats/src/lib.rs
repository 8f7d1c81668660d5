//! Color-scheme formats and conversion between them.
//!
//! Every format is a schema struct whose tag directives point into the
//! canonical [`AbstractScheme`]. Conversion never couples two formats
//! directly:
//!
//! 1. the reader adapter parses text into its own struct,
//! 2. [`map_into`](hueport_core::map_into) lifts it into an `AbstractScheme`,
//! 3. [`FALLBACK_GROUPS`] fill colors the reader did not provide,
//! 4. [`map_from`](hueport_core::map_from) lowers it into the writer's struct,
//! 5. the writer adapter renders text.
//!
//! Built-in formats: `base16` (YAML), `gogh` (YAML), `alacritty` (TOML),
//! `windows-terminal` (JSON), `iterm` (XML plist) and `vscode` (JSON). See
//! [`Registry`].
//!
//! # Example
//!
//! ```
//! use hueport_formats::{ConvertConfig, Registry, convert};
//!
//! let registry = Registry::builtin();
//! let mut reader = registry.create("base16").unwrap();
//! let mut writer = registry.create("alacritty").unwrap();
//!
//! let input = "scheme: Ocean\nbase00: '2b303b'\nbase08: 'bf616a'\n";
//! let conversion = convert(input, reader.as_mut(), writer.as_mut(), &ConvertConfig::default())
//!     .unwrap();
//!
//! assert!(conversion.output.contains("background = \"#2b303b\""));
//! assert!(conversion.output.contains("red = \"#bf616a\""));
//! ```

mod adapter;
mod alacritty;
mod base16;
mod color;
mod config;
mod convert;
mod error;
mod gogh;
mod iterm;
mod registry;
mod report;
mod scheme;
mod vscode;
mod windows_terminal;

pub use adapter::{Adapter, TextFormat};
pub use alacritty::{
    AlacrittyColors, AlacrittyScheme, BrightColors, CursorColors, NormalColors, Primary,
    SelectionColors,
};
pub use base16::Base16Scheme;
pub use color::{Color, ParseColorError};
pub use config::ConvertConfig;
pub use convert::{Canonical, Conversion, convert, from_abstract, to_abstract};
pub use error::{FormatError, Result};
pub use gogh::GoghScheme;
pub use iterm::ItermScheme;
pub use registry::{Constructor, FormatInfo, Registry};
pub use report::{ConversionReport, FallbackFill};
pub use scheme::{
    AbstractScheme, AdvancedScope, AnsiColors, BasicScope, DiagnosticScope, EditorScope,
    FALLBACK_GROUPS, MarkupScope, Meta, MiscScope, ScopeColors, SpecialColors,
    fallback_group_names,
};
pub use vscode::{VsCodeColors, VsCodeTheme};
pub use windows_terminal::WindowsTerminalScheme;
