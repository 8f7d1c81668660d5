//! Lookup of adapters by name or alias.

use facet::Facet;
use hueport_core::{ValidationError, check_acyclic, validate_tags};
use tracing::debug;

use crate::adapter::{Adapter, TextFormat};
use crate::alacritty::AlacrittyScheme;
use crate::base16::Base16Scheme;
use crate::error::{FormatError, Result};
use crate::gogh::GoghScheme;
use crate::iterm::ItermScheme;
use crate::scheme::AbstractScheme;
use crate::vscode::VsCodeTheme;
use crate::windows_terminal::WindowsTerminalScheme;

/// Creates a fresh, empty adapter.
pub type Constructor = fn() -> Box<dyn Adapter>;

/// Summary of a registered format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub text_format: TextFormat,
}

/// Set of known formats.
#[derive(Debug, Clone)]
pub struct Registry {
    constructors: Vec<Constructor>,
}

fn boxed<A: Adapter + Default + 'static>() -> Box<dyn Adapter> {
    Box::new(A::default())
}

impl Registry {
    /// Registry with no formats.
    pub fn empty() -> Self {
        Self {
            constructors: Vec::new(),
        }
    }

    /// Registry with every built-in format.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(boxed::<Base16Scheme>);
        registry.register(boxed::<GoghScheme>);
        registry.register(boxed::<AlacrittyScheme>);
        registry.register(boxed::<WindowsTerminalScheme>);
        registry.register(boxed::<ItermScheme>);
        registry.register(boxed::<VsCodeTheme>);
        registry
    }

    pub fn register(&mut self, constructor: Constructor) {
        self.constructors.push(constructor);
    }

    /// Creates a fresh adapter for `name`, matching names and aliases
    /// case-insensitively.
    ///
    /// ```
    /// use hueport_formats::{Adapter, Registry};
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.create("WT").unwrap().name(), "windows-terminal");
    /// assert!(registry.create("kitty").is_err());
    /// ```
    pub fn create(&self, name: &str) -> Result<Box<dyn Adapter>> {
        let wanted = name.trim().to_ascii_lowercase();
        self.constructors
            .iter()
            .map(|construct| construct())
            .find(|adapter| {
                adapter.name() == wanted || adapter.aliases().iter().any(|alias| *alias == wanted)
            })
            .ok_or_else(|| FormatError::UnknownFormat(name.to_string()))
    }

    /// Registered formats in registration order.
    pub fn formats(&self) -> Vec<FormatInfo> {
        self.constructors
            .iter()
            .map(|construct| {
                let adapter = construct();
                FormatInfo {
                    name: adapter.name(),
                    aliases: adapter.aliases(),
                    text_format: adapter.text_format(),
                }
            })
            .collect()
    }

    /// Runs the static schema checks for every format and returns the
    /// failures per format name. Formats without problems are omitted.
    pub fn check(&self, tag_key: &str) -> Vec<(&'static str, Vec<ValidationError>)> {
        let mut failures = Vec::new();
        for construct in &self.constructors {
            let adapter = construct();
            let shape = adapter.shape();
            let errors = match check_acyclic(shape) {
                Ok(()) => validate_tags(shape, AbstractScheme::SHAPE, tag_key),
                Err(cycle) => vec![cycle],
            };
            debug!(format = adapter.name(), errors = errors.len(), "validated schema");
            if !errors.is_empty() {
                failures.push((adapter.name(), errors));
            }
        }
        failures
    }

    /// Like [`check`](Self::check) but fails on the first invalid format.
    pub fn validate(&self, tag_key: &str) -> Result<()> {
        match self.check(tag_key).into_iter().next() {
            Some((format, errors)) => Err(FormatError::InvalidSchema { format, errors }),
            None => Ok(()),
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_formats_in_order() {
        let names: Vec<_> = Registry::builtin()
            .formats()
            .into_iter()
            .map(|info| info.name)
            .collect();
        assert_eq!(
            names,
            vec!["base16", "gogh", "alacritty", "windows-terminal", "iterm", "vscode"]
        );
    }

    #[test]
    fn test_alias_lookup() {
        let registry = Registry::builtin();
        assert_eq!(registry.create("16").unwrap().name(), "base16");
        assert_eq!(registry.create(" Gogh ").unwrap().name(), "gogh");
        assert_eq!(registry.create("itermcolors").unwrap().name(), "iterm");
        assert_eq!(registry.create("VSCode").unwrap().name(), "vscode");
        assert!(matches!(
            registry.create("sepia"),
            Err(FormatError::UnknownFormat(name)) if name == "sepia"
        ));
    }

    #[test]
    fn test_builtin_schemas_validate() {
        let registry = Registry::builtin();
        assert!(registry.check("canonical").is_empty());
        assert!(registry.validate("canonical").is_ok());
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registry = Registry::empty();
        assert!(registry.formats().is_empty());
        assert!(registry.create("base16").is_err());
    }
}
