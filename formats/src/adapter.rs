//! The per-format adapter boundary.
//!
//! An adapter is a schema struct that knows how to fill itself from text and
//! render itself back. The conversion pipeline only sees it through
//! [`Adapter`] and the reflection views it exposes to the mapper.

use std::fmt;

use facet::{Peek, Poke, Shape};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{FormatError, Result};

/// Serialization syntax of a format's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Yaml,
    Toml,
    Json,
    /// Apple property list, XML flavor.
    Plist,
}

impl TextFormat {
    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Toml => "toml",
            Self::Json => "json",
            Self::Plist => "plist",
        }
    }

    /// Parses `input` into `T`, attributing failures to `format`.
    pub fn decode<T: DeserializeOwned>(self, format: &'static str, input: &str) -> Result<T> {
        let parsed = match self {
            Self::Yaml => serde_yaml::from_str(input).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(input).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(input).map_err(|e| e.to_string()),
            Self::Plist => plist::from_bytes(input.as_bytes()).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| FormatError::Parse { format, message })
    }

    /// Renders `value` as text.
    pub fn encode<T: Serialize>(self, value: &T) -> Result<String> {
        let text = match self {
            Self::Yaml => serde_yaml::to_string(value)?,
            Self::Toml => toml::to_string_pretty(value)?,
            Self::Json => {
                let mut text = serde_json::to_string_pretty(value)?;
                text.push('\n');
                text
            }
            Self::Plist => {
                let mut buffer = Vec::new();
                plist::to_writer_xml(&mut buffer, value)?;
                let mut text = String::from_utf8_lossy(&buffer).into_owned();
                if !text.ends_with('\n') {
                    text.push('\n');
                }
                text
            }
        };
        Ok(text)
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Yaml => "YAML",
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Plist => "plist",
        })
    }
}

/// A color-scheme format.
///
/// Implementors are schema structs deriving [`facet::Facet`] whose tag
/// directives point into [`AbstractScheme`](crate::AbstractScheme).
pub trait Adapter: fmt::Debug {
    /// Short identifying name.
    fn name(&self) -> &'static str;

    /// Alternative names accepted on lookup.
    fn aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Syntax used by [`parse`](Adapter::parse) and [`render`](Adapter::render).
    fn text_format(&self) -> TextFormat;

    /// Replaces the adapter's contents with the scheme parsed from `input`.
    fn parse(&mut self, input: &str) -> Result<()>;

    /// Renders the current contents as text.
    fn render(&self) -> Result<String>;

    /// Read view for the mapper.
    fn peek(&self) -> Peek<'_, 'static>;

    /// Write view for the mapper.
    fn poke(&mut self) -> Poke<'_, 'static>;

    /// Static shape, for schema validation.
    fn shape(&self) -> &'static Shape;
}

/// Implements [`Adapter`] for a serde-enabled schema struct.
macro_rules! impl_adapter {
    ($ty:ty, name: $name:literal, aliases: [$($alias:literal),*], format: $format:ident) => {
        impl $crate::Adapter for $ty {
            fn name(&self) -> &'static str {
                $name
            }

            fn aliases(&self) -> &'static [&'static str] {
                &[$($alias),*]
            }

            fn text_format(&self) -> $crate::TextFormat {
                $crate::TextFormat::$format
            }

            fn parse(&mut self, input: &str) -> $crate::Result<()> {
                *self = $crate::TextFormat::$format.decode($name, input)?;
                Ok(())
            }

            fn render(&self) -> $crate::Result<String> {
                $crate::TextFormat::$format.encode(self)
            }

            fn peek(&self) -> ::facet::Peek<'_, 'static> {
                ::facet::Peek::new(self)
            }

            fn poke(&mut self) -> ::facet::Poke<'_, 'static> {
                ::facet::Poke::new(self)
            }

            fn shape(&self) -> &'static ::facet::Shape {
                <Self as ::facet::Facet<'static>>::SHAPE
            }
        }
    };
}

pub(crate) use impl_adapter;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_decode_reports_format_name() {
        let err = TextFormat::Json
            .decode::<BTreeMap<String, String>>("gogh", "{not json")
            .unwrap_err();
        match err {
            FormatError::Parse { format, .. } => assert_eq!(format, "gogh"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_encode_each_syntax() {
        let mut map = BTreeMap::new();
        map.insert("name", "Nord");
        assert_eq!(TextFormat::Yaml.encode(&map).unwrap(), "name: Nord\n");
        assert_eq!(TextFormat::Toml.encode(&map).unwrap(), "name = \"Nord\"\n");
        assert_eq!(
            TextFormat::Json.encode(&map).unwrap(),
            "{\n  \"name\": \"Nord\"\n}\n"
        );
        let plist = TextFormat::Plist.encode(&map).unwrap();
        assert!(plist.contains("<key>name</key>"));
        assert!(plist.contains("<string>Nord</string>"));
        assert!(plist.ends_with('\n'));
    }

    #[test]
    fn test_plist_decodes_what_it_encodes() {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), "Nord".to_string());
        let text = TextFormat::Plist.encode(&map).unwrap();
        let parsed: BTreeMap<String, String> = TextFormat::Plist.decode("iterm", &text).unwrap();
        assert_eq!(parsed, map);
        assert!(matches!(
            TextFormat::Plist.decode::<BTreeMap<String, String>>("iterm", "<plist"),
            Err(FormatError::Parse { format: "iterm", .. })
        ));
    }
}
