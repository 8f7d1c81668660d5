//! Opaque RGBA color leaf.
//!
//! Components are stored as `f64` in `0.0..=1.0`. Text form is `#rrggbb`, or
//! `#rrggbbaa` when the color is not fully opaque; the leading `#` is optional
//! on input.

use std::fmt;
use std::str::FromStr;

use facet::Facet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Hex color parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("hex color must have 6 or 8 digits: {0:?}")]
    Length(String),
    #[error("invalid hex digit in color: {0:?}")]
    Digit(String),
}

/// RGBA color.
///
/// Opaque to the mapper: a color is always moved as one leaf.
#[derive(Debug, Clone, Copy, PartialEq, Default, Facet)]
#[facet(opaque)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Opaque color from 8-bit channels.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            1.0,
        )
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    ///
    /// ```
    /// use hueport_formats::Color;
    ///
    /// let teal = Color::from_hex("#008080").unwrap();
    /// assert_eq!(teal.to_rgb8(), (0, 128, 128));
    /// assert_eq!(teal.to_hex(), "#008080");
    /// assert!(Color::from_hex("#0080").is_err());
    /// ```
    pub fn from_hex(text: &str) -> Result<Self, ParseColorError> {
        let digits = text.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(ParseColorError::Length(text.to_string()));
        }
        let channel = |at: usize| {
            u8::from_str_radix(&digits[at..at + 2], 16)
                .map_err(|_| ParseColorError::Digit(text.to_string()))
        };
        let alpha = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(
            f64::from(channel(0)?) / 255.0,
            f64::from(channel(2)?) / 255.0,
            f64::from(channel(4)?) / 255.0,
            f64::from(alpha) / 255.0,
        ))
    }

    /// Channels rounded to 8 bits.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (to_u8(self.red), to_u8(self.green), to_u8(self.blue))
    }

    /// Lowercase hex, with an alpha pair only when not opaque.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        let a = to_u8(self.alpha);
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// Euclidean RGBA distance is within `tolerance`.
    pub fn similar(&self, other: &Color, tolerance: f64) -> bool {
        let d = [
            self.red - other.red,
            self.green - other.green,
            self.blue - other.blue,
            self.alpha - other.alpha,
        ];
        d.iter().map(|c| c * c).sum::<f64>() <= tolerance * tolerance
    }
}

fn to_u8(component: f64) -> u8 {
    (component.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_without_octothorpe() {
        assert_eq!(Color::from_hex("ff0000").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_alpha_round_trip() {
        let color = Color::from_hex("#11223380").unwrap();
        assert_eq!(color.to_hex(), "#11223380");
        assert!(color.alpha < 1.0);
    }

    #[test]
    fn test_every_channel_value_survives_hex() {
        for value in 0..=255u8 {
            let color = Color::rgb(value, value, value);
            assert_eq!(Color::from_hex(&color.to_hex()).unwrap(), color);
        }
    }

    #[test]
    fn test_invalid_digits() {
        assert_eq!(
            Color::from_hex("#gg0000"),
            Err(ParseColorError::Digit("#gg0000".into()))
        );
        assert!(matches!(Color::from_hex("#12345"), Err(ParseColorError::Length(_))));
    }

    #[test]
    fn test_similar_within_tolerance() {
        let a = Color::rgb(100, 100, 100);
        let b = Color::rgb(101, 100, 100);
        assert!(a.similar(&b, 0.01));
        assert!(!a.similar(&Color::rgb(200, 100, 100), 0.01));
    }

    #[test]
    fn test_color_is_a_mapping_leaf() {
        let color = Color::rgb(1, 2, 3);
        let value = facet::Peek::new(&color);
        assert!(matches!(hueport_core::reflect::node(value), hueport_core::Node::Leaf));
        assert!(hueport_core::reflect::fields_of(Color::SHAPE).is_none());
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Color::rgb(0, 255, 0)).unwrap();
        assert_eq!(json, "\"#00ff00\"");
        let parsed: Color = serde_json::from_str("\"#0000ff\"").unwrap();
        assert_eq!(parsed, Color::rgb(0, 0, 255));
    }
}
