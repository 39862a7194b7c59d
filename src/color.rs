use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::InvalidColorString;

/// An opaque sRGB color, as picked in a color input.
///
/// Colors are parsed from CSS hex notation (`#RGB` or `#RRGGBB`; the `#` is
/// optional and case is ignored) and always serialize as upper-case
/// `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel value.
    pub red: u8,
    /// Green channel value.
    pub green: u8,
    /// Blue channel value.
    pub blue: u8,
}

impl Color {
    /// Pure black, `#000000`.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Pure white, `#FFFFFF`.
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Create a new color from its channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// Returns the color as an upper-case `#RRGGBB` string.
    pub fn to_hex_string(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Returns the channels scaled to `0.0..=1.0`.
    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            f64::from(self.red) / 255.0,
            f64::from(self.green) / 255.0,
            f64::from(self.blue) / 255.0,
        )
    }
}

impl FromStr for Color {
    type Err = InvalidColorString;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || InvalidColorString::new(s.to_owned());
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }

        let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).map_err(|_| err());
        let pair = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| err());
        match hex.len() {
            // #RGB expands each nibble: #F80 == #FF8800
            3 => Ok(Color::rgb(digit(0)? * 0x11, digit(1)? * 0x11, digit(2)? * 0x11)),
            6 => Ok(Color::rgb(pair(0)?, pair(2)?, pair(4)?)),
            _ => Err(err()),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Color::from_str(&string).map_err(serde::de::Error::custom)
    }
}
