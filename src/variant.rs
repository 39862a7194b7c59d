//! Font variants: weight and style.
//!
//! The catalog lists the variants of a family as short tokens: `regular`,
//! `italic`, a numeric weight such as `700`, or a weight followed by
//! `italic`, such as `300italic`.

use std::str::FromStr;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

/// A CSS font weight.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize_repr,
    Deserialize_repr,
)]
#[repr(u16)]
pub enum FontWeight {
    /// 100
    Thin = 100,
    /// 200
    ExtraLight = 200,
    /// 300
    Light = 300,
    /// 400, the weight of `regular`.
    #[default]
    Regular = 400,
    /// 500
    Medium = 500,
    /// 600
    SemiBold = 600,
    /// 700
    Bold = 700,
    /// 800
    ExtraBold = 800,
    /// 900
    Black = 900,
}

impl FontWeight {
    /// Every weight, lightest first.
    pub const ALL: [FontWeight; 9] = [
        FontWeight::Thin,
        FontWeight::ExtraLight,
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::SemiBold,
        FontWeight::Bold,
        FontWeight::ExtraBold,
        FontWeight::Black,
    ];

    /// Returns the weight with the given numeric value, if it is one of the
    /// nine standard weights.
    pub fn from_value(value: u16) -> Option<FontWeight> {
        FontWeight::ALL.iter().copied().find(|w| w.value() == value)
    }

    /// The numeric CSS value.
    pub fn value(self) -> u16 {
        self as u16
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Upright or italic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright.
    #[default]
    Normal,
    /// Italic.
    Italic,
}

/// One weight/style combination offered by a family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variant {
    /// The weight.
    pub weight: FontWeight,
    /// The style.
    pub style: FontStyle,
}

impl Variant {
    /// Create a new variant.
    pub fn new(weight: FontWeight, style: FontStyle) -> Self {
        Variant { weight, style }
    }

    /// Returns `true` for italic variants.
    pub fn is_italic(&self) -> bool {
        self.style == FontStyle::Italic
    }

    /// The catalog token for this variant, e.g. `regular` or `700italic`.
    pub fn token(&self) -> String {
        match (self.weight, self.style) {
            (FontWeight::Regular, FontStyle::Normal) => "regular".into(),
            (FontWeight::Regular, FontStyle::Italic) => "italic".into(),
            (weight, FontStyle::Normal) => weight.to_string(),
            (weight, FontStyle::Italic) => format!("{}italic", weight),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => return Ok(Variant::new(FontWeight::Regular, FontStyle::Normal)),
            "italic" => return Ok(Variant::new(FontWeight::Regular, FontStyle::Italic)),
            _ => (),
        }
        let (digits, style) = match s.strip_suffix("italic") {
            Some(digits) => (digits, FontStyle::Italic),
            None => (s, FontStyle::Normal),
        };
        digits
            .parse::<u16>()
            .ok()
            .and_then(FontWeight::from_value)
            .map(|weight| Variant::new(weight, style))
            .ok_or_else(|| format!("unrecognized font variant '{}'", s))
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.token())
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.token())
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Variant, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Variant::from_str(&string).map_err(serde::de::Error::custom)
    }
}
