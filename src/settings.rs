//! How the preview is displayed.

use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::contrast::ContrastResult;
use crate::variant::FontWeight;
use crate::{Color, Error};

/// Allowed letter spacing, in `em`.
pub const LETTER_SPACING_RANGE: RangeInclusive<f64> = -0.1..=0.5;
/// Slider step for letter spacing, in `em`.
pub const LETTER_SPACING_STEP: f64 = 0.01;
/// Allowed line height, as a multiple of the font size.
pub const LINE_HEIGHT_RANGE: RangeInclusive<f64> = 1.0..=2.5;
/// Slider step for line height.
pub const LINE_HEIGHT_STEP: f64 = 0.1;

const DEFAULT_TEXT_COLOR: Color = Color::rgb(0xFF, 0xC7, 0x45);
const DEFAULT_BACKGROUND_COLOR: Color = Color::rgb(0x00, 0x7A, 0x78);
const DEFAULT_LETTER_SPACING: f64 = 0.0;
const DEFAULT_LINE_HEIGHT: f64 = 1.5;

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// `left`
    #[default]
    Left,
    /// `center`
    Center,
    /// `right`
    Right,
    /// `justify`
    Justify,
}

impl TextAlign {
    /// Every alignment, in menu order.
    pub const ALL: [TextAlign; 4] =
        [TextAlign::Left, TextAlign::Center, TextAlign::Right, TextAlign::Justify];

    /// The CSS keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
            TextAlign::Justify => "justify",
        }
    }
}

impl std::fmt::Display for TextAlign {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextAlign::ALL
            .iter()
            .copied()
            .find(|align| align.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown text alignment '{}'", s))
    }
}

/// The user's display choices for the preview.
///
/// Numeric values are clamped into their allowed range on every write, so a
/// `DisplaySettings` always holds values the preview can render.
///
/// # Examples
///
/// ```
/// use webfont_tester::{DisplaySettings, FontWeight, TextAlign};
///
/// let settings = DisplaySettings::default()
///     .with_line_height(9.0)
///     .with_text_align(TextAlign::Center)
///     .with_font_weight(FontWeight::Bold);
/// assert_eq!(settings.line_height(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "UncheckedSettings")]
pub struct DisplaySettings {
    text_color: Color,
    background_color: Color,
    letter_spacing: f64,
    line_height: f64,
    text_align: TextAlign,
    font_weight: FontWeight,
}

#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct UncheckedSettings {
    text_color: Color,
    background_color: Color,
    letter_spacing: f64,
    line_height: f64,
    text_align: TextAlign,
    font_weight: FontWeight,
}

impl Default for UncheckedSettings {
    fn default() -> Self {
        let d = DisplaySettings::default();
        UncheckedSettings {
            text_color: d.text_color,
            background_color: d.background_color,
            letter_spacing: d.letter_spacing,
            line_height: d.line_height,
            text_align: d.text_align,
            font_weight: d.font_weight,
        }
    }
}

impl From<UncheckedSettings> for DisplaySettings {
    fn from(src: UncheckedSettings) -> DisplaySettings {
        DisplaySettings::default()
            .with_text_color(src.text_color)
            .with_background_color(src.background_color)
            .with_letter_spacing(src.letter_spacing)
            .with_line_height(src.line_height)
            .with_text_align(src.text_align)
            .with_font_weight(src.font_weight)
    }
}

fn clamp(value: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

impl DisplaySettings {
    /// Set the text color.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Set the background color.
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the letter spacing in `em`, clamped to [`LETTER_SPACING_RANGE`].
    pub fn with_letter_spacing(mut self, em: f64) -> Self {
        self.set_letter_spacing(em);
        self
    }

    /// Set the line height, clamped to [`LINE_HEIGHT_RANGE`].
    pub fn with_line_height(mut self, multiple: f64) -> Self {
        self.set_line_height(multiple);
        self
    }

    /// Set the text alignment.
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = align;
        self
    }

    /// Set the font weight.
    pub fn with_font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set the text color in place.
    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Set the background color in place.
    pub fn set_background_color(&mut self, color: Color) {
        self.background_color = color;
    }

    /// Set the text color from a hex string such as `#FFC745`.
    ///
    /// On error the current color is kept.
    pub fn set_text_color_hex(&mut self, hex: &str) -> Result<(), Error> {
        self.text_color = hex.parse()?;
        Ok(())
    }

    /// Set the background color from a hex string such as `#007A78`.
    ///
    /// On error the current color is kept.
    pub fn set_background_color_hex(&mut self, hex: &str) -> Result<(), Error> {
        self.background_color = hex.parse()?;
        Ok(())
    }

    /// Set the letter spacing in `em`, clamped to [`LETTER_SPACING_RANGE`].
    ///
    /// `NaN` resets it to the default of `0em`.
    pub fn set_letter_spacing(&mut self, em: f64) {
        self.letter_spacing = clamp(em, &LETTER_SPACING_RANGE, DEFAULT_LETTER_SPACING);
    }

    /// Set the line height, clamped to [`LINE_HEIGHT_RANGE`].
    ///
    /// `NaN` resets it to the default of `1.5`.
    pub fn set_line_height(&mut self, multiple: f64) {
        self.line_height = clamp(multiple, &LINE_HEIGHT_RANGE, DEFAULT_LINE_HEIGHT);
    }

    /// Set the text alignment in place.
    pub fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    /// Set the font weight in place.
    pub fn set_font_weight(&mut self, weight: FontWeight) {
        self.font_weight = weight;
    }

    /// The text color.
    pub fn text_color(&self) -> Color {
        self.text_color
    }

    /// The background color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// The letter spacing, in `em`.
    pub fn letter_spacing(&self) -> f64 {
        self.letter_spacing
    }

    /// The line height, as a multiple of the font size.
    pub fn line_height(&self) -> f64 {
        self.line_height
    }

    /// The text alignment.
    pub fn text_align(&self) -> TextAlign {
        self.text_align
    }

    /// The font weight used by the preview and the `font-weight` snippet.
    pub fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Swap text and background colors.
    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.text_color, &mut self.background_color);
    }

    /// The WCAG contrast between the text and background colors.
    pub fn contrast(&self) -> ContrastResult {
        ContrastResult::between(self.text_color, self.background_color)
    }

    /// Letter spacing formatted for a slider label, e.g. `0.05em`.
    pub fn letter_spacing_label(&self) -> String {
        format!("{:.2}em", self.letter_spacing)
    }

    /// Line height formatted for a slider label, e.g. `1.5`.
    pub fn line_height_label(&self) -> String {
        format!("{:.1}", self.line_height)
    }

    /// The CSS declarations for the preview, without the font family.
    pub fn css_declarations(&self) -> String {
        format!(
            "background-color: {}; color: {}; letter-spacing: {}em; line-height: {}; \
             text-align: {}; font-weight: {};",
            self.background_color,
            self.text_color,
            self.letter_spacing,
            self.line_height,
            self.text_align,
            self.font_weight,
        )
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            text_color: DEFAULT_TEXT_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
            letter_spacing: DEFAULT_LETTER_SPACING,
            line_height: DEFAULT_LINE_HEIGHT,
            text_align: TextAlign::default(),
            font_weight: FontWeight::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::Rating;

    #[test]
    fn defaults() {
        let settings = DisplaySettings::default();
        assert_eq!(settings.text_color().to_string(), "#FFC745");
        assert_eq!(settings.background_color().to_string(), "#007A78");
        assert_eq!(settings.letter_spacing(), 0.0);
        assert_eq!(settings.line_height(), 1.5);
        assert_eq!(settings.text_align(), TextAlign::Left);
        assert_eq!(settings.font_weight(), FontWeight::Regular);
    }

    #[test]
    fn values_are_clamped() {
        let mut settings =
            DisplaySettings::default().with_letter_spacing(-3.0).with_line_height(0.2);
        assert_eq!(settings.letter_spacing(), -0.1);
        assert_eq!(settings.line_height(), 1.0);

        settings.set_letter_spacing(0.75);
        settings.set_line_height(2.5);
        assert_eq!(settings.letter_spacing(), 0.5);
        assert_eq!(settings.line_height(), 2.5);

        settings.set_line_height(f64::NAN);
        assert_eq!(settings.line_height(), 1.5);
    }

    #[test]
    fn labels() {
        let settings = DisplaySettings::default().with_letter_spacing(0.05).with_line_height(2.0);
        assert_eq!(settings.letter_spacing_label(), "0.05em");
        assert_eq!(settings.line_height_label(), "2.0");
    }

    #[test]
    fn css_declarations() {
        let settings = DisplaySettings::default()
            .with_letter_spacing(0.1)
            .with_text_align(TextAlign::Justify)
            .with_font_weight(FontWeight::Bold);
        assert_eq!(
            settings.css_declarations(),
            "background-color: #007A78; color: #FFC745; letter-spacing: 0.1em; line-height: 1.5; \
             text-align: justify; font-weight: 700;"
        );
    }

    #[test]
    fn contrast_follows_colors() {
        let mut settings = DisplaySettings::default()
            .with_text_color(Color::BLACK)
            .with_background_color(Color::WHITE);
        assert_eq!(settings.contrast().normal_text, Rating::Aaa);
        settings.set_text_color(Color::rgb(0xEE, 0xEE, 0xEE));
        assert_eq!(settings.contrast().normal_text, Rating::Fail);

        let before = settings.contrast();
        settings.swap_colors();
        assert_eq!(settings.contrast(), before);
    }

    #[test]
    fn deserialize_clamps_and_fills_defaults() {
        let json = r##"{"textColor": "#000", "lineHeight": 4, "textAlign": "center"}"##;
        let settings: DisplaySettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.text_color(), Color::BLACK);
        assert_eq!(settings.background_color(), Color::rgb(0x00, 0x7A, 0x78));
        assert_eq!(settings.line_height(), 2.5);
        assert_eq!(settings.text_align(), TextAlign::Center);
    }

    #[test]
    fn serialize() {
        let json = serde_json::to_string(&DisplaySettings::default()).unwrap();
        assert_eq!(
            json,
            concat!(
                r##"{"textColor":"#FFC745","backgroundColor":"#007A78","letterSpacing":0.0,"##,
                r##""lineHeight":1.5,"textAlign":"left","fontWeight":400}"##
            )
        );
    }

    #[test]
    fn hex_setters_keep_color_on_error() {
        let mut settings = DisplaySettings::default();
        settings.set_text_color_hex("#fff").unwrap();
        assert_eq!(settings.text_color(), Color::WHITE);

        let err = settings.set_background_color_hex("teal").unwrap_err();
        assert!(matches!(err, Error::InvalidColor(ref e) if e.as_str() == "teal"));
        assert_eq!(settings.background_color(), Color::rgb(0x00, 0x7A, 0x78));
    }

    #[test]
    fn parse_alignment() {
        assert_eq!("Justify".parse::<TextAlign>(), Ok(TextAlign::Justify));
        assert!("middle".parse::<TextAlign>().is_err());
    }
}
