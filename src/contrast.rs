//! WCAG 2.1 contrast ratio evaluation.
//!
//! The ratio between two colors is computed from their relative luminance:
//!
//! ```text
//! L     = 0.2126 * R_lin + 0.7152 * G_lin + 0.0722 * B_lin
//! ratio = (L_lighter + 0.05) / (L_darker + 0.05)
//! ```
//!
//! and classified against the thresholds of success criteria 1.4.3 and
//! 1.4.6 (text) and 1.4.11 (non-text contrast).
//!
//! # Examples
//!
//! ```
//! use webfont_tester::{ContrastResult, Rating};
//!
//! let result = ContrastResult::evaluate("#FFFFFF", "#000000");
//! assert_eq!(result.ratio_label(), "21.00:1");
//! assert_eq!(result.normal_text, Rating::Aaa);
//! ```

use serde::Serialize;

use crate::Color;

/// Minimum ratio for normal text at level AA.
pub const NORMAL_TEXT_AA: f64 = 4.5;
/// Minimum ratio for normal text at level AAA.
pub const NORMAL_TEXT_AAA: f64 = 7.0;
/// Minimum ratio for large text at level AA.
pub const LARGE_TEXT_AA: f64 = 3.0;
/// Minimum ratio for large text at level AAA.
pub const LARGE_TEXT_AAA: f64 = 4.5;
/// Minimum ratio for graphic elements and UI components.
pub const GRAPHIC_ELEMENTS_AA: f64 = 3.0;

/// The lowest possible contrast ratio, between two identical colors.
pub const MIN_RATIO: f64 = 1.0;

/// Compute the relative luminance of a color.
///
/// Returns a value in `0.0..=1.0`, where 0 is black and 1 is white.
pub fn relative_luminance(color: Color) -> f64 {
    let (r, g, b) = color.to_unit_rgb();
    0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b)
}

/// sRGB gamma expansion of a single channel in `0.0..=1.0`.
fn linearize(channel: f64) -> f64 {
    if channel <= 0.03928 {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the contrast ratio between two colors.
///
/// The result is in `1.0..=21.0` and does not depend on argument order.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// The outcome of checking a ratio against one WCAG category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Rating {
    /// Below the AA threshold.
    Fail,
    /// Meets level AA.
    Aa,
    /// Meets level AAA.
    Aaa,
}

impl Rating {
    fn classify(ratio: f64, aa: f64, aaa: Option<f64>) -> Rating {
        match aaa {
            Some(aaa) if ratio >= aaa => Rating::Aaa,
            _ if ratio >= aa => Rating::Aa,
            _ => Rating::Fail,
        }
    }

    /// Classify a ratio for normal-size text (below 18pt, or 14pt bold).
    pub fn normal_text(ratio: f64) -> Rating {
        Rating::classify(ratio, NORMAL_TEXT_AA, Some(NORMAL_TEXT_AAA))
    }

    /// Classify a ratio for large text (at least 18pt, or 14pt bold).
    pub fn large_text(ratio: f64) -> Rating {
        Rating::classify(ratio, LARGE_TEXT_AA, Some(LARGE_TEXT_AAA))
    }

    /// Classify a ratio for graphic elements and UI components.
    ///
    /// Non-text contrast has a single threshold, so the best rating here
    /// is [`Rating::Aa`].
    pub fn graphic_elements(ratio: f64) -> Rating {
        Rating::classify(ratio, GRAPHIC_ELEMENTS_AA, None)
    }

    /// Returns `true` unless this is [`Rating::Fail`].
    pub fn is_pass(self) -> bool {
        self != Rating::Fail
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Rating::Fail => write!(f, "Fail"),
            Rating::Aa => write!(f, "Pass (AA)"),
            Rating::Aaa => write!(f, "Pass (AAA)"),
        }
    }
}

/// A contrast ratio together with its three WCAG classifications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// The contrast ratio, at least 1.0.
    pub ratio: f64,
    /// Rating for normal-size text.
    pub normal_text: Rating,
    /// Rating for large text.
    pub large_text: Rating,
    /// Rating for graphic elements and UI components.
    pub graphic_elements: Rating,
}

impl ContrastResult {
    /// Classify an already computed ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        ContrastResult {
            ratio,
            normal_text: Rating::normal_text(ratio),
            large_text: Rating::large_text(ratio),
            graphic_elements: Rating::graphic_elements(ratio),
        }
    }

    /// The result reported when the input colors cannot be understood.
    pub fn worst_case() -> Self {
        ContrastResult::from_ratio(MIN_RATIO)
    }

    /// Evaluate the contrast between two parsed colors.
    pub fn between(foreground: Color, background: Color) -> Self {
        ContrastResult::from_ratio(contrast_ratio(foreground, background))
    }

    /// Evaluate the contrast between two hex color strings.
    ///
    /// This never fails: if either string is not a valid color the
    /// [worst case](ContrastResult::worst_case) is returned, so a bad input
    /// can only ever be reported as failing.
    pub fn evaluate(foreground: &str, background: &str) -> Self {
        match (foreground.parse::<Color>(), background.parse::<Color>()) {
            (Ok(fg), Ok(bg)) => ContrastResult::between(fg, bg),
            (fg, bg) => {
                for err in [fg.err(), bg.err()].into_iter().flatten() {
                    log::warn!("{}, reporting worst-case contrast", err);
                }
                ContrastResult::worst_case()
            }
        }
    }

    /// Returns `true` if every category passes at least at level AA.
    pub fn passes_all(&self) -> bool {
        self.normal_text.is_pass() && self.large_text.is_pass() && self.graphic_elements.is_pass()
    }

    /// The ratio formatted for display, e.g. `4.52:1`.
    pub fn ratio_label(&self) -> String {
        format!("{:.2}:1", self.ratio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(s: &str) -> Color {
        s.parse().unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn black_and_white() {
        assert_close(relative_luminance(Color::BLACK), 0.0);
        assert_close(relative_luminance(Color::WHITE), 1.0);
        assert_close(contrast_ratio(Color::WHITE, Color::BLACK), 21.0);
        assert_close(contrast_ratio(Color::BLACK, Color::WHITE), 21.0);
    }

    #[test]
    fn ratio_is_symmetric() {
        let samples = ["#FFC745", "#007A78", "#777777", "#888888", "#123", "#FEDCBA"];
        for a in samples {
            for b in samples {
                assert_eq!(contrast_ratio(color(a), color(b)), contrast_ratio(color(b), color(a)));
            }
        }
    }

    #[test]
    fn identical_colors_have_no_contrast() {
        for c in ["#000000", "#FFFFFF", "#FFC745", "#007A78", "#7F7F7F"] {
            assert_eq!(contrast_ratio(color(c), color(c)), 1.0);
        }
    }

    #[test]
    fn ratio_grows_with_luminance_separation() {
        let bg = Color::BLACK;
        let mut last = 1.0;
        for level in (0..=255u8).step_by(15) {
            let ratio = contrast_ratio(Color::rgb(level, level, level), bg);
            assert!(ratio >= last, "{} < {} at {}", ratio, last, level);
            last = ratio;
        }
    }

    #[test]
    fn classification_boundaries_are_inclusive() {
        assert_eq!(Rating::normal_text(4.5), Rating::Aa);
        assert_eq!(Rating::normal_text(4.499999), Rating::Fail);
        assert_eq!(Rating::normal_text(7.0), Rating::Aaa);
        assert_eq!(Rating::normal_text(6.999999), Rating::Aa);

        assert_eq!(Rating::large_text(3.0), Rating::Aa);
        assert_eq!(Rating::large_text(2.999999), Rating::Fail);
        assert_eq!(Rating::large_text(4.5), Rating::Aaa);

        assert_eq!(Rating::graphic_elements(3.0), Rating::Aa);
        assert_eq!(Rating::graphic_elements(2.999999), Rating::Fail);
        assert_eq!(Rating::graphic_elements(21.0), Rating::Aa);
    }

    #[test]
    fn white_on_black_passes_everything() {
        let result = ContrastResult::evaluate("#FFFFFF", "#000000");
        assert_eq!(result.ratio_label(), "21.00:1");
        assert_eq!(result.normal_text, Rating::Aaa);
        assert_eq!(result.large_text, Rating::Aaa);
        assert_eq!(result.graphic_elements, Rating::Aa);
        assert!(result.passes_all());
    }

    #[test]
    fn close_greys_fail_everything() {
        let result = ContrastResult::evaluate("#777777", "#888888");
        assert!(result.ratio < 3.0);
        assert_eq!(result.normal_text, Rating::Fail);
        assert_eq!(result.large_text, Rating::Fail);
        assert_eq!(result.graphic_elements, Rating::Fail);
        assert!(!result.passes_all());
    }

    #[test]
    fn default_tester_colors() {
        // #FFC745 on #007A78
        let result = ContrastResult::evaluate("#FFC745", "#007A78");
        assert!(result.ratio > 3.0 && result.ratio < 4.5, "{}", result.ratio);
        assert_eq!(result.normal_text, Rating::Fail);
        assert_eq!(result.large_text, Rating::Aa);
        assert_eq!(result.graphic_elements, Rating::Aa);
    }

    #[test]
    fn malformed_input_fails_closed() {
        for (fg, bg) in [("#FFFFFF", "black"), ("", "#000000"), ("#12", "#34")] {
            let result = ContrastResult::evaluate(fg, bg);
            assert_eq!(result, ContrastResult::worst_case());
            assert_eq!(result.ratio, MIN_RATIO);
            assert!(!result.normal_text.is_pass());
            assert!(!result.large_text.is_pass());
            assert!(!result.graphic_elements.is_pass());
        }
    }

    #[test]
    fn rating_labels() {
        assert_eq!(Rating::Fail.to_string(), "Fail");
        assert_eq!(Rating::Aa.to_string(), "Pass (AA)");
        assert_eq!(Rating::Aaa.to_string(), "Pass (AAA)");
    }
}
