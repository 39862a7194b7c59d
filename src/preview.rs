//! The typographic sample shown for the selected family.
//!
//! The sample is a heading ladder (`h1` to `h6`) followed by two paragraphs
//! of running text, rendered as HTML with the current [`DisplaySettings`].

use crate::embed::StylesheetLink;
use crate::settings::DisplaySettings;
use crate::FamilyName;

/// A heading in the sample and its nominal size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleHeading {
    /// Heading level, 1 to 6.
    pub level: u8,
    /// Size as a CSS `rem` value.
    pub rem: &'static str,
    /// Size in CSS pixels at a 16px root.
    pub px: u16,
}

/// The headings of the sample, largest first.
pub const SAMPLE_HEADINGS: [SampleHeading; 6] = [
    SampleHeading { level: 1, rem: "3.75rem", px: 60 },
    SampleHeading { level: 2, rem: "3rem", px: 48 },
    SampleHeading { level: 3, rem: "2.25rem", px: 36 },
    SampleHeading { level: 4, rem: "1.875rem", px: 30 },
    SampleHeading { level: 5, rem: "1.5rem", px: 24 },
    SampleHeading { level: 6, rem: "1.25rem", px: 20 },
];

/// The running-text paragraphs of the sample.
pub const SAMPLE_PARAGRAPHS: [&str; 2] = [
    "This is a sample paragraph to demonstrate text alignment options. \
     Notice how different alignments affect the flow and readability of text. \
     The justified alignment creates straight edges on both the left and right sides.",
    "Typography is the art and technique of arranging type to make written language \
     legible, readable, and appealing when displayed. The arrangement of type involves \
     selecting typefaces, point sizes, line lengths, line spacing, and letter spacing, \
     as well as adjusting the space between pairs of letters.",
];

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
    out
}

/// The inline style of the sample container.
pub fn preview_style(family: &FamilyName, settings: &DisplaySettings) -> String {
    format!(
        "font-family: '{}', sans-serif; {}",
        family.replace('\'', "\\'"),
        settings.css_declarations()
    )
}

/// Render the sample as an HTML fragment.
pub fn render_sample(family: &FamilyName, settings: &DisplaySettings) -> String {
    let mut html = format!("<div style=\"{}\">\n", escape_html(&preview_style(family, settings)));
    for heading in SAMPLE_HEADINGS {
        html.push_str(&format!(
            "  <section>\n    \
             <h{level} style=\"font-size: {rem}\">Heading {level}</h{level}>\n    \
             <p>Font size: {rem} ({px}px)</p>\n  \
             </section>\n",
            level = heading.level,
            rem = heading.rem,
            px = heading.px,
        ));
    }
    html.push_str("  <section>\n    <h5>Paragraph Example</h5>\n");
    for paragraph in SAMPLE_PARAGRAPHS {
        html.push_str(&format!("    <p>{}</p>\n", escape_html(paragraph)));
    }
    html.push_str("  </section>\n</div>\n");
    html
}

/// Render a standalone HTML page that loads `family` and shows the sample.
pub fn render_document(family: &FamilyName, settings: &DisplaySettings) -> String {
    let link = StylesheetLink::new(family, &[settings.font_weight()]);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
         <title>{}</title>\n{}\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(family),
        link.to_html(),
        render_sample(family, settings)
    )
}
