//! Embed snippets for using a family on a web page.
//!
//! Everything here points at the font CSS API at [`FONT_CSS_API`], which
//! serves stylesheets in the same `css2` format as Google Fonts.

use crate::variant::FontWeight;
use crate::{Error, FamilyName};

/// The origin of the font CSS API.
pub static FONT_CSS_API: &str = "https://api.fonts.coollabs.io";

/// Weights requested when the caller does not name any.
pub const DEFAULT_WEIGHTS: [FontWeight; 2] = [FontWeight::Regular, FontWeight::Bold];

/// The generic family appended after the chosen family.
static FALLBACK_FAMILY: &str = "sans-serif";

/// The stylesheet URL for `family` in the given weights.
///
/// Weights are sorted and de-duplicated; an empty list requests
/// [`DEFAULT_WEIGHTS`].
///
/// ```
/// # use webfont_tester::{embed, FamilyName, FontWeight};
/// let family = FamilyName::new("Open Sans").unwrap();
/// assert_eq!(
///     embed::stylesheet_url(&family, &[FontWeight::Bold, FontWeight::Regular]),
///     "https://api.fonts.coollabs.io/css2?family=Open+Sans:wght@400;700&display=swap"
/// );
/// ```
pub fn stylesheet_url(family: &FamilyName, weights: &[FontWeight]) -> String {
    let mut weights = if weights.is_empty() { DEFAULT_WEIGHTS.to_vec() } else { weights.to_vec() };
    weights.sort();
    weights.dedup();
    let weights = weights.iter().map(|w| w.to_string()).collect::<Vec<_>>().join(";");
    format!(
        "{}/css2?family={}:wght@{}&display=swap",
        FONT_CSS_API,
        family.to_query_param(),
        weights
    )
}

/// Quote `family` as a single-quoted CSS string.
fn css_string(family: &str) -> String {
    let mut out = String::with_capacity(family.len() + 2);
    out.push('\'');
    for c in family.chars() {
        if c == '\'' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// The `<link rel="stylesheet">` element that loads a family for preview.
///
/// A view shows the selected family by inserting this element into the
/// document head and removing it again when the selection changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StylesheetLink {
    href: String,
}

impl StylesheetLink {
    /// The link for `family` in the given weights.
    pub fn new(family: &FamilyName, weights: &[FontWeight]) -> Self {
        StylesheetLink { href: stylesheet_url(family, weights) }
    }

    /// The stylesheet URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// The element as HTML.
    pub fn to_html(&self) -> String {
        format!("<link href=\"{}\" rel=\"stylesheet\" />", self.href)
    }
}

/// A change to the document head caused by selecting a different family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetChange {
    /// The link to remove, if one was inserted before.
    pub remove: Option<StylesheetLink>,
    /// The link to insert.
    pub insert: StylesheetLink,
}

/// The kinds of snippet offered for copying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetKind {
    /// `<link>` tags for the document head.
    HtmlLink,
    /// A CSS `@import` rule.
    CssImport,
    /// A `font-family` declaration.
    FontFamily,
    /// A `font-weight` declaration.
    FontWeight,
}

impl SnippetKind {
    /// Every kind, in display order.
    pub const ALL: [SnippetKind; 4] = [
        SnippetKind::HtmlLink,
        SnippetKind::CssImport,
        SnippetKind::FontFamily,
        SnippetKind::FontWeight,
    ];

    /// A heading for the snippet.
    pub fn title(&self) -> &'static str {
        match self {
            SnippetKind::HtmlLink => "HTML Link Format",
            SnippetKind::CssImport => "CSS Import Format",
            SnippetKind::FontFamily => "CSS Font Family Usage",
            SnippetKind::FontWeight => "CSS Font Weight Usage",
        }
    }
}

/// Ready-to-copy text for embedding a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedSnippets {
    /// A `preconnect` link followed by the stylesheet link.
    pub html_link: String,
    /// `@import url('...');`
    pub css_import: String,
    /// `font-family: '<family>', sans-serif;`
    pub font_family: String,
    /// `font-weight: <weight>;`
    pub font_weight: String,
}

impl EmbedSnippets {
    /// Build every snippet for `family`, loading `weights` and using `weight`
    /// in the `font-weight` declaration.
    pub fn new(family: &FamilyName, weights: &[FontWeight], weight: FontWeight) -> Self {
        let link = StylesheetLink::new(family, weights);
        EmbedSnippets {
            html_link: format!(
                "<link rel=\"preconnect\" href=\"{}\" crossorigin />\n{}",
                FONT_CSS_API,
                link.to_html()
            ),
            css_import: format!("@import url('{}');", link.href()),
            font_family: format!("font-family: {}, {};", css_string(family), FALLBACK_FAMILY),
            font_weight: format!("font-weight: {};", weight),
        }
    }

    /// The snippet of the given kind.
    pub fn get(&self, kind: SnippetKind) -> &str {
        match kind {
            SnippetKind::HtmlLink => &self.html_link,
            SnippetKind::CssImport => &self.css_import,
            SnippetKind::FontFamily => &self.font_family,
            SnippetKind::FontWeight => &self.font_weight,
        }
    }

    /// Iterate over `(kind, snippet)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SnippetKind, &str)> + '_ {
        SnippetKind::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}

/// Build the snippets for a family given by name, loading
/// [`DEFAULT_WEIGHTS`].
///
/// The family does not have to be in the catalog, but its name must be valid.
pub fn snippets_for(family: &str, weight: FontWeight) -> Result<EmbedSnippets, Error> {
    let family: FamilyName = family.parse()?;
    Ok(EmbedSnippets::new(&family, &DEFAULT_WEIGHTS, weight))
}

/// Put `text` on the system clipboard.
#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> Result<(), Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    log::debug!("copied {} bytes to the clipboard", text.len());
    Ok(())
}
