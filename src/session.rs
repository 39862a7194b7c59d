//! The state of one font-testing session.
//!
//! A [`TesterSession`] holds the loaded catalog together with what the user
//! has chosen: the selected family, the search query, whether the font list
//! is open, and the [`DisplaySettings`]. Everything a view shows is derived
//! from it.

use std::sync::Arc;

use crate::catalog::{Catalog, FontDescriptor};
use crate::charset::CharacterSet;
use crate::contrast::ContrastResult;
use crate::embed::{EmbedSnippets, StylesheetChange, StylesheetLink};
use crate::settings::DisplaySettings;
use crate::subset::Subset;
use crate::variant::FontWeight;
use crate::{Error, FamilyName};

/// Shown in the information panel when a field is missing.
pub static UNKNOWN: &str = "Unknown";

/// The information panel for the selected family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontInfo {
    /// The category, e.g. `sans-serif`.
    pub category: String,
    /// The upright weights the preview can use, e.g. `300, 400, 700`.
    pub weights: String,
    /// The weights that also come in italic.
    pub italic_weights: String,
    /// The subsets, e.g. `latin, latin-ext`.
    pub subsets: String,
    /// The last-modified date as the catalog gives it.
    pub last_modified: String,
}

impl FontInfo {
    fn for_font(font: &FontDescriptor) -> Self {
        let or_unknown = |value: &str| {
            if value.is_empty() {
                UNKNOWN.to_string()
            } else {
                value.to_string()
            }
        };
        let join = |weights: Vec<FontWeight>| {
            let joined = weights.iter().map(|w| w.to_string()).collect::<Vec<_>>();
            or_unknown(&joined.join(", "))
        };
        FontInfo {
            category: or_unknown(font.category.as_str()),
            weights: join(font.upright_weights()),
            italic_weights: join(font.italic_weights()),
            subsets: or_unknown(&font.subsets.join(", ")),
            last_modified: or_unknown(font.last_modified.as_deref().unwrap_or_default()),
        }
    }
}

/// The available weight closest to `wanted`, preferring the lighter one on a
/// tie. With nothing available, `wanted` is returned unchanged.
fn nearest_weight(available: &[FontWeight], wanted: FontWeight) -> FontWeight {
    available
        .iter()
        .copied()
        .min_by_key(|w| (w.value().abs_diff(wanted.value()), w.value()))
        .unwrap_or(wanted)
}

/// The user's selections over one catalog.
#[derive(Debug, Clone)]
pub struct TesterSession {
    catalog: Arc<Catalog>,
    selected: Option<FamilyName>,
    query: String,
    list_open: bool,
    settings: DisplaySettings,
}

impl TesterSession {
    /// Start a session over `catalog`, with the first family selected.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let selected = catalog.first().map(|font| font.family.clone());
        if selected.is_none() {
            log::warn!("starting a session over an empty catalog");
        }
        TesterSession {
            catalog,
            selected,
            query: String::new(),
            list_open: false,
            settings: DisplaySettings::default(),
        }
    }

    /// The catalog of this session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The selected family name.
    pub fn selected(&self) -> Option<&FamilyName> {
        self.selected.as_ref()
    }

    /// The selected family's descriptor.
    pub fn selected_font(&self) -> Option<&FontDescriptor> {
        self.selected.as_ref().and_then(|name| self.catalog.get(name))
    }

    /// Select a family by its exact name, closing the font list.
    ///
    /// If the family lacks the chosen weight, the weight moves to the nearest
    /// upright weight it has. Returns the stylesheet links to swap in the
    /// document head.
    pub fn select(&mut self, family: &str) -> Result<StylesheetChange, Error> {
        let font = self.catalog.get(family).ok_or_else(|| Error::FontNotFound(family.into()))?;
        let name = font.family.clone();
        let weight = nearest_weight(&font.upright_weights(), self.settings.font_weight());
        let remove = self.stylesheet();

        log::debug!("selected '{}'", name);
        if weight != self.settings.font_weight() {
            let wanted = self.settings.font_weight();
            log::debug!("'{}' has no upright weight {}, using {}", name, wanted, weight);
            self.settings.set_font_weight(weight);
        }
        self.selected = Some(name.clone());
        self.close_list();
        let insert = StylesheetLink::new(&name, &self.preview_weights());
        Ok(StylesheetChange { remove, insert })
    }

    /// The current search query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the search query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The families matching the current query.
    pub fn filtered(&self) -> Vec<&FontDescriptor> {
        self.catalog.search(&self.query)
    }

    /// Whether the font list is open.
    pub fn is_list_open(&self) -> bool {
        self.list_open
    }

    /// Open the font list if closed, close it if open.
    pub fn toggle_list(&mut self) {
        if self.list_open {
            self.close_list();
        } else {
            self.list_open = true;
        }
    }

    /// Close the font list. Closing clears the search query.
    pub fn close_list(&mut self) {
        self.list_open = false;
        self.query.clear();
    }

    /// The display settings.
    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// Mutable access to the display settings.
    pub fn settings_mut(&mut self) -> &mut DisplaySettings {
        &mut self.settings
    }

    /// The contrast between the current text and background colors.
    pub fn contrast(&self) -> ContrastResult {
        self.settings.contrast()
    }

    /// The information panel for the selected family.
    pub fn font_info(&self) -> Option<FontInfo> {
        self.selected_font().map(FontInfo::for_font)
    }

    /// The weights to load for the preview: the family's upright weights.
    fn preview_weights(&self) -> Vec<FontWeight> {
        self.selected_font().map(FontDescriptor::upright_weights).unwrap_or_default()
    }

    /// The stylesheet link the preview needs, if a family is selected.
    pub fn stylesheet(&self) -> Option<StylesheetLink> {
        let name = self.selected.as_ref()?;
        Some(StylesheetLink::new(name, &self.preview_weights()))
    }

    /// The embed snippets for the selected family.
    pub fn snippets(&self) -> Option<EmbedSnippets> {
        let name = self.selected.as_ref()?;
        Some(EmbedSnippets::new(name, &self.preview_weights(), self.settings.font_weight()))
    }

    /// The characters of every known subset of the selected family.
    pub fn character_sets(&self) -> Vec<(&'static Subset, CharacterSet)> {
        self.selected_font().map(FontDescriptor::character_sets).unwrap_or_default()
    }
}
