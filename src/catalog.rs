//! The web font catalog.
//!
//! The catalog is a single JSON document of the form
//!
//! ```json
//! { "kind": "webfonts#webfontList",
//!   "items": [ { "family": "Roboto", "variants": ["regular", "700"],
//!                "subsets": ["latin"], "version": "v30",
//!                "lastModified": "2022-09-22", "files": { ... },
//!                "category": "sans-serif", "kind": "webfonts#webfont",
//!                "menu": "https://..." } ] }
//! ```
//!
//! It is consumed whole and never modified.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::charset::CharacterSet;
use crate::subset::{self, Subset};
use crate::variant::{FontStyle, FontWeight, Variant};
use crate::{Error, FamilyName};

/// The number of subsets listed in a [`FontDescriptor::summary`].
const SUMMARY_SUBSETS: usize = 3;

/// The broad classification of a family.
///
/// Categories this crate does not know about are kept verbatim in
/// [`Category::Other`], so they survive a round trip through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// `sans-serif`
    SansSerif,
    /// `serif`
    Serif,
    /// `display`
    Display,
    /// `handwriting`
    Handwriting,
    /// `monospace`
    Monospace,
    /// Any other category, as the catalog spells it.
    Other(String),
}

impl Category {
    /// The catalog's name for this category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::SansSerif => "sans-serif",
            Category::Serif => "serif",
            Category::Display => "display",
            Category::Handwriting => "handwriting",
            Category::Monospace => "monospace",
            Category::Other(name) => name,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Other(String::new())
    }
}

impl From<&str> for Category {
    fn from(src: &str) -> Category {
        match src {
            "sans-serif" => Category::SansSerif,
            "serif" => Category::Serif,
            "display" => Category::Display,
            "handwriting" => Category::Handwriting,
            "monospace" => Category::Monospace,
            other => Category::Other(other.to_owned()),
        }
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Category, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        Ok(Category::from(string.as_str()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One family in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub struct FontDescriptor {
    /// The family name; unique within a catalog.
    pub family: FamilyName,
    /// Variant tokens as listed by the catalog, e.g. `regular`, `700italic`.
    #[serde(default)]
    pub variants: Vec<String>,
    /// Subset identifiers, e.g. `latin`, `cyrillic-ext`.
    #[serde(default)]
    pub subsets: Vec<String>,
    /// The catalog's version string for this family.
    #[serde(default)]
    pub version: String,
    /// The last-modified date exactly as the catalog gives it, normally
    /// `YYYY-MM-DD`. See [`FontDescriptor::last_modified_date`].
    #[serde(default, deserialize_with = "checked_date", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    /// Font file URLs keyed by variant token, in catalog order.
    #[serde(default)]
    pub files: IndexMap<String, String>,
    /// The classification of the family.
    #[serde(default)]
    pub category: Category,
    /// The catalog's resource kind.
    #[serde(default)]
    pub kind: String,
    /// URL of a font file containing only the glyphs of the family name.
    #[serde(default)]
    pub menu: String,
}

fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
}

fn checked_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    if let Some(date) = raw.as_deref() {
        if let Err(e) = parse_date(date) {
            log::warn!("lastModified '{}' is not a date: {}", date, e);
        }
    }
    Ok(raw)
}

impl FontDescriptor {
    /// Create a descriptor with only a family name and category.
    pub fn new(family: FamilyName, category: Category) -> Self {
        FontDescriptor {
            family,
            variants: Vec::new(),
            subsets: Vec::new(),
            version: String::new(),
            last_modified: None,
            files: IndexMap::new(),
            category,
            kind: String::new(),
            menu: String::new(),
        }
    }

    /// Iterate over the variants that can be parsed, in catalog order.
    ///
    /// Unrecognized tokens are logged and skipped.
    pub fn parsed_variants(&self) -> impl Iterator<Item = Variant> + '_ {
        self.variants.iter().filter_map(move |token| match token.parse::<Variant>() {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("{} in '{}'", e, self.family);
                None
            }
        })
    }

    fn weights_with_style(&self, style: FontStyle) -> Vec<FontWeight> {
        let mut weights: Vec<_> =
            self.parsed_variants().filter(|v| v.style == style).map(|v| v.weight).collect();
        weights.sort();
        weights.dedup();
        weights
    }

    /// The upright weights of this family, lightest first.
    ///
    /// These are the weights the preview can be rendered in.
    pub fn upright_weights(&self) -> Vec<FontWeight> {
        self.weights_with_style(FontStyle::Normal)
    }

    /// The weights for which the family has an italic, lightest first.
    pub fn italic_weights(&self) -> Vec<FontWeight> {
        self.weights_with_style(FontStyle::Italic)
    }

    /// The last-modified date, if the catalog gave a valid `YYYY-MM-DD` one.
    pub fn last_modified_date(&self) -> Option<NaiveDate> {
        self.last_modified.as_deref().and_then(|raw| parse_date(raw).ok())
    }

    /// Returns `true` if the family has the given weight in upright style.
    pub fn has_weight(&self, weight: FontWeight) -> bool {
        self.upright_weights().contains(&weight)
    }

    /// The URL of the font file for a variant, if the catalog lists one.
    pub fn file_for(&self, variant: Variant) -> Option<&str> {
        self.files.get(&variant.token()).map(String::as_str)
    }

    /// The subsets of this family that are in the subset table, in catalog
    /// order. Unknown identifiers are logged and skipped.
    pub fn known_subsets(&self) -> Vec<&'static Subset> {
        self.subsets
            .iter()
            .filter_map(|id| {
                let found = subset::subset(id);
                if found.is_none() {
                    log::warn!("'{}' lists unknown subset '{}'", self.family, id);
                }
                found
            })
            .collect()
    }

    /// Expand every known subset of this family into its characters.
    pub fn character_sets(&self) -> Vec<(&'static Subset, CharacterSet)> {
        self.known_subsets().into_iter().map(|s| (s, s.expand())).collect()
    }

    /// A one-line summary for a font list entry:
    /// `"<n> weights • <up to three subsets>[...] • <category>"`.
    pub fn summary(&self) -> String {
        let shown = self.subsets.iter().take(SUMMARY_SUBSETS).cloned().collect::<Vec<_>>();
        let ellipsis = if self.subsets.len() > SUMMARY_SUBSETS { "..." } else { "" };
        format!(
            "{} weights • {}{} • {}",
            self.variants.len(),
            shown.join(", "),
            ellipsis,
            self.category
        )
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    kind: String,
    items: Vec<FontDescriptor>,
}

#[derive(Serialize)]
struct RawCatalogRef<'a> {
    kind: &'a str,
    items: Vec<&'a FontDescriptor>,
}

/// The full list of families, keyed by family name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    kind: String,
    fonts: IndexMap<FamilyName, FontDescriptor>,
}

impl Catalog {
    /// Build a catalog from descriptors, keeping their order.
    ///
    /// If a family name appears more than once, the first entry is kept.
    pub fn from_fonts(
        kind: impl Into<String>,
        fonts: impl IntoIterator<Item = FontDescriptor>,
    ) -> Self {
        let mut map = IndexMap::new();
        for font in fonts {
            if map.contains_key(&font.family) {
                log::warn!("duplicate family '{}' in catalog, keeping the first", font.family);
                continue;
            }
            map.insert(font.family.clone(), font);
        }
        Catalog { kind: kind.into(), fonts: map }
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Catalog, Error> {
        let raw: RawCatalog = serde_json::from_str(json).map_err(Error::ParseCatalog)?;
        Ok(Catalog::from_raw(raw))
    }

    /// Parse a catalog from a reader producing JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, Error> {
        let raw: RawCatalog = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                Error::Stream(e.into())
            } else {
                Error::ParseCatalog(e)
            }
        })?;
        Ok(Catalog::from_raw(raw))
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Catalog, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io { path: path.into(), source })?;
        Catalog::from_reader(BufReader::new(file))
    }

    fn from_raw(raw: RawCatalog) -> Catalog {
        let catalog = Catalog::from_fonts(raw.kind, raw.items);
        log::debug!("loaded catalog with {} families", catalog.len());
        catalog
    }

    fn to_raw(&self) -> RawCatalogRef<'_> {
        RawCatalogRef { kind: &self.kind, items: self.fonts.values().collect() }
    }

    /// Serialize the catalog back into its JSON document form.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_raw()).map_err(Error::SerializeCatalog)
    }

    /// Write the catalog as JSON to a writer.
    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error> {
        serde_json::to_writer(writer, &self.to_raw()).map_err(|e| {
            if e.is_io() {
                Error::Stream(e.into())
            } else {
                Error::SerializeCatalog(e)
            }
        })
    }

    /// Save the catalog as a JSON file, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io { path: path.into(), source })?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)?;
        writer.flush().map_err(|source| Error::Io { path: path.into(), source })
    }

    /// The catalog's resource kind, e.g. `webfonts#webfontList`.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Return the number of families.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Returns true if there are no families.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Iterate over the families, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &FontDescriptor> + '_ {
        self.fonts.values()
    }

    /// Iterate over the family names, in catalog order.
    pub fn families(&self) -> impl Iterator<Item = &FamilyName> + '_ {
        self.fonts.keys()
    }

    /// Returns the family with this exact name, if it exists.
    pub fn get(&self, family: &str) -> Option<&FontDescriptor> {
        self.fonts.get(family)
    }

    /// Returns `true` if the catalog contains this exact family name.
    pub fn contains(&self, family: &str) -> bool {
        self.fonts.contains_key(family)
    }

    /// The first family in the catalog.
    pub fn first(&self) -> Option<&FontDescriptor> {
        self.fonts.first().map(|(_, font)| font)
    }

    /// The families whose name contains `query`, ignoring case, in catalog
    /// order. An empty query matches every family.
    pub fn search(&self, query: &str) -> Vec<&FontDescriptor> {
        let query = query.trim();
        let results: Vec<_> = self.iter().filter(|font| font.family.matches(query)).collect();
        log::debug!("search '{}' matched {} of {} families", query, results.len(), self.len());
        results
    }

    /// The families in a category, in catalog order.
    pub fn in_category<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a FontDescriptor> + 'a {
        self.iter().filter(move |font| &font.category == category)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FontDescriptor;

    type IntoIter = indexmap::map::Values<'a, FamilyName, FontDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.fonts.values()
    }
}
