//! The Unicode subset table.
//!
//! This file relies on code that is generated in our build.rs script from
//! `resources/subsets.txt`, which lists every subset the catalog uses
//! together with the code-point ranges it covers.

use crate::charset::{CharacterSet, CodepointRange};
use crate::Error;

include!(concat!(env!("OUT_DIR"), "/subset_table_codegen.rs"));

/// A named group of Unicode ranges, such as `latin` or `cyrillic-ext`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subset {
    id: &'static str,
    name: &'static str,
    ranges: &'static [CodepointRange],
}

impl Subset {
    /// The identifier used by the catalog, e.g. `latin-ext`.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// A human-readable name, e.g. `Latin Extended`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The inclusive code-point ranges of this subset, in display order.
    pub fn ranges(&self) -> &'static [CodepointRange] {
        self.ranges
    }

    /// Expand this subset into its characters.
    pub fn expand(&self) -> CharacterSet {
        CharacterSet::from_ranges(self.ranges)
    }
}

impl std::fmt::Display for Subset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Every known subset, in display order.
pub fn all_subsets() -> &'static [Subset] {
    SUBSETS
}

/// Look up a subset by its identifier.
pub fn subset(id: &str) -> Option<&'static Subset> {
    SUBSET_INDEX.get(id).map(|idx| &SUBSETS[*idx])
}

/// Expand the subset named `id` into its characters.
pub fn expand_subset(id: &str) -> Result<CharacterSet, Error> {
    subset(id).map(Subset::expand).ok_or_else(|| Error::UnknownSubset(id.to_owned()))
}

/// Expand every subset in the table.
#[cfg(not(feature = "rayon"))]
pub fn expand_all() -> Vec<(&'static Subset, CharacterSet)> {
    SUBSETS.iter().map(|s| (s, s.expand())).collect()
}

/// Expand every subset in the table.
#[cfg(feature = "rayon")]
pub fn expand_all() -> Vec<(&'static Subset, CharacterSet)> {
    use rayon::prelude::*;

    SUBSETS.par_iter().map(|s| (s, s.expand())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup() {
        let latin = subset("latin").unwrap();
        assert_eq!(latin.id(), "latin");
        assert_eq!(latin.name(), "Latin");
        assert_eq!(latin.ranges()[0], (0x0000, 0x00FF));
        assert_eq!(subset("cyrillic-ext").map(Subset::name), Some("Cyrillic Extended"));
        assert!(subset("klingon").is_none());
        assert!(subset("Latin").is_none());
    }

    #[test]
    fn table_is_well_formed() {
        assert!(!all_subsets().is_empty());
        for (idx, s) in all_subsets().iter().enumerate() {
            assert!(!s.ranges().is_empty(), "{} has no ranges", s.id());
            assert!(s.ranges().iter().all(|(start, end)| start <= end), "{}", s.id());
            assert_eq!(subset(s.id()), Some(&all_subsets()[idx]));
        }
    }

    #[test]
    fn expand_known_subset() {
        let greek = expand_subset("greek").unwrap();
        assert!(greek.contains('α'));
        assert!(greek.contains('Ω'));
        assert!(!greek.contains('A'));
        assert_eq!(greek.iter().next(), Some('\u{0370}'));
    }

    #[test]
    fn expand_japanese_starts_with_cjk_punctuation() {
        let japanese = expand_subset("japanese").unwrap();
        assert_eq!(japanese.iter().next(), Some('\u{3000}'));
        assert!(japanese.contains('あ'));
        assert!(japanese.contains('カ'));
        assert!(japanese.contains('漢'));
    }

    #[test]
    fn expand_unknown_subset() {
        let err = expand_subset("klingon").unwrap_err();
        assert!(matches!(err, Error::UnknownSubset(ref id) if id == "klingon"));
    }

    #[test]
    fn expand_all_matches_table_order() {
        let expanded = expand_all();
        assert_eq!(expanded.len(), all_subsets().len());
        for ((s, chars), expected) in expanded.iter().zip(all_subsets()) {
            assert_eq!(s.id(), expected.id());
            assert_eq!(chars, &expected.expand());
        }
    }
}
