//! Expanding code-point ranges into characters.
//!
//! A [`CharacterSet`] is the fully materialized, ordered list of characters
//! covered by a list of inclusive code-point ranges. Expansion is best
//! effort: values that are not Unicode scalar values (the surrogate block
//! `U+D800..=U+DFFF` and anything above `U+10FFFF`) are skipped, as are
//! reversed ranges.

use std::ops::RangeInclusive;

/// An inclusive `(start, end)` range of Unicode code points.
pub type CodepointRange = (u32, u32);

const MAX_CODEPOINT: u32 = char::MAX as u32;

/// An ordered sequence of characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterSet(Vec<char>);

impl CharacterSet {
    /// Construct a new set from characters, keeping their order.
    ///
    /// ```
    /// # use webfont_tester::CharacterSet;
    /// let chars = CharacterSet::new(['A', 'B']);
    /// assert_eq!(chars.len(), 2);
    /// ```
    pub fn new(src: impl IntoIterator<Item = char>) -> Self {
        Self(src.into_iter().collect())
    }

    /// Expand `ranges`, in order, into the characters they cover.
    ///
    /// ```
    /// # use webfont_tester::CharacterSet;
    /// let chars = CharacterSet::from_ranges(&[(0x41, 0x43)]);
    /// assert_eq!(chars.as_slice(), &['A', 'B', 'C']);
    /// ```
    pub fn from_ranges(ranges: &[CodepointRange]) -> Self {
        let mut skipped = 0u64;
        let clamped: Vec<RangeInclusive<u32>> = ranges
            .iter()
            .filter_map(|&(start, end)| {
                if start > end {
                    log::debug!("ignoring reversed range U+{:04X}..U+{:04X}", start, end);
                    return None;
                }
                if end > MAX_CODEPOINT {
                    skipped += u64::from(end - start.max(MAX_CODEPOINT + 1)) + 1;
                }
                (start <= MAX_CODEPOINT).then(|| start..=end.min(MAX_CODEPOINT))
            })
            .collect();

        let capacity = clamped.iter().map(|r| (r.end() - r.start()) as usize + 1).sum();
        let mut chars = Vec::with_capacity(capacity);
        for range in clamped {
            for cp in range {
                match char::from_u32(cp) {
                    Some(c) => chars.push(c),
                    None => skipped += 1,
                }
            }
        }

        if skipped > 0 {
            log::debug!("skipped {} code points that are not Unicode scalar values", skipped);
        }
        CharacterSet(chars)
    }

    /// Return the number of characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no characters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if the provided character is in this set.
    pub fn contains(&self, chr: char) -> bool {
        self.0.contains(&chr)
    }

    /// Iterate over the characters.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// The characters as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.0
    }

    /// The characters as individual strings, for display in a grid.
    pub fn to_strings(&self) -> Vec<String> {
        self.0.iter().map(|c| c.to_string()).collect()
    }
}

impl std::fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.iter().try_for_each(|c| std::fmt::Write::write_char(f, *c))
    }
}

impl FromIterator<char> for CharacterSet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        CharacterSet(iter.into_iter().collect())
    }
}

impl IntoIterator for CharacterSet {
    type Item = char;

    type IntoIter = std::vec::IntoIter<char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CharacterSet {
    type Item = &'a char;

    type IntoIter = std::slice::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn expand_simple_range() {
        let chars = CharacterSet::from_ranges(&[(0x0041, 0x0043)]);
        assert_eq!(chars.to_strings(), vec!["A", "B", "C"]);
    }

    #[test]
    fn ranges_keep_their_order() {
        let ranges = [(0x0061, 0x0062), (0x0031, 0x0031), (0x0041, 0x0041)];
        let chars = CharacterSet::from_ranges(&ranges);
        assert_eq!(chars.to_string(), "ab1A");
    }

    #[test]
    fn expansion_is_idempotent() {
        let ranges = [(0x0020, 0x007E), (0x0400, 0x045F), (0x1F600, 0x1F64F)];
        assert_eq!(CharacterSet::from_ranges(&ranges), CharacterSet::from_ranges(&ranges));
    }

    #[test]
    fn surrogates_are_skipped() {
        let chars = CharacterSet::from_ranges(&[(0xD7FE, 0xE001)]);
        assert_eq!(chars.as_slice(), &['\u{D7FE}', '\u{D7FF}', '\u{E000}', '\u{E001}']);
    }

    #[test]
    fn out_of_range_and_reversed_are_skipped() {
        let chars = CharacterSet::from_ranges(&[(0x10FFFF, 0x110002), (0x43, 0x41), (0x5A, 0x5A)]);
        assert_eq!(chars.as_slice(), &['\u{10FFFF}', 'Z']);
    }

    #[test]
    fn ranges_beyond_unicode_are_clamped() {
        assert!(CharacterSet::from_ranges(&[(0x110000, u32::MAX)]).is_empty());

        let everything = CharacterSet::from_ranges(&[(0, u32::MAX)]);
        // every code point except the 2048 surrogates
        assert_eq!(everything.len(), 0x110000 - 0x800);
        assert_eq!(everything.iter().last(), Some(char::MAX));
    }

    #[test]
    fn empty_input() {
        assert!(CharacterSet::from_ranges(&[]).is_empty());
        assert_eq!(CharacterSet::default().to_string(), "");
    }

    #[test]
    fn overlapping_ranges_are_not_merged() {
        let chars = CharacterSet::from_ranges(&[(0x41, 0x42), (0x42, 0x43)]);
        assert_eq!(chars.to_string(), "ABBC");
        assert!(chars.contains('C'));
        assert!(!chars.contains('D'));
    }
}
