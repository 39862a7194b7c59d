//! Font family names

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::NamingError;

/// The name of a font family, such as `Open Sans`.
///
/// Family names are the unique key of the catalog. They must be at least one
/// character long, and cannot contain control characters (`0x00..=0x1F`,
/// `0x7F`, and `0x80..=0x9F`).
///
/// The name is cheap to clone and derefs to a `&str`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FamilyName(Arc<str>);

impl FamilyName {
    /// Creates a new `FamilyName` if the given value isn't empty and contains
    /// no control characters.
    pub fn new(name: &str) -> Result<FamilyName, NamingError> {
        if is_valid(name) {
            Ok(FamilyName(name.into()))
        } else {
            Err(NamingError::Invalid(name.into()))
        }
    }

    /// Returns a string slice containing the name.
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    /// The name as it appears in a font CSS API query: every space becomes `+`.
    ///
    /// ```
    /// # use webfont_tester::FamilyName;
    /// let name = FamilyName::new("Noto Sans Mono").unwrap();
    /// assert_eq!(name.to_query_param(), "Noto+Sans+Mono");
    /// ```
    pub fn to_query_param(&self) -> String {
        self.0.replace(' ', "+")
    }

    /// Returns `true` if `query` occurs anywhere in the name, ignoring case.
    pub fn matches(&self, query: &str) -> bool {
        self.0.to_lowercase().contains(&query.to_lowercase())
    }
}

fn is_valid(name: &str) -> bool {
    !(name.is_empty()
        // check the chars(), not the bytes(): UTF-8 continuation bytes fall
        // into the C1 range.
        || name.chars().any(|b| {
            (0x0..=0x1f).contains(&(b as u32))
                || (0x80..=0x9f).contains(&(b as u32))
                || b as u32 == 0x7f
        }))
}

impl AsRef<str> for FamilyName {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl std::ops::Deref for FamilyName {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

// so that assert_eq! macros work
impl<'a> PartialEq<&'a str> for FamilyName {
    fn eq(&self, other: &&'a str) -> bool {
        self.0.as_ref() == *other
    }
}

impl<'a> PartialEq<FamilyName> for &'a str {
    fn eq(&self, other: &FamilyName) -> bool {
        other == self
    }
}

impl std::fmt::Display for FamilyName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        std::fmt::Display::fmt(&self.0, f)
    }
}

impl std::borrow::Borrow<str> for FamilyName {
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

impl std::str::FromStr for FamilyName {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FamilyName::new(s)
    }
}

impl<'de> Deserialize<'de> for FamilyName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s: String = Deserialize::deserialize(deserializer)?;
        FamilyName::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    use super::*;

    #[test]
    fn valid_names() {
        assert!(FamilyName::new("Roboto").is_ok());
        assert!(FamilyName::new("Noto Sans JP").is_ok());
        assert!(FamilyName::new("Zen Kaku Gothic Antique").is_ok());
        assert!(FamilyName::new("M PLUS 1p").is_ok());
        assert!(FamilyName::new("Ñandú").is_ok());
    }

    #[test]
    fn invalid_names() {
        assert!(FamilyName::new("").is_err());
        assert!(FamilyName::new("Open\tSans").is_err());
        assert!(FamilyName::new("Open\u{7f}Sans").is_err());
        assert!(FamilyName::new("Open\u{85}Sans").is_err());
    }

    #[test]
    fn query_param_replaces_every_space() {
        let name = FamilyName::new("Zen Kaku Gothic Antique").unwrap();
        assert_eq!(name.to_query_param(), "Zen+Kaku+Gothic+Antique");
        assert_eq!(FamilyName::new("Roboto").unwrap().to_query_param(), "Roboto");
    }

    #[test]
    fn case_insensitive_match() {
        let name = FamilyName::new("Open Sans").unwrap();
        assert!(name.matches("open"));
        assert!(name.matches("N S"));
        assert!(name.matches(""));
        assert!(!name.matches("serif"));
    }

    #[test]
    fn serde() {
        let name = FamilyName::new("Lato").unwrap();
        assert_tokens(&name, &[Token::Str("Lato")]);
        assert_de_tokens_error::<FamilyName>(
            &[Token::Str("")],
            "'' is not a valid font family name",
        );
    }
}
