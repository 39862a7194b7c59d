//! Utilities for previewing and inspecting [web fonts][catalog].
//!
//! This crate is the headless core of a font tester: it parses the web font
//! catalog, checks text/background pairs against the [WCAG 2.1][wcag]
//! contrast thresholds, expands Unicode subsets into the characters they
//! cover, and generates the HTML and CSS needed to embed a family.
//!
//! [catalog]: https://developers.google.com/fonts/docs/developer_api
//! [wcag]: https://www.w3.org/TR/WCAG21/#contrast-minimum
//!
//! # Basic usage:
//!
//! ```no_run
//! use webfont_tester::{CatalogCache, FetchOptions, TesterSession};
//!
//! let mut cache = CatalogCache::http(FetchOptions::default());
//! let catalog = cache.catalog().expect("failed to load catalog");
//! let mut session = TesterSession::new(catalog);
//! session.select("Open Sans").expect("missing family");
//! println!("{}", session.contrast().ratio_label());
//! println!("{}", session.snippets().unwrap().css_import);
//! ```

#![deny(rustdoc::broken_intra_doc_links)]

mod catalog;
pub mod charset;
mod color;
pub mod contrast;
pub mod embed;
pub mod error;
mod fetch;
mod name;
pub mod preview;
mod session;
mod settings;
pub mod subset;
mod variant;

pub use catalog::{Catalog, Category, FontDescriptor};
pub use charset::{CharacterSet, CodepointRange};
pub use color::Color;
pub use contrast::{contrast_ratio, relative_luminance, ContrastResult, Rating};
pub use embed::{EmbedSnippets, SnippetKind, StylesheetChange, StylesheetLink};
pub use error::Error;
#[cfg(feature = "fetch")]
pub use fetch::HttpFetcher;
pub use fetch::{CatalogCache, CatalogFetcher, FetchOptions, LoadState, DEFAULT_CATALOG_URL};
pub use name::FamilyName;
pub use session::{FontInfo, TesterSession};
pub use settings::{DisplaySettings, TextAlign};
pub use subset::{expand_subset, Subset};
pub use variant::{FontStyle, FontWeight, Variant};
