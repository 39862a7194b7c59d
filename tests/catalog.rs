//! Testing a catalog loaded from disk, end to end.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use webfont_tester::{
    subset, Catalog, CatalogCache, Category, ContrastResult, DisplaySettings, Error, FontWeight,
    LoadState, Rating, TesterSession,
};

const CATALOG_PATH: &str = "testdata/webfonts.json";

fn load() -> Catalog {
    Catalog::load(CATALOG_PATH).unwrap()
}

#[test]
fn load_catalog_from_disk() {
    let catalog = load();
    assert_eq!(catalog.kind(), "webfonts#webfontList");
    // the duplicate ABeeZee entry is dropped
    assert_eq!(catalog.len(), 6);
    let abeezee = catalog.get("ABeeZee").unwrap();
    assert_eq!(abeezee.category, Category::SansSerif);
    assert_eq!(abeezee.variants, vec!["regular", "italic"]);

    let playfair = catalog.get("Playfair Display").unwrap();
    assert_eq!(playfair.last_modified.as_deref(), Some("not a date"));
    assert!(playfair.last_modified_date().is_none());
}

#[test]
fn missing_file_reports_path() {
    let err = Catalog::load("testdata/nope.json").unwrap_err();
    match err {
        Error::Io { path, .. } => assert!(path.ends_with("nope.json")),
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn save_and_reload() {
    let catalog = load();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("webfonts.json");
    catalog.save(&path).unwrap();

    let reloaded = Catalog::load(&path).unwrap();
    assert_eq!(reloaded, catalog);
}

#[test]
fn malformed_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let json = r#"{"kind": "webfonts#webfontList", "items": [{"variants": []}]}"#;
    std::fs::write(&path, json).unwrap();
    assert!(matches!(Catalog::load(&path), Err(Error::ParseCatalog(_))));
}

#[test]
fn search_and_categories() {
    let catalog = load();
    let names: Vec<_> = catalog.search("  SANS ").iter().map(|f| f.family.as_str()).collect();
    assert_eq!(names, vec!["Noto Sans"]);
    assert_eq!(catalog.search("").len(), catalog.len());
    assert!(catalog.search("zzz").is_empty());

    let serif: Vec<_> = catalog.in_category(&Category::Serif).map(|f| f.family.as_str()).collect();
    assert_eq!(serif, vec!["Playfair Display"]);
}

#[test]
fn unknown_subsets_are_skipped() {
    let catalog = load();
    let caveat = catalog.get("Caveat").unwrap();
    let ids: Vec<_> = caveat.known_subsets().iter().map(|s| s.id()).collect();
    assert_eq!(ids, vec!["cyrillic", "cyrillic-ext", "latin", "latin-ext"]);
    assert!(matches!(subset::expand_subset("klingon"), Err(Error::UnknownSubset(_))));
}

#[test]
fn latin_covers_ascii() {
    let latin = subset::expand_subset("latin").unwrap();
    for c in ' '..='~' {
        assert!(latin.contains(c), "latin is missing {:?}", c);
    }
    assert!(latin.contains('\u{20AC}'));
    assert!(!latin.contains('\u{0400}'));
}

#[test]
fn session_over_loaded_catalog() {
    let mut cache = CatalogCache::new(|| Catalog::load(CATALOG_PATH));
    assert!(matches!(cache.state(), LoadState::NotLoaded));
    let catalog = cache.catalog().unwrap();
    assert!(cache.state().is_loaded());

    let mut session = TesterSession::new(catalog);
    assert_eq!(session.selected().unwrap().as_str(), "ABeeZee");

    let change = session.select("Noto Sans").unwrap();
    assert_eq!(
        change.insert.href(),
        "https://api.fonts.coollabs.io/css2?family=Noto+Sans:wght@100;300;400;700;900&display=swap"
    );

    let info = session.font_info().unwrap();
    assert_eq!(info.weights, "100, 300, 400, 700, 900");
    assert_eq!(info.italic_weights, "400, 700");
    assert_eq!(info.last_modified, "2023-05-02");

    let sets = session.character_sets();
    assert_eq!(sets.len(), 8);
    let (greek, chars) = sets.iter().find(|(s, _)| s.id() == "greek").unwrap();
    assert_eq!(greek.name(), "Greek");
    assert!(chars.contains('Ω'));
}

#[test]
fn failed_load_is_cached() {
    let mut cache = CatalogCache::new(|| Catalog::load("testdata/nope.json"));
    let first = cache.catalog().unwrap_err();
    let second = cache.catalog().unwrap_err();
    assert!(Arc::ptr_eq(&first, &second));
    assert!(cache.state().error().is_some());
}

#[test]
fn contrast_scenarios() {
    let result = ContrastResult::evaluate("#FFFFFF", "#000000");
    assert_eq!(result.ratio_label(), "21.00:1");
    assert!(result.passes_all());

    let result = ContrastResult::evaluate("#777777", "#FFFFFF");
    assert_eq!(result.normal_text, Rating::Fail);
    assert_eq!(result.large_text, Rating::Aa);
    assert_eq!(result.graphic_elements, Rating::Aa);

    let result = ContrastResult::evaluate("#FFFFFF", "#FFFFFF");
    assert_eq!(result.ratio, 1.0);
    assert!(!result.large_text.is_pass());

    let result = ContrastResult::evaluate("not a color", "#FFFFFF");
    assert_eq!(result, ContrastResult::worst_case());
}

#[test]
fn snippets_follow_settings() {
    let mut session = TesterSession::new(Arc::new(load()));
    session.select("Space Mono").unwrap();
    *session.settings_mut() = DisplaySettings::default().with_font_weight(FontWeight::Bold);

    let snippets = session.snippets().unwrap();
    assert_eq!(
        snippets.css_import,
        "@import url('https://api.fonts.coollabs.io/css2?family=Space+Mono:wght@400;700&display=swap');"
    );
    assert_eq!(snippets.font_weight, "font-weight: 700;");
}
