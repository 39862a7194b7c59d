//! Fetch the font catalog and print the embed snippets for one family.

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use webfont_tester::{Catalog, CatalogCache, FetchOptions, TesterSession};

fn main() {
    let mut args = env::args().skip(1);
    let family = match args.next() {
        Some(family) => family,
        None => {
            eprintln!("Please supply a family name, and optionally a path to a catalog file");
            std::process::exit(1);
        }
    };

    let catalog = match args.next().map(PathBuf::from) {
        Some(path) => Catalog::load(&path).map(Arc::new).map_err(|e| e.to_string()),
        None => CatalogCache::http(FetchOptions::default()).catalog().map_err(|e| e.to_string()),
    };
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("failed to load catalog: {}", e);
            std::process::exit(1);
        }
    };

    let mut session = TesterSession::new(catalog);
    if let Err(e) = session.select(&family) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    if let Some(info) = session.font_info() {
        println!(
            "{} ({}), weights {}, subsets {}",
            family, info.category, info.weights, info.subsets
        );
    }
    if let Some(snippets) = session.snippets() {
        for (kind, text) in snippets.iter() {
            println!("\n{}:\n{}", kind.title(), text);
        }
    }
}
