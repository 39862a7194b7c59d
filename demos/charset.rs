//! Print the characters covered by a Unicode subset.

use std::env;
use std::time::Instant;

use webfont_tester::subset;

fn main() {
    let id = match env::args().nth(1) {
        Some(id) => id,
        None => {
            eprintln!("Please supply a subset identifier, one of:");
            for subset in subset::all_subsets() {
                eprintln!("  {:<20} {}", subset.id(), subset.name());
            }
            std::process::exit(1);
        }
    };

    let start = Instant::now();
    let chars = match subset::expand_subset(&id) {
        Ok(chars) => chars,
        Err(e) => {
            eprintln!("error {}", e);
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    println!("{}", chars);
    eprintln!("{} characters in {:?}", chars.len(), elapsed);
}
