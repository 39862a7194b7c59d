//! Build script to generate our Unicode subset table.

use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const OUT_FILE: &str = "subset_table_codegen.rs";

struct SubsetLine<'a> {
    id: &'a str,
    name: &'a str,
    ranges: Vec<(u32, u32)>,
}

fn main() {
    println!("cargo:rerun-if-changed=resources/subsets.txt");

    let path = Path::new(&env::var("OUT_DIR").unwrap()).join(OUT_FILE);
    let mut file = BufWriter::new(File::create(&path).unwrap());
    let source = include_str!("resources/subsets.txt");

    let subsets: Vec<SubsetLine> = source
        .lines()
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .map(parse_line)
        .collect();

    writeln!(&mut file, "static SUBSETS: &[Subset] = &[").unwrap();
    for subset in &subsets {
        let ranges = subset
            .ranges
            .iter()
            .map(|(start, end)| format!("(0x{:04X}, 0x{:04X})", start, end))
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(
            &mut file,
            "    Subset {{ id: {:?}, name: {:?}, ranges: &[{}] }},",
            subset.id, subset.name, ranges
        )
        .unwrap();
    }
    writeln!(&mut file, "];\n").unwrap();

    let mut map = phf_codegen::Map::new();
    let indices: Vec<String> = (0..subsets.len()).map(|i| i.to_string()).collect();
    for (subset, idx) in subsets.iter().zip(indices.iter()) {
        map.entry(subset.id, idx);
    }
    writeln!(&mut file, "static SUBSET_INDEX: phf::Map<&'static str, usize> = \n{};\n", map.build())
        .unwrap();
}

fn parse_line(line: &str) -> SubsetLine<'_> {
    let mut split = line.split(';');
    match (split.next(), split.next(), split.next(), split.next()) {
        (Some(id), Some(name), Some(ranges), None) => {
            let ranges = ranges.split(',').map(|r| parse_range(r.trim(), line)).collect();
            SubsetLine { id: id.trim(), name: name.trim(), ranges }
        }
        _ => panic!("malformed line: '{}'", line),
    }
}

fn parse_range(range: &str, line: &str) -> (u32, u32) {
    let parse = |s: &str| {
        u32::from_str_radix(s, 16)
            .unwrap_or_else(|_| panic!("bad code point '{}' in '{}'", s, line))
    };
    match range.split_once('-') {
        Some((start, end)) => {
            let (start, end) = (parse(start), parse(end));
            assert!(start <= end, "reversed range '{}' in '{}'", range, line);
            (start, end)
        }
        None => {
            let cp = parse(range);
            (cp, cp)
        }
    }
}
