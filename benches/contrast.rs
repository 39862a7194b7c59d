use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use webfont_tester::{contrast_ratio, Color, ContrastResult};

fn evaluate_hex(c: &mut Criterion) {
    c.bench_function("evaluate hex pair", |b| {
        b.iter(|| ContrastResult::evaluate(black_box("#FFC745"), black_box("#007A78")))
    });
}

fn ratio_grid(c: &mut Criterion) {
    let colors: Vec<Color> =
        (0..=255u8).step_by(17).map(|v| Color::rgb(v, 255 - v, v / 2)).collect();
    c.bench_function("ratio grid", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for fg in &colors {
                for bg in &colors {
                    total += contrast_ratio(*fg, *bg);
                }
            }
            total
        })
    });
}

criterion_group!(benches, evaluate_hex, ratio_grid);
criterion_main!(benches);
