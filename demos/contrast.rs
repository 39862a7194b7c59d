//! A small program that prints the WCAG contrast of two colors.

use std::env;

use webfont_tester::ContrastResult;

fn main() {
    let (foreground, background) = get_colors_or_exit();
    let result = ContrastResult::evaluate(&foreground, &background);

    println!("{} on {}: {}", foreground, background, result.ratio_label());
    println!("  normal text:      {}", result.normal_text);
    println!("  large text:       {}", result.large_text);
    println!("  graphic elements: {}", result.graphic_elements);
}

fn get_colors_or_exit() -> (String, String) {
    let mut args = env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(fg), Some(bg)) => (fg, bg),
        _ => {
            eprintln!("Please supply a text color and a background color, e.g. '#FFC745 #007A78'");
            std::process::exit(1);
        }
    }
}
