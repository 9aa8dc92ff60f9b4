//! Terminal output for the prompt-template CLI.
//!
//! Status lines go to stderr, styled with [`console`], so that rendered text on
//! stdout stays clean for piping.

use console::{style, StyledObject};

fn status(tag: StyledObject<&str>, text: &str) {
    eprintln!("{} {}", tag.bold(), text);
}

/// Bold cyan title with a dimmed underline.
pub fn print_header(text: &str) {
    eprintln!("\n{}", style(text).bold().cyan());
    eprintln!("{}", style("-".repeat(text.chars().count())).dim());
}

pub fn print_success(text: &str) {
    status(style("[OK]").green(), text);
}

pub fn print_warning(text: &str) {
    status(style("[WARN]").yellow(), text);
}

pub fn print_error(text: &str) {
    status(style("[ERROR]").red(), text);
}

/// Numbered entry such as `  1. name`. Goes to stdout: it is the command's result.
pub fn print_item(index: usize, text: &str) {
    println!("  {} {}", style(format!("{index}.")).dim(), text);
}

pub fn print_key_value(key: &str, value: &str) {
    eprintln!("  {}: {}", style(key).dim(), value);
}
