//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Print a styled header.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    if is_color_disabled() {
        println!("[OK] {text}");
    } else {
        println!("{} {text}", style("[OK]").green().bold());
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

/// Status tag for a comparison row.
#[must_use]
pub fn status_tag(ok: bool) -> String {
    match (ok, is_color_disabled()) {
        (true, true) => "OK".to_string(),
        (false, true) => "ERROR".to_string(),
        (true, false) => style("OK").green().to_string(),
        (false, false) => style("ERROR").red().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn print_functions_do_not_panic() {
        print_header("Strassen multiplication");
        print_success("Products match");
        print_error("Allocation failed");
        print_header("");
    }

    #[test]
    fn status_tag_text() {
        let ok = console::strip_ansi_codes(&status_tag(true)).to_string();
        let err = console::strip_ansi_codes(&status_tag(false)).to_string();
        assert_eq!(ok, "OK");
        assert_eq!(err, "ERROR");
    }
}
