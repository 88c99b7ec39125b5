/// User interface and status output utilities
///
/// This module handles:
/// - Colored terminal text on stderr
/// - Error message formatting
use std::io::Write;

/// Print colored text to stderr, with fallback to plain text
fn eprint_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        let Some(mut t) = term::stderr() else {
            return false;
        };
        if t.fg(fg).is_err() {
            return false;
        }
        let _ = t.attr(term::Attr::Bold);
        if write!(t, "{}", s).is_err() {
            return false;
        }
        let _ = t.reset();
        true
    }
}

/// Print an error message with colored "error" prefix
///
/// Goes to stderr so query output on stdout stays machine-readable.
pub fn print_error(msg: &str) {
    eprint_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
}
