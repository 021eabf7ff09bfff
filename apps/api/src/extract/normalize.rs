//! Whitespace and character cleanup for extracted resume text.

/// Normalizes raw document text for prompting: collapses every run of
/// whitespace to a single space, replaces runs of characters outside the
/// printable 7-bit ASCII range with a single space, and trims the ends.
/// Pure and deterministic.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for ch in text.chars() {
        if ch.is_ascii_graphic() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch);
        } else {
            // Whitespace, control characters and non-ASCII all collapse the same way.
            pending_space = true;
        }
    }
    out
}
