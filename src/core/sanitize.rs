// src/core/sanitize.rs

/// Collapse a display name (usually a game title) into a filename stem.
/// Alphanumerics pass through, whitespace runs become single
/// underscores, '-' and '_' are kept, everything else is dropped.
/// Falls back when nothing printable survives.
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() { out.push(ch); last_us = false; }
        else if ch.is_whitespace() { if !last_us { out.push('_'); last_us = true; } }
        else if ch=='-' || ch=='_' { if !(last_us && ch=='_') { out.push(ch); } last_us = ch=='_'; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_single_underscores() {
        assert_eq!(sanitize_filename("Crazy  Kart   Racing", "game"), "Crazy_Kart_Racing");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(sanitize_filename("Bob: The Robber (2)!", "game"), "Bob_The_Robber_2");
    }

    #[test]
    fn hyphens_survive() {
        assert_eq!(sanitize_filename("Mini-Putt", "game"), "Mini-Putt");
    }

    #[test]
    fn falls_back_when_nothing_survives() {
        assert_eq!(sanitize_filename("☆★☆", "abc123"), "abc123");
        assert_eq!(sanitize_filename("", "abc123"), "abc123");
    }
}
