// src/core/html.rs
//
// Minimal tag scanning over raw page source. No DOM; a forward scan
// that tolerates broken markup and never panics on it.

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Text content of the first `<tag …>` element (document order) whose
/// attribute `attr` equals `value`. Tag and attribute names match
/// case-insensitively; the value matches exactly. Returns None when no
/// such element exists or its closing tag is missing.
pub fn tag_text_by_attr<'a>(doc: &'a str, tag: &str, attr: &str, value: &str) -> Option<&'a str> {
    let lc = to_lower(doc);
    let open = join!("<", &to_lower(tag));
    let close = join!("</", &to_lower(tag));

    let mut pos = 0usize;
    loop {
        let rel = lc.get(pos..)?.find(&open)?;
        let start = pos + rel;
        let after = start + open.len();

        // real tag boundary only: "<script>" / "<script ..." / "<script/>"
        match doc.as_bytes().get(after) {
            Some(b'>') | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r') | Some(b'/') => {}
            _ => {
                pos = after;
                continue;
            }
        }

        let gt = doc.get(start..)?.find('>')?;
        let open_end = start + gt + 1;

        if attr_equals(&doc[start..open_end], attr, value) {
            let body_end = lc[open_end..].find(&close)? + open_end;
            return Some(&doc[open_end..body_end]);
        }
        pos = open_end;
    }
}

/// Does an open-tag slice (`<script id="x" …>`) carry `attr=value`?
/// Handles double-quoted, single-quoted and bare attribute values.
fn attr_equals(open_tag: &str, attr: &str, value: &str) -> bool {
    let lc = to_lower(open_tag);
    let needle = join!(&to_lower(attr), "=");

    let mut from = 0usize;
    while let Some(rel) = lc[from..].find(&needle) {
        let at = from + rel;
        let val_start = at + needle.len();

        // attribute name must start at a whitespace boundary,
        // otherwise "data-id=" would match "id="
        let boundary = open_tag[..at]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace());

        if boundary {
            let rest = &open_tag[val_start..];
            let got = match rest.chars().next() {
                Some(q @ ('"' | '\'')) => rest[1..].split(q).next().unwrap_or(""),
                _ => rest
                    .split(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
                    .next()
                    .unwrap_or(""),
            };
            if got == value {
                return true;
            }
        }
        from = val_start;
    }
    false
}
