// src/core/json.rs
//
// Accessors over a parsed serde_json::Value tree. Missing keys and
// mismatched types degrade to empty defaults; only the top-level
// parse is allowed to fail, and that happens elsewhere.

use serde_json::Value;

static NULL: Value = Value::Null;

/// Follow a fixed key path from `root`. A missing or non-object level
/// yields Null, which every accessor below treats as "absent".
pub fn walk<'a>(root: &'a Value, path: &[&str]) -> &'a Value {
    let mut cur = root;
    for key in path {
        cur = cur.get(key).unwrap_or(&NULL);
    }
    cur
}

pub fn str_field(obj: &Value, key: &str) -> String {
    obj.get(key).and_then(Value::as_str).map(String::from).unwrap_or_default()
}

pub fn trimmed_field(obj: &Value, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .map(String::from)
        .unwrap_or_default()
}

/// Numeric field rendered as its string form. JSON numbers print as-is;
/// numeric strings pass through trimmed; anything else is "missing".
pub fn num_field(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) if s.trim().parse::<f64>().is_ok() => s!(s.trim()),
        _ => s!(),
    }
}

/// String list folded with ", " in insertion order.
/// Non-string elements are skipped; absent or non-list yields "".
pub fn joined_field(obj: &Value, key: &str) -> String {
    match obj.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => s!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn walk_reaches_nested_object() {
        let v = json!({"props": {"pageProps": {"game": {"title": "T"}}}});
        let game = walk(&v, &["props", "pageProps", "game"]);
        assert_eq!(str_field(game, "title"), "T");
    }

    #[test]
    fn walk_defaults_on_any_missing_level() {
        let v = json!({"props": {}});
        let game = walk(&v, &["props", "pageProps", "game"]);
        assert!(game.is_null());
        assert_eq!(str_field(game, "title"), "");
    }

    #[test]
    fn walk_defaults_on_non_object_level() {
        let v = json!({"props": "not an object"});
        assert!(walk(&v, &["props", "pageProps", "game"]).is_null());
        let top = json!([1, 2, 3]);
        assert!(walk(&top, &["props"]).is_null());
    }

    #[test]
    fn str_field_ignores_wrong_types() {
        let v = json!({"title": 42});
        assert_eq!(str_field(&v, "title"), "");
    }

    #[test]
    fn trimmed_field_strips_surrounding_whitespace() {
        let v = json!({"description": "  hello \n"});
        assert_eq!(trimmed_field(&v, "description"), "hello");
    }

    #[test]
    fn num_field_renders_integers_floats_and_numeric_strings() {
        let v = json!({"a": 960, "b": 1.5, "c": " 640 ", "d": "wide", "e": null});
        assert_eq!(num_field(&v, "a"), "960");
        assert_eq!(num_field(&v, "b"), "1.5");
        assert_eq!(num_field(&v, "c"), "640");
        assert_eq!(num_field(&v, "d"), "");
        assert_eq!(num_field(&v, "e"), "");
        assert_eq!(num_field(&v, "missing"), "");
    }

    #[test]
    fn joined_field_preserves_order_and_separator() {
        let v = json!({"categories": ["Arcade", "Puzzle", "Racing"]});
        assert_eq!(joined_field(&v, "categories"), "Arcade, Puzzle, Racing");
    }

    #[test]
    fn joined_field_skips_non_string_elements() {
        let v = json!({"tags": ["a", 7, null, "b"]});
        assert_eq!(joined_field(&v, "tags"), "a, b");
    }

    #[test]
    fn joined_field_defaults_on_non_list() {
        let v = json!({"tags": "a,b"});
        assert_eq!(joined_field(&v, "tags"), "");
        assert_eq!(joined_field(&v, "missing"), "");
    }
}
