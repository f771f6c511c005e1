// src/data.rs
//
// The canonical output record. Constructed once per extraction, never
// mutated afterward; field declaration order is the serialized key
// order that downstream consumers and tests rely on.

use serde::Serialize;

use crate::config::consts::DEFAULT_FILE_STEM;
use crate::core::sanitize::sanitize_filename;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameMetadata {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructions: String,
    pub url: String,
    pub category: String,
    pub tags: String,
    pub thumb: String,
    pub width: String,
    pub height: String,
}

impl GameMetadata {
    /// Pretty JSON for display, clipboard and file output.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Filename stem for saving: title, then id, then the fixed default.
    pub fn suggested_stem(&self) -> String {
        let base = if self.title.is_empty() { &self.id } else { &self.title };
        sanitize_filename(base, DEFAULT_FILE_STEM)
    }

    /// (label, value) pairs in output order, for the GUI field grid.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("id", &self.id),
            ("title", &self.title),
            ("description", &self.description),
            ("instructions", &self.instructions),
            ("url", &self.url),
            ("category", &self.category),
            ("tags", &self.tags),
            ("thumb", &self.thumb),
            ("width", &self.width),
            ("height", &self.height),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_key_order_matches_declaration() {
        let meta = GameMetadata::default();
        let json = meta.to_pretty_json().unwrap();
        let keys = ["id", "title", "description", "instructions", "url",
                    "category", "tags", "thumb", "width", "height"];
        let mut last = 0;
        for k in keys {
            let at = json.find(&format!("\"{k}\"")).unwrap();
            assert!(at >= last, "key {k} out of order");
            last = at;
        }
    }

    #[test]
    fn empty_record_serializes_all_fields_as_empty_strings() {
        let json = GameMetadata::default().to_pretty_json().unwrap();
        assert_eq!(json.matches(": \"\"").count(), 10);
    }

    #[test]
    fn suggested_stem_prefers_title_then_id() {
        let mut meta = GameMetadata::default();
        assert_eq!(meta.suggested_stem(), "game");
        meta.id = s!("abc123");
        assert_eq!(meta.suggested_stem(), "abc123");
        meta.title = s!("Moto X3M");
        assert_eq!(meta.suggested_stem(), "Moto_X3M");
    }
}
