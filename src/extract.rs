// src/extract.rs
//
// The extraction engine: raw page source in, canonical GameMetadata
// out. Pure and stateless. The only failure modes are a missing data
// element and a payload that is not JSON; anything missing *inside*
// the payload degrades to empty fields instead of failing.

use serde_json::Value;
use thiserror::Error;

use crate::config::consts::{
    DATA_SCRIPT_ID, GAME_PATH, IMG_URL_BASE, PLAY_URL_BASE, THUMB_VARIANT,
};
use crate::core::{html, json};
use crate::data::GameMetadata;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// No `<script id="__NEXT_DATA__">` element, or it has no text
    /// content. The input is not a GameDistribution game page.
    #[error("game data not found in the page source")]
    DataNotFound,

    /// The element is there but its text content is not valid JSON.
    /// Carries the parser diagnostic (line/column) for format drift.
    #[error("embedded payload is not valid JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

pub fn extract(html_text: &str) -> Result<GameMetadata, ExtractError> {
    let payload = html::tag_text_by_attr(html_text, "script", "id", DATA_SCRIPT_ID)
        .filter(|t| !t.trim().is_empty())
        .ok_or(ExtractError::DataNotFound)?;

    let doc: Value = serde_json::from_str(payload)?;
    let game = json::walk(&doc, &GAME_PATH);

    let id = json::str_field(game, "objectID");
    let url = if id.is_empty() { s!() } else { join!(PLAY_URL_BASE, &id, "/") };

    Ok(GameMetadata {
        title: json::str_field(game, "title"),
        description: json::trimmed_field(game, "description"),
        // singular on the wire, plural in the record
        instructions: json::trimmed_field(game, "instruction"),
        url,
        category: json::joined_field(game, "categories"),
        tags: json::joined_field(game, "tags"),
        thumb: thumb_url(game.get("assets")),
        width: json::num_field(game, "width"),
        height: json::num_field(game, "height"),
        id,
    })
}

/// First asset whose name carries the thumbnail variant, in list order.
/// Ties break on encounter order, never on any quality heuristic.
fn thumb_url(assets: Option<&Value>) -> String {
    let Some(Value::Array(assets)) = assets else {
        return s!();
    };
    for asset in assets {
        if !asset.is_object() {
            continue;
        }
        if let Some(name) = asset.get("name").and_then(Value::as_str) {
            if name.contains(THUMB_VARIANT) {
                return join!(IMG_URL_BASE, name);
            }
        }
    }
    s!()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(payload: &str) -> String {
        format!(r#"<html><head><script id="__NEXT_DATA__" type="application/json">{payload}</script></head><body></body></html>"#)
    }

    #[test]
    fn whitespace_only_script_is_data_not_found() {
        let doc = page("   \n\t ");
        assert!(matches!(extract(&doc), Err(ExtractError::DataNotFound)));
    }

    #[test]
    fn malformed_payload_keeps_the_parser_diagnostic() {
        let doc = page("{\"props\": ");
        let err = match extract(&doc) {
            Err(ExtractError::MalformedPayload(e)) => e,
            other => panic!("expected MalformedPayload, got {other:?}"),
        };
        assert!(err.line() >= 1);
    }

    #[test]
    fn thumb_takes_first_variant_match_in_order() {
        let assets = json!([
            {"name": "banner-1280x720.png"},
            "not an object",
            {"width": 512},
            {"name": "icon-512x512.png"},
            {"name": "alt-512x512.png"}
        ]);
        assert_eq!(
            thumb_url(Some(&assets)),
            "https://img.gamedistribution.com/icon-512x512.png"
        );
    }

    #[test]
    fn thumb_empty_when_no_variant_matches() {
        let assets = json!([{"name": "a-200x200.png"}, {"name": "b.jpg"}]);
        assert_eq!(thumb_url(Some(&assets)), "");
        assert_eq!(thumb_url(None), "");
        assert_eq!(thumb_url(Some(&json!("assets as string"))), "");
    }

    #[test]
    fn numeric_dimensions_render_as_strings() {
        let doc = page(r#"{"props":{"pageProps":{"game":{"width":960,"height":600}}}}"#);
        let meta = extract(&doc).unwrap();
        assert_eq!(meta.width, "960");
        assert_eq!(meta.height, "600");
    }

    #[test]
    fn non_numeric_dimensions_are_missing() {
        let doc = page(r#"{"props":{"pageProps":{"game":{"width":"wide","height":null}}}}"#);
        let meta = extract(&doc).unwrap();
        assert_eq!(meta.width, "");
        assert_eq!(meta.height, "");
    }
}
