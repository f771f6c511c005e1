// tests/save_json.rs
//
// File-writer behavior: path resolution and verbatim JSON output.

use std::fs;
use std::path::PathBuf;

use gd_parse::data::GameMetadata;
use gd_parse::file::{resolve_out_path, write_json};

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("gd_parse_e2e_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn sample() -> GameMetadata {
    GameMetadata {
        id: "abc123".into(),
        title: "Test Game".into(),
        url: "https://html5.gamedistribution.com/abc123/".into(),
        category: "Arcade, Puzzle".into(),
        thumb: "https://img.gamedistribution.com/abc123-512x512.png".into(),
        ..GameMetadata::default()
    }
}

#[test]
fn saved_bytes_are_the_pretty_json_verbatim() {
    let dir = tmp_dir("verbatim");
    let path = dir.join("game.json");

    let meta = sample();
    let written = write_json(&path, &meta).unwrap();

    let on_disk = fs::read_to_string(&written).unwrap();
    assert_eq!(on_disk, meta.to_pretty_json().unwrap());
    // no extra framing, not even a trailing newline
    assert!(on_disk.ends_with('}'));
}

#[test]
fn write_json_creates_missing_parent_dirs() {
    let dir = tmp_dir("parents");
    let path = dir.join("deep").join("er").join("game.json");

    let written = write_json(&path, &sample()).unwrap();
    assert!(written.exists());
}

#[test]
fn resolve_out_path_respects_explicit_file() {
    let dir = tmp_dir("explicit");
    let file = dir.join("mine.json");
    let got = resolve_out_path(file.to_str().unwrap(), "Test_Game.json").unwrap();
    assert_eq!(got, file);
}

#[test]
fn resolve_out_path_joins_default_name_into_directories() {
    let dir = tmp_dir("dirhint");

    // existing directory
    let got = resolve_out_path(dir.to_str().unwrap(), "Test_Game.json").unwrap();
    assert!(got.ends_with("Test_Game.json"));
    assert!(got.starts_with(&dir));

    // trailing separator on a directory that doesn't exist yet
    let hinted = format!("{}/fresh/", dir.to_str().unwrap());
    let got = resolve_out_path(&hinted, "Test_Game.json").unwrap();
    assert!(got.ends_with("Test_Game.json"));
    assert!(got.parent().unwrap().is_dir());
}

#[test]
fn resolve_out_path_defaults_to_cwd_filename_when_empty() {
    let got = resolve_out_path("", "Test_Game.json").unwrap();
    assert_eq!(got, PathBuf::from("Test_Game.json"));
}

#[test]
fn saved_file_round_trips_through_serde() {
    let dir = tmp_dir("roundtrip");
    let path = dir.join("game.json");
    write_json(&path, &sample()).unwrap();

    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(v["id"], "abc123");
    assert_eq!(v["title"], "Test Game");
    assert_eq!(v["description"], "");
}
