// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::data::GameMetadata;

/// Write the record's pretty JSON to `path` verbatim: UTF-8, no
/// trailing newline or other framing. Parent directories are created
/// as needed. Returns the path written.
pub fn write_json(path: &Path, meta: &GameMetadata) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let contents = meta.to_pretty_json()?;
    fs::write(path, contents)?;
    Ok(path.to_path_buf())
}

/// Resolve a user-supplied output hint for one record.
/// Empty → `default_filename` in the working directory; a trailing
/// separator or an existing directory → `default_filename` inside it;
/// anything else is taken as the file path itself.
pub fn resolve_out_path(
    user_o: &str,
    default_filename: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if user_o.is_empty() {
        return Ok(PathBuf::from(default_filename));
    }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
