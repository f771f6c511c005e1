// src/config/options.rs
use std::ffi::OsString;
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub save: SaveOptions,
}

/// Where Save JSON writes. Extension is always `.json`; a pasted
/// extension in the GUI field is ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveOptions {
    out_path: OutputPath,
}

impl Default for SaveOptions {
    fn default() -> Self {
        Self { out_path: OutputPath::default() }
    }
}

impl SaveOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        path.push(join!(stem, ".", JSON_EXT));
        path
    }

    /// Parse GUI text into dir + stem.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }

    /// Adopt a filename stem derived from extracted metadata,
    /// keeping the directory the user chose.
    pub fn set_stem(&mut self, stem: &str) {
        if !stem.is_empty() {
            self.out_path.file_stem = OsString::from(stem);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE_STEM),
        }
    }
}
