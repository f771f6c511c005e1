// src/config/consts.rs

// Page format
pub const DATA_SCRIPT_ID: &str = "__NEXT_DATA__";
pub const GAME_PATH: [&str; 3] = ["props", "pageProps", "game"];
pub const THUMB_VARIANT: &str = "512x512";

// Derived URLs
pub const PLAY_URL_BASE: &str = "https://html5.gamedistribution.com/";
pub const IMG_URL_BASE: &str = "https://img.gamedistribution.com/";

// Save
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE_STEM: &str = "game";
pub const JSON_EXT: &str = "json";

// Logging
pub const LOG_FILE: &str = ".gd_parse.log";

// Thumbnail fetch
pub const HTTP_PORT: u16 = 80;
pub const HTTP_TIMEOUT_SECS: u64 = 10;
pub const THUMB_PREVIEW_PX: f32 = 220.0;
