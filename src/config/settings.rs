// src/config/settings.rs
//
// Optional read-only settings file, `key = value` per line, `#` comments.
// Missing file → defaults. Unknown keys are logged and skipped.
//
//   base_url = https://www.nba.com
//   timeout_secs = 30
//   user_agent = Mozilla/5.0 ...
//   logo_dir = NBA_Logos
//   league_logo = NBA_logo.png
//   fullscreen = true
//   log_file = .hoop/debug.log

use std::{fs, path::{Path, PathBuf}};

use crate::error::{Error, Result};
use super::options::AppOptions;

/// Load options from `path`, layered over the defaults.
pub fn load(path: &Path) -> Result<AppOptions> {
    if !path.exists() {
        logd!("Config: {} not found, using defaults", path.display());
        return Ok(AppOptions::default());
    }
    let text = fs::read_to_string(path)?;
    let opts = parse(&text, path)?;
    logf!("Config: Loaded {}", path.display());
    Ok(opts)
}

pub fn parse(text: &str, path: &Path) -> Result<AppOptions> {
    let mut opts = AppOptions::default();

    for (ix, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let bad = |reason: String| Error::Config { path: path.to_path_buf(), line: ix + 1, reason };

        let Some((key, val)) = line.split_once('=') else {
            return Err(bad(format!("expected key = value, got {line:?}")));
        };
        let (key, val) = (key.trim(), val.trim());

        match key {
            "base_url" => opts.scrape.set_base_url(val),
            "timeout_secs" => {
                opts.scrape.timeout_secs = val
                    .parse()
                    .map_err(|_| bad(format!("timeout_secs must be a whole number, got {val:?}")))?;
            }
            "user_agent" => opts.scrape.user_agent = s!(val),
            "logo_dir" => opts.display.logo_dir = PathBuf::from(val),
            "league_logo" => opts.display.league_logo = PathBuf::from(val),
            "fullscreen" => opts.display.fullscreen = parse_bool(val).ok_or_else(|| {
                bad(format!("fullscreen must be true/false, got {val:?}"))
            })?,
            "log_file" => opts.log_file = PathBuf::from(val),
            other => logd!("Config: Unknown key {other:?} on line {}, ignored", ix + 1),
        }
    }

    Ok(opts)
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
