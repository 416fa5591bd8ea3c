// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub display: DisplayOptions,
    /// Debug log destination, handed to `log::init` at startup.
    pub log_file: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            scrape: ScrapeOptions::default(),
            display: DisplayOptions::default(),
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Scheme + host, no trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout_secs: REQUEST_TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
        }
    }
}

impl ScrapeOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Accepts "https://host", "https://host/" and strips the trailing slash.
    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = s!(url.trim().trim_end_matches('/'));
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    pub logo_dir: PathBuf,
    pub league_logo: PathBuf,
    pub fullscreen: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            logo_dir: PathBuf::from(LOGO_DIR),
            league_logo: PathBuf::from(LEAGUE_LOGO),
            fullscreen: false,
        }
    }
}

impl DisplayOptions {
    /// `NBA_Logos/Celtics.png` for "Boston Celtics".
    pub fn team_logo(&self, nickname: &str) -> PathBuf {
        self.logo_dir.join(join!(nickname, ".png"))
    }
}
