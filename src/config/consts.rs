// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.nba.com";
pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Page regions (CSS module class names on the remote site)
pub const ROSTER_TABLE: &str = "table";
pub const STATS_TABLE: &str = ".Crom_table__p1iZz";
pub const COACHES_SECTION: &str = ".TeamProfile_sectionCoaches__e66bL";
pub const NEWS_DATE: &str = ".TeamFantasyNews_articleDate__SrBm7";
pub const NEWS_HEADLINE: &str = ".TeamFantasyNews_articleHeadline__02sbs";
pub const NEWS_CONTENT: &str = ".TeamFantasyNews_articleContent__x7vps";
pub const RETIRED_SECTION: &str = ".TeamRetired_content__nb7Qt";
pub const HALL_OF_FAME_SECTION: &str = ".TeamHallOfFame_content__IZSl2";
pub const RECORDS_TABLE: &str = ".TeamRecords_table__0iapO";
pub const AWARDS_GROUP: &str = ".TeamAwards_group__XU0o9";

// Overall team stats: base, advanced and misc splits
pub const OVERALL_STATS_TABLES: usize = 3;

// Local files
pub const SETTINGS_FILE: &str = "hoop_metrics.cfg";
pub const LOG_FILE: &str = ".hoop/debug.log";
pub const LOGO_DIR: &str = "NBA_Logos";
pub const LEAGUE_LOGO: &str = "NBA_logo.png";

// Window
pub const WINDOW_W: f32 = 1600.0;
pub const WINDOW_H: f32 = 1000.0;
