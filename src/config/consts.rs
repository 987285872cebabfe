// src/config/consts.rs

// Net config
pub const HOST: &str = "shawneewrestling.org";
pub const DATA_PATH: &str = "/data/wrestling_data.json";

// Page identity
pub const PAGE_TITLE: &str = "Shawnee Wrestling";
pub const DEFAULT_TEAM_NAME: &str = "Shawnee High School";

// The site presents everything in Eastern time, labeled EST
pub const EASTERN_OFFSET_HOURS: i32 = -5;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_PAGE_STEM: &str = "index";
pub const PAGE_EXT: &str = "html";
pub const STYLESHEET_FILENAME: &str = "site.css";
