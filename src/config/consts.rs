// src/config/consts.rs

// Net config
pub const HTTP_PORT: u16 = 80;
pub const READ_TIMEOUT_SECS: u64 = 15;
pub const WRITE_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = "sortcheck/0.4";

// Source defaults (the listing shape this tool was written against)
pub const TIMESTAMP_CLASS: &str = "age";
pub const TIMESTAMP_ATTR: &str = "title";
pub const MORE_LINK_CLASS: &str = "morelink";

// Check defaults
pub const DEFAULT_COUNT: usize = 100;

// Pagination hard stop for sources whose "more" link never runs out
pub const MAX_PAGES: usize = 50;

// Log
pub const LOG_FILE: &str = ".sortcheck.log";
