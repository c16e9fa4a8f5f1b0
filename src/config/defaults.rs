//! Default configuration values

/// Dataset version fetched when none is configured
pub const DEFAULT_VERSION: &str = "18.1";

/// Directory that receives downloaded files
pub const DEFAULT_TARGET_DIR: &str = "data";

/// Name of the optional settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "topofetch.toml";
