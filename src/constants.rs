//! Application-wide constants.

/// The display name of the application, also used as the config directory name.
pub const APP_NAME: &str = "UNIVASSIST";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "univassist";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "UNIVASSIST_CONFIG_DIR";
