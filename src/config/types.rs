//! Default values used by the Config struct.

/// Default level name.
pub fn default_name() -> String {
    "test".to_string()
}

/// Default level author.
pub fn default_author() -> String {
    "Zorian Medwid".to_string()
}

/// Default level license.
pub fn default_license() -> String {
    "CC-BY-SA 4.0 International".to_string()
}
