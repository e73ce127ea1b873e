//! Exit code constants for the tux-tyler CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unreadable files)
//! - 2: Input grid could not be parsed or is not rectangular
//! - 3: Configuration could not be parsed or failed validation
//! - 4: Level template rendering failed

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a file that could not be read.
pub const USER_ERROR: i32 = 1;

/// Input failure: malformed JSON, empty grid, or jagged rows.
pub const INPUT_FAILURE: i32 = 2;

/// Config failure: malformed YAML or an invalid conversion rule.
pub const CONFIG_FAILURE: i32 = 3;

/// Render failure: a template references an unknown placeholder.
pub const RENDER_FAILURE: i32 = 4;
