//! Error types for the tux-tyler CLI.
//!
//! Uses thiserror for derive macros and maps every variant to an exit code.

use crate::exit_codes;
use crate::level::template::TemplateError;
use thiserror::Error;

/// Main error type for tux-tyler operations.
#[derive(Error, Debug)]
pub enum TylerError {
    /// User provided invalid arguments or a path that cannot be read.
    #[error("{0}")]
    UserError(String),

    /// The input grid is malformed (bad JSON, empty, or jagged).
    #[error("Invalid input grid: {0}")]
    InputError(String),

    /// The configuration file is malformed or fails validation.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A level or tilemap template could not be rendered.
    #[error("Template rendering failed: {0}")]
    RenderError(#[from] TemplateError),
}

impl TylerError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TylerError::UserError(_) => exit_codes::USER_ERROR,
            TylerError::InputError(_) => exit_codes::INPUT_FAILURE,
            TylerError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            TylerError::RenderError(_) => exit_codes::RENDER_FAILURE,
        }
    }
}

/// Result type alias for tux-tyler operations.
pub type Result<T> = std::result::Result<T, TylerError>;
