//! Conversion configuration for tux-tyler.
//!
//! Every value the converter needs besides the input grid (level metadata,
//! entities, the obstacle ruleset and the templates) lives in [`Config`].
//! Defaults reproduce the stock arctic level; a YAML file can override any
//! field, and unknown fields are ignored.

mod model;
mod operations;
pub mod types;


// Re-export public API
pub use model::Config;
