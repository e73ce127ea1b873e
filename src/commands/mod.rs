//! Command implementations for tux-tyler.

mod convert;

#[cfg(test)]
mod tests;

pub use convert::{build_level, cmd_convert, load_config};
