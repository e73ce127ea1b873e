//! Implementation of the conversion run.
//!
//! Loads the configuration and the Tyler grid, converts the obstacle layer
//! and prints the assembled level.

use crate::cli::ConvertArgs;
use crate::config::Config;
use crate::error::{Result, TylerError};
use crate::level::{LevelDocument, Tilemap, format_level};
use crate::tiles::{Grid, convert_tiles};
use tracing::info;

/// Execute a conversion and print the level document to stdout.
///
/// With `--dump-config`, prints the effective configuration instead.
pub fn cmd_convert(args: ConvertArgs) -> Result<()> {
    if args.dump_config {
        print!("{}", load_config(&args)?.to_yaml()?);
        return Ok(());
    }

    let level = build_level(&args)?;
    println!("{}", level);
    Ok(())
}

/// Defaults, then the config file, then command-line overrides.
pub fn load_config(args: &ConvertArgs) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            Config::load(path)?
        }
        None => Config::default(),
    };
    config.apply_overrides(args.name.clone(), args.author.clone(), args.license.clone());

    Ok(config)
}

/// Run the whole pipeline and return the level text.
pub fn build_level(args: &ConvertArgs) -> Result<String> {
    let config = load_config(args)?;

    let input = args
        .input
        .as_ref()
        .ok_or_else(|| TylerError::UserError("no input file given".to_string()))?;

    let source = Grid::load(input)?;
    info!(
        input = %input.display(),
        width = source.width(),
        height = source.height(),
        "loaded tile grid"
    );

    let Config {
        name,
        author,
        license,
        entities,
        obstacle_tilemap,
        obstacle_conversions,
        templates,
    } = config;

    let obstacles = convert_tiles(&source, &obstacle_conversions);

    let level = LevelDocument {
        name,
        author,
        license,
        entities,
        tilemaps: vec![Tilemap::new(obstacle_tilemap, obstacles)],
    };

    format_level(&level, &templates)
}
