//! Level and tilemap templates.

use serde::{Deserialize, Serialize};

/// Level document skeleton.
///
/// Placeholders: `$name`, `$author`, `$license`, `$entities`, `$tilemaps`.
pub const LEVEL_TEMPLATE: &str = r#"
(supertux-level
  (version 3)
  (name (_ "$name"))
  (author "$author")
  (license "$license")
  (target-time 30)
  (sector
    (name "main")
    (ambient-light
      (color 1 1 1)
    )
    (background
      (alignment "bottom")
      (speed 0.35)
      (image-top "images/background/arctis2.png")
      (image "images/background/arctis2.png")
      (image-bottom "images/background/arctis2.png")
    )
    (camera
      (name "Camera")
      (mode "normal")
    )
    (music
      (file "music/antarctic/chipdisko.ogg")
    )
    $entities$tilemaps
  )
)"#;

/// One tilemap block.
///
/// Placeholders: `$solid`, `$zPos`, `$width`, `$height`, `$tiles`.
pub const TILEMAP_TEMPLATE: &str = r#"
    (tilemap
      (solid #$solid)
      (z-pos $zPos)
      (width $width)
      (height $height)
      (tiles $tiles
      )
    )"#;

/// The templates handed to the document assembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Templates {
    pub level: String,
    pub tilemap: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            level: LEVEL_TEMPLATE.to_string(),
            tilemap: TILEMAP_TEMPLATE.to_string(),
        }
    }
}
