use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;

use crate::entities::GLYPHS;

/// One optional image per enemy glyph variant.
const SPRITE_PATHS: [&str; GLYPHS.len()] = [
    "assets/enemy1.png",
    "assets/enemy2.png",
    "assets/enemy3.png",
    "assets/enemy4.png",
    "assets/enemy5.png",
];

/// Holds whatever enemy sprites could actually be loaded. Every variant is
/// loaded independently; a missing asset or an unsupported terminal leaves
/// that variant (or all of them) on glyph rendering.
pub struct SpriteStore {
    protocols: Vec<Option<StatefulProtocol>>,
}

impl SpriteStore {
    /// Queries the terminal's image protocol and loads the per-variant
    /// assets. Never fails; failures degrade to glyphs.
    pub fn load() -> Self {
        let picker = match Picker::from_query_stdio() {
            Ok(picker) => picker,
            Err(err) => {
                log::debug!("terminal image protocol unavailable, using glyphs: {err}");
                return Self::empty();
            }
        };

        let protocols = SPRITE_PATHS
            .iter()
            .map(|path| match image::open(path) {
                Ok(img) => Some(picker.new_resize_protocol(img)),
                Err(err) => {
                    log::debug!("sprite {path} unavailable, using glyph: {err}");
                    None
                }
            })
            .collect();

        Self { protocols }
    }

    /// A store with no sprites; every draw falls back to glyphs.
    pub fn empty() -> Self {
        Self {
            protocols: (0..SPRITE_PATHS.len()).map(|_| None).collect(),
        }
    }

    /// The render protocol for a variant, if its asset loaded.
    pub fn variant_mut(&mut self, variant: usize) -> Option<&mut StatefulProtocol> {
        self.protocols.get_mut(variant)?.as_mut()
    }
}
