use serde::{
    Deserialize,
    Serialize,
};

/// Image variants for a species.
///
/// Every variant may be missing upstream.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub official_artwork: Option<String>,
    pub dream_world: Option<String>,
}

impl Sprites {
    /// The best image available for large displays: official artwork, then the front sprite.
    pub fn preferred_image(&self) -> Option<&str> {
        self.official_artwork
            .as_deref()
            .or(self.front_default.as_deref())
    }
}
