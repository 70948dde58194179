/// Shared data structures for the artwork dataset
///
/// These structs mirror the JSON records the gallery is fed with.
/// They are immutable for the whole session once loaded.

use serde::Deserialize;
use std::fmt;

/// One artwork in the dataset
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArtworkRecord {
    /// Artwork title (e.g., "Starry Night")
    pub name: String,
    /// Year of creation, shown verbatim
    pub year: Year,
    pub description: String,
    /// Attribution link
    pub source: String,
    pub artist: Artist,
    pub images: Images,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Artist {
    pub name: String,
    /// Portrait of the artist
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Images {
    /// Grid thumbnail; falls back to the large hero image when absent
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub hero: HeroImages,
    /// Full-size image shown in the lightbox
    pub gallery: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroImages {
    /// Main slideshow image
    pub large: String,
}

/// The dataset stores years either as strings ("c. 1503") or plain numbers
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(i64),
    Text(String),
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Number(year) => write!(f, "{year}"),
            Year::Text(year) => f.write_str(year),
        }
    }
}

impl ArtworkRecord {
    /// Image used for this artwork's tile in the masonry grid
    pub fn grid_image(&self) -> &str {
        self.images
            .thumbnail
            .as_deref()
            .unwrap_or(&self.images.hero.large)
    }
}
