/// Projection of session state onto the screen
///
/// The renderer owns no state. It reads the session and catalog and pushes
/// the result through a `ViewPort`, so the same projection can drive the iced
/// screen model or a test double.

use std::path::PathBuf;

use crate::state::catalog::Catalog;
use crate::state::data::ArtworkRecord;
use crate::state::session::{Session, ViewMode};

/// Everything the slideshow, footer and lightbox show for one artwork
#[derive(Debug, Clone, PartialEq)]
pub struct SlideContent {
    pub hero_image: PathBuf,
    /// Alt text for the hero image (the artwork title)
    pub hero_alt: String,
    pub title: String,
    pub artist_name: String,
    pub artist_image: PathBuf,
    pub year: String,
    pub description: String,
    /// Attribution link
    pub source: String,
    /// Full-size image for the lightbox
    pub gallery_image: PathBuf,
}

/// Enabled state of the footer's previous/next buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// The rendering surface, as seen by the renderer
pub trait ViewPort {
    fn show_artwork(&mut self, content: SlideContent);
    /// Progress bar fill, 0-100
    fn set_progress(&mut self, percent: f32);
    fn set_navigation(&mut self, nav: NavState);
    /// Header button and screen visibility
    fn set_view_mode(&mut self, mode: ViewMode);
    fn set_lightbox(&mut self, open: bool);
}

pub fn slide_content(record: &ArtworkRecord, catalog: &Catalog) -> SlideContent {
    SlideContent {
        hero_image: catalog.resolve_asset(&record.images.hero.large),
        hero_alt: record.name.clone(),
        title: record.name.clone(),
        artist_name: record.artist.name.clone(),
        artist_image: catalog.resolve_asset(&record.artist.image),
        year: record.year.to_string(),
        description: record.description.clone(),
        source: record.source.clone(),
        gallery_image: catalog.resolve_asset(&record.images.gallery),
    }
}

/// Share of the slideshow seen so far, counting the current slide
pub fn progress_percent(index: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f32 / total as f32 * 100.0
}

pub fn nav_state(index: usize, total: usize) -> NavState {
    NavState {
        prev_disabled: index == 0,
        next_disabled: index + 1 >= total,
    }
}

/// Push the full session state onto `port`.
///
/// Screen visibility is always projected. Slide content is skipped until the
/// dataset has loaded.
pub fn project(session: &Session, catalog: Option<&Catalog>, port: &mut impl ViewPort) {
    port.set_view_mode(session.view_mode());
    port.set_lightbox(session.lightbox_open());

    let Some(catalog) = catalog else {
        return;
    };
    let index = session.current_index();
    let Some(record) = catalog.get(index) else {
        return;
    };

    port.show_artwork(slide_content(record, catalog));
    port.set_progress(progress_percent(index, catalog.len()));
    port.set_navigation(nav_state(index, catalog.len()));
}
