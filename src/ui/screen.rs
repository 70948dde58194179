/// Screen model the iced widgets read from
///
/// `Screen` is the iced side of the `ViewPort`: the renderer pushes into it,
/// the view functions only read it. Image handles are built here once per
/// slide change instead of on every frame.

use iced::widget::image;

use super::render::{NavState, SlideContent, ViewPort};
use crate::state::session::ViewMode;

/// The artwork currently on the slideshow, with its images ready to draw
#[derive(Debug, Clone)]
pub struct Slide {
    pub content: SlideContent,
    pub hero: image::Handle,
    pub artist: image::Handle,
    pub gallery: image::Handle,
}

impl From<SlideContent> for Slide {
    fn from(content: SlideContent) -> Self {
        Slide {
            hero: image::Handle::from_path(content.hero_image.clone()),
            artist: image::Handle::from_path(content.artist_image.clone()),
            gallery: image::Handle::from_path(content.gallery_image.clone()),
            content,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Screen {
    pub mode: ViewMode,
    pub lightbox_open: bool,
    /// None until the dataset has loaded
    pub slide: Option<Slide>,
    pub progress: f32,
    pub nav: NavState,
}

impl ViewPort for Screen {
    fn show_artwork(&mut self, content: SlideContent) {
        let unchanged = self
            .slide
            .as_ref()
            .is_some_and(|slide| slide.content == content);
        if !unchanged {
            self.slide = Some(Slide::from(content));
        }
    }

    fn set_progress(&mut self, percent: f32) {
        self.progress = percent;
    }

    fn set_navigation(&mut self, nav: NavState) {
        self.nav = nav;
    }

    fn set_view_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    fn set_lightbox(&mut self, open: bool) {
        self.lightbox_open = open;
    }
}
