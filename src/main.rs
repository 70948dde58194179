use iced::widget::{column, horizontal_rule, scrollable, stack};
use iced::{window, Element, Length, Size, Subscription, Task, Theme};
use std::sync::Arc;

mod config;
mod error;
mod input;
mod state;
mod ui;

use config::Config;
use error::GalleryError;
use input::{KeyCommand, NavKey};
use state::catalog::{self, Catalog};
use state::session::{Session, Step};
use state::timer::{Debouncer, Tick};
use ui::masonry::{MasonryLayout, VisualItem};
use ui::render;
use ui::screen::Screen;

/// Main application state
struct Gallery {
    /// The artworks, once the dataset has loaded
    catalog: Option<Catalog>,
    /// Grid tiles, one per artwork
    items: Vec<VisualItem>,
    /// Current column partition of the grid
    layout: MasonryLayout,
    /// Slide index, view mode, lightbox and autoplay
    session: Session,
    /// What the widgets draw, kept in sync by the renderer
    screen: Screen,
    /// Collapses resize bursts into a single relayout
    resize: Debouncer<f32>,
    /// Last settled window width
    viewport_width: f32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Dataset read finished
    CatalogLoaded(Result<Catalog, Arc<GalleryError>>),
    /// User clicked a grid tile
    OpenArtwork(usize),
    /// Header "start slideshow" button
    StartSlideshow,
    /// Header "stop slideshow" button
    StopSlideshow,
    /// Header "return to gallery" button
    ReturnToGallery,
    NextSlide,
    PrevSlide,
    /// Autoplay interval elapsed
    AutoplayTick(Tick),
    /// "View image" button
    ToggleLightbox,
    /// Lightbox close button or backdrop
    CloseLightbox,
    /// "Go to source" opens the attribution link in the browser
    OpenSource,
    /// Browser launch finished (failures are already logged)
    SourceOpened,
    KeyPressed(NavKey),
    /// Actual window width reported once at startup
    WindowOpened(f32),
    /// Window width changed (not yet debounced)
    WindowResized(f32),
    /// Resize burst settled
    ResizeSettled(Tick),
}

impl Gallery {
    /// Create the application and start reading the dataset
    fn new(config: Config) -> (Self, Task<Message>) {
        let mut gallery = Gallery {
            catalog: None,
            items: Vec::new(),
            layout: MasonryLayout::default(),
            session: Session::new(config.autoplay_interval()),
            screen: Screen::default(),
            resize: Debouncer::new(config.resize_debounce()),
            viewport_width: config.window_width,
        };
        render::project(&gallery.session, None, &mut gallery.screen);

        tracing::info!(dataset = %config.dataset.display(), "loading dataset");
        let load = Task::perform(catalog::load_catalog(config.dataset), |result| {
            Message::CatalogLoaded(result.map_err(Arc::new))
        });

        // The window manager may not honour the requested size
        let measure = window::get_latest()
            .and_then(window::get_size)
            .map(|size| Message::WindowOpened(size.width));

        (gallery, Task::batch([load, measure]))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(Ok(catalog)) => {
                self.items = VisualItem::from_catalog(&catalog);
                self.layout = MasonryLayout::compute(self.items.len(), self.viewport_width);
                let step = self.session.load(catalog.len());
                self.catalog = Some(catalog);
                self.apply(step)
            }
            Message::CatalogLoaded(Err(err)) => {
                // No retry and no fallback screen: the grid stays empty
                tracing::error!(%err, "failed to load dataset");
                Task::none()
            }
            Message::OpenArtwork(index) => {
                let step = self.session.jump_to(index);
                self.apply(step)
            }
            Message::StartSlideshow => {
                tracing::debug!(restart = self.session.is_autoplaying(), "starting slideshow");
                let step = self.session.start_autoplay();
                self.apply(step)
            }
            Message::StopSlideshow | Message::ReturnToGallery => {
                let step = self.session.stop_autoplay();
                self.apply(step)
            }
            Message::NextSlide => {
                let step = self.session.go_to_next();
                self.apply(step)
            }
            Message::PrevSlide => {
                let step = self.session.go_to_prev();
                self.apply(step)
            }
            Message::AutoplayTick(tick) => {
                let step = self.session.on_autoplay_tick(tick);
                self.apply(step)
            }
            Message::ToggleLightbox => {
                let step = self.session.toggle_lightbox();
                self.apply(step)
            }
            Message::CloseLightbox => {
                let step = self.session.close_lightbox();
                self.apply(step)
            }
            Message::OpenSource => {
                let link = self
                    .screen
                    .slide
                    .as_ref()
                    .and_then(|slide| ui::slideshow::source_link(&slide.content));
                match link {
                    Some(url) => Task::perform(ui::slideshow::open_source(url.to_string()), |()| {
                        Message::SourceOpened
                    }),
                    None => Task::none(),
                }
            }
            Message::SourceOpened => Task::none(),
            Message::KeyPressed(key) => {
                let step = match input::route_key(key, &self.session) {
                    Some(KeyCommand::Next) => self.session.go_to_next(),
                    Some(KeyCommand::Prev) => self.session.go_to_prev(),
                    Some(KeyCommand::CloseLightbox) => self.session.close_lightbox(),
                    None => return Task::none(),
                };
                self.apply(step)
            }
            Message::WindowOpened(width) => {
                self.relayout(width);
                Task::none()
            }
            Message::WindowResized(width) => {
                let tick = self.resize.push(width);
                delay(tick, Message::ResizeSettled)
            }
            Message::ResizeSettled(tick) => {
                if let Some(width) = self.resize.settle(tick) {
                    self.relayout(width);
                }
                Task::none()
            }
        }
    }

    /// Re-render after a session change and schedule the next autoplay tick
    fn apply(&mut self, step: Step) -> Task<Message> {
        if step.changed {
            render::project(&self.session, self.catalog.as_ref(), &mut self.screen);
        }

        match step.schedule {
            Some(tick) => delay(tick, Message::AutoplayTick),
            None => Task::none(),
        }
    }

    fn relayout(&mut self, width: f32) {
        self.viewport_width = width;
        let layout = MasonryLayout::compute(self.items.len(), width);
        if layout.column_count() != self.layout.column_count() {
            tracing::debug!(
                width,
                columns = layout.column_count(),
                "masonry breakpoint crossed"
            );
        }
        self.layout = layout;
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body: Element<Message> = if self.screen.mode.shows_slideshow() {
            ui::slideshow::view(&self.screen)
        } else {
            scrollable(ui::masonry::view(&self.layout, &self.items))
                .height(Length::Fill)
                .into()
        };

        let page = column![ui::header::view(&self.screen), horizontal_rule(1), body];

        let overlay = if self.screen.lightbox_open {
            ui::lightbox::view(&self.screen)
        } else {
            None
        };

        match overlay {
            Some(overlay) => stack![page, overlay].into(),
            None => page.into(),
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        input::subscription()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Deliver `tick` back as a message once its delay has passed
fn delay(tick: Tick, to_message: fn(Tick) -> Message) -> Task<Message> {
    Task::perform(tokio::time::sleep(tick.after), move |()| to_message(tick))
}

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let config = config::load();
    let window_size = Size::new(config.window_width, config.window_height);

    iced::application("Galleria", Gallery::update, Gallery::view)
        .subscription(Gallery::subscription)
        .theme(Gallery::theme)
        .window_size(window_size)
        .centered()
        .run_with(move || Gallery::new(config))
}
