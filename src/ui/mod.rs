/// User interface module
///
/// - Masonry grid layout and tiles (masonry.rs)
/// - Projection of session state onto a view port (render.rs)
/// - The iced screen model fed by the renderer (screen.rs)
/// - Header, slideshow and lightbox widgets

pub mod header;
pub mod lightbox;
pub mod masonry;
pub mod render;
pub mod screen;
pub mod slideshow;
