/// State management module
///
/// This module handles all non-UI state:
/// - The artwork data model (data.rs)
/// - Loading the dataset into an ordered catalog (catalog.rs)
/// - Cancellable timers for autoplay and resize debouncing (timer.rs)
/// - Slide index, view mode and lightbox state (session.rs)

pub mod catalog;
pub mod data;
pub mod session;
pub mod timer;
