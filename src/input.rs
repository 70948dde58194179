/// Keyboard and window bindings
///
/// Raw iced events are narrowed to the few the gallery cares about, and key
/// presses are routed against the session: while the lightbox is open only
/// Escape does anything; otherwise the arrow keys page the slideshow.

use iced::keyboard::{self, key::Named, Key};
use iced::{event, window, Event, Subscription};

use crate::state::session::Session;
use crate::Message;

/// Keys the gallery responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// What a key press resolves to in the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Next,
    Prev,
    CloseLightbox,
}

impl NavKey {
    fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::Named(Named::ArrowLeft) => Some(NavKey::ArrowLeft),
            Key::Named(Named::ArrowRight) => Some(NavKey::ArrowRight),
            Key::Named(Named::Escape) => Some(NavKey::Escape),
            _ => None,
        }
    }
}

/// Decide what `key` does right now
pub fn route_key(key: NavKey, session: &Session) -> Option<KeyCommand> {
    if session.lightbox_open() {
        return (key == NavKey::Escape).then_some(KeyCommand::CloseLightbox);
    }
    if !session.view_mode().shows_slideshow() {
        return None;
    }

    match key {
        NavKey::ArrowRight => Some(KeyCommand::Next),
        NavKey::ArrowLeft => Some(KeyCommand::Prev),
        NavKey::Escape => None,
    }
}

fn map_event(event: Event, status: event::Status, _window: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. })
            if matches!(status, event::Status::Ignored) =>
        {
            NavKey::from_key(&key).map(Message::KeyPressed)
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size.width)),
        _ => None,
    }
}

/// Keyboard and resize events for the whole application
pub fn subscription() -> Subscription<Message> {
    event::listen_with(map_event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn session(total: usize) -> Session {
        let mut session = Session::new(Duration::from_millis(3000));
        let _ = session.load(total);
        session
    }

    #[test]
    fn test_arrows_ignored_on_gallery() {
        let session = session(5);
        assert_eq!(route_key(NavKey::ArrowRight, &session), None);
        assert_eq!(route_key(NavKey::ArrowLeft, &session), None);
        assert_eq!(route_key(NavKey::Escape, &session), None);
    }

    #[test]
    fn test_arrows_page_the_slideshow() {
        let mut session = session(5);
        let _ = session.jump_to(2);
        assert_eq!(route_key(NavKey::ArrowRight, &session), Some(KeyCommand::Next));
        assert_eq!(route_key(NavKey::ArrowLeft, &session), Some(KeyCommand::Prev));
        assert_eq!(route_key(NavKey::Escape, &session), None);
    }

    #[test]
    fn test_lightbox_swallows_arrows_and_escape_only_closes() {
        let mut session = session(5);
        let _ = session.jump_to(2);
        let _ = session.open_lightbox();

        assert_eq!(route_key(NavKey::ArrowRight, &session), None);
        assert_eq!(route_key(NavKey::ArrowLeft, &session), None);
        assert_eq!(
            route_key(NavKey::Escape, &session),
            Some(KeyCommand::CloseLightbox)
        );

        let _ = session.close_lightbox();
        // Escape never opens it again
        assert_ne!(
            route_key(NavKey::Escape, &session),
            Some(KeyCommand::CloseLightbox)
        );
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(
            NavKey::from_key(&Key::Named(Named::ArrowRight)),
            Some(NavKey::ArrowRight)
        );
        assert_eq!(NavKey::from_key(&Key::Named(Named::Escape)), Some(NavKey::Escape));
        assert_eq!(NavKey::from_key(&Key::Named(Named::Enter)), None);
    }
}
