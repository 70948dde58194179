use iced::widget::{button, horizontal_space, row, text};
use iced::{Alignment, Element};

use super::screen::Screen;
use crate::state::session::HeaderButton;
use crate::Message;

/// Logo plus the one header button the current view mode allows
pub fn view(screen: &Screen) -> Element<'_, Message> {
    let (label, message) = match screen.mode.header_button() {
        HeaderButton::Start => ("START SLIDESHOW", Message::StartSlideshow),
        HeaderButton::Stop => ("STOP SLIDESHOW", Message::StopSlideshow),
        HeaderButton::Return => ("RETURN TO GALLERY", Message::ReturnToGallery),
    };

    row![
        text("galleria.").size(32),
        horizontal_space(),
        button(text(label).size(12))
            .on_press(message)
            .style(button::text),
    ]
    .align_y(Alignment::Center)
    .padding([24, 40])
    .into()
}
