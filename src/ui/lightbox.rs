use iced::widget::{button, center, column, container, image, mouse_area, opaque, text};
use iced::{Alignment, Color, ContentFit, Element, Length};

use super::screen::Screen;
use crate::Message;

/// Full-size image over a dimmed backdrop.
///
/// Clicking the backdrop or the close button closes it. Clicks on the image
/// itself are swallowed so they don't reach the backdrop.
pub fn view(screen: &Screen) -> Option<Element<'_, Message>> {
    let slide = screen.slide.as_ref()?;

    let content = column![
        button(text("CLOSE").size(14))
            .on_press(Message::CloseLightbox)
            .style(button::text),
        opaque(
            image(slide.gallery.clone())
                .content_fit(ContentFit::Contain)
                .height(Length::Fill),
        ),
    ]
    .spacing(24)
    .padding(40)
    .align_x(Alignment::End);

    let backdrop = container(center(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_theme| container::Style {
            background: Some(Color::from_rgba(0.0, 0.0, 0.0, 0.85).into()),
            ..container::Style::default()
        });

    Some(opaque(mouse_area(backdrop).on_press(Message::CloseLightbox)))
}
