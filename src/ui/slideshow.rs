/// Slideshow screen and its footer
///
/// Shown for both the playing and manual view modes. Everything here reads
/// the projected `Slide`; nothing touches the session directly.

use iced::widget::{
    button, column, container, horizontal_rule, horizontal_space, image, progress_bar, row,
    scrollable, text, vertical_space,
};
use iced::{Alignment, ContentFit, Element, Length};

use super::render::SlideContent;
use super::screen::{Screen, Slide};
use crate::Message;

/// The attribution link, if it is something a browser can open
pub fn source_link(content: &SlideContent) -> Option<&str> {
    let link = content.source.trim();
    (link.starts_with("https://") || link.starts_with("http://")).then_some(link)
}

/// Open the attribution page in the system browser.
///
/// The launcher can block, so it runs on the blocking pool. Failures are
/// logged and otherwise ignored.
pub async fn open_source(url: String) {
    let result = tokio::task::spawn_blocking({
        let url = url.clone();
        move || open::that(url)
    })
    .await;

    match result {
        Ok(Ok(())) => tracing::debug!(%url, "opened source link"),
        Ok(Err(err)) => tracing::warn!(%url, %err, "failed to open source link"),
        Err(err) => tracing::warn!(%url, %err, "source link task failed"),
    }
}

fn slide_body(slide: &Slide) -> Element<'_, Message> {
    let content = &slide.content;

    let hero = column![
        image(slide.hero.clone())
            .width(Length::Fill)
            .content_fit(ContentFit::Contain),
        button(text("VIEW IMAGE").size(12))
            .on_press(Message::ToggleLightbox)
            .padding([12, 16]),
    ]
    .spacing(12)
    .width(Length::FillPortion(1));

    let caption = column![
        text(&content.title).size(48),
        text(&content.artist_name).size(16),
        image(slide.artist.clone()).width(128).height(128),
    ]
    .spacing(16)
    .width(Length::FillPortion(1));

    let info = column![
        text(&content.year).size(160),
        text(&content.description).size(14),
        button(text("GO TO SOURCE").size(10))
            .on_press_maybe(source_link(content).map(|_| Message::OpenSource))
            .style(button::text),
    ]
    .spacing(24)
    .width(Length::FillPortion(1));

    scrollable(
        row![hero, caption, info]
            .spacing(40)
            .padding(40)
            .align_y(Alignment::Start),
    )
    .height(Length::Fill)
    .into()
}

fn footer(screen: &Screen, slide: &Slide) -> Element<'static, Message> {
    let prev = button(text("<").size(20))
        .on_press_maybe((!screen.nav.prev_disabled).then_some(Message::PrevSlide));
    let next = button(text(">").size(20))
        .on_press_maybe((!screen.nav.next_disabled).then_some(Message::NextSlide));

    column![
        progress_bar(0.0..=100.0, screen.progress).height(2),
        row![
            column![
                text(slide.content.title.clone()).size(18),
                text(slide.content.artist_name.clone()).size(13),
            ]
            .spacing(8),
            horizontal_space(),
            row![prev, next].spacing(24),
        ]
        .align_y(Alignment::Center)
        .padding([20, 40]),
    ]
    .into()
}

/// Slideshow plus footer. Empty until the first slide has been projected.
pub fn view(screen: &Screen) -> Element<'_, Message> {
    let Some(slide) = &screen.slide else {
        return container(vertical_space()).into();
    };

    column![slide_body(slide), horizontal_rule(1), footer(screen, slide)]
        .height(Length::Fill)
        .into()
}
