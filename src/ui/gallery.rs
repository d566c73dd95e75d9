/// Gallery card grid
///
/// One card per work record, tagged with its position so a click can
/// open the lightbox at that record. Download shortcuts on a card are
/// separate buttons; clicking one opens the file, not the lightbox.
use std::collections::HashMap;

use iced::widget::image::Handle;
use iced::widget::{button, column, container, image, mouse_area, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::data::{Portfolio, WorkRecord};
use crate::ui::theme;
use crate::Message;

const CARD_WIDTH: f32 = 300.0;
const COVER_HEIGHT: f32 = 170.0;

/// Downloads shown directly on a card before the `+N` overflow marker.
const CARD_DOWNLOAD_LIMIT: usize = 2;

pub fn view<'a>(
    portfolio: &'a Portfolio,
    thumbs: &'a HashMap<usize, Handle>,
) -> Element<'a, Message> {
    let cards = portfolio
        .items
        .iter()
        .enumerate()
        .map(|(index, work)| card(index, work, thumbs.get(&index)))
        .collect();

    Wrap::with_elements(cards)
        .spacing(18.0)
        .line_spacing(18.0)
        .into()
}

fn card<'a>(index: usize, work: &'a WorkRecord, thumb: Option<&Handle>) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match thumb {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(CARD_WIDTH))
            .height(Length::Fixed(COVER_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Accent placeholder until (or unless) the thumbnail decodes.
        None => container(Space::new(
            Length::Fixed(CARD_WIDTH),
            Length::Fixed(COVER_HEIGHT),
        ))
        .style(theme::placeholder(index))
        .into(),
    };

    let mut caption = column![
        container(text(work.tag_text()).size(11))
            .style(theme::chip)
            .padding([2.0, 8.0]),
        text(&work.title).size(16),
    ]
    .spacing(6);

    if !work.sub.is_empty() {
        caption = caption.push(text(&work.sub).size(13).color(theme::muted()));
    }
    if !work.downloads.is_empty() {
        caption = caption.push(download_shortcuts(work));
    }

    let body = column![cover, container(caption).padding(12)];

    mouse_area(
        container(body)
            .width(Length::Fixed(CARD_WIDTH))
            .style(theme::card),
    )
    .on_press(Message::OpenWork(index))
    .into()
}

fn download_shortcuts(work: &WorkRecord) -> Element<'_, Message> {
    let mut shortcuts = row![].spacing(8).align_y(Alignment::Center);

    for link in work.downloads.iter().take(CARD_DOWNLOAD_LIMIT) {
        let label = if link.label.is_empty() {
            "Download"
        } else {
            link.label.as_str()
        };
        shortcuts = shortcuts.push(
            button(text(label).size(12))
                .padding([2.0, 8.0])
                .on_press(Message::OpenLink(link.url.clone())),
        );
    }

    let more = work.downloads.len().saturating_sub(CARD_DOWNLOAD_LIMIT);
    if more > 0 {
        shortcuts = shortcuts.push(text(format!("+{more}")).size(12).color(theme::muted()));
    }

    shortcuts.into()
}
