/// Lightbox overlay
///
/// A modal layered over the page: backdrop clicks close it, clicks on
/// the panel do not. The stage is wrapped in a mouse area so presses,
/// moves and releases feed the swipe tracker. Navigation affordances
/// (prev/next, dots) only exist when there is more than one image.
use std::path::Path;

use iced::widget::{
    button, center, column, container, image, mouse_area, opaque, row, stack, text, Space,
};
use iced::{Alignment, ContentFit, Element, Length};

use crate::media;
use crate::state::data::Link;
use crate::state::lightbox::Lightbox;
use crate::ui::{bullet_list, theme};
use crate::Message;

const PANEL_WIDTH: f32 = 720.0;
const STAGE_HEIGHT: f32 = 380.0;

/// Lay the lightbox over the page. The opaque backdrop captures all
/// input, which also keeps the page underneath from scrolling.
pub fn overlay<'a>(
    base: Element<'a, Message>,
    lightbox: &'a Lightbox,
    base_dir: &Path,
) -> Element<'a, Message> {
    stack![
        base,
        opaque(
            mouse_area(center(opaque(panel(lightbox, base_dir))).style(theme::backdrop))
                .on_press(Message::CloseLightbox)
        )
    ]
    .into()
}

fn panel<'a>(lightbox: &'a Lightbox, base_dir: &Path) -> Element<'a, Message> {
    let detail = lightbox.detail();

    let header = row![
        text(&detail.title).size(22),
        Space::with_width(Length::Fill),
        button(text("✕").size(16))
            .style(button::text)
            .on_press(Message::CloseLightbox),
    ]
    .align_y(Alignment::Center);

    let mut content = column![header]
        .spacing(12)
        .padding(20)
        .width(Length::Fixed(PANEL_WIDTH));

    if !detail.sub.is_empty() {
        content = content.push(text(&detail.sub).size(14).color(theme::muted()));
    }

    content = content.push(stage_row(lightbox, base_dir));
    if lightbox.has_multiple() {
        content = content.push(dot_row(lightbox));
    }
    if !detail.bullets.is_empty() {
        content = content.push(bullet_list(&detail.bullets, 14));
    }
    content = content.push(downloads(&detail.downloads));

    container(content).style(theme::panel).into()
}

fn stage_row<'a>(lightbox: &'a Lightbox, base_dir: &Path) -> Element<'a, Message> {
    let mut strip = row![].spacing(10).align_y(Alignment::Center);

    if lightbox.has_multiple() {
        strip = strip.push(nav_button(
            "‹",
            (!lightbox.at_first()).then_some(Message::PrevImage),
        ));
    }
    strip = strip.push(stage(lightbox, base_dir));
    if lightbox.has_multiple() {
        strip = strip.push(nav_button(
            "›",
            (!lightbox.at_last()).then_some(Message::NextImage),
        ));
    }

    strip.into()
}

fn stage<'a>(lightbox: &'a Lightbox, base_dir: &Path) -> Element<'a, Message> {
    let resolved = lightbox
        .current_image()
        .and_then(|reference| media::resolve_asset(base_dir, reference));

    let inner: Element<'a, Message> = match resolved {
        Some(path) => image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(Length::Fixed(STAGE_HEIGHT))
            .content_fit(ContentFit::Contain)
            .into(),
        // A record without images still opens, over an empty stage.
        None => Space::new(Length::Fill, Length::Fixed(STAGE_HEIGHT)).into(),
    };

    mouse_area(container(inner).width(Length::Fill).center_x(Length::Fill))
        .on_press(Message::StagePressed)
        .on_move(Message::StageMoved)
        .on_release(Message::StageReleased)
        .into()
}

fn nav_button(label: &str, on_press: Option<Message>) -> Element<'_, Message> {
    button(text(label).size(24))
        .padding([4.0, 12.0])
        .on_press_maybe(on_press)
        .into()
}

fn dot_row(lightbox: &Lightbox) -> Element<'_, Message> {
    let mut dots = row![].spacing(8).align_y(Alignment::Center);

    for i in 0..lightbox.images().len() {
        dots = dots.push(
            button(Space::new(10.0, 10.0))
                .padding(0.0)
                .style(theme::dot(i == lightbox.index()))
                .on_press(Message::ShowImage(i as isize)),
        );
    }

    container(dots).center_x(Length::Fill).into()
}

fn downloads(list: &[Link]) -> Element<'_, Message> {
    if list.is_empty() {
        return text("No attached files").size(13).color(theme::muted()).into();
    }

    let mut buttons = row![].spacing(8);
    for link in list {
        let label = if link.label.is_empty() {
            "Download"
        } else {
            link.label.as_str()
        };
        buttons = buttons.push(
            button(text(label).size(13))
                .padding([4.0, 10.0])
                .on_press(Message::OpenLink(link.url.clone())),
        );
    }

    buttons.into()
}
