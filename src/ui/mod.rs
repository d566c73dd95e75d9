/// UI module
///
/// Pure view functions from application state to iced elements:
/// - the one-page portfolio layout and the loading/failure screens (page.rs)
/// - the gallery card grid (gallery.rs)
/// - the lightbox overlay (lightbox.rs)
/// - palette and shared styles (theme.rs)

pub mod gallery;
pub mod lightbox;
pub mod page;
pub mod theme;

use iced::widget::{row, text, Column};
use iced::Element;

use crate::Message;

/// A plain bullet list, shared by the about block, resume entries,
/// skill cards and the lightbox description.
pub(crate) fn bullet_list(items: &[String], size: u16) -> Element<'_, Message> {
    let mut list = Column::new().spacing(4);
    for item in items {
        list = list.push(row![text("•").size(size), text(item).size(size)].spacing(8));
    }
    list.into()
}
