/// Palette and shared widget styles
///
/// The page runs on iced's dark theme; these helpers add the handful of
/// custom surfaces the layout needs (cards, chips, the lightbox
/// backdrop) plus the rotating accent colors used for gallery card
/// placeholders.
use iced::widget::{button, container};
use iced::{Border, Color, Theme};

/// Accent colors cycled per gallery card, in card order.
const ACCENTS: [(u8, u8, u8); 6] = [
    (124, 58, 237), // violet
    (6, 182, 212),  // cyan
    (249, 115, 22), // orange
    (34, 197, 94),  // green
    (236, 72, 153), // pink
    (245, 158, 11), // amber
];

/// The accent color for the card at `index`.
pub fn accent(index: usize) -> Color {
    let (r, g, b) = ACCENTS[index % ACCENTS.len()];
    Color::from_rgba8(r, g, b, 0.55)
}

pub fn muted() -> Color {
    Color::from_rgb8(148, 155, 170)
}

fn rounded(radius: f32) -> Border {
    Border {
        radius: radius.into(),
        ..Border::default()
    }
}

/// Raised surface used for gallery cards and skill cards.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb8(28, 32, 44).into()),
        border: rounded(14.0),
        ..container::Style::default()
    }
}

/// Small pill used for hero chips and card tags.
pub fn chip(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgba8(124, 58, 237, 0.25).into()),
        border: rounded(999.0),
        ..container::Style::default()
    }
}

/// Accent-tinted block shown while a card thumbnail is still decoding.
pub fn placeholder(index: usize) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(accent(index).into()),
        border: rounded(10.0),
        ..container::Style::default()
    }
}

/// Dimmed layer behind the lightbox panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(
            Color {
                a: 0.85,
                ..Color::BLACK
            }
            .into(),
        ),
        ..container::Style::default()
    }
}

/// The lightbox panel itself.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Color::from_rgb8(22, 25, 34).into()),
        border: rounded(16.0),
        ..container::Style::default()
    }
}

/// One dot of the slider's position indicator row.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: Some(
            if active {
                Color::WHITE
            } else {
                Color::from_rgba8(255, 255, 255, 0.3)
            }
            .into(),
        ),
        border: rounded(999.0),
        ..button::Style::default()
    }
}
