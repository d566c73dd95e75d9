use iced::keyboard::{self, key};
use iced::widget::image::Handle;
use iced::widget::text_editor;
use iced::{Element, Point, Subscription, Task, Theme};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod mailto;
mod media;
mod state;
mod ui;

use state::data::SiteData;
use state::lightbox::{Lightbox, Swipe};
use state::load::{self, LoadError};

/// Default location of the site document; the first CLI argument
/// overrides it.
const DEFAULT_DATA_PATH: &str = "data/site.json";

/// Main application state
struct Folio {
    /// Where the site document was loaded from
    data_path: PathBuf,
    screen: Screen,
}

enum Screen {
    Loading,
    /// The single blocking failure notice; nothing partial behind it.
    Failed(LoadError),
    Ready(Box<Ready>),
}

/// Everything the page needs once the site document has loaded.
struct Ready {
    site: SiteData,
    /// Directory image and download references resolve against
    base_dir: PathBuf,
    lightbox: Lightbox,
    /// Card thumbnails, filled in as background decodes complete
    thumbs: HashMap<usize, Handle>,
    form: ContactForm,
}

#[derive(Default)]
struct ContactForm {
    name: String,
    email: String,
    message: text_editor::Content,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Site document load finished
    SiteLoaded(Result<SiteData, LoadError>),
    /// A card thumbnail finished decoding (`None` keeps the placeholder)
    ThumbnailReady(usize, Option<Handle>),
    /// A gallery card was clicked
    OpenWork(usize),
    /// A dot was clicked
    ShowImage(isize),
    PrevImage,
    NextImage,
    CloseLightbox,
    /// Swipe tracking over the lightbox stage
    StagePressed,
    StageMoved(Point),
    StageReleased,
    /// Open a download, quick link or CV in the system handler
    OpenLink(String),
    NameChanged(String),
    EmailChanged(String),
    MessageEdited(text_editor::Action),
    /// Compose the mailto: URL and open the mail client
    SendMessage,
}

impl Folio {
    /// Create a new instance of the application and kick off the one
    /// and only load of the site document.
    fn new() -> (Self, Task<Message>) {
        let data_path = site_data_path();
        tracing::info!(path = %data_path.display(), "loading site document");

        let load = Task::perform(load::load_site_data(data_path.clone()), Message::SiteLoaded);
        (
            Folio {
                data_path,
                screen: Screen::Loading,
            },
            load,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SiteLoaded(Ok(site)) => {
                let base_dir = self
                    .data_path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from("."));

                // One background decode per card with a local cover image.
                let thumbs: Vec<Task<Message>> = site
                    .portfolio
                    .items
                    .iter()
                    .enumerate()
                    .filter_map(|(index, work)| {
                        let path = media::resolve_asset(&base_dir, work.cover_image()?)?;
                        Some(Task::perform(
                            media::thumbnail::generate(index, path),
                            |(index, handle)| Message::ThumbnailReady(index, handle),
                        ))
                    })
                    .collect();

                tracing::info!(works = site.portfolio.items.len(), "site document loaded");
                self.screen = Screen::Ready(Box::new(Ready {
                    site,
                    base_dir,
                    lightbox: Lightbox::new(),
                    thumbs: HashMap::new(),
                    form: ContactForm::default(),
                }));
                Task::batch(thumbs)
            }
            Message::SiteLoaded(Err(error)) => {
                tracing::error!(%error, "failed to load site document");
                self.screen = Screen::Failed(error);
                Task::none()
            }
            other => {
                let Screen::Ready(ready) = &mut self.screen else {
                    return Task::none();
                };
                ready.update(other)
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Loading => ui::page::loading(),
            Screen::Failed(error) => ui::page::failure(error),
            Screen::Ready(ready) => {
                let page = ui::page::view(ready);
                if ready.lightbox.is_open() {
                    ui::lightbox::overlay(page, &ready.lightbox, &ready.base_dir)
                } else {
                    page
                }
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Delivered regardless of lightbox state; `Ready::update` makes
        // navigation a no-op while it is closed.
        keyboard::on_key_press(|key, _modifiers| match key {
            keyboard::Key::Named(key::Named::Escape) => Some(Message::CloseLightbox),
            keyboard::Key::Named(key::Named::ArrowLeft) => Some(Message::PrevImage),
            keyboard::Key::Named(key::Named::ArrowRight) => Some(Message::NextImage),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

impl Ready {
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThumbnailReady(index, Some(handle)) => {
                self.thumbs.insert(index, handle);
            }
            Message::ThumbnailReady(_, None) => {}
            // Out of range is a silent no-op: nothing to open.
            Message::OpenWork(index) => {
                self.lightbox.open_at(&self.site.portfolio.items, index);
            }
            Message::ShowImage(i) => {
                if self.lightbox.is_open() {
                    self.lightbox.show(i);
                }
            }
            Message::PrevImage => {
                if self.lightbox.is_open() {
                    self.lightbox.prev();
                }
            }
            Message::NextImage => {
                if self.lightbox.is_open() {
                    self.lightbox.next();
                }
            }
            Message::CloseLightbox => self.lightbox.close(),
            Message::StagePressed => {
                if self.lightbox.is_open() {
                    self.lightbox.swipe_mut().press();
                }
            }
            Message::StageMoved(position) => {
                if self.lightbox.is_open() {
                    self.lightbox.swipe_mut().moved(position);
                }
            }
            Message::StageReleased => {
                if self.lightbox.is_open() {
                    match self.lightbox.swipe_mut().release() {
                        Some(Swipe::Left) => self.lightbox.next(),
                        Some(Swipe::Right) => self.lightbox.prev(),
                        None => {}
                    }
                }
            }
            Message::OpenLink(url) => open_external(&url),
            Message::NameChanged(name) => self.form.name = name,
            Message::EmailChanged(email) => self.form.email = email,
            Message::MessageEdited(action) => self.form.message.perform(action),
            Message::SendMessage => {
                let to = self
                    .site
                    .contact
                    .email()
                    .unwrap_or(mailto::FALLBACK_RECIPIENT);
                let url = mailto::compose(
                    to,
                    &self.form.name,
                    &self.form.email,
                    &self.form.message.text(),
                );
                tracing::info!(to, "opening mail client");
                open_external(&url);
            }
            Message::SiteLoaded(_) => {}
        }

        Task::none()
    }
}

/// The site document path: first CLI argument, or the default.
fn site_data_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

/// Open a URL from the document in the system handler. URLs are opaque
/// strings passed through unmodified.
fn open_external(url: &str) {
    if let Err(error) = webbrowser::open(url) {
        tracing::warn!(url, %error, "failed to open external URL");
    }
}

fn init_tracing() {
    // RUST_LOG=folio=debug,wgpu=warn
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn,naga=warn,iced=warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init();
}

fn main() -> iced::Result {
    init_tracing();

    iced::application("Folio", Folio::update, Folio::view)
        .subscription(Folio::subscription)
        .theme(Folio::theme)
        .centered()
        .run_with(Folio::new)
}
