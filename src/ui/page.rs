/// The one-page portfolio layout
///
/// Renders every section of the site document top to bottom in a
/// scrollable column, plus the loading and failure screens shown
/// before the document is available.
use chrono::{Datelike, Utc};
use iced::widget::{
    button, center, column, container, horizontal_rule, image, row, scrollable, text, text_editor,
    text_input, Column,
};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use crate::media;
use crate::state::data::{Link, SiteData};
use crate::state::load::LoadError;
use crate::ui::{bullet_list, gallery, theme};
use crate::{Message, Ready};

const CONTENT_WIDTH: f32 = 960.0;

pub fn loading() -> Element<'static, Message> {
    center(text("Loading…").size(20).color(theme::muted())).into()
}

/// The single blocking notice shown when the site document could not
/// be loaded. Nothing partial is rendered behind it.
pub fn failure(error: &LoadError) -> Element<'_, Message> {
    center(
        column![
            text("Could not load the site data").size(24),
            text(error.to_string()).size(14).color(theme::muted()),
            text("Make sure the site document exists and is readable.").size(14),
        ]
        .spacing(10)
        .align_x(Alignment::Center),
    )
    .into()
}

pub fn view(ready: &Ready) -> Element<'_, Message> {
    let site = &ready.site;

    let sections = column![
        brand(site),
        hero(site),
        horizontal_rule(1),
        about(ready),
        portfolio_section(ready),
        resume(site),
        skills(site),
        contact(ready),
        footer(site),
    ]
    .spacing(40)
    .width(Length::Fixed(CONTENT_WIDTH));

    scrollable(
        container(sections)
            .center_x(Length::Fill)
            .padding([24.0, 16.0]),
    )
    .height(Length::Fill)
    .into()
}

fn section_header<'a>(title: &'a str, desc: &'a str) -> Element<'a, Message> {
    let mut header = column![text(title).size(28)].spacing(6);
    if !desc.is_empty() {
        header = header.push(text(desc).size(14).color(theme::muted()));
    }
    header.into()
}

fn brand(site: &SiteData) -> Element<'_, Message> {
    let b = &site.brand;
    let mut line = row![].spacing(12).align_y(Alignment::Center);
    if !b.badge.is_empty() {
        line = line.push(
            container(text(&b.badge).size(12))
                .style(theme::chip)
                .padding([3.0, 10.0]),
        );
    }
    line = line.push(column![
        text(&b.title).size(18),
        text(&b.sub).size(12).color(theme::muted()),
    ]);
    line.into()
}

fn hero(site: &SiteData) -> Element<'_, Message> {
    let hero = &site.hero;

    let mut section = column![
        text(&hero.kicker).size(14).color(theme::muted()),
        text(&hero.name).size(44),
        text(&hero.intro).size(16),
    ]
    .spacing(10);

    if !hero.chips.is_empty() {
        let chips = hero
            .chips
            .iter()
            .map(|chip| {
                container(text(chip).size(13))
                    .style(theme::chip)
                    .padding([3.0, 10.0])
                    .into()
            })
            .collect();
        section = section.push(Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0));
    }

    if let Some(cv) = &hero.cv_url {
        section = section.push(
            button(text("Download CV").size(14))
                .padding([6.0, 14.0])
                .on_press(Message::OpenLink(cv.clone())),
        );
    }

    section.into()
}

fn about(ready: &Ready) -> Element<'_, Message> {
    let about = &ready.site.about;

    let mut details = column![text(&about.title).size(18), text(&about.text).size(14)].spacing(10);
    if !about.bullets.is_empty() {
        details = details.push(bullet_list(&about.bullets, 14));
    }
    if !about.quick_links.is_empty() {
        details = details.push(link_row(&about.quick_links));
    }

    let mut body = row![].spacing(24);
    if let Some(path) = about
        .photo_url
        .as_deref()
        .and_then(|reference| media::resolve_asset(&ready.base_dir, reference))
    {
        body = body.push(
            image(image::Handle::from_path(path))
                .width(Length::Fixed(220.0))
                .height(Length::Fixed(260.0)),
        );
    }
    body = body.push(details);

    column![section_header("About", &about.desc), body]
        .spacing(16)
        .into()
}

fn link_row(links: &[Link]) -> Element<'_, Message> {
    let mut buttons = row![].spacing(8);
    for link in links {
        buttons = buttons.push(
            button(text(&link.label).size(13))
                .padding([4.0, 10.0])
                .on_press(Message::OpenLink(link.url.clone())),
        );
    }
    buttons.into()
}

fn portfolio_section(ready: &Ready) -> Element<'_, Message> {
    column![
        section_header("Portfolio", &ready.site.portfolio.desc),
        gallery::view(&ready.site.portfolio, &ready.thumbs),
    ]
    .spacing(16)
    .into()
}

fn resume(site: &SiteData) -> Element<'_, Message> {
    let mut timeline = Column::new().spacing(20);
    for entry in &site.resume.items {
        let mut details = column![
            text(&entry.role).size(16),
            text(&entry.org).size(13).color(theme::muted()),
        ]
        .spacing(4);
        if !entry.bullets.is_empty() {
            details = details.push(bullet_list(&entry.bullets, 13));
        }
        timeline = timeline.push(
            row![
                container(text(&entry.when).size(13).color(theme::muted()))
                    .width(Length::Fixed(160.0)),
                details,
            ]
            .spacing(16),
        );
    }

    column![section_header("Resume", &site.resume.desc), timeline]
        .spacing(16)
        .into()
}

fn skills(site: &SiteData) -> Element<'_, Message> {
    let cards = site
        .skills
        .cards
        .iter()
        .map(|card| {
            container(
                column![text(&card.title).size(16), bullet_list(&card.items, 13)].spacing(8),
            )
            .style(theme::card)
            .padding(16)
            .width(Length::Fixed(300.0))
            .into()
        })
        .collect();

    column![
        section_header("Skills", &site.skills.desc),
        Wrap::with_elements(cards).spacing(16.0).line_spacing(16.0),
    ]
    .spacing(16)
    .into()
}

fn contact(ready: &Ready) -> Element<'_, Message> {
    let section = &ready.site.contact;

    let mut entries = Column::new().spacing(6);
    for entry in &section.list {
        entries = entries.push(
            row![
                text(format!("{}:", entry.label)).size(14),
                text(&entry.value).size(14).color(theme::muted()),
            ]
            .spacing(8),
        );
    }

    let form = column![
        text_input("Your name", &ready.form.name)
            .on_input(Message::NameChanged)
            .padding(10),
        text_input("Your email", &ready.form.email)
            .on_input(Message::EmailChanged)
            .padding(10),
        text_editor(&ready.form.message)
            .on_action(Message::MessageEdited)
            .height(Length::Fixed(120.0))
            .padding(10),
        button(text("Send message").size(14))
            .padding([8.0, 16.0])
            .on_press(Message::SendMessage),
    ]
    .spacing(10)
    .width(Length::Fixed(420.0));

    column![
        section_header("Contact", &section.desc),
        text(&section.text).size(14),
        row![entries, form].spacing(40),
    ]
    .spacing(16)
    .into()
}

fn footer(site: &SiteData) -> Element<'_, Message> {
    container(
        text(site.footer_text(Utc::now().year()))
            .size(12)
            .color(theme::muted()),
    )
    .center_x(Length::Fill)
    .padding([12.0, 0.0])
    .into()
}
