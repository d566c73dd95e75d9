/// Data model for the site document
///
/// These structs mirror the JSON document that drives the whole page
/// (`data/site.json`). Every field is tolerant of absence: a missing
/// section or field renders as empty, never as a load failure.
use serde::Deserialize;

/// The full site document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteData {
    pub brand: Brand,
    pub hero: Hero,
    pub about: About,
    pub portfolio: Portfolio,
    pub resume: Resume,
    pub skills: Skills,
    pub contact: Contact,
    /// Footer template; `{year}` is substituted at render time.
    pub footer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub badge: String,
    pub title: String,
    pub sub: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub kicker: String,
    pub name: String,
    pub intro: String,
    pub cv_url: Option<String>,
    pub chips: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct About {
    pub desc: String,
    pub title: String,
    pub text: String,
    pub photo_url: Option<String>,
    pub bullets: Vec<String>,
    pub quick_links: Vec<Link>,
}

/// A labeled URL (quick links, downloads).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Link {
    pub url: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub desc: String,
    pub items: Vec<WorkRecord>,
}

/// One portfolio project.
///
/// Older documents carry a single `img` instead of `images`, and a
/// free-text `description` instead of `bullets`; the `resolved_*`
/// accessors normalize both shapes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkRecord {
    pub title: String,
    pub sub: String,
    /// Badge shown on the gallery card.
    pub tag: Option<String>,
    /// Legacy single-image field.
    pub img: Option<String>,
    pub images: Vec<String>,
    pub bullets: Vec<String>,
    pub description: Option<String>,
    pub downloads: Vec<Link>,
}

impl WorkRecord {
    /// The image sequence for the slider: `images` if non-empty, else
    /// the legacy `img` as a one-element sequence, else empty.
    pub fn resolved_images(&self) -> Vec<String> {
        if !self.images.is_empty() {
            self.images.clone()
        } else if let Some(img) = &self.img {
            vec![img.clone()]
        } else {
            Vec::new()
        }
    }

    /// First image reference, for the gallery card thumbnail.
    pub fn cover_image(&self) -> Option<&str> {
        self.images
            .first()
            .map(String::as_str)
            .or(self.img.as_deref())
    }

    /// Description bullets: `bullets` wins; otherwise `description` is
    /// split on newline runs into pseudo-bullets.
    pub fn resolved_bullets(&self) -> Vec<String> {
        if !self.bullets.is_empty() {
            return self.bullets.clone();
        }
        self.description
            .as_deref()
            .unwrap_or("")
            .split('\n')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Card badge text.
    pub fn tag_text(&self) -> &str {
        self.tag.as_deref().unwrap_or("FEATURED")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub desc: String,
    pub items: Vec<TimelineEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TimelineEntry {
    pub when: String,
    pub role: String,
    pub org: String,
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub desc: String,
    pub cards: Vec<SkillCard>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillCard {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub desc: String,
    pub text: String,
    pub list: Vec<ContactEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
}

impl Contact {
    /// The address the contact form mails to: the list entry labeled
    /// "email" (case-insensitive).
    pub fn email(&self) -> Option<&str> {
        self.list
            .iter()
            .find(|entry| entry.label.eq_ignore_ascii_case("email"))
            .map(|entry| entry.value.as_str())
    }
}

impl SiteData {
    /// Render the footer line, substituting `{year}`.
    pub fn footer_text(&self, year: i32) -> String {
        let template = self
            .footer
            .as_deref()
            .unwrap_or("© {year}. All rights reserved.");
        template.replace("{year}", &year.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(json: &str) -> WorkRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_resolved_images_prefers_sequence() {
        let w = record(r#"{"title":"A","images":["a.png","b.png"],"img":"legacy.png"}"#);
        assert_eq!(w.resolved_images(), vec!["a.png", "b.png"]);
    }

    #[test]
    fn test_resolved_images_legacy_fallback() {
        let w = record(r#"{"title":"A","images":[],"img":"x.png"}"#);
        assert_eq!(w.resolved_images(), vec!["x.png"]);
        assert_eq!(w.cover_image(), Some("x.png"));
    }

    #[test]
    fn test_resolved_images_empty() {
        let w = record(r#"{"title":"A"}"#);
        assert!(w.resolved_images().is_empty());
        assert_eq!(w.cover_image(), None);
    }

    #[test]
    fn test_bullets_win_over_description() {
        let w = record(r#"{"title":"A","bullets":["one","two"],"description":"ignored"}"#);
        assert_eq!(w.resolved_bullets(), vec!["one", "two"]);
    }

    #[test]
    fn test_description_splits_on_newline_runs() {
        let w = record(r#"{"title":"A","description":"first line\n\n  second line \n"}"#);
        assert_eq!(w.resolved_bullets(), vec!["first line", "second line"]);
    }

    #[test]
    fn test_missing_optionals_default() {
        let w = record(r#"{"title":"A"}"#);
        assert_eq!(w.sub, "");
        assert_eq!(w.tag_text(), "FEATURED");
        assert!(w.downloads.is_empty());
        assert!(w.resolved_bullets().is_empty());
    }

    #[test]
    fn test_site_document_parses_with_missing_sections() {
        let site: SiteData = serde_json::from_str(
            r#"{
                "hero": {"name": "Ada", "cvUrl": "assets/cv.pdf", "chips": ["Rust"]},
                "portfolio": {"items": [{"title": "P1", "img": "p1.png"}]},
                "contact": {"list": [{"label": "Email", "value": "ada@example.com"}]}
            }"#,
        )
        .unwrap();
        assert_eq!(site.hero.name, "Ada");
        assert_eq!(site.hero.cv_url.as_deref(), Some("assets/cv.pdf"));
        assert_eq!(site.portfolio.items.len(), 1);
        assert_eq!(site.contact.email(), Some("ada@example.com"));
        assert!(site.resume.items.is_empty());
    }

    #[test]
    fn test_footer_year_substitution() {
        let mut site = SiteData::default();
        site.footer = Some("© {year} Ada.".to_string());
        assert_eq!(site.footer_text(2026), "© 2026 Ada.");
        site.footer = None;
        assert_eq!(site.footer_text(2026), "© 2026. All rights reserved.");
    }
}
