use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

const SERVICES_JSON: &str = include_str!("../content/services.json");
const TRANSFORMATION_JSON: &str = include_str!("../content/transformation.json");
const LINKS_JSON: &str = include_str!("../content/links.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("could not parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("service id `{0}` is used more than once")]
    DuplicateServiceId(String),
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    Small,
    Large,
}

/// One line of a service title.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TitleLine {
    pub text: String,
    #[serde(default)]
    pub emphasis: Option<Emphasis>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub no: String,
    pub title: Vec<TitleLine>,
    /// Plain-text title, used as image alt text.
    pub title_text: String,
    pub image: String,
    pub summary: String,
    pub body: String,
    #[serde(default)]
    pub bullets_title: Option<String>,
    #[serde(default)]
    pub bullets: Option<Vec<String>>,
    #[serde(default)]
    pub note_title: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub disclaimer_title: Option<String>,
    #[serde(default)]
    pub disclaimer: Option<Vec<String>>,
}

fn list_block<'a>(title: &'a Option<String>, items: &'a Option<Vec<String>>) -> Option<(&'a str, &'a [String])> {
    match (title.as_deref(), items.as_deref()) {
        (Some(title), Some(items)) if !title.is_empty() && !items.is_empty() => Some((title, items)),
        _ => None,
    }
}

impl Service {
    /// Id of the expandable detail panel, referenced by `aria-controls`.
    pub fn detail_id(&self) -> String {
        format!("{}-detail", self.id)
    }

    pub fn bullet_block(&self) -> Option<(&str, &[String])> {
        list_block(&self.bullets_title, &self.bullets)
    }

    pub fn note_block(&self) -> Option<(&str, &str)> {
        match (self.note_title.as_deref(), self.note.as_deref()) {
            (Some(title), Some(note)) if !title.is_empty() && !note.is_empty() => Some((title, note)),
            _ => None,
        }
    }

    pub fn disclaimer_block(&self) -> Option<(&str, &[String])> {
        list_block(&self.disclaimer_title, &self.disclaimer)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TransformRow {
    pub label: String,
    pub before: Vec<String>,
    pub after: Vec<String>,
}

impl TransformRow {
    /// "01｜状態" -> ("01", "状態")
    pub fn split_label(&self) -> (&str, &str) {
        self.label.split_once('｜').unwrap_or((self.label.as_str(), ""))
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NavTarget {
    /// Section id on this page.
    Anchor(String),
    /// Separate static page served next to the app.
    Page(String),
}

impl NavTarget {
    pub fn href(&self) -> String {
        match self {
            NavTarget::Anchor(id) => format!("#{}", id),
            NavTarget::Page(href) => href.clone(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NavItem {
    pub label: String,
    pub target: NavTarget,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FooterLink {
    pub label: String,
    pub href: String,
}

#[derive(Deserialize)]
struct Links {
    drawer: Vec<NavItem>,
    footer: Vec<FooterLink>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteContent {
    pub services: Vec<Service>,
    pub transformation: Vec<TransformRow>,
    pub drawer: Vec<NavItem>,
    pub footer: Vec<FooterLink>,
}

fn parse<T: DeserializeOwned>(file: &'static str, raw: &str) -> Result<T, ContentError> {
    serde_json::from_str(raw).map_err(|source| ContentError::Parse { file, source })
}

impl SiteContent {
    /// Records bundled into the binary at build time.
    pub fn load() -> Result<Self, ContentError> {
        Self::from_json(SERVICES_JSON, TRANSFORMATION_JSON, LINKS_JSON)
    }

    pub fn from_json(services: &str, transformation: &str, links: &str) -> Result<Self, ContentError> {
        let services: Vec<Service> = parse("services.json", services)?;
        let transformation = parse("transformation.json", transformation)?;
        let links: Links = parse("links.json", links)?;

        let mut seen = HashSet::new();
        for service in &services {
            if !seen.insert(service.id.as_str()) {
                return Err(ContentError::DuplicateServiceId(service.id.clone()));
            }
        }

        Ok(Self {
            services,
            transformation,
            drawer: links.drawer,
            footer: links.footer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(extra: &str) -> String {
        format!(
            r#"{{"id":"s","no":"01","title":[{{"text":"T"}}],"title_text":"T","image":"/i.jpg","summary":"","body":""{}}}"#,
            extra
        )
    }

    #[test]
    fn bundled_content_loads() {
        let content = SiteContent::load().unwrap();
        assert_eq!(content.services.len(), 3);
        assert_eq!(content.transformation.len(), 4);
        assert_eq!(content.drawer.len(), 5);
        assert_eq!(content.footer.len(), 3);

        let numbers: Vec<&str> = content.services.iter().map(|s| s.no.as_str()).collect();
        assert_eq!(numbers, vec!["01", "02", "03"]);
    }

    #[test]
    fn only_the_first_service_carries_note_and_disclaimer() {
        let content = SiteContent::load().unwrap();
        let first = &content.services[0];
        assert_eq!(first.note_block(), Some(("運営事業", "FX専門オンライン学習塾")));
        assert_eq!(first.disclaimer_block().map(|(_, items)| items.len()), Some(3));
        assert_eq!(first.title[1].emphasis, Some(Emphasis::Small));

        for service in &content.services[1..] {
            assert!(service.bullet_block().is_some());
            assert!(service.note_block().is_none());
            assert!(service.disclaimer_block().is_none());
        }
    }

    #[test]
    fn optional_blocks_need_heading_and_items() {
        let raw = format!("[{}]", service(r#","bullets_title":"X","bullets":[],"note":"n""#));
        let content = SiteContent::from_json(&raw, "[]", r#"{"drawer":[],"footer":[]}"#).unwrap();
        let only = &content.services[0];
        assert!(only.bullet_block().is_none());
        assert!(only.note_block().is_none());
        assert!(only.disclaimer_block().is_none());
        assert_eq!(only.detail_id(), "s-detail");
    }

    #[test]
    fn duplicate_service_ids_are_rejected() {
        let raw = format!("[{},{}]", service(""), service(""));
        let err = SiteContent::from_json(&raw, "[]", r#"{"drawer":[],"footer":[]}"#).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateServiceId(id) if id == "s"));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let err = SiteContent::from_json("[]", "{", r#"{"drawer":[],"footer":[]}"#).unwrap_err();
        assert!(err.to_string().starts_with("could not parse transformation.json"));
    }

    #[test]
    fn transform_labels_split_on_the_full_width_bar() {
        let row = TransformRow { label: "02｜学び".into(), before: vec![], after: vec![] };
        assert_eq!(row.split_label(), ("02", "学び"));

        let bare = TransformRow { label: "05".into(), before: vec![], after: vec![] };
        assert_eq!(bare.split_label(), ("05", ""));
    }

    #[test]
    fn drawer_targets_render_as_hrefs() {
        let content = SiteContent::load().unwrap();
        let hrefs: Vec<String> = content.drawer.iter().map(|item| item.target.href()).collect();
        assert_eq!(hrefs, vec!["#top", "#philosophy", "/operator.html", "#services", "#contact"]);
    }
}
