//! Page and fragment rendering
//!
//! Markup comes from minijinja templates embedded at compile time. Values are
//! HTML-escaped by the `.html` auto-escape rule, so project fields coming from
//! the data document cannot inject markup.

use folio_common::records::{Media, ProjectRecord};
use folio_common::view::{Entry, ProjectCount};
use minijinja::{context, Environment};
use serde::Serialize;

use crate::cards::{CardDeck, CardState};
use crate::controller::{GalleryController, TagOption};

const PAGE_TITLE: &str = "Projects";

/// Card model handed to `gallery.html`
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: usize,
    pub name: String,
    /// "video", "image" or "none"
    pub media_kind: &'static str,
    pub media_src: Option<String>,
    pub team: Option<String>,
    pub year: Option<String>,
    pub brief: Option<String>,
    pub expanded: bool,
    pub collapsing: bool,
}

impl CardView {
    fn from_entry(entry: &Entry<'_>, deck: &CardDeck) -> Self {
        let record: &ProjectRecord = entry.record;
        let (media_kind, media_src) = match record.media() {
            Media::Video(src) => ("video", Some(src.to_string())),
            Media::Image(src) => ("image", Some(src.to_string())),
            Media::Placeholder => ("none", None),
        };
        let state = deck.state(entry.index);

        Self {
            id: entry.index,
            name: record.name().unwrap_or_default().to_string(),
            media_kind,
            media_src,
            team: record.team_credit().map(str::to_string),
            year: record.display_year(),
            brief: record.brief_text().map(str::to_string),
            expanded: state == CardState::Expanded,
            collapsing: matches!(state, CardState::Collapsing { .. }),
        }
    }
}

/// Gallery body: fallback message or cards, plus the counter
#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub message: Option<&'static str>,
    pub cards: Vec<CardView>,
    /// `None` while a fallback message is shown
    pub count: Option<ProjectCount>,
}

impl GalleryView {
    pub fn from_controller(controller: &GalleryController) -> Self {
        if let Some(message) = controller.catalog().fallback_message() {
            return Self {
                message: Some(message),
                cards: Vec::new(),
                count: None,
            };
        }

        let ctx = controller.render_context();
        let cards = ctx
            .visible
            .iter()
            .map(|entry| CardView::from_entry(entry, controller.cards()))
            .collect();

        Self {
            message: None,
            cards,
            count: Some(ctx.count),
        }
    }

    /// "Showing: X/Y", or `None` while a fallback message is shown
    pub fn counter(&self) -> Option<String> {
        self.count.map(|count| count.to_string())
    }
}

pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("page.html", include_str!("../templates/page.html"))?;
        env.add_template("gallery.html", include_str!("../templates/gallery.html"))?;
        env.add_template("filters.html", include_str!("../templates/filters.html"))?;
        env.add_template("dropdown.html", include_str!("../templates/dropdown.html"))?;
        Ok(Self { env })
    }

    /// Full page for the controller's current state
    pub fn page(&self, controller: &GalleryController) -> Result<String, minijinja::Error> {
        self.env.get_template("page.html")?.render(context! {
            title => PAGE_TITLE,
            gallery => GalleryView::from_controller(controller),
            selected => controller.filters().tags(),
            dropdown_open => controller.dropdown_open(),
            options => controller.dropdown_options(),
        })
    }

    /// Inner HTML of `#projects-container`
    pub fn gallery(&self, view: &GalleryView) -> Result<String, minijinja::Error> {
        self.env
            .get_template("gallery.html")?
            .render(context! { gallery => view })
    }

    /// Placeholder and selected-tag chips
    pub fn filters(&self, selected: &[String]) -> Result<String, minijinja::Error> {
        self.env
            .get_template("filters.html")?
            .render(context! { selected => selected })
    }

    /// Inner HTML of `#dropdown-menu`
    pub fn dropdown(&self, options: &[TagOption]) -> Result<String, minijinja::Error> {
        self.env
            .get_template("dropdown.html")?
            .render(context! { options => options })
    }
}
