//! Gallery controller
//!
//! Owns every piece of mutable gallery state: the loaded catalog, the selected
//! filters, the dropdown's open flag and the card deck. Handlers never touch
//! state directly; they call one method here per user interaction and publish
//! what it returns.

use folio_common::events::MediaAction;
use folio_common::view::Entry;
use folio_common::{Catalog, Error, FilterState, RenderContext, Result, TagVocabulary};
use serde::Serialize;
use tracing::debug;

use crate::cards::{CardDeck, CardTransition, CollapseTicket};

/// One dropdown option with its selection mark
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagOption {
    pub tag: String,
    pub selected: bool,
}

pub struct GalleryController {
    catalog: Catalog,
    filters: FilterState,
    vocabulary: TagVocabulary,
    dropdown_open: bool,
    cards: CardDeck,
}

impl GalleryController {
    pub fn new(catalog: Catalog, vocabulary: TagVocabulary) -> Self {
        Self {
            catalog,
            filters: FilterState::new(),
            vocabulary,
            dropdown_open: false,
            cards: CardDeck::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn cards(&self) -> &CardDeck {
        &self.cards
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    pub fn dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Begin a fresh page lifetime
    ///
    /// Clears the filters, closes the dropdown and collapses every card;
    /// pending collapse timers become stale. Returns whether any filter was
    /// selected before.
    pub fn start_page(&mut self) -> bool {
        let had_filters = !self.filters.is_empty();
        self.filters = FilterState::new();
        self.dropdown_open = false;
        self.cards.reset();
        debug!("Gallery state reset for a new page");
        had_filters
    }

    /// Visible subset and counter for the current filters
    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::compute(self.catalog.records(), &self.filters)
    }

    /// Options offered by the dropdown, derived fresh from eligible records
    pub fn dropdown_options(&self) -> Vec<TagOption> {
        let ctx = self.render_context();
        self.vocabulary
            .available(ctx.eligible_records())
            .into_iter()
            .map(|tag| TagOption {
                selected: self.filters.contains(&tag),
                tag,
            })
            .collect()
    }

    /// Toggle a tag filter from the dropdown
    ///
    /// Closes the dropdown and re-renders (card state is discarded). Returns
    /// whether the tag is selected afterwards.
    pub fn toggle_filter(&mut self, tag: &str) -> Result<bool> {
        let tag = validate_tag(tag)?;
        let selected = self.filters.toggle(tag);
        self.dropdown_open = false;
        self.cards.reset();
        debug!("Filter '{}' toggled (selected: {})", tag, selected);
        Ok(selected)
    }

    /// Remove a filter chip; returns whether anything changed
    ///
    /// An unselected tag is a no-op and does not re-render.
    pub fn remove_filter(&mut self, tag: &str) -> Result<bool> {
        let tag = validate_tag(tag)?;
        let removed = self.filters.remove(tag);
        if removed {
            self.cards.reset();
            debug!("Filter '{}' removed", tag);
        }
        Ok(removed)
    }

    /// Open or close the dropdown; returns whether it is open afterwards
    pub fn toggle_dropdown(&mut self) -> bool {
        self.dropdown_open = !self.dropdown_open;
        self.dropdown_open
    }

    /// Close the dropdown after a click outside it
    ///
    /// Returns whether it was open. Nothing else changes.
    pub fn close_dropdown(&mut self) -> bool {
        std::mem::replace(&mut self.dropdown_open, false)
    }

    /// Toggle a card's expansion
    pub fn click_card(&mut self, card: usize) -> Result<Vec<CardTransition>> {
        self.visible_entry(card)?;
        Ok(self.cards.click(card))
    }

    /// Pointer entered a card; only video cards react
    pub fn hover_card(&self, card: usize) -> Result<Option<MediaAction>> {
        let entry = self.visible_entry(card)?;
        Ok(entry.record.has_video().then_some(MediaAction::Play))
    }

    /// Pointer left a card; video cards pause and rewind
    pub fn leave_card(&self, card: usize) -> Result<Option<MediaAction>> {
        let entry = self.visible_entry(card)?;
        Ok(entry
            .record
            .has_video()
            .then_some(MediaAction::PauseAndRewind))
    }

    /// Collapse timer fired
    pub fn finish_collapse(&mut self, ticket: CollapseTicket) -> bool {
        self.cards.finish_collapse(ticket)
    }

    fn visible_entry(&self, card: usize) -> Result<Entry<'_>> {
        self.render_context()
            .visible
            .into_iter()
            .find(|entry| entry.index == card)
            .ok_or_else(|| Error::NotFound(format!("card {}", card)))
    }
}

fn validate_tag(tag: &str) -> Result<&str> {
    let tag = tag.trim();
    if tag.is_empty() {
        return Err(Error::InvalidInput("tag must not be empty".to_string()));
    }
    Ok(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardState;
    use folio_common::loader::{flatten_document, sort_by_date};
    use serde_json::json;

    fn controller() -> GalleryController {
        let doc = json!({
            "2024": [
                {"Project": "Lamp", "Tags": "Light,Sound", "Video": "lamp.mp4", "Date": "2024-05-01"},
                {"Project": "Goggles", "Tags": "XR,Robotics", "Image": "goggles.jpg", "Date": "2024-04-01"},
                {"Project": "Retired", "Tags": "Optics", "Active": false}
            ]
        });
        let mut records = flatten_document(&doc).unwrap();
        sort_by_date(&mut records);
        GalleryController::new(Catalog::from_records(records), TagVocabulary::default())
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert!(c.filters().is_empty());
        assert!(!c.dropdown_open());
        assert_eq!(c.render_context().count.to_string(), "Showing: 2/2");
    }

    #[test]
    fn test_dropdown_options_ordered_and_marked() {
        let mut c = controller();
        c.toggle_filter("XR").unwrap();
        let options = c.dropdown_options();
        let tags: Vec<_> = options.iter().map(|o| o.tag.as_str()).collect();
        // Optics only appears on an inactive record; Robotics is not in the list
        assert_eq!(tags, vec!["Light", "Sound", "XR"]);
        assert!(options.iter().find(|o| o.tag == "XR").unwrap().selected);
        assert!(!options.iter().find(|o| o.tag == "Light").unwrap().selected);
    }

    #[test]
    fn test_toggle_filter_closes_dropdown_and_filters() {
        let mut c = controller();
        assert!(c.toggle_dropdown());
        assert!(c.toggle_filter("Sound").unwrap());
        assert!(!c.dropdown_open());
        assert_eq!(c.render_context().count.to_string(), "Showing: 1/2");

        assert!(!c.toggle_filter("Sound").unwrap());
        assert_eq!(c.render_context().count.to_string(), "Showing: 2/2");
    }

    #[test]
    fn test_empty_tag_rejected() {
        let mut c = controller();
        assert!(matches!(c.toggle_filter("  "), Err(Error::InvalidInput(_))));
        assert!(matches!(c.remove_filter(""), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_remove_unselected_is_noop() {
        let mut c = controller();
        c.click_card(0).unwrap();
        assert!(!c.remove_filter("Light").unwrap());
        // No re-render, so the expanded card survives
        assert_eq!(c.cards().expanded(), Some(0));
    }

    #[test]
    fn test_filter_change_resets_cards() {
        let mut c = controller();
        c.click_card(0).unwrap();
        c.toggle_filter("Light").unwrap();
        assert_eq!(c.cards().expanded(), None);
    }

    #[test]
    fn test_close_dropdown_has_no_side_effects() {
        let mut c = controller();
        c.toggle_filter("XR").unwrap();
        c.toggle_dropdown();
        assert!(c.close_dropdown());
        assert!(!c.close_dropdown());
        assert_eq!(c.filters().tags(), ["XR"]);
    }

    #[test]
    fn test_click_hidden_card_is_not_found() {
        let mut c = controller();
        // Index 2 is the inactive record
        assert!(matches!(c.click_card(2), Err(Error::NotFound(_))));

        c.toggle_filter("XR").unwrap();
        // Lamp is filtered out now
        assert!(matches!(c.click_card(0), Err(Error::NotFound(_))));
        assert!(c.click_card(1).is_ok());
    }

    #[test]
    fn test_hover_only_drives_video_cards() {
        let c = controller();
        assert_eq!(c.hover_card(0).unwrap(), Some(MediaAction::Play));
        assert_eq!(c.leave_card(0).unwrap(), Some(MediaAction::PauseAndRewind));
        assert_eq!(c.hover_card(1).unwrap(), None);
        assert_eq!(c.leave_card(1).unwrap(), None);
    }

    #[test]
    fn test_collapse_ticket_round_trip() {
        let mut c = controller();
        c.click_card(0).unwrap();
        let transitions = c.click_card(0).unwrap();
        let CardTransition::Collapsing(ticket) = transitions[0] else {
            panic!("expected collapse");
        };
        assert!(c.finish_collapse(ticket));
        assert_eq!(c.cards().state(0), CardState::Collapsed);
    }

    #[test]
    fn test_start_page_clears_session_state() {
        let mut c = controller();
        c.toggle_filter("XR").unwrap();
        c.toggle_dropdown();
        c.click_card(1).unwrap();
        let transitions = c.click_card(1).unwrap();
        let CardTransition::Collapsing(ticket) = transitions[0] else {
            panic!("expected collapse");
        };

        assert!(c.start_page());
        assert!(c.filters().is_empty());
        assert!(!c.dropdown_open());
        assert_eq!(c.cards().state(1), CardState::Collapsed);
        assert!(!c.finish_collapse(ticket));
        assert_eq!(c.render_context().count.to_string(), "Showing: 2/2");

        assert!(!c.start_page());
    }

    #[test]
    fn test_fallback_catalog_has_no_options() {
        let c = GalleryController::new(Catalog::Unavailable, TagVocabulary::default());
        assert!(c.dropdown_options().is_empty());
        assert_eq!(c.render_context().count.to_string(), "Showing: 0/0");
    }
}
