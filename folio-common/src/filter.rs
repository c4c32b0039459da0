//! Selected tag filters
//!
//! An ordered list of distinct tags. Empty means "no filtering".

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterState {
    selected: Vec<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `tag` if selected, otherwise append it
    ///
    /// Returns `true` when the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.remove(tag) {
            false
        } else {
            self.selected.push(tag.to_string());
            true
        }
    }

    /// Remove `tag` if selected; returns whether anything changed
    pub fn remove(&mut self, tag: &str) -> bool {
        match self.selected.iter().position(|t| t == tag) {
            Some(index) => {
                self.selected.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.selected.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Selected tags in selection order
    pub fn tags(&self) -> &[String] {
        &self.selected
    }
}
