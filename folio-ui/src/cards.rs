//! Card expansion state
//!
//! At most one card is expanded. Collapsing is a two-step transition: the card
//! enters `Collapsing` immediately and its detail region is hidden when the
//! collapse timer fires. Each collapse gets a fresh generation number; a timer
//! only completes the collapse it was scheduled for, so a card re-expanded
//! mid-transition is never hidden by a stale timer.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Collapsed,
    Expanded,
    Collapsing { generation: u64 },
}

/// Handle for one pending collapse timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollapseTicket {
    pub card: usize,
    pub generation: u64,
}

/// State change produced by a click, in application order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTransition {
    Expanded(usize),
    Collapsing(CollapseTicket),
}

#[derive(Debug, Default)]
pub struct CardDeck {
    /// Only non-collapsed cards are stored
    states: BTreeMap<usize, CardState>,
    /// Never reset, so tickets from before a `reset` stay stale
    generation: u64,
}

impl CardDeck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, card: usize) -> CardState {
        self.states
            .get(&card)
            .copied()
            .unwrap_or(CardState::Collapsed)
    }

    /// Currently expanded card, if any
    pub fn expanded(&self) -> Option<usize> {
        self.states
            .iter()
            .find(|(_, state)| **state == CardState::Expanded)
            .map(|(card, _)| *card)
    }

    /// Toggle a card
    ///
    /// Every other expanded card starts collapsing first; then the clicked
    /// card either starts collapsing (if it was expanded) or expands.
    pub fn click(&mut self, card: usize) -> Vec<CardTransition> {
        let was_expanded = self.state(card) == CardState::Expanded;

        let others: Vec<usize> = self
            .states
            .iter()
            .filter(|(other, state)| **other != card && **state == CardState::Expanded)
            .map(|(other, _)| *other)
            .collect();

        let mut transitions: Vec<CardTransition> = others
            .into_iter()
            .map(|other| CardTransition::Collapsing(self.begin_collapse(other)))
            .collect();

        if was_expanded {
            transitions.push(CardTransition::Collapsing(self.begin_collapse(card)));
        } else {
            // Overwrites a pending Collapsing state, invalidating its ticket
            self.states.insert(card, CardState::Expanded);
            transitions.push(CardTransition::Expanded(card));
        }

        transitions
    }

    /// Complete a collapse when its timer fires
    ///
    /// Returns `false` for a stale ticket (card re-expanded, collapsed again,
    /// or deck reset since the ticket was issued).
    pub fn finish_collapse(&mut self, ticket: CollapseTicket) -> bool {
        match self.states.get(&ticket.card) {
            Some(CardState::Collapsing { generation }) if *generation == ticket.generation => {
                self.states.remove(&ticket.card);
                true
            }
            _ => false,
        }
    }

    /// Forget all card state; used when the gallery is re-rendered
    pub fn reset(&mut self) {
        self.states.clear();
    }

    fn begin_collapse(&mut self, card: usize) -> CollapseTicket {
        self.generation += 1;
        let generation = self.generation;
        self.states.insert(card, CardState::Collapsing { generation });
        CollapseTicket { card, generation }
    }
}
