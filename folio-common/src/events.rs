//! Gallery event types and event bus
//!
//! Every state change the controller makes is published as a `GalleryEvent`
//! so connected pages can redraw without polling.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Playback instruction for a card's video element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaAction {
    Play,
    PauseAndRewind,
}

/// Gallery event types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GalleryEvent {
    /// Filter selection changed; the gallery was re-rendered
    ///
    /// Pages redraw the chip display first, then the gallery.
    FiltersChanged {
        /// Selected tags in selection order
        selected: Vec<String>,
        /// Records visible after filtering
        shown: usize,
        /// Eligible records
        total: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Dropdown opened or closed
    DropdownChanged {
        open: bool,
        /// Options offered while open (empty when closed)
        options: Vec<String>,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Card detail region shown
    CardExpanded {
        card: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Card collapse transition started
    CardCollapsing {
        card: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Collapse transition finished; detail region hidden
    CardCollapsed {
        card: usize,
        timestamp: chrono::DateTime<chrono::Utc>,
    },

    /// Video playback instruction for a hovered/left card
    MediaCommand {
        card: usize,
        action: MediaAction,
        timestamp: chrono::DateTime<chrono::Utc>,
    },
}

impl GalleryEvent {
    /// SSE event name
    pub fn event_type(&self) -> &'static str {
        match self {
            GalleryEvent::FiltersChanged { .. } => "FiltersChanged",
            GalleryEvent::DropdownChanged { .. } => "DropdownChanged",
            GalleryEvent::CardExpanded { .. } => "CardExpanded",
            GalleryEvent::CardCollapsing { .. } => "CardCollapsing",
            GalleryEvent::CardCollapsed { .. } => "CardCollapsed",
            GalleryEvent::MediaCommand { .. } => "MediaCommand",
        }
    }
}

/// Broadcast channel for gallery events
///
/// Cloning shares the same channel.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<GalleryEvent>,
    capacity: usize,
}

impl EventBus {
    /// Creates a new EventBus with specified channel capacity
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_common::events::EventBus;
    ///
    /// let event_bus = EventBus::new(100);
    /// assert_eq!(event_bus.capacity(), 100);
    /// ```
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx, capacity }
    }

    /// Subscribe to all future events
    pub fn subscribe(&self) -> broadcast::Receiver<GalleryEvent> {
        self.tx.subscribe()
    }

    /// Emit an event, ignoring if no subscribers are listening
    ///
    /// No connected page is a normal state for a gallery, so a failed send is
    /// not an error.
    pub fn emit_lossy(&self, event: GalleryEvent) {
        let _ = self.tx.send(event);
    }

    /// Get the current number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Get the configured channel capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
