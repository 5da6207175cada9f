//! Project showcase carousel state.
//!
//! DESIGN
//! ======
//! The carousel owns a copy of the catalog plus the filtered view produced
//! by [`listings::filter_by_status`]. `active_index` always points into
//! `visible` unless `visible` is empty, in which case nothing is focused and
//! navigation is a no-op. `reveal_seq` is bumped on every filter change so the strip can
//! replay its entrance animation without the state knowing about the DOM.

#[cfg(test)]
#[path = "showcase_test.rs"]
mod showcase_test;

use listings::{Project, ProjectStatus, filter_by_status};

/// Below this many visible projects the strip centers its cards.
pub const CENTER_THRESHOLD: usize = 5;

/// Where a card sits relative to the focused one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    Active,
    Previous,
    Next,
    Hidden,
}

impl Slot {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Active => "showcase-card--active",
            Self::Previous => "showcase-card--prev",
            Self::Next => "showcase-card--next",
            Self::Hidden => "showcase-card--hidden",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ShowcaseState {
    catalog: Vec<Project>,
    filter: ProjectStatus,
    visible: Vec<Project>,
    active_index: usize,
    reveal_seq: u64,
}

impl Default for ShowcaseState {
    fn default() -> Self {
        Self::new(listings::catalog().to_vec())
    }
}

impl ShowcaseState {
    /// Start on the default (ongoing) filter at index 0.
    #[must_use]
    pub fn new(catalog: Vec<Project>) -> Self {
        let mut state = Self { catalog, filter: ProjectStatus::default(), visible: Vec::new(), active_index: 0, reveal_seq: 0 };
        state.refilter();
        state
    }

    fn refilter(&mut self) {
        self.visible = filter_by_status(&self.catalog, self.filter).into_iter().cloned().collect();
        self.active_index = 0;
    }

    #[must_use]
    pub fn active_filter(&self) -> ProjectStatus {
        self.filter
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn reveal_seq(&self) -> u64 {
        self.reveal_seq
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Filtered view in catalog order.
    pub fn visible(&self) -> impl Iterator<Item = &Project> {
        self.visible.iter()
    }

    /// Project at `index` within the filtered view.
    #[must_use]
    pub fn project_at(&self, index: usize) -> Option<&Project> {
        self.visible.get(index)
    }

    /// The centered project, or `None` when the view is empty.
    #[must_use]
    pub fn focused(&self) -> Option<&Project> {
        self.project_at(self.active_index)
    }

    /// Switch filter. Always resets focus to the first card, even when the
    /// filter is unchanged.
    pub fn select_filter(&mut self, status: ProjectStatus) {
        self.filter = status;
        self.refilter();
        self.reveal_seq += 1;
    }

    pub fn next(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        self.active_index = (self.active_index + 1) % len;
    }

    pub fn previous(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        self.active_index = (self.active_index + len - 1) % len;
    }

    /// Focus `index`. Out-of-range indices are ignored; returns whether focus moved.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.visible.len() {
            return false;
        }
        self.active_index = index;
        true
    }

    /// Layout hint: few cards are centered instead of left-aligned.
    #[must_use]
    pub fn is_centered(&self) -> bool {
        self.visible.len() < CENTER_THRESHOLD
    }

    /// Indices peeking on either side of the focused card, when there are any.
    #[must_use]
    pub fn neighbors(&self) -> Option<(usize, usize)> {
        let len = self.visible.len();
        if len < 2 {
            return None;
        }
        Some(((self.active_index + len - 1) % len, (self.active_index + 1) % len))
    }

    #[must_use]
    pub fn slot(&self, index: usize) -> Slot {
        if index >= self.visible.len() {
            return Slot::Hidden;
        }
        if index == self.active_index {
            return Slot::Active;
        }
        match self.neighbors() {
            Some((_, next)) if next == index => Slot::Next,
            Some((prev, _)) if prev == index => Slot::Previous,
            _ => Slot::Hidden,
        }
    }
}
