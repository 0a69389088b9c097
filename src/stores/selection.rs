// SPDX-License-Identifier: MPL-2.0
//! Tracks which shot is currently open in the detail overlay.

use crate::domain::ShotId;

/// The currently selected shot and whether the overlay is open.
///
/// Mutated only through [`open`](Self::open) and [`close`](Self::close);
/// everything else reads. The detail component never mutates it directly,
/// it emits effects that the app translates into store calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: Option<ShotId>,
    is_open: bool,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the overlay on `id`. Returns the previously selected shot so a
    /// caller can keep a navigation trail if it wants one.
    pub fn open(&mut self, id: ShotId) -> Option<ShotId> {
        let previous = self.selected.replace(id);
        self.is_open = true;
        previous
    }

    /// Closes the overlay and clears the selection. Returns the shot that was
    /// open, if any.
    pub fn close(&mut self) -> Option<ShotId> {
        self.is_open = false;
        self.selected.take()
    }

    pub fn selected_id(&self) -> Option<&ShotId> {
        self.selected.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_no_selection() {
        let store = SelectionStore::new();
        assert!(!store.is_open());
        assert!(store.selected_id().is_none());
    }

    #[test]
    fn open_selects_and_reports_previous() {
        let mut store = SelectionStore::new();
        assert_eq!(store.open(ShotId::from("s1")), None);
        assert!(store.is_open());
        assert_eq!(store.selected_id(), Some(&ShotId::from("s1")));

        let previous = store.open(ShotId::from("s2"));
        assert_eq!(previous, Some(ShotId::from("s1")));
        assert_eq!(store.selected_id(), Some(&ShotId::from("s2")));
    }

    #[test]
    fn close_clears_selection() {
        let mut store = SelectionStore::new();
        store.open(ShotId::from("s1"));
        assert_eq!(store.close(), Some(ShotId::from("s1")));
        assert!(!store.is_open());
        assert!(store.selected_id().is_none());
    }
}
