// SPDX-License-Identifier: MPL-2.0
//! Tracks visibility of the comments side panel.

/// Open/closed flag for the comments panel inside the detail overlay.
/// Toggling it never touches fetched data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentPanelStore {
    is_open: bool,
}

impl CommentPanelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_close_round_trip() {
        let mut store = CommentPanelStore::new();
        assert!(!store.is_open());
        store.open();
        assert!(store.is_open());
        store.close();
        assert!(!store.is_open());
    }

    #[test]
    fn toggle_flips_state() {
        let mut store = CommentPanelStore::new();
        store.toggle();
        assert!(store.is_open());
        store.toggle();
        assert!(!store.is_open());
    }
}
