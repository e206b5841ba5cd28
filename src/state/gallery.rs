//! Image grid and lightbox cursor.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::data::GALLERY_IMAGES;

/// What a key press means while the viewer is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerKey {
    Close,
    Previous,
    Next,
}

impl ViewerKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Fixed image list with a circular cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryState {
    images: &'static [&'static str],
    current: usize,
    open: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(GALLERY_IMAGES)
    }
}

impl GalleryState {
    #[must_use]
    pub fn new(images: &'static [&'static str]) -> Self {
        Self { images, current: 0, open: false }
    }

    #[must_use]
    pub fn images(&self) -> &'static [&'static str] {
        self.images
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_image(&self) -> Option<&'static str> {
        self.images.get(self.current).copied()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Show image `index` in the viewer. Out-of-range indices are ignored.
    ///
    /// Returns `true` if the viewer opened.
    pub fn open_modal(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current = index;
        self.open = true;
        true
    }

    pub fn close_modal(&mut self) {
        self.open = false;
    }

    pub fn previous_image(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + len - 1) % len;
    }

    pub fn next_image(&mut self) {
        let len = self.images.len();
        if len == 0 {
            return;
        }
        self.current = (self.current + 1) % len;
    }

    /// Keyboard handler. Keys only act while the viewer is open.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.open {
            return false;
        }
        match ViewerKey::from_key(key) {
            Some(ViewerKey::Close) => self.close_modal(),
            Some(ViewerKey::Previous) => self.previous_image(),
            Some(ViewerKey::Next) => self.next_image(),
            None => return false,
        }
        true
    }
}
