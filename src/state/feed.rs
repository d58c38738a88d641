//! Landing-page state: post composer visibility and the feed refresh trigger.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

/// Plain fields held in a page-local `RwSignal`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedState {
    /// Bumped on every created post; part of the feed's cache key.
    pub refresh: u64,
    /// Whether the create-post dialog is open.
    pub composing: bool,
}

impl FeedState {
    pub fn open_composer(&mut self) {
        self.composing = true;
    }

    pub fn close_composer(&mut self) {
        self.composing = false;
    }

    /// A post was created: close the dialog and force a feed re-fetch.
    pub fn post_created(&mut self) {
        self.composing = false;
        self.refresh += 1;
    }
}
