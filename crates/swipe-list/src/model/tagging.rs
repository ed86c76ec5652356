//! Position tagging for recycled row views.
//!
//! Row views are reused for different rows as the list scrolls, so a view's
//! identity says nothing about which row it shows. [`TaggingAdapter`] wraps a
//! [`RowProvider`] and, every time a row is rendered, records the row index
//! in an owned side-table keyed by [`ViewId`]. The drag state machine uses
//! that table to recognise the one view showing the dragged row.

use std::collections::HashMap;

use swipe_list_core::logging::targets;

use super::provider::{RowProvider, ViewId};

/// Identifies the namespace under which a list stamps its row tags.
///
/// Every list sharing a recycler must use a distinct key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagKey(u32);

impl TagKey {
    /// Creates a tag key from a caller-assigned identifier.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw identifier.
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Side-table from rendered views to the row index each currently displays.
#[derive(Debug, Clone)]
pub struct TaggingMap {
    key: TagKey,
    tags: HashMap<ViewId, usize>,
}

impl TaggingMap {
    /// Creates an empty map for the given key.
    pub fn new(key: TagKey) -> Self {
        Self {
            key,
            tags: HashMap::new(),
        }
    }

    /// The key this map's tags are stored under.
    pub fn key(&self) -> TagKey {
        self.key
    }

    /// Records that `view` now displays row `index`, replacing any earlier tag.
    pub fn stamp(&mut self, view: ViewId, index: usize) {
        self.tags.insert(view, index);
    }

    /// The row index `view` was most recently rendered for.
    pub fn tag_of(&self, view: ViewId) -> Option<usize> {
        self.tags.get(&view).copied()
    }

    /// Forgets the tag of a view the recycler discarded.
    pub fn release(&mut self, view: ViewId) -> Option<usize> {
        self.tags.remove(&view)
    }

    /// Forgets every tag.
    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Number of tagged views.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if no view is tagged.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Wraps a row provider and tags every rendered view with its row index.
///
/// `count`, `item` and `stable_id` pass through unchanged; only
/// [`render_row`](Self::render_row) adds behaviour. The adapter cannot be
/// built without a [`TagKey`].
#[derive(Debug)]
pub struct TaggingAdapter<P> {
    inner: P,
    tags: TaggingMap,
}

impl<P: RowProvider> TaggingAdapter<P> {
    /// Wraps `inner`, stamping tags under `key`.
    pub fn new(inner: P, key: TagKey) -> Self {
        Self {
            inner,
            tags: TaggingMap::new(key),
        }
    }

    /// The wrapped provider.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// The wrapped provider, mutably.
    pub fn inner_mut(&mut self) -> &mut P {
        &mut self.inner
    }

    /// Unwraps the provider, dropping all tags.
    pub fn into_inner(self) -> P {
        self.inner
    }

    /// The tag side-table.
    pub fn tags(&self) -> &TaggingMap {
        &self.tags
    }

    /// The key tags are stored under.
    pub fn tag_key(&self) -> TagKey {
        self.tags.key()
    }

    /// Switches to a new tag key. Existing tags are dropped.
    pub fn set_tag_key(&mut self, key: TagKey) {
        if key != self.tags.key() {
            self.tags = TaggingMap::new(key);
        }
    }

    /// Number of rows in the wrapped provider.
    pub fn count(&self) -> usize {
        self.inner.count()
    }

    /// The item at `index` in the wrapped provider.
    pub fn item(&self, index: usize) -> Option<&P::Item> {
        self.inner.item(index)
    }

    /// The stable id at `index` in the wrapped provider.
    pub fn stable_id(&self, index: usize) -> Option<u64> {
        self.inner.stable_id(index)
    }

    /// Renders row `index` through the wrapped provider, then tags the
    /// returned view with `index`.
    pub fn render_row(&mut self, index: usize, recycled: Option<ViewId>) -> ViewId {
        let view = self.inner.render_row(index, recycled);
        self.tags.stamp(view, index);
        tracing::trace!(target: targets::MODEL, ?view, index, "row tagged");
        view
    }

    /// The row index `view` was most recently rendered for.
    pub fn tag_of(&self, view: ViewId) -> Option<usize> {
        self.tags.tag_of(view)
    }

    /// Forgets the tag of a discarded view.
    pub fn release_view(&mut self, view: ViewId) -> Option<usize> {
        self.tags.release(view)
    }

    /// Drops every tag; called when the data set changes.
    pub fn clear_tags(&mut self) {
        self.tags.clear();
    }
}
