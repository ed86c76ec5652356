//! A `Vec`-backed row provider with a view pool.
//!
//! `ListRowProvider<T>` is the simplest way to put a collection behind a
//! swipe list: it keeps the items, binds each row to a [`RowView`] holding the
//! row's label, and reuses views handed back to it as recycled.

use std::fmt;

use slotmap::SlotMap;

use super::provider::{RowProvider, ViewId};

/// Produces the label shown for an item at a position.
pub type RowBinder<T> = Box<dyn Fn(&T, usize) -> String + Send + Sync>;

/// A rendered row view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Label text bound into the view.
    pub label: String,
    /// Row the view was last bound to.
    pub bound_row: usize,
}

/// A list of items exposed as a [`RowProvider`].
///
/// # Example
///
/// ```
/// use swipe_list::model::{ListRowProvider, RowProvider};
///
/// let mut rows = ListRowProvider::new(vec!["One", "Two", "Three"]);
/// let view = rows.render_row(1, None);
/// assert_eq!(rows.view(view).unwrap().label, "Two");
///
/// rows.remove(0);
/// assert_eq!(rows.count(), 2);
/// ```
pub struct ListRowProvider<T> {
    items: Vec<T>,
    views: SlotMap<ViewId, RowView>,
    binder: RowBinder<T>,
}

impl<T: fmt::Display + 'static> ListRowProvider<T> {
    /// Creates a provider labelling each row with the item's `Display` text.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_binder(items, |item, _| item.to_string())
    }
}

impl<T> ListRowProvider<T> {
    /// Creates a provider with a custom label binder.
    pub fn with_binder<F>(items: Vec<T>, binder: F) -> Self
    where
        F: Fn(&T, usize) -> String + Send + Sync + 'static,
    {
        Self {
            items,
            views: SlotMap::with_key(),
            binder: Box::new(binder),
        }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The backing items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Appends an item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Inserts an item at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, item: T) {
        self.items.insert(index, item);
    }

    /// Removes the item at `index`, returning `None` when out of range.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// The view with the given id.
    pub fn view(&self, id: ViewId) -> Option<&RowView> {
        self.views.get(id)
    }

    /// Number of views created so far.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Destroys a view; later attempts to recycle it create a fresh one.
    pub fn discard_view(&mut self, id: ViewId) -> Option<RowView> {
        self.views.remove(id)
    }
}

impl<T> RowProvider for ListRowProvider<T> {
    type Item = T;

    fn count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    fn render_row(&mut self, index: usize, recycled: Option<ViewId>) -> ViewId {
        let label = self
            .items
            .get(index)
            .map(|item| (self.binder)(item, index))
            .unwrap_or_default();

        match recycled.and_then(|id| self.views.get_mut(id).map(|view| (id, view))) {
            Some((id, view)) => {
                view.label = label;
                view.bound_row = index;
                id
            }
            None => self.views.insert(RowView {
                label,
                bound_row: index,
            }),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for ListRowProvider<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListRowProvider")
            .field("items", &self.items)
            .field("views", &self.views.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_creates_then_recycles() {
        let mut rows = ListRowProvider::new(vec!["One", "Two", "Three"]);
        let view = rows.render_row(0, None);
        assert_eq!(rows.view_count(), 1);
        assert_eq!(rows.view(view).unwrap().label, "One");

        let again = rows.render_row(2, Some(view));
        assert_eq!(again, view);
        assert_eq!(rows.view_count(), 1);
        assert_eq!(
            rows.view(view),
            Some(&RowView {
                label: "Three".to_string(),
                bound_row: 2
            })
        );
    }

    #[test]
    fn test_discarded_view_is_not_reused() {
        let mut rows = ListRowProvider::new(vec![1, 2]);
        let view = rows.render_row(0, None);
        rows.discard_view(view);

        let fresh = rows.render_row(1, Some(view));
        assert_ne!(fresh, view);
        assert_eq!(rows.view(fresh).unwrap().label, "2");
    }

    #[test]
    fn test_custom_binder() {
        let mut rows = ListRowProvider::with_binder(vec!["a", "b"], |item, index| {
            format!("{index}: {item}")
        });
        let view = rows.render_row(1, None);
        assert_eq!(rows.view(view).unwrap().label, "1: b");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut rows = ListRowProvider::new(vec!["x"]);
        assert_eq!(rows.remove(3), None);
        assert_eq!(rows.remove(0), Some("x"));
        assert!(rows.is_empty());
        assert_eq!(rows.stable_id(0), None);
    }
}
