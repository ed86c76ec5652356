//! The deletion listener contract.

use crate::model::RowProvider;

use super::swipe_list::SwipeListView;

/// Receives the position of a row whose delete-slide completed.
///
/// The receiver owns the data: it is expected to remove the element at
/// `position` from the backing collection (for example through
/// [`SwipeListView::row_provider_mut`]) and then call
/// [`SwipeListView::notify_data_changed`]. The widget never removes rows
/// itself.
///
/// Closures of the form `FnMut(&mut SwipeListView<P>, usize)` implement this
/// trait.
pub trait ItemDeleteListener<P: RowProvider> {
    /// Called exactly once per completed delete-slide.
    fn on_item_deleted(&mut self, list: &mut SwipeListView<P>, position: usize);
}

impl<P, F> ItemDeleteListener<P> for F
where
    P: RowProvider,
    F: FnMut(&mut SwipeListView<P>, usize),
{
    fn on_item_deleted(&mut self, list: &mut SwipeListView<P>, position: usize) {
        self(list, position)
    }
}
