//! The row provider contract.
//!
//! A row provider supplies the data and the rendered row views of a list. The
//! widget composes with a provider instead of reimplementing row binding or
//! view recycling: it only asks "give me the view for row K, possibly reusing
//! view V".

use slotmap::new_key_type;

new_key_type! {
    /// Identity of a rendered row view.
    ///
    /// Views are recycled: the same `ViewId` can display different rows over
    /// time, so it must never be used as a row index itself.
    pub struct ViewId;
}

/// Supplies row count, items, stable ids and rendered views for list positions.
///
/// # Example
///
/// ```
/// use slotmap::SlotMap;
/// use swipe_list::model::{RowProvider, ViewId};
///
/// struct Names {
///     names: Vec<&'static str>,
///     views: SlotMap<ViewId, usize>,
/// }
///
/// impl RowProvider for Names {
///     type Item = &'static str;
///
///     fn count(&self) -> usize {
///         self.names.len()
///     }
///
///     fn item(&self, index: usize) -> Option<&Self::Item> {
///         self.names.get(index)
///     }
///
///     fn render_row(&mut self, index: usize, recycled: Option<ViewId>) -> ViewId {
///         match recycled.filter(|id| self.views.contains_key(*id)) {
///             Some(id) => {
///                 self.views[id] = index;
///                 id
///             }
///             None => self.views.insert(index),
///         }
///     }
/// }
/// ```
pub trait RowProvider {
    /// The element type held in the backing collection.
    type Item;

    /// Number of rows.
    fn count(&self) -> usize;

    /// The item at `index`, or `None` when out of range.
    fn item(&self, index: usize) -> Option<&Self::Item>;

    /// A stable identifier for the item at `index`.
    ///
    /// The default uses the position itself, which is what array-backed
    /// providers without their own ids report.
    fn stable_id(&self, index: usize) -> Option<u64> {
        (index < self.count()).then_some(index as u64)
    }

    /// Bind row `index` to a view, reusing `recycled` when possible, and
    /// return the view that now displays it.
    fn render_row(&mut self, index: usize, recycled: Option<ViewId>) -> ViewId;
}
