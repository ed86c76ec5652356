//! Row data for swipe lists.
//!
//! The list never owns rendering or recycling. It talks to a [`RowProvider`]
//! that binds rows to recyclable views, and wraps that provider in a
//! [`TaggingAdapter`] so each rendered view can be mapped back to the row it
//! currently shows.
//!
//! # Core Types
//!
//! - `RowProvider`: count, items, stable ids and rendered views
//! - `ViewId`: identity of a rendered (recyclable) row view
//! - `TagKey` / `TaggingMap`: the view-to-row side-table
//! - `TaggingAdapter`: the provider wrapper that stamps tags
//! - `ListRowProvider`: a ready-made `Vec`-backed provider
//!
//! ```text
//! ┌──────────────┐ render_row ┌────────────────┐ render_row ┌─────────────┐
//! │ SwipeListView│───────────>│ TaggingAdapter │───────────>│ RowProvider │
//! └──────────────┘            │  (TaggingMap)  │<───ViewId──└─────────────┘
//!                             └────────────────┘
//! ```

mod list_provider;
mod provider;
mod tagging;

pub use list_provider::{ListRowProvider, RowBinder, RowView};
pub use provider::{RowProvider, ViewId};
pub use tagging::{TagKey, TaggingAdapter, TaggingMap};
