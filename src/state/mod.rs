/// State management module
///
/// This module handles all gallery state, independent of the UI toolkit:
/// - Ordered image store with selection (gallery.rs)
/// - Ordered selection set (selection.rs)
/// - Drag-to-reorder tracking (reorder.rs)
/// - Shared data structures (data.rs)

pub mod data;
pub mod gallery;
pub mod reorder;
pub mod selection;
