use log::debug;

use super::data::{Entry, ImageId, Toggle};
use super::selection::Selection;
use crate::error::{GalleryError, Result};

/// The Gallery owns the ordered list of uploaded images and the
/// selection over them.
///
/// Invariant: every selected id refers to an entry in `entries`.
/// Every mutation that removes entries also prunes the selection.
#[derive(Debug, Clone)]
pub struct Gallery<P> {
    entries: Vec<Entry<P>>,
    selection: Selection,
    next_id: u64,
}

impl<P> Default for Gallery<P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            selection: Selection::new(),
            next_id: 0,
        }
    }
}

impl<P> Gallery<P> {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in display order
    #[cfg(test)]
    pub fn entries(&self) -> &[Entry<P>] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&Entry<P>> {
        self.entries.get(index)
    }

    /// Current position of `id` in display order
    pub fn position(&self, id: ImageId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.position(id).is_some()
    }

    /// Append a freshly uploaded image. New images start unselected.
    pub fn push(&mut self, payload: P) -> ImageId {
        let id = ImageId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, payload });
        id
    }

    /// Transpose the entries at positions `a` and `b`.
    ///
    /// Swapping a position with itself is a no-op. Selection is keyed
    /// by id, so it is unaffected. A rejected swap is reported to the
    /// caller, which decides how to log it.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.entries.len();
        for index in [a, b] {
            if index >= len {
                return Err(GalleryError::IndexOutOfBounds { index, len });
            }
        }

        if a != b {
            self.entries.swap(a, b);
            debug!("Swapped positions {} and {}", a, b);
        }
        Ok(())
    }

    /// Select `id` if it is unselected, deselect it otherwise.
    pub fn toggle(&mut self, id: ImageId) -> Result<Toggle> {
        if !self.contains(id) {
            return Err(GalleryError::UnknownImage(id));
        }

        if self.selection.remove(id) {
            Ok(Toggle::Deselected)
        } else {
            self.selection.insert(id);
            Ok(Toggle::Selected(self.selection.len()))
        }
    }

    /// Toggle the image currently displayed at `index`
    pub fn toggle_at(&mut self, index: usize) -> Result<Toggle> {
        let id = self
            .entries
            .get(index)
            .map(|entry| entry.id)
            .ok_or(GalleryError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            })?;
        self.toggle(id)
    }

    #[cfg(test)]
    pub fn is_selected(&self, id: ImageId) -> bool {
        self.selection.contains(id)
    }

    /// 1-based selection number of `id`, if selected
    pub fn selection_rank(&self, id: ImageId) -> Option<usize> {
        self.selection.rank(id)
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    #[cfg(test)]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Remove every selected entry and clear the selection.
    ///
    /// Unselected entries keep their relative order. Returns the removed
    /// entries in their former display order.
    pub fn delete_selected(&mut self) -> Vec<Entry<P>> {
        if self.selection.is_empty() {
            return Vec::new();
        }

        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| self.selection.contains(entry.id));

        self.entries = kept;
        self.selection.clear();
        removed
    }

    /// Drop every entry and the selection.
    ///
    /// Ids are never reused, so a stale id from before the clear can
    /// not alias a new upload.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.selection.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_of(payloads: &[&'static str]) -> Gallery<&'static str> {
        let mut gallery = Gallery::new();
        for payload in payloads {
            gallery.push(*payload);
        }
        gallery
    }

    fn order(gallery: &Gallery<&'static str>) -> Vec<&'static str> {
        gallery.entries().iter().map(|entry| entry.payload).collect()
    }

    #[test]
    fn test_push_counts_every_upload() {
        let gallery = gallery_of(&["a", "b", "c", "d", "e"]);
        assert_eq!(gallery.len(), 5);
        assert_eq!(gallery.selected_count(), 0);
    }

    #[test]
    fn test_upload_select_reorder_delete_scenario() {
        let mut gallery = gallery_of(&["A", "B", "C"]);
        assert_eq!(order(&gallery), vec!["A", "B", "C"]);

        let b = gallery.get(1).unwrap().id;
        assert_eq!(gallery.toggle(b).unwrap(), Toggle::Selected(1));
        assert_eq!(gallery.selection_rank(b), Some(1));

        gallery.swap(0, 2).unwrap();
        assert_eq!(order(&gallery), vec!["C", "B", "A"]);
        assert!(gallery.is_selected(b));

        let removed = gallery.delete_selected();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].payload, "B");
        assert_eq!(order(&gallery), vec!["C", "A"]);
        assert_eq!(gallery.selected_count(), 0);
    }

    #[test]
    fn test_double_toggle_restores_selection() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.toggle_at(2).unwrap();
        let before = gallery.selection().clone();

        gallery.toggle_at(0).unwrap();
        gallery.toggle_at(0).unwrap();

        assert_eq!(gallery.selection(), &before);
    }

    #[test]
    fn test_delete_removes_all_selected_and_keeps_order() {
        let mut gallery = gallery_of(&["a", "b", "c", "d", "e"]);
        gallery.toggle_at(3).unwrap();
        gallery.toggle_at(0).unwrap();
        let selected: Vec<ImageId> = gallery.selection().iter().collect();

        gallery.delete_selected();

        assert_eq!(order(&gallery), vec!["b", "c", "e"]);
        assert!(gallery.selection().is_empty());
        for id in selected {
            assert!(!gallery.contains(id));
        }
    }

    #[test]
    fn test_delete_with_empty_selection_is_noop() {
        let mut gallery = gallery_of(&["a", "b"]);
        assert!(gallery.delete_selected().is_empty());
        assert_eq!(order(&gallery), vec!["a", "b"]);
    }

    #[test]
    fn test_swap_is_self_inverse() {
        let mut gallery = gallery_of(&["a", "b", "c", "d"]);
        let original = order(&gallery);

        gallery.swap(1, 3).unwrap();
        assert_eq!(order(&gallery), vec!["a", "d", "c", "b"]);
        gallery.swap(1, 3).unwrap();

        assert_eq!(order(&gallery), original);
    }

    #[test]
    fn test_swap_same_index_is_noop() {
        let mut gallery = gallery_of(&["a", "b"]);
        gallery.swap(1, 1).unwrap();
        assert_eq!(order(&gallery), vec!["a", "b"]);
    }

    #[test]
    fn test_swap_out_of_bounds_leaves_gallery_untouched() {
        let mut gallery = gallery_of(&["a", "b"]);
        let err = gallery.swap(0, 2).unwrap_err();

        assert_eq!(err, GalleryError::IndexOutOfBounds { index: 2, len: 2 });
        assert_eq!(order(&gallery), vec!["a", "b"]);
    }

    #[test]
    fn test_toggle_unknown_image_is_rejected() {
        let mut gallery = gallery_of(&["a"]);
        let id = gallery.get(0).unwrap().id;
        gallery.toggle(id).unwrap();
        gallery.delete_selected();

        assert_eq!(gallery.toggle(id), Err(GalleryError::UnknownImage(id)));
        assert!(gallery.toggle_at(0).is_err());
        assert!(gallery.selection().is_empty());
    }

    #[test]
    fn test_duplicate_payloads_are_distinct_entries() {
        let mut gallery = gallery_of(&["same", "same"]);
        let first = gallery.get(0).unwrap().id;
        let second = gallery.get(1).unwrap().id;
        assert_ne!(first, second);

        gallery.toggle(second).unwrap();
        assert!(!gallery.is_selected(first));

        gallery.delete_selected();
        assert_eq!(gallery.len(), 1);
        assert_eq!(gallery.get(0).unwrap().id, first);
    }

    #[test]
    fn test_selection_rank_ignores_gallery_order() {
        let mut gallery = gallery_of(&["a", "b", "c"]);
        gallery.toggle_at(2).unwrap();
        gallery.toggle_at(0).unwrap();
        let c = gallery.get(2).unwrap().id;
        let a = gallery.get(0).unwrap().id;

        gallery.swap(0, 2).unwrap();

        assert_eq!(gallery.selection_rank(c), Some(1));
        assert_eq!(gallery.selection_rank(a), Some(2));
    }

    #[test]
    fn test_ids_are_not_reused_after_clear() {
        let mut gallery = gallery_of(&["a"]);
        let old = gallery.get(0).unwrap().id;
        gallery.clear();
        let new = gallery.push("b");

        assert_ne!(old, new);
        assert!(!gallery.is_empty());
        assert!(!gallery.contains(old));
    }
}
