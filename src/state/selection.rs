/// Ordered selection set
///
/// Keeps ids in the order they were selected so the view can number
/// selected tiles 1..N regardless of where they sit in the grid.

use super::data::ImageId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<ImageId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ImageId) -> bool {
        self.ids.contains(&id)
    }

    /// 1-based position of `id` in selection order
    pub fn rank(&self, id: ImageId) -> Option<usize> {
        self.ids.iter().position(|&s| s == id).map(|p| p + 1)
    }

    /// Add `id` at the end. Returns false if it was already selected.
    pub fn insert(&mut self, id: ImageId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id`, shifting later ranks down. Returns false if absent.
    pub fn remove(&mut self, id: ImageId) -> bool {
        match self.ids.iter().position(|&s| s == id) {
            Some(pos) => {
                self.ids.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Selected ids in selection order
    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.ids.iter().copied()
    }
}
