/// Shared data structures for the gallery state
///
/// These structs are independent of the UI toolkit: the gallery is
/// generic over its payload so the same state machine backs the iced
/// view and the unit tests.

use std::fmt;

/// Opaque identity of one upload
///
/// Assigned by the gallery when an entry is appended. Two uploads of
/// the same file get two different ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One image in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct Entry<P> {
    /// Identity used by selection and deletion
    pub id: ImageId,
    /// The displayable payload
    pub payload: P,
}

/// Result of toggling an image's selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Now selected, with its 1-based rank in selection order
    Selected(usize),
    Deselected,
}
