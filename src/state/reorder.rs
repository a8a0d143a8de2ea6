/// Drag-to-reorder state
///
/// Pointer press on a tile starts a drag from that index, release on a
/// tile finishes it. Press and release on the same tile is a click.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released on a different tile: swap the two positions
    Swap { from: usize, to: usize },
    /// Released on the tile the drag started from
    Click(usize),
    /// Released with no drag in progress
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Index the pointer was pressed on
    source: Option<usize>,
    /// Tile currently under the pointer while dragging
    hover: Option<usize>,
}

impl DragState {
    pub fn start(&mut self, index: usize) {
        self.source = Some(index);
        self.hover = Some(index);
    }

    pub fn hover(&mut self, index: usize) {
        if self.source.is_some() {
            self.hover = Some(index);
        }
    }

    pub fn finish(&mut self, target: usize) -> DropOutcome {
        self.hover = None;
        match self.source.take() {
            Some(source) if source == target => DropOutcome::Click(target),
            Some(source) => DropOutcome::Swap {
                from: source,
                to: target,
            },
            None => DropOutcome::Ignored,
        }
    }

    pub fn cancel(&mut self) {
        self.source = None;
        self.hover = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }

    /// The tile that would receive the drop, if it differs from the source
    pub fn drop_target(&self) -> Option<usize> {
        match (self.source, self.hover) {
            (Some(source), Some(hover)) if source != hover => Some(hover),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_on_other_tile_swaps() {
        let mut drag = DragState::default();
        drag.start(0);
        assert_eq!(drag.finish(2), DropOutcome::Swap { from: 0, to: 2 });
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_release_on_same_tile_is_click() {
        let mut drag = DragState::default();
        drag.start(3);
        assert_eq!(drag.finish(3), DropOutcome::Click(3));
    }

    #[test]
    fn test_release_without_press_is_ignored() {
        let mut drag = DragState::default();
        assert_eq!(drag.finish(1), DropOutcome::Ignored);

        drag.start(1);
        drag.cancel();
        assert_eq!(drag.finish(1), DropOutcome::Ignored);
    }

    #[test]
    fn test_drop_target_tracks_hover_only_while_dragging() {
        let mut drag = DragState::default();
        drag.hover(4);
        assert_eq!(drag.drop_target(), None);

        drag.start(1);
        assert_eq!(drag.drop_target(), None);
        drag.hover(4);
        assert_eq!(drag.drop_target(), Some(4));

        drag.finish(4);
        assert_eq!(drag.drop_target(), None);
    }
}
