/// Gallery grid layout
///
/// The first image spans a `hero_span × hero_span` block, every other
/// image and the trailing upload slot take one cell. Placement walks
/// row-major with a cursor that never moves backwards.

use iced::widget::{Column, Row};
use iced::{Element, Length};

/// What occupies a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Image at this index of the gallery
    Image(usize),
    /// The upload control, always last
    Upload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub slot: Slot,
    pub row: usize,
    pub col: usize,
    /// Cells covered in both directions
    pub span: usize,
}

/// Place `image_count` images plus the upload slot on a `columns`-wide grid
pub fn layout(image_count: usize, columns: usize, hero_span: usize) -> Vec<Placement> {
    let columns = columns.max(1);
    let hero_span = hero_span.clamp(1, columns);

    let mut occupied: Vec<Vec<bool>> = Vec::new();
    let mut cursor = (0, 0);
    let mut placements = Vec::with_capacity(image_count + 1);

    let slots = (0..image_count).map(Slot::Image).chain(std::iter::once(Slot::Upload));
    for slot in slots {
        let span = if slot == Slot::Image(0) { hero_span } else { 1 };
        let (row, col) = next_free(&mut occupied, cursor, span, columns);

        for r in row..row + span {
            for c in col..col + span {
                occupied[r][c] = true;
            }
        }

        placements.push(Placement { slot, row, col, span });
        cursor = (row, col + span);
    }

    placements
}

/// First position at or after `cursor` where a `span` block fits
fn next_free(
    occupied: &mut Vec<Vec<bool>>,
    cursor: (usize, usize),
    span: usize,
    columns: usize,
) -> (usize, usize) {
    let (mut row, mut col) = cursor;
    loop {
        if col + span > columns {
            row += 1;
            col = 0;
            continue;
        }

        while occupied.len() < row + span {
            occupied.push(vec![false; columns]);
        }

        let fits = (row..row + span).all(|r| (col..col + span).all(|c| !occupied[r][c]));
        if fits {
            return (row, col);
        }
        col += 1;
    }
}

/// Render placements with iced rows and columns.
///
/// Cells beside the hero are stacked in a column next to it, the rest
/// of the grid follows as plain rows.
pub fn view<'a, Message: 'a>(
    placements: &[Placement],
    tile_size: f32,
    spacing: f32,
    mut cell: impl FnMut(Slot, f32) -> Element<'a, Message>,
) -> Element<'a, Message> {
    let hero = placements.first().filter(|p| p.span > 1).copied();
    let band_rows = hero.map_or(0, |h| h.span);
    let last_row = placements.iter().map(|p| p.row + p.span).max().unwrap_or(0);

    let mut grid = Column::new().spacing(spacing);

    if let Some(hero) = hero {
        let hero_size = tile_size * hero.span as f32 + spacing * (hero.span - 1) as f32;
        let mut beside = Column::new().spacing(spacing);
        for r in 0..band_rows {
            beside = beside.push(row_of(placements, r, tile_size, spacing, &mut cell));
        }
        grid = grid.push(
            Row::new()
                .spacing(spacing)
                .push(cell(hero.slot, hero_size))
                .push(beside),
        );
    }

    for r in band_rows..last_row {
        grid = grid.push(row_of(placements, r, tile_size, spacing, &mut cell));
    }

    grid.width(Length::Shrink).into()
}

/// Single-cell placements on row `r`, left to right
fn row_of<'a, Message: 'a>(
    placements: &[Placement],
    r: usize,
    tile_size: f32,
    spacing: f32,
    cell: &mut impl FnMut(Slot, f32) -> Element<'a, Message>,
) -> Row<'a, Message> {
    let children = placements
        .iter()
        .filter(|p| p.row == r && p.span == 1)
        .map(|p| cell(p.slot, tile_size))
        .collect::<Vec<_>>();
    Row::with_children(children).spacing(spacing)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(slot: Slot, row: usize, col: usize, span: usize) -> Placement {
        Placement { slot, row, col, span }
    }

    #[test]
    fn test_empty_gallery_has_only_upload_slot() {
        assert_eq!(layout(0, 5, 2), vec![at(Slot::Upload, 0, 0, 1)]);
    }

    #[test]
    fn test_hero_then_cells_beside_it() {
        let placements = layout(7, 5, 2);

        assert_eq!(placements[0], at(Slot::Image(0), 0, 0, 2));
        assert_eq!(placements[1], at(Slot::Image(1), 0, 2, 1));
        assert_eq!(placements[3], at(Slot::Image(3), 0, 4, 1));
        assert_eq!(placements[4], at(Slot::Image(4), 1, 2, 1));
        assert_eq!(placements[6], at(Slot::Image(6), 1, 4, 1));
        assert_eq!(placements[7], at(Slot::Upload, 2, 0, 1));
    }

    #[test]
    fn test_upload_slot_is_always_last() {
        for count in 0..12 {
            let placements = layout(count, 4, 2);
            assert_eq!(placements.len(), count + 1);
            assert_eq!(placements.last().unwrap().slot, Slot::Upload);
        }
    }

    #[test]
    fn test_placements_never_overlap() {
        for columns in 1..7 {
            for count in 0..15 {
                let placements = layout(count, columns, 2);
                let mut cells = std::collections::HashSet::new();
                for p in &placements {
                    assert!(p.col + p.span <= columns.max(1));
                    for r in p.row..p.row + p.span {
                        for c in p.col..p.col + p.span {
                            assert!(cells.insert((r, c)), "cell ({r}, {c}) used twice");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_hero_span_is_clamped_to_columns() {
        let placements = layout(3, 1, 2);
        assert_eq!(placements[0], at(Slot::Image(0), 0, 0, 1));
        assert_eq!(placements[1], at(Slot::Image(1), 1, 0, 1));
        assert_eq!(placements[3], at(Slot::Upload, 3, 0, 1));
    }

    #[test]
    fn test_full_width_hero_pushes_cells_below() {
        let placements = layout(2, 2, 2);
        assert_eq!(placements[0], at(Slot::Image(0), 0, 0, 2));
        assert_eq!(placements[1], at(Slot::Image(1), 2, 0, 1));
        assert_eq!(placements[2], at(Slot::Upload, 2, 1, 1));
    }
}
