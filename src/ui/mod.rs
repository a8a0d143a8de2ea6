/// View layer
///
/// Pure functions from gallery state to iced elements:
/// - Grid placement and rendering (grid.rs)
/// - Image and upload tiles (tile.rs)
/// - Header, toolbar and failure chips (header.rs)

pub mod grid;
pub mod header;
pub mod tile;
