/// Upload pipeline
///
/// This module handles:
/// - Decoding chosen files into thumbnails on the blocking pool
/// - Falling back to embedded JPEG previews for RAW-style containers
/// - Collecting files from a folder for bulk import
/// - Fencing late results after the gallery is cleared

pub mod decode;
pub mod embedded;
pub mod folder;
pub mod session;

pub use decode::{decode_file, Payload};
pub use folder::scan_folder;
pub use session::{Session, SessionId};
