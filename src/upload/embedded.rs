/// Embedded JPEG extraction
///
/// Camera RAW files and some containers carry a full-size JPEG preview.
/// When the `image` crate can't decode a file directly we fall back to
/// the largest JPEG stream found inside it.
///
/// A stream's end is found by walking its marker segments, not by
/// searching for the first EOI: previews usually carry an EXIF thumbnail
/// (a complete JPEG of its own) inside their APP1 segment.

const JPEG_SOI: &[u8] = b"\xff\xd8\xff"; // Start Of Image + first marker byte

const MARKER_EOI: u8 = 0xd9;
const MARKER_SOS: u8 = 0xda;
const MARKER_TEM: u8 = 0x01;

/// Embedded streams smaller than this are usually EXIF thumbnails
const MIN_EMBEDDED_LEN: usize = 1024;

/// Scan `buffer` for JPEG streams and return the largest one
pub fn largest_embedded_jpeg(buffer: &[u8]) -> Option<&[u8]> {
    let mut largest: Option<&[u8]> = None;
    let mut pos = 0;

    while pos + JPEG_SOI.len() <= buffer.len() {
        if !buffer[pos..].starts_with(JPEG_SOI) {
            pos += 1;
            continue;
        }

        match stream_end(buffer, pos) {
            Some(end) => {
                let jpeg = &buffer[pos..end];
                if jpeg.len() >= MIN_EMBEDDED_LEN
                    && largest.map_or(true, |current| jpeg.len() > current.len())
                {
                    largest = Some(jpeg);
                }
                // Anything nested inside this stream is smaller than it
                pos = end;
            }
            // Not a well-formed stream; keep looking from the next byte
            None => pos += 1,
        }
    }

    largest
}

/// Offset just past the EOI of the stream whose SOI is at `start`
fn stream_end(buffer: &[u8], start: usize) -> Option<usize> {
    let mut pos = start + 2;

    loop {
        if *buffer.get(pos)? != 0xff {
            return None;
        }
        let marker = *buffer.get(pos + 1)?;

        match marker {
            // Fill byte before a marker
            0xff => pos += 1,
            MARKER_EOI => return Some(pos + 2),
            // Standalone markers carry no length
            MARKER_TEM | 0xd0..=0xd7 => pos += 2,
            _ => {
                let high = *buffer.get(pos + 2)?;
                let low = *buffer.get(pos + 3)?;
                let len = u16::from_be_bytes([high, low]) as usize;
                if len < 2 {
                    return None;
                }
                pos += 2 + len;

                if marker == MARKER_SOS {
                    pos = skip_entropy_data(buffer, pos)?;
                }
            }
        }
    }
}

/// Offset of the first real marker after a scan's entropy-coded data.
///
/// Inside the scan `FF 00` is a stuffed data byte and `FF D0..D7` are
/// restart markers; any other `FF xx` ends the scan.
fn skip_entropy_data(buffer: &[u8], mut pos: usize) -> Option<usize> {
    loop {
        let offset = buffer.get(pos..)?.iter().position(|&b| b == 0xff)?;
        pos += offset;

        match *buffer.get(pos + 1)? {
            0x00 | 0xd0..=0xd7 => pos += 2,
            _ => return Some(pos),
        }
    }
}
