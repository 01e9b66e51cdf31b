// src/extraction/text_detection.rs

use content_inspector::ContentType;
use std::str;

/// Checks if a byte buffer is likely text.
///
/// `content_inspector` makes the first call; buffers it labels UTF-8 must
/// also decode as UTF-8. A truncated multi-byte sequence at the very end of
/// the buffer is tolerated, since callers pass file prefixes.
///
/// # Examples
/// ```
/// use dirsort::extraction::is_likely_text_from_buffer;
///
/// assert!(is_likely_text_from_buffer(b"Quarterly budget, draft 2."));
/// assert!(!is_likely_text_from_buffer(b"PK\x03\x04\0\0zip"));
/// assert!(!is_likely_text_from_buffer(&[0x48, 0x65, 0x80, 0x6f]));
/// ```
pub fn is_likely_text_from_buffer(buffer: &[u8]) -> bool {
    match content_inspector::inspect(buffer) {
        ContentType::UTF_8_BOM => true,
        ContentType::UTF_8 => match str::from_utf8(buffer) {
            Ok(_) => true,
            // error_len() == None means the input ended mid-character.
            Err(e) => e.error_len().is_none() && e.valid_up_to() + 4 > buffer.len(),
        },
        _ => false,
    }
}
