// src/metadata/gif.rs

use image::codecs::gif::GifDecoder;
use image::AnimationDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// Returns `true` if the file is a GIF with more than one frame.
///
/// Decodes at most two frames. Unreadable or non-GIF files are not animated.
pub fn is_animated_gif(path: &Path) -> bool {
    match File::open(path) {
        Ok(file) => has_second_frame(BufReader::new(file)),
        Err(e) => {
            log::debug!("Could not open '{}' to count frames: {}", path.display(), e);
            false
        }
    }
}

fn has_second_frame<R: BufRead + Seek>(reader: R) -> bool {
    match GifDecoder::new(reader) {
        Ok(decoder) => {
            decoder
                .into_frames()
                .take_while(Result::is_ok)
                .take(2)
                .count()
                > 1
        }
        Err(e) => {
            log::trace!("Not a decodable GIF: {}", e);
            false
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{animated, still_transparent};
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn test_detects_multiple_frames() {
        assert!(has_second_frame(Cursor::new(animated())));
    }

    #[test]
    fn test_still_transparent_gif_is_not_animated() {
        assert!(!has_second_frame(Cursor::new(still_transparent())));
    }

    #[test]
    fn test_other_formats_and_missing_files() -> anyhow::Result<()> {
        assert!(!has_second_frame(Cursor::new(
            b"\x89PNG\r\n\x1a\nNETSCAPE2.0".to_vec()
        )));
        assert!(!has_second_frame(Cursor::new(b"GIF89a".to_vec())));

        let temp = tempdir()?;
        let still = temp.path().join("still.gif");
        fs::write(&still, still_transparent())?;
        assert!(!is_animated_gif(&still));
        let moving = temp.path().join("moving.gif");
        fs::write(&moving, animated())?;
        assert!(is_animated_gif(&moving));
        assert!(!is_animated_gif(&temp.path().join("missing.gif")));
        Ok(())
    }
}
