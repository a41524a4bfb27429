use std::path::Path;

use crate::media::Media;
use crate::{CodecOptions, SteganoError};

/// payload bytes `media` can take with `options`, before any compression or encryption
pub fn capacity(media: &Path, options: &CodecOptions) -> Result<usize, SteganoError> {
    Ok(Media::from_file(media)?.capacity(options))
}
