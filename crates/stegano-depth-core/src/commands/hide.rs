use std::path::{Path, PathBuf};

use crate::media::payload::PayloadPipeline;
use crate::{CodecOptions, SteganoError};

pub fn hide(
    media: &Path,
    write_to_file: &Path,
    data_file: Option<PathBuf>,
    message: Option<String>,
    pipeline: PayloadPipeline,
    options: CodecOptions,
) -> Result<(), SteganoError> {
    crate::api::hide::prepare()
        .with_options(options)
        .with_pipeline(pipeline)
        .with_media(media)
        .with_output(write_to_file)
        .use_file(data_file)
        .use_message(message)
        .execute()
}
