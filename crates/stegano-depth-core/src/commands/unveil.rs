use std::path::Path;

use crate::media::payload::PayloadPipeline;
use crate::message::Message;
use crate::{CodecOptions, SteganoError};

/// Unveils the data and writes it to `output_file`, when given.
/// Without an output file a hidden file is restored under its own name in `output_dir`.
pub fn unveil(
    secret_media: &Path,
    output_file: Option<&Path>,
    output_dir: Option<&Path>,
    pipeline: PayloadPipeline,
    options: CodecOptions,
) -> Result<Message, SteganoError> {
    let mut api = crate::api::unveil::prepare()
        .with_options(options)
        .with_pipeline(pipeline)
        .with_secret_media(secret_media);

    if let Some(output_file) = output_file {
        api = api.into_file(output_file);
    }
    if let Some(output_dir) = output_dir {
        api = api.into_dir(output_dir);
    }

    api.execute()
}
