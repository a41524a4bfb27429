pub mod extraction;
pub mod lsb_codec;

pub use extraction::{
    extract_carrier, extract_carrier_concurrent, split_rows, worker_count, PixelGrid,
};
pub use lsb_codec::{carrier_to_image, LsbCodec};
