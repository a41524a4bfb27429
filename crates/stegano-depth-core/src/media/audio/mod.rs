pub mod lsb_codec;

pub use lsb_codec::{narrow, widen, LsbCodec};
