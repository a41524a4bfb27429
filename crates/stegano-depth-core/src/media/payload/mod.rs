//! Optional stages a payload goes through before it is framed and hidden.
//!
//! Sealing runs compression, encryption and erasure coding in this order, opening reverses it.
//! The codec treats the result as opaque bytes.

pub mod compression;
pub mod erasure;

use log::debug;
use stegano_depth_vault::{decrypt_data, encrypt_data};

use crate::api::shared::Password;
use crate::error::SteganoError;
use crate::result::Result;

pub use compression::{compress, decompress};
pub use erasure::{rs_decode, rs_encode, DATA_SHARDS};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PayloadPipeline {
    pub compress: bool,
    pub password: Password,
    /// erasure coding with this many parity shards, `None` turns it off
    pub parity_shards: Option<usize>,
}

impl PayloadPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    pub fn with_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    pub fn with_parity_shards(mut self, parity_shards: Option<usize>) -> Self {
        self.parity_shards = parity_shards;
        self
    }

    pub fn seal(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut data = data.to_vec();
        if self.compress {
            data = compress(&data)?;
            debug!("compressed payload to {} bytes", data.len());
        }
        if let Some(password) = self.password.as_deref() {
            data = encrypt_data(password, &data).map_err(SteganoError::EncryptionError)?;
            debug!("encrypted payload to {} bytes", data.len());
        }
        if let Some(parity_shards) = self.parity_shards {
            data = rs_encode(&data, parity_shards)?;
            debug!("erasure coded payload to {} bytes", data.len());
        }

        Ok(data)
    }

    pub fn open(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut data = data.to_vec();
        if let Some(parity_shards) = self.parity_shards {
            data = rs_decode(&data, DATA_SHARDS, parity_shards)?;
        }
        if let Some(password) = self.password.as_deref() {
            data = decrypt_data(password, &data).map_err(SteganoError::DecryptionError)?;
        }
        if self.compress {
            data = decompress(&data)?;
        }

        Ok(data)
    }
}
