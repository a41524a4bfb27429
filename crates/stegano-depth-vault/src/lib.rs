//! # Payload Vault
//! Password based sealing of payloads before they are hidden in a carrier.
//!
//! The sealed layout is `salt(16) ‖ nonce(12) ‖ ciphertext+tag`.
//! Keys are derived with argon2id, data is sealed with ChaCha20Poly1305.

use argon2::{Argon2, ParamsBuilder};
use chacha20poly1305::aead::{Aead, AeadCore};
use chacha20poly1305::{ChaCha20Poly1305, KeyInit, Nonce};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroize;

pub mod error;

pub use crate::error::VaultError;

pub const SALT_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;
const KEY_LEN: usize = 32;
const TAG_LEN: usize = 16;

/// Bytes added on top of the plaintext by [`encrypt_data`]
pub const SEAL_OVERHEAD: usize = SALT_LEN + NONCE_LEN + TAG_LEN;

pub type Result<T> = std::result::Result<T, VaultError>;

/// encrypt data with password, argon2id for key derivation and ChaCha20Poly1305 for sealing
pub fn encrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    let mut key = derive_key(password.as_bytes(), &salt)?;

    let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);
    debug_assert_eq!(nonce.len(), NONCE_LEN);

    let encryptor = ChaCha20Poly1305::new(&key.into());
    let cipher_data = encryptor
        .encrypt(&nonce, data)
        .map_err(VaultError::EncryptionError)?;

    let mut sealed = Vec::with_capacity(SALT_LEN + NONCE_LEN + cipher_data.len());
    sealed.extend_from_slice(&salt);
    sealed.extend_from_slice(&nonce);
    sealed.extend_from_slice(&cipher_data);

    key.zeroize();
    salt.zeroize();

    Ok(sealed)
}

/// decrypt data with password, the inverse of [`encrypt_data`]
pub fn decrypt_data(password: &str, data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < SALT_LEN + NONCE_LEN + TAG_LEN {
        return Err(VaultError::TooShort(data.len()));
    }
    let (salt, rest) = data.split_at(SALT_LEN);
    let (nonce, cipher_data) = rest.split_at(NONCE_LEN);
    let mut key = derive_key(password.as_bytes(), salt)?;

    let decryptor = ChaCha20Poly1305::new(&key.into());
    let plain = decryptor
        .decrypt(Nonce::from_slice(nonce), cipher_data)
        .map_err(VaultError::DecryptionError);
    key.zeroize();

    plain
}

fn default_secure_argon<'key>() -> Result<Argon2<'key>> {
    let params = ParamsBuilder::default()
        .t_cost(4)
        .output_len(KEY_LEN)
        .build()
        .map_err(VaultError::KeyDerivationParamError)?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

fn derive_key(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    let mut output_key_material = [0u8; KEY_LEN];
    default_secure_argon()?
        .hash_password_into(password, salt, &mut output_key_material)
        .map_err(VaultError::KeyDerivationError)?;

    Ok(output_key_material)
}
