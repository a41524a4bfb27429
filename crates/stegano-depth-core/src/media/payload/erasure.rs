//! Reed-Solomon erasure coding of a whole payload.
//!
//! The payload is the single data shard, the parity shards follow. Packed layout:
//! `cols (u32 BE) ‖ rows (u32 BE) ‖ shard 0 ‖ … ‖ shard rows-1`, every shard is `cols` bytes.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use log::{debug, warn};
use reed_solomon_erasure::galois_8::ReedSolomon;

use crate::error::SteganoError;
use crate::result::Result;

/// payload shards written by [`rs_encode`]
pub const DATA_SHARDS: usize = 1;

const HEADER_LEN: usize = 8;

fn reed_solomon(data_shards: usize, parity_shards: usize) -> Result<ReedSolomon> {
    if parity_shards == 0 {
        return Err(SteganoError::InvalidParityShards(parity_shards));
    }

    ReedSolomon::new(data_shards, parity_shards)
        .map_err(|e| SteganoError::ReconstructionFailure(format!("{e:?}")))
}

pub fn rs_encode(data: &[u8], parity_shards: usize) -> Result<Vec<u8>> {
    let rs = reed_solomon(DATA_SHARDS, parity_shards)?;
    if data.is_empty() {
        return Err(SteganoError::EmptyPayload);
    }

    let mut shards = vec![data.to_vec()];
    shards.resize(DATA_SHARDS + parity_shards, vec![0; data.len()]);
    rs.encode(&mut shards)
        .map_err(|e| SteganoError::ReconstructionFailure(format!("{e:?}")))?;

    pack(&shards)
}

pub fn rs_decode(packed: &[u8], data_shards: usize, parity_shards: usize) -> Result<Vec<u8>> {
    let rs = reed_solomon(data_shards, parity_shards)?;
    let shards = unpack(packed)?;
    if shards.len() != data_shards + parity_shards {
        return Err(SteganoError::ReconstructionFailure(format!(
            "expected {} shards, found {}",
            data_shards + parity_shards,
            shards.len()
        )));
    }

    if verified(&rs, &shards) {
        return Ok(shards[..data_shards].concat());
    }
    warn!("erasure coded payload is damaged, trying to reconstruct it");

    // one unknown bad shard can only be told apart with at least 2 others to compare
    if parity_shards >= 2 {
        for erased in 0..shards.len() {
            let mut candidate: Vec<Option<Vec<u8>>> = shards.iter().cloned().map(Some).collect();
            candidate[erased] = None;
            if rs.reconstruct(&mut candidate).is_err() {
                continue;
            }
            let candidate: Vec<Vec<u8>> = candidate.into_iter().flatten().collect();
            if verified(&rs, &candidate) {
                debug!("reconstructed the payload by replacing shard {erased}");
                return Ok(candidate[..data_shards].concat());
            }
        }
    }

    Err(SteganoError::ReconstructionFailure(
        "shards are inconsistent and cannot be repaired".to_string(),
    ))
}

fn verified(rs: &ReedSolomon, shards: &[Vec<u8>]) -> bool {
    rs.verify(shards).unwrap_or(false)
}

fn pack(shards: &[Vec<u8>]) -> Result<Vec<u8>> {
    let too_large = |_| SteganoError::ReconstructionFailure("shards are too large".to_string());
    let cols = u32::try_from(shards[0].len()).map_err(too_large)?;
    let rows = u32::try_from(shards.len()).map_err(too_large)?;

    let mut packed = Vec::with_capacity(HEADER_LEN + shards.len() * shards[0].len());
    packed.write_u32::<BigEndian>(cols)?;
    packed.write_u32::<BigEndian>(rows)?;
    for shard in shards {
        packed.extend_from_slice(shard);
    }

    Ok(packed)
}

fn unpack(packed: &[u8]) -> Result<Vec<Vec<u8>>> {
    if packed.len() < HEADER_LEN {
        return Err(SteganoError::ReconstructionFailure(format!(
            "{} bytes are too few for the shard header",
            packed.len()
        )));
    }
    let mut header = &packed[..HEADER_LEN];
    let cols = header.read_u32::<BigEndian>()? as usize;
    let rows = header.read_u32::<BigEndian>()? as usize;

    let body = &packed[HEADER_LEN..];
    match cols.checked_mul(rows) {
        Some(size) if cols > 0 && size <= body.len() => {
            Ok(body[..size].chunks(cols).map(<[u8]>::to_vec).collect())
        }
        _ => Err(SteganoError::ReconstructionFailure(format!(
            "{rows} shards of {cols} bytes do not fit into {} bytes",
            body.len()
        ))),
    }
}
