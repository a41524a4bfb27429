//! The content that is hidden: a text message or a file with its name.
//!
//! A file travels as `/-<file name>-/\n` followed by its bytes, a text message as its plain bytes.
//! The header is added before the payload pipeline runs, so it gets compressed and encrypted too.

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::SteganoError;
use crate::result::Result;

const NAME_OPEN: &[u8] = b"/-";
const NAME_CLOSE: &[u8] = b"-/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    /// the bare name of a hidden file, `None` for a text message
    pub file_name: Option<String>,
    pub data: Vec<u8>,
}

impl Message {
    pub fn from_text(text: &str) -> Self {
        Self {
            file_name: None,
            data: text.as_bytes().to_vec(),
        }
    }

    /// Reads `file`, only its file name is kept, not the directories around it.
    pub fn from_file<P: AsRef<Path> + ?Sized>(file: &P) -> Result<Self> {
        let data = fs::read(file).map_err(|source| SteganoError::ReadError { source })?;

        Self::from_file_data(file, data)
    }

    pub fn from_file_data<P: AsRef<Path> + ?Sized>(file: &P, data: Vec<u8>) -> Result<Self> {
        let file = file.as_ref();
        let name = file
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| SteganoError::InvalidFileName(file.to_string_lossy().into_owned()))?;
        if !is_bare_file_name(name) {
            return Err(SteganoError::InvalidFileName(name.to_string()));
        }

        Ok(Self {
            file_name: Some(name.to_string()),
            data,
        })
    }

    pub fn to_raw_data(&self) -> Vec<u8> {
        match &self.file_name {
            Some(name) => {
                let mut raw = Vec::with_capacity(name.len() + 5 + self.data.len());
                raw.extend_from_slice(NAME_OPEN);
                raw.extend_from_slice(name.as_bytes());
                raw.extend_from_slice(NAME_CLOSE);
                raw.push(b'\n');
                raw.extend_from_slice(&self.data);
                raw
            }
            None => self.data.clone(),
        }
    }

    /// Splits off the file name header, anything without a valid header is a text message.
    pub fn from_raw_data(raw: Vec<u8>) -> Self {
        match parse_header(&raw) {
            Some((name, header_len)) => {
                debug!("unveiled file {name:?}");
                Self {
                    file_name: Some(name),
                    data: raw[header_len..].to_vec(),
                }
            }
            None => Self {
                file_name: None,
                data: raw,
            },
        }
    }
}

/// the file name and the length of the header including the newline
fn parse_header(raw: &[u8]) -> Option<(String, usize)> {
    if !raw.starts_with(NAME_OPEN) {
        return None;
    }
    let newline = raw.iter().position(|b| *b == b'\n')?;
    let line = &raw[..newline];
    if line.len() <= NAME_OPEN.len() + NAME_CLOSE.len() || !line.ends_with(NAME_CLOSE) {
        return None;
    }

    let name = std::str::from_utf8(&line[NAME_OPEN.len()..line.len() - NAME_CLOSE.len()]).ok()?;
    is_bare_file_name(name).then(|| (name.to_string(), newline + 1))
}

/// no directories, nothing that escapes the target directory
fn is_bare_file_name(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\n', '\0'])
}
