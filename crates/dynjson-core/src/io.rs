//! File-backed documents.
//!
//! Reading creates the file when it does not exist and treats empty content as an
//! empty container. Saving creates missing parent directories and truncates any
//! existing file.

use crate::decoder::{decode, decode_array};
use crate::encoder::{encode_pretty, encode_to_vec};
use crate::error::Result;
use crate::types::Value;
use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::Path;

/// Read a document, creating the file if absent. Empty files read as `{}`.
pub fn read_object_file(path: impl AsRef<Path>) -> Result<Value> {
    decode(read_or_create(path.as_ref())?)
}

/// Read an array document, creating the file if absent. Empty files read as `[]`.
pub fn read_array_file(path: impl AsRef<Path>) -> Result<Value> {
    decode_array(read_or_create(path.as_ref())?)
}

/// Write `value` to `path`, compact or indented.
pub fn save_to_file(path: impl AsRef<Path>, value: &Value, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let bytes = if pretty {
        encode_pretty(value)?.into_bytes()
    } else {
        encode_to_vec(value)?
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}

fn read_or_create(path: &Path) -> Result<Vec<u8>> {
    // append keeps existing content intact while allowing create
    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(buf)
}
