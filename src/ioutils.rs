use std::path::Path;

use crate::error::{Error, Result};

/// Reads a file as UTF-8 text.
///
/// Returns `Ok(None)` when the bytes are not valid UTF-8, which is how binary
/// files are told apart from text.
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let bytes = std::fs::read(path.as_ref())?;
    Ok(String::from_utf8(bytes).ok())
}

/// Overwrites an existing file in place. Not atomic.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    std::fs::write(dest_path.as_ref(), content).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}
