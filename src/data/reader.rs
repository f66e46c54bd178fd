//! Command file loading
//!
//! Race logs were historically saved in a Windows code page. Single-byte code
//! pages accept any input, so strict UTF-8 is tried first and the configured
//! encoding is used only when the bytes are not valid UTF-8.

use encoding_rs::Encoding;
use std::fs;
use std::io;
use std::path::Path;

/// Encoding of the original command files
pub const DEFAULT_ENCODING: &str = "windows-1250";

/// Decode raw bytes as UTF-8, falling back to the given encoding label
pub fn decode_bytes(bytes: Vec<u8>, encoding_label: &str) -> io::Result<String> {
    let bytes = match String::from_utf8(bytes) {
        Ok(text) => return Ok(text),
        Err(e) => e.into_bytes(),
    };

    let encoding = Encoding::for_label(encoding_label.as_bytes()).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Input is not UTF-8 and encoding {:?} is unknown", encoding_label),
        )
    })?;
    tracing::debug!("Input is not valid UTF-8, decoding as {}", encoding.name());

    let (decoded, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Input is not valid {}", encoding.name()),
        ));
    }
    Ok(decoded.into_owned())
}

/// Read a command file and split it into lines
pub fn read_command_file(path: &Path, encoding_label: &str) -> io::Result<Vec<String>> {
    let bytes = fs::read(path)?;
    let content = decode_bytes(bytes, encoding_label)?;
    Ok(content.lines().map(str::to_string).collect())
}
