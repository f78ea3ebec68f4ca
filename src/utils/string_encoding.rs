// src/utils/string_encoding.rs
use crate::error::{AnalyzeError, Result};

/// Pack text into a NUL-padded fixed-width header field.
///
/// The text may fill the field completely, in which case no terminator is stored.
pub fn encode_fixed<const N: usize>(field: &'static str, s: &str) -> Result<[u8; N]> {
    let bytes = s.as_bytes();
    if bytes.len() > N {
        return Err(AnalyzeError::FieldTooLong {
            field,
            capacity: N,
            length: bytes.len(),
        });
    }

    let mut out = [0u8; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Text of a fixed-width field up to the first NUL
pub fn decode_fixed(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).to_string()
}
