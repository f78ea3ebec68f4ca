// src/header/mod.rs
//! ANALYZE 7.5 header codec
//!
//! The 348-byte header is made of three packed blocks:
//!
//! - [`HeaderKey`] (40 bytes) - record size, regularity flag
//! - [`ImageDimension`] (108 bytes) - dimensions, datatype, spacing, calibration
//! - [`DataHistory`] (200 bytes) - description, orientation, provenance
//!
//! Every field is written at its literal byte offset; nothing relies on the
//! in-memory layout of the Rust structs.

mod builder;
mod dimension;
mod history;
mod key;
mod record;

pub use builder::HeaderBuilder;
pub use dimension::ImageDimension;
pub use history::DataHistory;
pub use key::HeaderKey;
pub use record::HeaderRecord;

/// Narrow a driver-side dimension to the header's 16-bit field.
///
/// Out-of-range values wrap around in two's complement, as the original `make_hdr`
/// tool did, and a warning is logged.
///
/// ```
/// use analyze_rs::header::narrow_dim;
///
/// assert_eq!(narrow_dim("width", 256), 256);
/// assert_eq!(narrow_dim("width", 40000), -25536);
/// ```
pub fn narrow_dim(name: &str, value: i64) -> i16 {
    let narrowed = value as i16;
    if i64::from(narrowed) != value {
        log::warn!(
            "{} = {} does not fit in 16 bits, stored as {}",
            name,
            value,
            narrowed
        );
    }
    narrowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrow_dim_in_range() {
        assert_eq!(narrow_dim("depth", 0), 0);
        assert_eq!(narrow_dim("depth", 32767), 32767);
        assert_eq!(narrow_dim("depth", -32768), -32768);
    }

    #[test]
    fn test_narrow_dim_wraps() {
        assert_eq!(narrow_dim("width", 32768), -32768);
        assert_eq!(narrow_dim("width", 65536), 0);
        assert_eq!(narrow_dim("width", 65537), 1);
        assert_eq!(narrow_dim("width", -32769), 32767);
    }

    #[test]
    fn test_block_sizes_sum() {
        assert_eq!(
            HeaderKey::SIZE + ImageDimension::SIZE + DataHistory::SIZE,
            HeaderRecord::SIZE
        );
    }
}
