// src/lib.rs
//! # analyze-rs
//!
//! A small Rust library for the ANALYZE 7.5 image header format (`.hdr`) and for
//! reversing the byte order of 16-bit and 32-bit voxel data.
//!
//! ## Features
//!
//! - 📐 **Byte-Exact Layout**: Every field of the 348-byte header is written at its literal offset
//! - 🔁 **Round-Trip**: Headers parse back to exactly the record that was serialized
//! - 🧭 **Endian Aware**: Native, little or big endian output, plus byte-order detection on read
//! - 🔀 **Byte Swapping**: In-place or copying swaps for 2-byte and 4-byte elements
//! - 🎯 **Type Safe**: Closed datatype and orientation enums, explicit errors instead of sentinels
//!
//! ## Quick Start
//!
//! ### Writing a Header
//!
//! ```rust,no_run
//! use analyze_rs::*;
//!
//! fn main() -> Result<()> {
//!     let header = HeaderRecord::build(256, 256, 30, 1, "FLOAT", 4095, 0)?;
//!
//!     let mut file = std::fs::File::create("volume.hdr")?;
//!     header.write_to(&mut file)?;
//!     Ok(())
//! }
//! ```
//!
//! ### Reading a Header of Unknown Byte Order
//!
//! ```rust,no_run
//! use analyze_rs::*;
//!
//! fn main() -> Result<()> {
//!     let bytes = std::fs::read("volume.hdr")?;
//!     let (header, endianness) = HeaderRecord::from_bytes_detect(&bytes)?;
//!
//!     println!("{:?} endian, extent {:?}", endianness, header.dime.extent());
//!     Ok(())
//! }
//! ```
//!
//! ### Swapping Voxel Data
//!
//! ```rust
//! use analyze_rs::swap::{swap_in_place, swap_to_vec};
//!
//! let mut voxels = vec![0x01, 0x02, 0x03, 0x04];
//! let copy = swap_to_vec(&voxels, 2, 2).unwrap();
//! assert_eq!(copy, vec![0x02, 0x01, 0x04, 0x03]);
//!
//! swap_in_place(&mut voxels, 4, 1).unwrap();
//! assert_eq!(voxels, vec![0x04, 0x03, 0x02, 0x01]);
//! ```

// Modules
pub mod error;
pub mod types;
pub mod header;
pub mod swap;

mod utils;

// Re-export commonly used types at the crate root for convenience
pub use error::{AnalyzeError, Result};

// Type exports
pub use types::{
    DataType,
    ElementWidth,
    Endianness,
    Orientation,
};

// Header exports
pub use header::{
    DataHistory,
    HeaderBuilder,
    HeaderKey,
    HeaderRecord,
    ImageDimension,
};

// Prelude module for glob imports
pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use analyze_rs::prelude::*;
    //! ```

    pub use crate::error::{AnalyzeError, Result};
    pub use crate::types::{DataType, Endianness, Orientation};
    pub use crate::header::{HeaderBuilder, HeaderRecord};
    pub use crate::swap::{swap_in_place, swap_to_vec};
}

/// Size in bytes of an ANALYZE 7.5 header
pub const HEADER_SIZE: usize = HeaderRecord::SIZE;

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");
