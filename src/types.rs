// src/types.rs
use crate::error::{AnalyzeError, Result};

/// ANALYZE voxel data type, stored in the header as a single-bit flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i16)]
pub enum DataType {
    Unknown = 0,
    Binary = 1,
    UnsignedChar = 2,
    SignedShort = 4,
    SignedInt = 8,
    Float = 16,
    Complex = 32,
    Double = 64,
    Rgb = 128,
}

impl DataType {
    /// Code stored in place of a datatype when a name lookup fails
    pub const INVALID_CODE: i16 = -1;

    /// Every member of the closed set, in flag order
    pub const ALL: [DataType; 9] = [
        DataType::Unknown,
        DataType::Binary,
        DataType::UnsignedChar,
        DataType::SignedShort,
        DataType::SignedInt,
        DataType::Float,
        DataType::Complex,
        DataType::Double,
        DataType::Rgb,
    ];

    /// The bit flag written to the `datatype` header field
    pub fn code(&self) -> i16 {
        *self as i16
    }

    /// Bits per voxel, written to the `bitpix` header field
    pub fn bitpix(&self) -> i16 {
        match self {
            DataType::Unknown => 0,
            DataType::Binary => 1,
            DataType::UnsignedChar => 8,
            DataType::SignedShort => 16,
            DataType::SignedInt | DataType::Float => 32,
            DataType::Complex | DataType::Double => 64,
            DataType::Rgb => 24,
        }
    }

    /// Name used by `make_hdr`-style drivers
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Unknown => "UNKNOWN",
            DataType::Binary => "BINARY",
            DataType::UnsignedChar => "CHAR",
            DataType::SignedShort => "SHORT",
            DataType::SignedInt => "INT",
            DataType::Float => "FLOAT",
            DataType::Complex => "COMPLEX",
            DataType::Double => "DOUBLE",
            DataType::Rgb => "RGB",
        }
    }

    /// Case-insensitive exact lookup by name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|dt| dt.name().eq_ignore_ascii_case(name))
    }

    pub fn from_code(code: i16) -> Option<Self> {
        Self::ALL.iter().copied().find(|dt| dt.code() == code)
    }

    /// Header code for a name, or [`DataType::INVALID_CODE`] when the name is not recognised.
    ///
    /// ```
    /// use analyze_rs::DataType;
    ///
    /// assert_eq!(DataType::lookup_code("float"), 16);
    /// assert_eq!(DataType::lookup_code("banana"), -1);
    /// ```
    pub fn lookup_code(name: &str) -> i16 {
        Self::from_name(name)
            .map(|dt| dt.code())
            .unwrap_or(Self::INVALID_CODE)
    }

    /// Resolve a name to a type that may appear in a valid header.
    ///
    /// `UNKNOWN` is part of the closed set but carries code 0, so it is rejected
    /// here just like an unrecognised name.
    pub fn parse_valid(name: &str) -> Result<Self> {
        match Self::from_name(name) {
            Some(dt) if dt.code() > 0 => Ok(dt),
            _ => Err(AnalyzeError::InvalidDatatype(name.to_string())),
        }
    }

    /// Element width a driver passes to the swapper for voxel data of this type.
    ///
    /// Single-byte types need no swapping. Complex voxels are swapped as two
    /// independent 4-byte floats. Doubles are outside the swapper's widths.
    pub fn swap_width(&self) -> Option<ElementWidth> {
        match self {
            DataType::SignedShort => Some(ElementWidth::Two),
            DataType::SignedInt | DataType::Float | DataType::Complex => Some(ElementWidth::Four),
            _ => None,
        }
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Planar orientation stored in the history block's `orient` byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Transverse = 0,
    Coronal = 1,
    Sagittal = 2,
    TransverseMovie = 3,
    CoronalMovie = 4,
    SagittalMovie = 5,
}

impl Orientation {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Orientation::Transverse),
            1 => Some(Orientation::Coronal),
            2 => Some(Orientation::Sagittal),
            3 => Some(Orientation::TransverseMovie),
            4 => Some(Orientation::CoronalMovie),
            5 => Some(Orientation::SagittalMovie),
            _ => None,
        }
    }

    /// Whether the movie flag is on
    pub fn is_movie(&self) -> bool {
        self.code() >= 3
    }
}

/// Width of a single element handled by the byte swapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementWidth {
    Two,
    Four,
}

impl ElementWidth {
    pub fn from_bytes(width: usize) -> Result<Self> {
        match width {
            2 => Ok(ElementWidth::Two),
            4 => Ok(ElementWidth::Four),
            other => Err(AnalyzeError::UnsupportedWidth(other)),
        }
    }

    pub fn bytes(&self) -> usize {
        match self {
            ElementWidth::Two => 2,
            ElementWidth::Four => 4,
        }
    }
}

impl TryFrom<usize> for ElementWidth {
    type Error = AnalyzeError;

    fn try_from(width: usize) -> Result<Self> {
        Self::from_bytes(width)
    }
}

/// Byte order of a serialized header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Byte order of the running platform
    pub fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Endianness::Little => Endianness::Big,
            Endianness::Big => Endianness::Little,
        }
    }

    pub fn is_native(&self) -> bool {
        *self == Self::native()
    }
}
