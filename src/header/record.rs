// src/header/record.rs
use std::io::{Read, Write};
use byteorder::{BigEndian, ByteOrder, LittleEndian, NativeEndian};
use crate::error::{AnalyzeError, Result};
use crate::header::{DataHistory, HeaderBuilder, HeaderKey, ImageDimension};
use crate::types::{DataType, Endianness};

/// A complete ANALYZE 7.5 header: key, dimension and history blocks packed into 348 bytes.
///
/// Records are plain values. Build one with [`HeaderRecord::build`] or
/// [`HeaderRecord::builder`], serialize it with [`HeaderRecord::to_bytes`], and parse
/// bytes back with [`HeaderRecord::from_bytes`].
///
/// # Example
///
/// ```
/// use analyze_rs::HeaderRecord;
///
/// let header = HeaderRecord::build(256, 256, 30, 1, "FLOAT", 4095, 0).unwrap();
/// let bytes = header.to_bytes();
/// assert_eq!(bytes.len(), 348);
///
/// let parsed = HeaderRecord::from_bytes(&bytes).unwrap();
/// assert_eq!(parsed, header);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderRecord {
    pub key: HeaderKey,
    pub dime: ImageDimension,
    pub hist: DataHistory,
}

impl HeaderRecord {
    pub const SIZE: usize = HeaderKey::SIZE + ImageDimension::SIZE + DataHistory::SIZE;

    /// A record with every field zero, including `sizeof_hdr`
    pub fn zeroed() -> Self {
        HeaderRecord {
            key: HeaderKey::default(),
            dime: ImageDimension::default(),
            hist: DataHistory::default(),
        }
    }

    /// Build a header the way `make_hdr` does.
    ///
    /// `datatype` is matched case-insensitively against BINARY, CHAR, SHORT, INT,
    /// FLOAT, COMPLEX, DOUBLE and RGB. Any other name, `UNKNOWN` included, fails with
    /// [`AnalyzeError::InvalidDatatype`]. Spacing and calibration are left at zero.
    pub fn build(
        width: i16,
        height: i16,
        depth: i16,
        volumes: i16,
        datatype: &str,
        glmax: i32,
        glmin: i32,
    ) -> Result<Self> {
        let data_type = DataType::parse_valid(datatype)?;
        HeaderBuilder::new(data_type)
            .dims(width, height, depth, volumes)
            .global_range(glmax, glmin)
            .build()
    }

    /// Start a builder for headers with extra fields set
    pub fn builder(data_type: DataType) -> HeaderBuilder {
        HeaderBuilder::new(data_type)
    }

    pub fn data_type(&self) -> Option<DataType> {
        self.dime.data_type()
    }

    /// Serialize in the platform's native byte order
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        self.encode::<NativeEndian>()
    }

    /// Serialize in an explicit byte order
    pub fn to_bytes_in(&self, endianness: Endianness) -> [u8; Self::SIZE] {
        match endianness {
            Endianness::Little => self.encode::<LittleEndian>(),
            Endianness::Big => self.encode::<BigEndian>(),
        }
    }

    /// Parse a native byte order header.
    ///
    /// Fails with [`AnalyzeError::BadLength`] unless `bytes` is exactly 348 bytes long,
    /// and with [`AnalyzeError::BadSizeField`] unless `sizeof_hdr` reads 348.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes_in(bytes, Endianness::native())
    }

    /// Parse a header stored in the given byte order
    pub fn from_bytes_in(bytes: &[u8], endianness: Endianness) -> Result<Self> {
        check_length(bytes)?;

        let record = match endianness {
            Endianness::Little => Self::decode::<LittleEndian>(bytes),
            Endianness::Big => Self::decode::<BigEndian>(bytes),
        };

        if record.key.sizeof_hdr != Self::SIZE as i32 {
            return Err(AnalyzeError::BadSizeField(record.key.sizeof_hdr));
        }

        log::debug!(
            "parsed {:?}-endian ANALYZE header: extent {:?}, datatype {}",
            endianness,
            record.dime.extent(),
            record.dime.datatype
        );
        Ok(record)
    }

    /// Parse a header of either byte order.
    ///
    /// The native order is tried first; if `sizeof_hdr` only reads 348 with its bytes
    /// reversed, the header is decoded in the opposite order.
    pub fn from_bytes_detect(bytes: &[u8]) -> Result<(Self, Endianness)> {
        check_length(bytes)?;

        let native = Endianness::native();
        let sizeof_hdr = NativeEndian::read_i32(&bytes[0..4]);
        let endianness = if sizeof_hdr == Self::SIZE as i32 {
            native
        } else if sizeof_hdr.swap_bytes() == Self::SIZE as i32 {
            native.opposite()
        } else {
            return Err(AnalyzeError::BadSizeField(sizeof_hdr));
        };

        Self::from_bytes_in(bytes, endianness).map(|record| (record, endianness))
    }

    /// Write the native byte order serialization to a stream
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.to_bytes())?;
        Ok(())
    }

    /// Read exactly one native byte order header from a stream
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Self> {
        let mut buf = [0u8; Self::SIZE];
        reader.read_exact(&mut buf)?;
        Self::from_bytes(&buf)
    }

    fn encode<B: ByteOrder>(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        let (key, rest) = buf.split_at_mut(HeaderKey::SIZE);
        let (dime, hist) = rest.split_at_mut(ImageDimension::SIZE);

        self.key.encode::<B>(key);
        self.dime.encode::<B>(dime);
        self.hist.encode::<B>(hist);
        buf
    }

    fn decode<B: ByteOrder>(buf: &[u8]) -> Self {
        let (key, rest) = buf.split_at(HeaderKey::SIZE);
        let (dime, hist) = rest.split_at(ImageDimension::SIZE);

        HeaderRecord {
            key: HeaderKey::decode::<B>(key),
            dime: ImageDimension::decode::<B>(dime),
            hist: DataHistory::decode::<B>(hist),
        }
    }
}

fn check_length(bytes: &[u8]) -> Result<()> {
    if bytes.len() != HeaderRecord::SIZE {
        return Err(AnalyzeError::BadLength {
            expected: HeaderRecord::SIZE,
            found: bytes.len(),
        });
    }
    Ok(())
}
