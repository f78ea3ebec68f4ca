// src/header/key.rs
use byteorder::ByteOrder;
use crate::utils::decode_fixed;

/// Header key block: the first 40 bytes of an ANALYZE header
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderKey {
    pub sizeof_hdr: i32,
    pub data_type: [u8; 10],
    pub db_name: [u8; 18],
    pub extents: i32,
    pub session_error: i16,
    pub regular: u8,
    pub hkey_un0: u8,
}

impl HeaderKey {
    pub const SIZE: usize = 40;
    pub const REGULAR: u8 = b'r';

    /// Database name as text
    pub fn db_name(&self) -> String {
        decode_fixed(&self.db_name)
    }

    pub fn is_regular(&self) -> bool {
        self.regular == Self::REGULAR
    }

    pub(crate) fn encode<B: ByteOrder>(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), Self::SIZE);

        B::write_i32(&mut buf[0..4], self.sizeof_hdr);
        buf[4..14].copy_from_slice(&self.data_type);
        buf[14..32].copy_from_slice(&self.db_name);
        B::write_i32(&mut buf[32..36], self.extents);
        B::write_i16(&mut buf[36..38], self.session_error);
        buf[38] = self.regular;
        buf[39] = self.hkey_un0;
    }

    pub(crate) fn decode<B: ByteOrder>(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), Self::SIZE);

        let mut key = HeaderKey {
            sizeof_hdr: B::read_i32(&buf[0..4]),
            extents: B::read_i32(&buf[32..36]),
            session_error: B::read_i16(&buf[36..38]),
            regular: buf[38],
            hkey_un0: buf[39],
            ..Default::default()
        };
        key.data_type.copy_from_slice(&buf[4..14]);
        key.db_name.copy_from_slice(&buf[14..32]);
        key
    }
}
