// src/header/dimension.rs
use byteorder::ByteOrder;
use crate::types::DataType;
use crate::utils::decode_fixed;

/// Image dimension block: geometry, voxel type and calibration (108 bytes)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageDimension {
    /// `dim[0]` is the number of dimensions, `dim[1..=4]` are width, height, depth and volumes
    pub dim: [i16; 8],
    pub vox_units: [u8; 4],
    pub cal_units: [u8; 8],
    pub unused14: i16,
    pub datatype: i16,
    pub bitpix: i16,
    pub dim_un0: i16,
    /// `pixdim[1..=3]` are the voxel width, height and slice thickness
    pub pixdim: [f32; 8],
    pub vox_offset: f32,
    pub roi_scale: f32,
    pub funused2: f32,
    pub funused3: f32,
    pub cal_max: f32,
    pub cal_min: f32,
    pub compressed: f32,
    pub verified: f32,
    pub glmax: i32,
    pub glmin: i32,
}

impl ImageDimension {
    pub const SIZE: usize = 108;

    /// Every ANALYZE image is treated as 4-dimensional
    pub const NUM_DIMS: i16 = 4;

    /// Default region-of-interest scale written by `make_hdr`
    pub const ROI_SCALE: f32 = 0.00392157;

    /// Width, height, depth and volume count
    pub fn extent(&self) -> [i16; 4] {
        [self.dim[1], self.dim[2], self.dim[3], self.dim[4]]
    }

    /// Voxel spacing along x, y and z; zero means unknown
    pub fn spacing(&self) -> [f32; 3] {
        [self.pixdim[1], self.pixdim[2], self.pixdim[3]]
    }

    /// The voxel type, if `datatype` holds a recognised code
    pub fn data_type(&self) -> Option<DataType> {
        DataType::from_code(self.datatype)
    }

    pub fn vox_units(&self) -> String {
        decode_fixed(&self.vox_units)
    }

    pub fn cal_units(&self) -> String {
        decode_fixed(&self.cal_units)
    }

    pub(crate) fn encode<B: ByteOrder>(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), Self::SIZE);

        B::write_i16_into(&self.dim, &mut buf[0..16]);
        buf[16..20].copy_from_slice(&self.vox_units);
        buf[20..28].copy_from_slice(&self.cal_units);
        B::write_i16(&mut buf[28..30], self.unused14);
        B::write_i16(&mut buf[30..32], self.datatype);
        B::write_i16(&mut buf[32..34], self.bitpix);
        B::write_i16(&mut buf[34..36], self.dim_un0);
        B::write_f32_into(&self.pixdim, &mut buf[36..68]);
        B::write_f32(&mut buf[68..72], self.vox_offset);
        B::write_f32(&mut buf[72..76], self.roi_scale);
        B::write_f32(&mut buf[76..80], self.funused2);
        B::write_f32(&mut buf[80..84], self.funused3);
        B::write_f32(&mut buf[84..88], self.cal_max);
        B::write_f32(&mut buf[88..92], self.cal_min);
        B::write_f32(&mut buf[92..96], self.compressed);
        B::write_f32(&mut buf[96..100], self.verified);
        B::write_i32(&mut buf[100..104], self.glmax);
        B::write_i32(&mut buf[104..108], self.glmin);
    }

    pub(crate) fn decode<B: ByteOrder>(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), Self::SIZE);

        let mut dime = ImageDimension {
            unused14: B::read_i16(&buf[28..30]),
            datatype: B::read_i16(&buf[30..32]),
            bitpix: B::read_i16(&buf[32..34]),
            dim_un0: B::read_i16(&buf[34..36]),
            vox_offset: B::read_f32(&buf[68..72]),
            roi_scale: B::read_f32(&buf[72..76]),
            funused2: B::read_f32(&buf[76..80]),
            funused3: B::read_f32(&buf[80..84]),
            cal_max: B::read_f32(&buf[84..88]),
            cal_min: B::read_f32(&buf[88..92]),
            compressed: B::read_f32(&buf[92..96]),
            verified: B::read_f32(&buf[96..100]),
            glmax: B::read_i32(&buf[100..104]),
            glmin: B::read_i32(&buf[104..108]),
            ..Default::default()
        };
        B::read_i16_into(&buf[0..16], &mut dime.dim);
        dime.vox_units.copy_from_slice(&buf[16..20]);
        dime.cal_units.copy_from_slice(&buf[20..28]);
        B::read_f32_into(&buf[36..68], &mut dime.pixdim);
        dime
    }
}
