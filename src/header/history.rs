// src/header/history.rs
use byteorder::ByteOrder;
use crate::types::Orientation;
use crate::utils::decode_fixed;

/// Data history block: description and provenance (200 bytes)
#[derive(Debug, Clone, PartialEq)]
pub struct DataHistory {
    pub descrip: [u8; 80],
    pub aux_file: [u8; 24],
    pub orient: u8,
    pub originator: [u8; 10],
    pub generated: [u8; 10],
    pub scannum: [u8; 10],
    pub patient_id: [u8; 10],
    pub exp_date: [u8; 10],
    pub exp_time: [u8; 10],
    pub hist_un0: [u8; 3],
    pub views: i32,
    pub vols_added: i32,
    pub start_field: i32,
    pub field_skip: i32,
    pub omax: i32,
    pub omin: i32,
    pub smax: i32,
    pub smin: i32,
}

impl Default for DataHistory {
    fn default() -> Self {
        DataHistory {
            descrip: [0; 80],
            aux_file: [0; 24],
            orient: 0,
            originator: [0; 10],
            generated: [0; 10],
            scannum: [0; 10],
            patient_id: [0; 10],
            exp_date: [0; 10],
            exp_time: [0; 10],
            hist_un0: [0; 3],
            views: 0,
            vols_added: 0,
            start_field: 0,
            field_skip: 0,
            omax: 0,
            omin: 0,
            smax: 0,
            smin: 0,
        }
    }
}

impl DataHistory {
    pub const SIZE: usize = 200;

    /// The planar orientation, if `orient` holds a recognised code
    pub fn orientation(&self) -> Option<Orientation> {
        Orientation::from_code(self.orient)
    }

    pub fn description(&self) -> String {
        decode_fixed(&self.descrip)
    }

    pub fn aux_file(&self) -> String {
        decode_fixed(&self.aux_file)
    }

    pub fn patient_id(&self) -> String {
        decode_fixed(&self.patient_id)
    }

    pub(crate) fn encode<B: ByteOrder>(&self, buf: &mut [u8]) {
        debug_assert_eq!(buf.len(), Self::SIZE);

        buf[0..80].copy_from_slice(&self.descrip);
        buf[80..104].copy_from_slice(&self.aux_file);
        buf[104] = self.orient;
        buf[105..115].copy_from_slice(&self.originator);
        buf[115..125].copy_from_slice(&self.generated);
        buf[125..135].copy_from_slice(&self.scannum);
        buf[135..145].copy_from_slice(&self.patient_id);
        buf[145..155].copy_from_slice(&self.exp_date);
        buf[155..165].copy_from_slice(&self.exp_time);
        buf[165..168].copy_from_slice(&self.hist_un0);
        B::write_i32(&mut buf[168..172], self.views);
        B::write_i32(&mut buf[172..176], self.vols_added);
        B::write_i32(&mut buf[176..180], self.start_field);
        B::write_i32(&mut buf[180..184], self.field_skip);
        B::write_i32(&mut buf[184..188], self.omax);
        B::write_i32(&mut buf[188..192], self.omin);
        B::write_i32(&mut buf[192..196], self.smax);
        B::write_i32(&mut buf[196..200], self.smin);
    }

    pub(crate) fn decode<B: ByteOrder>(buf: &[u8]) -> Self {
        debug_assert_eq!(buf.len(), Self::SIZE);

        let mut hist = DataHistory {
            orient: buf[104],
            views: B::read_i32(&buf[168..172]),
            vols_added: B::read_i32(&buf[172..176]),
            start_field: B::read_i32(&buf[176..180]),
            field_skip: B::read_i32(&buf[180..184]),
            omax: B::read_i32(&buf[184..188]),
            omin: B::read_i32(&buf[188..192]),
            smax: B::read_i32(&buf[192..196]),
            smin: B::read_i32(&buf[196..200]),
            ..Default::default()
        };
        hist.descrip.copy_from_slice(&buf[0..80]);
        hist.aux_file.copy_from_slice(&buf[80..104]);
        hist.originator.copy_from_slice(&buf[105..115]);
        hist.generated.copy_from_slice(&buf[115..125]);
        hist.scannum.copy_from_slice(&buf[125..135]);
        hist.patient_id.copy_from_slice(&buf[135..145]);
        hist.exp_date.copy_from_slice(&buf[145..155]);
        hist.exp_time.copy_from_slice(&buf[155..165]);
        hist.hist_un0.copy_from_slice(&buf[165..168]);
        hist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::LittleEndian;

    #[test]
    fn test_history_offsets() {
        let mut hist = DataHistory {
            orient: Orientation::Sagittal.code(),
            views: 7,
            smin: -1,
            ..Default::default()
        };
        hist.descrip[..4].copy_from_slice(b"scan");
        hist.patient_id[..3].copy_from_slice(b"P01");

        let mut buf = [0u8; DataHistory::SIZE];
        hist.encode::<LittleEndian>(&mut buf);

        assert_eq!(&buf[0..4], b"scan");
        assert_eq!(buf[104], 2);
        assert_eq!(&buf[135..138], b"P01");
        assert_eq!(&buf[168..172], &[7, 0, 0, 0]);
        assert_eq!(&buf[196..200], &[0xFF; 4]);

        let decoded = DataHistory::decode::<LittleEndian>(&buf);
        assert_eq!(decoded, hist);
        assert_eq!(decoded.description(), "scan");
        assert_eq!(decoded.patient_id(), "P01");
        assert_eq!(decoded.orientation(), Some(Orientation::Sagittal));
    }

    #[test]
    fn test_unknown_orientation_code() {
        let hist = DataHistory {
            orient: 9,
            ..Default::default()
        };
        assert_eq!(hist.orientation(), None);
    }
}
