// src/header/builder.rs
use crate::error::{AnalyzeError, Result};
use crate::header::{HeaderKey, HeaderRecord, ImageDimension};
use crate::types::{DataType, Orientation};
use crate::utils::encode_fixed;

/// Builder for headers that need more than `make_hdr`'s eight parameters.
///
/// Every setting starts at the `make_hdr` default: zero spacing, offset and
/// calibration ("unknown"), single-blank unit labels, transverse orientation and
/// empty text fields. Text that does not fit its field fails [`HeaderBuilder::build`]
/// with [`AnalyzeError::FieldTooLong`].
///
/// # Example
///
/// ```
/// use analyze_rs::{DataType, HeaderRecord, Orientation};
///
/// let header = HeaderRecord::builder(DataType::SignedShort)
///     .dims(128, 128, 64, 1)
///     .spacing(0.9375, 0.9375, 2.0)
///     .vox_units("mm")
///     .orientation(Orientation::Coronal)
///     .description("T1 weighted")
///     .build()
///     .unwrap();
///
/// assert_eq!(header.dime.spacing(), [0.9375, 0.9375, 2.0]);
/// assert_eq!(header.hist.description(), "T1 weighted");
/// ```
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    data_type: DataType,
    dims: [i16; 4],
    glmax: i32,
    glmin: i32,
    spacing: [f32; 3],
    vox_offset: f32,
    vox_units: String,
    cal_units: String,
    cal_max: f32,
    cal_min: f32,
    orientation: Orientation,
    description: String,
    aux_file: String,
    db_name: String,
    originator: String,
    generated: String,
    scannum: String,
    patient_id: String,
    exp_date: String,
    exp_time: String,
}

impl HeaderBuilder {
    pub fn new(data_type: DataType) -> Self {
        HeaderBuilder {
            data_type,
            dims: [0; 4],
            glmax: 0,
            glmin: 0,
            spacing: [0.0; 3],
            vox_offset: 0.0,
            vox_units: " ".to_string(),
            cal_units: " ".to_string(),
            cal_max: 0.0,
            cal_min: 0.0,
            orientation: Orientation::default(),
            description: String::new(),
            aux_file: String::new(),
            db_name: String::new(),
            originator: String::new(),
            generated: String::new(),
            scannum: String::new(),
            patient_id: String::new(),
            exp_date: String::new(),
            exp_time: String::new(),
        }
    }

    /// Slice width and height in pixels, depth in slices, and volumes per file
    pub fn dims(mut self, width: i16, height: i16, depth: i16, volumes: i16) -> Self {
        self.dims = [width, height, depth, volumes];
        self
    }

    /// Maximum and minimum voxel values
    pub fn global_range(mut self, glmax: i32, glmin: i32) -> Self {
        self.glmax = glmax;
        self.glmin = glmin;
        self
    }

    /// Voxel width, height and slice thickness
    pub fn spacing(mut self, x: f32, y: f32, z: f32) -> Self {
        self.spacing = [x, y, z];
        self
    }

    /// Byte offset of the pixel data in the image file
    pub fn vox_offset(mut self, offset: f32) -> Self {
        self.vox_offset = offset;
        self
    }

    /// Voxel units label, up to 4 bytes (e.g. "mm")
    pub fn vox_units(mut self, units: impl Into<String>) -> Self {
        self.vox_units = units.into();
        self
    }

    /// Calibration units label, up to 8 bytes (e.g. "HU")
    pub fn cal_units(mut self, units: impl Into<String>) -> Self {
        self.cal_units = units.into();
        self
    }

    /// Calibration range; both zero means no calibration
    pub fn calibration(mut self, cal_max: f32, cal_min: f32) -> Self {
        self.cal_max = cal_max;
        self.cal_min = cal_min;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Free-text description, up to 80 bytes
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Auxiliary file name, up to 24 bytes
    pub fn aux_file(mut self, name: impl Into<String>) -> Self {
        self.aux_file = name.into();
        self
    }

    /// Database name, up to 18 bytes
    pub fn db_name(mut self, name: impl Into<String>) -> Self {
        self.db_name = name.into();
        self
    }

    pub fn originator(mut self, text: impl Into<String>) -> Self {
        self.originator = text.into();
        self
    }

    pub fn generated(mut self, text: impl Into<String>) -> Self {
        self.generated = text.into();
        self
    }

    pub fn scan_number(mut self, text: impl Into<String>) -> Self {
        self.scannum = text.into();
        self
    }

    pub fn patient_id(mut self, text: impl Into<String>) -> Self {
        self.patient_id = text.into();
        self
    }

    /// Experiment date and time, up to 10 bytes each
    pub fn experiment(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.exp_date = date.into();
        self.exp_time = time.into();
        self
    }

    pub fn build(self) -> Result<HeaderRecord> {
        if self.data_type.code() <= 0 {
            return Err(AnalyzeError::InvalidDatatype(self.data_type.name().to_string()));
        }

        let mut record = HeaderRecord::zeroed();

        let key = &mut record.key;
        key.sizeof_hdr = HeaderRecord::SIZE as i32;
        key.regular = HeaderKey::REGULAR;
        key.db_name = encode_fixed("db_name", &self.db_name)?;

        let dime = &mut record.dime;
        dime.dim[0] = ImageDimension::NUM_DIMS;
        dime.dim[1..5].copy_from_slice(&self.dims);
        dime.vox_units = encode_fixed("vox_units", &self.vox_units)?;
        dime.cal_units = encode_fixed("cal_units", &self.cal_units)?;
        dime.datatype = self.data_type.code();
        dime.bitpix = self.data_type.bitpix();
        dime.pixdim[1..4].copy_from_slice(&self.spacing);
        dime.vox_offset = self.vox_offset;
        dime.roi_scale = ImageDimension::ROI_SCALE;
        dime.cal_max = self.cal_max;
        dime.cal_min = self.cal_min;
        dime.glmax = self.glmax;
        dime.glmin = self.glmin;

        let hist = &mut record.hist;
        hist.descrip = encode_fixed("descrip", &self.description)?;
        hist.aux_file = encode_fixed("aux_file", &self.aux_file)?;
        hist.orient = self.orientation.code();
        hist.originator = encode_fixed("originator", &self.originator)?;
        hist.generated = encode_fixed("generated", &self.generated)?;
        hist.scannum = encode_fixed("scannum", &self.scannum)?;
        hist.patient_id = encode_fixed("patient_id", &self.patient_id)?;
        hist.exp_date = encode_fixed("exp_date", &self.exp_date)?;
        hist.exp_time = encode_fixed("exp_time", &self.exp_time)?;

        log::debug!(
            "built ANALYZE header: {}x{}x{}x{} {} ({} bits), range [{}, {}]",
            self.dims[0],
            self.dims[1],
            self.dims[2],
            self.dims[3],
            self.data_type,
            self.data_type.bitpix(),
            self.glmin,
            self.glmax
        );
        Ok(record)
    }
}
