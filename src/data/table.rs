//! Sample Table
//! Column-oriented sensor samples in acquisition order.

/// One capture session, stored column by column.
///
/// All columns have the same length; index `i` in every column belongs to the
/// same sample. Rows are kept in file order and never re-sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    pub time_ms: Vec<f64>,
    /// Derived from `time_ms`.
    pub time_s: Vec<f64>,
    pub accel_x: Vec<f64>,
    pub accel_y: Vec<f64>,
    pub accel_z: Vec<f64>,
    pub giro_x: Vec<f64>,
    pub giro_y: Vec<f64>,
    pub giro_z: Vec<f64>,
}

impl SampleTable {
    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    /// First and last timestamp in seconds, if any samples exist.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.time_s.first()?, *self.time_s.last()?))
    }

    /// Acceleration columns as (x, y, z).
    pub fn accel(&self) -> [&[f64]; 3] {
        [
            self.accel_x.as_slice(),
            self.accel_y.as_slice(),
            self.accel_z.as_slice(),
        ]
    }

    /// Angular velocity columns as (x, y, z).
    pub fn giro(&self) -> [&[f64]; 3] {
        [
            self.giro_x.as_slice(),
            self.giro_y.as_slice(),
            self.giro_z.as_slice(),
        ]
    }
}
