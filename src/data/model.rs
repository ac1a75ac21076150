use chrono::NaiveDateTime;

// ---------------------------------------------------------------------------
// Observation – one row of the buoy export, after projection/rename
// ---------------------------------------------------------------------------

/// A single timestamped measurement (one CSV row after the column mapping
/// has been applied). Field names are the canonical ones.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Timestamp key. Need not be unique or sorted in the source file.
    pub dt: NaiveDateTime,
    pub latitude: f64,
    pub longitude: f64,
    /// Wind speed in the source's physical units.
    pub wind_speed1: f64,
    /// Quality code for `wind_speed1` (0 = good).
    pub flag_wspd1: i64,
    /// Wind direction in degrees.
    pub wind_dir1: f64,
    /// Quality code for `wind_dir1` (0 = good).
    pub flag_wdir1: i64,
}

// ---------------------------------------------------------------------------
// WindDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset, rows kept in source-file order.
#[derive(Debug, Clone, Default)]
pub struct WindDataset {
    pub observations: Vec<Observation>,
}

impl WindDataset {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
