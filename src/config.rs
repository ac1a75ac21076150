use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Static pipeline configuration
// ---------------------------------------------------------------------------

/// Exact format of the buoy `date_time` column (24-hour clock, no timezone).
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fixed source → canonical column mapping. The loader selects exactly these
/// seven columns, in this order, and renames them.
pub const COLUMN_MAPPING: [(&str, &str); 7] = [
    ("date_time", "dt"),
    ("latitude", "latitude"),
    ("longitude", "longitude"),
    ("wspd1", "wind_speed1"),
    ("flag_wspd1", "flag_wspd1"),
    ("wdir1", "wind_dir1"),
    ("flag_wdir1", "flag_wdir1"),
];

/// Run-time configuration assembled in `main` and handed to the pipeline.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// CSV file loaded at startup.
    pub csv_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            // What `generate_sample` writes; replace with a real buoy export.
            csv_path: PathBuf::from("data/sample_wind.csv"),
        }
    }
}
