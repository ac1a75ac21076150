use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::config::{COLUMN_MAPPING, DATE_FORMAT};

use super::model::{Observation, WindDataset};

/// One CSV row as it appears in the source file. The serde renames apply the
/// source half of [`COLUMN_MAPPING`]; the timestamp stays a string here so
/// the strict format check can produce its own error.
#[derive(Debug, Deserialize)]
struct RawObservation {
    #[serde(rename = "date_time")]
    dt: String,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "wspd1")]
    wind_speed1: f64,
    flag_wspd1: i64,
    #[serde(rename = "wdir1")]
    wind_dir1: f64,
    #[serde(rename = "flag_wdir1")]
    flag_wdir1: i64,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a buoy wind dataset from a CSV file.
///
/// Expected layout: header row containing at least the seven source columns
/// named in [`COLUMN_MAPPING`]; `date_time` values formatted exactly as
/// `YYYY-MM-DD HH:MM:SS`. Any other columns are ignored.
pub fn load_csv(path: &Path) -> Result<WindDataset> {
    let reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;
    read_observations(reader)
}

/// Parse an already-open CSV reader. Split out of [`load_csv`] so tests can
/// feed in-memory data.
pub fn read_observations<R: io::Read>(mut reader: csv::Reader<R>) -> Result<WindDataset> {
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    // Check the fixed source → canonical mapping against the header row up
    // front, so a missing column is named even when the file has no data
    // rows. Row parsing below relies on the same headers via serde.
    for (source, _canonical) in COLUMN_MAPPING {
        if !headers.iter().any(|h| h == source) {
            anyhow::bail!("CSV missing '{source}' column");
        }
    }

    let mut observations = Vec::new();

    for (row_no, result) in reader.deserialize::<RawObservation>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;

        let dt_raw = raw.dt.trim();
        let dt = NaiveDateTime::parse_from_str(dt_raw, DATE_FORMAT).with_context(|| {
            format!("CSV row {row_no}: 'dt' value '{dt_raw}' does not match {DATE_FORMAT}")
        })?;

        observations.push(Observation {
            dt,
            latitude: raw.latitude,
            longitude: raw.longitude,
            wind_speed1: raw.wind_speed1,
            flag_wspd1: raw.flag_wspd1,
            wind_dir1: raw.wind_dir1,
            flag_wdir1: raw.flag_wdir1,
        });
    }

    Ok(WindDataset { observations })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn read_str(data: &str) -> Result<WindDataset> {
        read_observations(csv::Reader::from_reader(data.as_bytes()))
    }

    #[test]
    fn parses_and_renames_the_seven_columns() {
        // Columns deliberately out of mapping order, plus an ignored extra.
        let data = "\
latitude,date_time,wdir1,battery,longitude,wspd1,flag_wspd1,flag_wdir1
-25.5,2020-01-01 00:00:00,90.0,12.1,-45.0,5.0,0,0
";
        let ds = read_str(data).unwrap();
        assert_eq!(ds.len(), 1);

        let obs = &ds.observations[0];
        assert_eq!(
            obs.dt,
            NaiveDateTime::parse_from_str("2020-01-01 00:00:00", DATE_FORMAT).unwrap()
        );
        assert_eq!(obs.latitude, -25.5);
        assert_eq!(obs.longitude, -45.0);
        assert_eq!(obs.wind_speed1, 5.0);
        assert_eq!(obs.flag_wspd1, 0);
        assert_eq!(obs.wind_dir1, 90.0);
        assert_eq!(obs.flag_wdir1, 0);
    }

    #[test]
    fn missing_source_column_names_it() {
        let data = "\
date_time,latitude,longitude,flag_wspd1,wdir1,flag_wdir1
2020-01-01 00:00:00,-25.5,-45.0,0,90.0,0
";
        let err = read_str(data).unwrap_err();
        assert!(err.to_string().contains("wspd1"), "got: {err:#}");
    }

    #[test]
    fn missing_column_is_named_even_without_data_rows() {
        let data = "date_time,latitude,longitude,flag_wspd1,wdir1,flag_wdir1\n";
        let err = read_str(data).unwrap_err();
        assert!(err.to_string().contains("wspd1"), "got: {err:#}");
    }

    #[test]
    fn malformed_timestamp_is_fatal() {
        let data = "\
date_time,latitude,longitude,wspd1,flag_wspd1,wdir1,flag_wdir1
01/01/2020 00:00,-25.5,-45.0,5.0,0,90.0,0
";
        let err = read_str(data).unwrap_err();
        assert!(err.to_string().contains("01/01/2020 00:00"), "got: {err:#}");
    }

    #[test]
    fn malformed_flag_is_fatal() {
        let data = "\
date_time,latitude,longitude,wspd1,flag_wspd1,wdir1,flag_wdir1
2020-01-01 00:00:00,-25.5,-45.0,5.0,ok,90.0,0
";
        assert!(read_str(data).is_err());
    }

    #[test]
    fn rows_keep_source_order() {
        let data = "\
date_time,latitude,longitude,wspd1,flag_wspd1,wdir1,flag_wdir1
2020-01-05 12:00:00,-25.5,-45.0,3.0,0,180.0,0
2020-01-01 06:00:00,-25.5,-45.0,7.0,0,45.0,0
";
        let ds = read_str(data).unwrap();
        assert_eq!(ds.observations[0].wind_speed1, 3.0);
        assert_eq!(ds.observations[1].wind_speed1, 7.0);
    }
}
