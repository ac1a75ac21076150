use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::model::WindDataset;

// ---------------------------------------------------------------------------
// Per-interaction view computation
// ---------------------------------------------------------------------------

/// One chart point: an observation projected onto the polar plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarPoint {
    /// Wind speed (plot radius).
    pub radius: f64,
    /// Wind direction in degrees (plot angle).
    pub angle_deg: f64,
    /// Whether the observation falls inside the selected date range.
    pub highlighted: bool,
}

/// Chart data for one render of the polar scatter, in dataset row order.
#[derive(Debug, Clone, Default)]
pub struct PolarView {
    pub points: Vec<PolarPoint>,
}

impl PolarView {
    /// Largest radius, used to scale the radial grid.
    pub fn max_radius(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.radius)
            .fold(0.0_f64, f64::max)
    }
}

/// Combine a selected date with the fixed 00:00:00 time-of-day to form a
/// range boundary.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Earliest and latest dates among the given observation indices, or `None`
/// when no rows pass quality control.
pub fn date_bounds(dataset: &WindDataset, indices: &[usize]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = indices.iter().map(|&i| dataset.observations[i].dt.date());
    let first = dates.next()?;
    Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
}

/// Recompute the chart data for the current date-range selection.
///
/// `indices` is the quality-filtered view; `start`/`end` are inclusive
/// boundaries. Pure: same inputs always yield the same view.
pub fn compute_view(
    dataset: &WindDataset,
    indices: &[usize],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> PolarView {
    let points = indices
        .iter()
        .map(|&i| {
            let obs = &dataset.observations[i];
            PolarPoint {
                radius: obs.wind_speed1,
                angle_deg: obs.wind_dir1,
                highlighted: obs.dt >= start && obs.dt <= end,
            }
        })
        .collect();

    PolarView { points }
}
