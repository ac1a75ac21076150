use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::data::filter::passing_indices;
use crate::data::model::WindDataset;
use crate::data::view::{self, PolarView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the startup load finishes).
    pub dataset: Option<WindDataset>,

    /// Indices of observations passing quality control (cached).
    pub visible_indices: Vec<usize>,

    /// Earliest/latest date among the visible observations.
    pub bounds: Option<(NaiveDate, NaiveDate)>,

    /// The date-range selection, the only mutable interactive state.
    pub selected_range: Option<(NaiveDate, NaiveDate)>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            visible_indices: Vec::new(),
            bounds: None,
            selected_range: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: apply quality control, derive the date
    /// bounds, and reset the selection to the full range.
    ///
    /// Fails when no observation passes quality control, since the date
    /// range would be undefined; the previous dataset is left untouched.
    pub fn set_dataset(&mut self, dataset: WindDataset) -> Result<()> {
        let visible = passing_indices(&dataset);
        if visible.is_empty() {
            bail!("no observations pass quality control");
        }
        let bounds = view::date_bounds(&dataset, &visible);

        self.visible_indices = visible;
        self.bounds = bounds;
        self.selected_range = bounds;
        self.dataset = Some(dataset);
        self.status_message = None;
        Ok(())
    }

    /// Store a new selection from the range control, keeping it inside the
    /// date bounds and ordered.
    pub fn set_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let Some((min_d, max_d)) = self.bounds else {
            return;
        };
        let start = start.clamp(min_d, max_d);
        let end = end.clamp(min_d, max_d);
        self.selected_range = Some((start.min(end), start.max(end)));
    }

    /// Chart data for the current selection. Empty until a dataset is loaded.
    pub fn current_view(&self) -> PolarView {
        match (&self.dataset, self.selected_range) {
            (Some(ds), Some((start, end))) => view::compute_view(
                ds,
                &self.visible_indices,
                view::day_start(start),
                view::day_start(end),
            ),
            _ => PolarView::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    fn obs(y: i32, m: u32, d: u32, wspd: f64, flag: i64) -> Observation {
        Observation {
            dt: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(12, 30, 0)
                .unwrap(),
            latitude: -25.5,
            longitude: -45.0,
            wind_speed1: wspd,
            flag_wspd1: flag,
            wind_dir1: 135.0,
            flag_wdir1: 0,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn set_dataset_defaults_selection_to_full_bounds() {
        let mut state = AppState::default();
        state
            .set_dataset(WindDataset {
                observations: vec![obs(2020, 1, 1, 5.0, 0), obs(2020, 1, 9, 3.0, 0)],
            })
            .unwrap();

        assert_eq!(state.bounds, Some((date(2020, 1, 1), date(2020, 1, 9))));
        assert_eq!(state.selected_range, state.bounds);
        assert_eq!(state.visible_indices, vec![0, 1]);
    }

    #[test]
    fn set_dataset_rejects_fully_flagged_data() {
        let mut state = AppState::default();
        state
            .set_dataset(WindDataset {
                observations: vec![obs(2020, 1, 1, 5.0, 0)],
            })
            .unwrap();

        let err = state
            .set_dataset(WindDataset {
                observations: vec![obs(2020, 2, 1, 5.0, 1)],
            })
            .unwrap_err();
        assert!(err.to_string().contains("quality control"));

        // Previous dataset survives a rejected load.
        assert_eq!(state.bounds, Some((date(2020, 1, 1), date(2020, 1, 1))));
    }

    #[test]
    fn set_range_clamps_and_orders() {
        let mut state = AppState::default();
        state
            .set_dataset(WindDataset {
                observations: vec![obs(2020, 1, 3, 5.0, 0), obs(2020, 1, 7, 3.0, 0)],
            })
            .unwrap();

        state.set_range(date(2019, 12, 1), date(2020, 1, 5));
        assert_eq!(state.selected_range, Some((date(2020, 1, 3), date(2020, 1, 5))));

        state.set_range(date(2020, 1, 6), date(2020, 1, 4));
        assert_eq!(state.selected_range, Some((date(2020, 1, 4), date(2020, 1, 6))));
    }

    #[test]
    fn range_boundaries_use_day_start() {
        // Boundaries are date + 00:00:00, so a 12:30 reading on the end date
        // falls outside the inclusive range.
        let mut state = AppState::default();
        state
            .set_dataset(WindDataset {
                observations: vec![obs(2020, 1, 1, 5.0, 0), obs(2020, 1, 2, 3.0, 0)],
            })
            .unwrap();

        let view = state.current_view();
        assert_eq!(view.points.len(), 2);
        assert!(view.points[0].highlighted);
        assert!(!view.points[1].highlighted);
    }
}
