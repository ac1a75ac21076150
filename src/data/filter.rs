use super::model::WindDataset;

// ---------------------------------------------------------------------------
// Quality filter
// ---------------------------------------------------------------------------

/// Return indices of observations that pass quality control.
///
/// An observation passes when all three conditions hold:
/// * `wind_speed1 >= 0` (negative speeds are sentinel/invalid values)
/// * `flag_wspd1 == 0`
/// * `flag_wdir1 == 0`
///
/// Row order is preserved; the dataset itself is never mutated.
pub fn passing_indices(dataset: &WindDataset) -> Vec<usize> {
    dataset
        .observations
        .iter()
        .enumerate()
        .filter(|(_, obs)| obs.wind_speed1 >= 0.0 && obs.flag_wspd1 == 0 && obs.flag_wdir1 == 0)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::data::model::Observation;

    fn obs(wspd: f64, flag_wspd: i64, flag_wdir: i64) -> Observation {
        Observation {
            dt: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            latitude: -25.5,
            longitude: -45.0,
            wind_speed1: wspd,
            flag_wspd1: flag_wspd,
            wind_dir1: 90.0,
            flag_wdir1: flag_wdir,
        }
    }

    #[test]
    fn clean_row_passes() {
        let ds = WindDataset {
            observations: vec![obs(5.0, 0, 0)],
        };
        assert_eq!(passing_indices(&ds), vec![0]);
    }

    #[test]
    fn flagged_speed_is_rejected() {
        let ds = WindDataset {
            observations: vec![obs(5.0, 1, 0)],
        };
        assert!(passing_indices(&ds).is_empty());
    }

    #[test]
    fn flagged_direction_is_rejected() {
        let ds = WindDataset {
            observations: vec![obs(5.0, 0, 4)],
        };
        assert!(passing_indices(&ds).is_empty());
    }

    #[test]
    fn negative_speed_is_rejected_even_with_clean_flags() {
        let ds = WindDataset {
            observations: vec![obs(-1.0, 0, 0)],
        };
        assert!(passing_indices(&ds).is_empty());
    }

    #[test]
    fn zero_speed_passes() {
        let ds = WindDataset {
            observations: vec![obs(0.0, 0, 0)],
        };
        assert_eq!(passing_indices(&ds), vec![0]);
    }

    #[test]
    fn mixed_rows_keep_order_and_every_pass_satisfies_predicate() {
        let ds = WindDataset {
            observations: vec![
                obs(5.0, 0, 0),
                obs(-9999.0, 0, 0),
                obs(3.0, 0, 0),
                obs(3.0, 4, 0),
                obs(8.0, 0, 1),
            ],
        };
        let idx = passing_indices(&ds);
        assert_eq!(idx, vec![0, 2]);
        for &i in &idx {
            let o = &ds.observations[i];
            assert!(o.wind_speed1 >= 0.0 && o.flag_wspd1 == 0 && o.flag_wdir1 == 0);
        }
    }
}
