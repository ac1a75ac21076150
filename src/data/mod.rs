/// Data layer: core types, loading, filtering, and view computation.
///
/// Architecture:
/// ```text
///  buoy .csv
///      │
///      ▼
///  ┌──────────┐
///  │  loader   │  select + rename 7 columns, parse timestamps → WindDataset
///  └──────────┘
///      │
///      ▼
///  ┌─────────────┐
///  │ WindDataset  │  Vec<Observation>
///  └─────────────┘
///      │
///      ▼
///  ┌──────────┐
///  │  filter   │  quality predicate → passing row indices
///  └──────────┘
///      │
///      ▼
///  ┌──────────┐
///  │   view    │  (dataset, indices, date range) → polar points + highlight
///  └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
