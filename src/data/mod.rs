/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, trim headers → CompanyDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ CompanyDataset │  Vec<CompanyRecord>, distinct-value indices
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  three-dimension membership test → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  metrics, distributions, ranking → DashboardSummary
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
