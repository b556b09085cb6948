/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CompanyDataset (memoized for the default path)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ CompanyDataset │  Vec<CompanyRecord>, industry index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ analysis  │  per-view aggregates: KPIs, histogram, top-N,
///   └──────────┘  industry subset, mean jobs, hidden gems
/// ```

pub mod analysis;
pub mod loader;
pub mod model;
