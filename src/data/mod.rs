/// Data layer: core types, loading, filtering, statistics, and ranking.
///
/// Architecture:
/// ```text
///   racquets .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize rows → RacquetDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ RacquetDataset │  Vec<Racquet>, global spec ranges
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ───▶ │ ranking  │  preference predicates → top picks
///   └──────────┘      └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  brand histogram over the filtered subset
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod ranking;
pub mod stats;
