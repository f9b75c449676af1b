/// Data layer: core types, loading, filtering, the compliance rule and export.
///
/// Architecture:
/// ```text
///  .xlsx / .ods / .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  closed-interval bounds on Donantes_H / Aceptores_H
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   rule    │  append Cumple_Regla, count compliant rows
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  Dataset → CSV bytes (cached by content hash)
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod rule;
