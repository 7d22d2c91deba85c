/// Data layer: core types, loading, and the pure per-interaction computations.
///
/// Architecture:
/// ```text
///  NY-House-Dataset.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  strict CSV parse → ListingDataset (fatal on failure)
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ListingDataset  │  Vec<Listing>, borough/broker + range indexes
///   └────────────────┘
///        │
///        ├──► filter   apply FilterState → visible indices
///        ├──► rank     top-N by column and direction
///        ├──► formula  constrained arithmetic over column names
///        ├──► ratio    avg price per bedroom / bathroom
///        └──► stats    histograms, quantiles, IQR fences, linear fit
/// ```
///
/// Everything below the loader is a pure function of (dataset, inputs) and
/// is recomputed from the full dataset on every interaction.

pub mod filter;
pub mod formula;
pub mod loader;
pub mod model;
pub mod rank;
pub mod ratio;
pub mod stats;
