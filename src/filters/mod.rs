pub mod engine;
pub mod types;

pub use engine::{apply, apply_refs, matches, CatalogBounds};
pub use types::{FilterCriteria, PriceRange, PriceTarget, SortKey, VoteFilter};
