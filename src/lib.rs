//! Browse, filter and vote on a shortlist of vacation rentals.
//!
//! The filtering and ordering lives in [`filters`], routing slugs in [`slug`].
//! Both are pure and know nothing about [`session`] or where the catalog
//! comes from ([`store`]).

pub mod config;
pub mod display;
pub mod edit;
pub mod error;
pub mod filters;
pub mod models;
pub mod session;
pub mod slug;
pub mod store;

pub use filters::{apply, CatalogBounds, FilterCriteria, PriceRange, PriceTarget, SortKey, VoteFilter};
pub use models::Property;
pub use slug::{find_by_slug, property_path, slugify};
