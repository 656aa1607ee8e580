//! Listing browsing: the data model, the user's query, and the engine that
//! turns a full snapshot into one visible page.

mod engine;
pub mod price;
mod query;
mod types;

pub use engine::{filter_and_sort, ListingPage, PAGE_SIZE};
pub use price::{is_adoption, price_label};
pub use query::{ListingQuery, PriceBucket, SortKey};
pub use types::{Category, Listing};
