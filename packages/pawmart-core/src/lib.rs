//! PawMart marketplace core
//!
//! Two independent, pure building blocks used by the presentation layer:
//!
//! - [`listings`]: search, filter, sort and paginate a snapshot of listings.
//! - [`access`]: decide whether a session role may reach a route or action.
//!
//! Around them sit the smaller read-only helpers the dashboards need
//! ([`directory`] for user and order tables, [`stats`] for overview cards).
//!
//! ```rust
//! use pawmart_core::access::{evaluate, Capability, Role};
//! use pawmart_core::listings::{filter_and_sort, ListingQuery, PriceBucket};
//!
//! let page = filter_and_sort(&[], &ListingQuery::default().with_price(PriceBucket::Free));
//! assert_eq!(page.total_matches, 0);
//!
//! let decision = evaluate(Role::User, Capability::Seller);
//! assert!(!decision.allowed);
//! ```

pub mod access;
pub mod directory;
pub mod error;
pub mod listings;
pub mod stats;

pub use access::{evaluate, Capability, Decision, DenyReason, Role, RouteRef, Session};
pub use error::ParseError;
pub use listings::{filter_and_sort, Category, Listing, ListingPage, ListingQuery, PAGE_SIZE};
