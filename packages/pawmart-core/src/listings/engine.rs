//! Search, filter, sort and paginate a listings snapshot.
//!
//! # Usage
//!
//! ```rust
//! use pawmart_core::listings::{filter_and_sort, Category, Listing, ListingQuery, SortKey};
//!
//! let listings = vec![
//!     Listing::new("1", "Leash", Category::Accessories, 120.0),
//!     Listing::new("2", "Dog Food", Category::PetFood, 45.0),
//! ];
//! let page = filter_and_sort(&listings, &ListingQuery::default().sorted_by(SortKey::PriceAsc));
//! assert_eq!(page.items[0].name, "Dog Food");
//! assert_eq!(page.total_pages, 1);
//! ```

use serde::Serialize;

use super::query::{ListingQuery, SortKey};
use super::types::Listing;

/// Listings shown per page.
pub const PAGE_SIZE: usize = 8;

/// One visible page plus the totals the pager needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    pub items: Vec<Listing>,
    pub total_matches: usize,
    pub total_pages: usize,
    /// The page that was requested, echoed back unclamped.
    pub page: u32,
}

impl ListingPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next_page(&self) -> bool {
        (self.page as usize) < self.total_pages
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// Whether the requested page lies past the last one. The caller should
    /// clamp back to `total_pages` (or page 1 when nothing matched).
    ///
    /// With no matches, page 1 is the empty first page and in range; any
    /// later page is past the end.
    pub fn is_out_of_range(&self) -> bool {
        if self.total_pages == 0 {
            return self.page > 1;
        }
        self.page as usize > self.total_pages
    }
}

/// Compute the visible page for `query` over `listings`.
///
/// `listings` is taken in backend order, which stands in for newest first.
/// The input is never mutated and the result depends only on the arguments.
/// A page past the end yields an empty page with correct totals.
pub fn filter_and_sort(listings: &[Listing], query: &ListingQuery) -> ListingPage {
    let mut matched: Vec<&Listing> = listings.iter().filter(|l| query.matches(l)).collect();

    sort_listings(&mut matched, query.sort_key);

    let total_matches = matched.len();
    let total_pages = total_matches.div_ceil(PAGE_SIZE);

    let page = query.page.max(1) as usize;
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    let items: Vec<Listing> = matched
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    tracing::debug!(
        total = listings.len(),
        total_matches,
        total_pages,
        page = query.page,
        returned = items.len(),
        sort = ?query.sort_key,
        "Filtered listings"
    );

    ListingPage {
        items,
        total_matches,
        total_pages,
        page: query.page,
    }
}

/// All sorts are stable; ties keep their input order.
fn sort_listings(listings: &mut [&Listing], key: SortKey) {
    match key {
        SortKey::Newest => {}
        SortKey::Oldest => listings.reverse(),
        SortKey::PriceAsc => listings.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortKey::PriceDesc => listings.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortKey::NameAsc => listings.sort_by(|a, b| a.name.cmp(&b.name)),
    }
}
