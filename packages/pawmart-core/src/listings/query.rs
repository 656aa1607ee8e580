//! The user's current browse request.
//!
//! Everything here is built from free-form UI input, so every field has a
//! permissive default and the lenient constructors never fail.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use super::types::{Category, Listing};
use crate::error::ParseError;

// ============================================================================
// Price buckets
// ============================================================================

/// Half-open, contiguous price ranges. `Free` is the adoption sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceBucket {
    #[default]
    Any,
    /// Exactly 0.
    Free,
    /// (0, 50]
    Low,
    /// (50, 100]
    Mid,
    /// (100, inf)
    High,
}

impl PriceBucket {
    pub fn contains(&self, price: f64) -> bool {
        match self {
            PriceBucket::Any => true,
            PriceBucket::Free => price == 0.0,
            PriceBucket::Low => price > 0.0 && price <= 50.0,
            PriceBucket::Mid => price > 50.0 && price <= 100.0,
            PriceBucket::High => price > 100.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::Any => "Any price",
            PriceBucket::Free => "Free (adoption)",
            PriceBucket::Low => "$1 - $50",
            PriceBucket::Mid => "$50 - $100",
            PriceBucket::High => "$100+",
        }
    }

    /// Unknown values fall back to `Any`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for PriceBucket {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "any" | "all" => Ok(PriceBucket::Any),
            "free" => Ok(PriceBucket::Free),
            "low" => Ok(PriceBucket::Low),
            "mid" => Ok(PriceBucket::Mid),
            "high" => Ok(PriceBucket::High),
            _ => Err(ParseError::UnknownPriceBucket(s.to_string())),
        }
    }
}

/// Decoding is as lenient as [`PriceBucket::parse_lenient`].
impl<'de> Deserialize<'de> for PriceBucket {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse_lenient).unwrap_or_default())
    }
}

// ============================================================================
// Sort keys
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Backend return order.
    #[default]
    Newest,
    /// Reverse of backend return order.
    Oldest,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::Oldest => "Oldest first",
            SortKey::PriceAsc => "Price: low to high",
            SortKey::PriceDesc => "Price: high to low",
            SortKey::NameAsc => "Name: A to Z",
        }
    }

    /// Unknown values fall back to `Newest`.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for SortKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "" | "newest" => Ok(SortKey::Newest),
            "oldest" => Ok(SortKey::Oldest),
            "priceasc" => Ok(SortKey::PriceAsc),
            "pricedesc" => Ok(SortKey::PriceDesc),
            "nameasc" => Ok(SortKey::NameAsc),
            _ => Err(ParseError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Decoding is as lenient as [`SortKey::parse_lenient`].
impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse_lenient).unwrap_or_default())
    }
}

// ============================================================================
// ListingQuery
// ============================================================================

/// Search, filter, sort and page selection for one browse request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingQuery {
    /// Case-insensitive substring matched against the listing name.
    pub search_term: String,
    /// `None` means any category.
    #[serde(deserialize_with = "lenient_category")]
    pub category: Option<Category>,
    pub price_bucket: PriceBucket,
    pub sort_key: SortKey,
    /// 1-based.
    #[serde(deserialize_with = "page_at_least_one")]
    pub page: u32,
}

/// Unknown or missing categories mean "any".
fn lenient_category<'de, D>(deserializer: D) -> Result<Option<Category>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|c| c.parse().ok()))
}

fn page_at_least_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u32>::deserialize(deserializer)?;
    Ok(raw.unwrap_or(1).max(1))
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            category: None,
            price_bucket: PriceBucket::Any,
            sort_key: SortKey::Newest,
            page: 1,
        }
    }
}

impl ListingQuery {
    /// Build a query from raw UI parameters.
    ///
    /// Out-of-range category, bucket and sort values are treated as "any" and
    /// "newest"; a page of 0 is read as page 1.
    pub fn from_params(
        search_term: &str,
        category: &str,
        price_bucket: &str,
        sort_key: &str,
        page: u32,
    ) -> Self {
        Self {
            search_term: search_term.to_string(),
            category: category.parse().ok(),
            price_bucket: PriceBucket::parse_lenient(price_bucket),
            sort_key: SortKey::parse_lenient(sort_key),
            page: page.max(1),
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_price(mut self, bucket: PriceBucket) -> Self {
        self.price_bucket = bucket;
        self
    }

    pub fn sorted_by(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    pub fn on_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Whether a listing passes every filter predicate of this query.
    pub fn matches(&self, listing: &Listing) -> bool {
        self.category.map_or(true, |c| listing.category == c)
            && self.matches_search(&listing.name)
            && self.price_bucket.contains(listing.price)
    }

    fn matches_search(&self, name: &str) -> bool {
        self.search_term.is_empty()
            || name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert!(PriceBucket::Free.contains(0.0));
        assert!(!PriceBucket::Low.contains(0.0));
        assert!(PriceBucket::Low.contains(50.0));
        assert!(!PriceBucket::Mid.contains(50.0));
        assert!(PriceBucket::Mid.contains(100.0));
        assert!(!PriceBucket::High.contains(100.0));
        assert!(PriceBucket::High.contains(100.01));
    }

    #[test]
    fn test_buckets_partition_prices() {
        let buckets = [
            PriceBucket::Free,
            PriceBucket::Low,
            PriceBucket::Mid,
            PriceBucket::High,
        ];
        for price in [0.0, 0.01, 1.0, 49.99, 50.0, 50.5, 99.0, 100.0, 100.5, 5000.0] {
            let hits = buckets.iter().filter(|b| b.contains(price)).count();
            assert_eq!(hits, 1, "price {price} matched {hits} buckets");
        }
    }

    #[test]
    fn test_lenient_parsing_defaults() {
        assert_eq!(PriceBucket::parse_lenient("cheap"), PriceBucket::Any);
        assert_eq!(PriceBucket::parse_lenient("MID"), PriceBucket::Mid);
        assert_eq!(SortKey::parse_lenient("random"), SortKey::Newest);
        assert_eq!(SortKey::parse_lenient("price-desc"), SortKey::PriceDesc);
        assert_eq!(SortKey::parse_lenient("priceAsc"), SortKey::PriceAsc);
    }

    #[test]
    fn test_from_params_is_permissive() {
        let query = ListingQuery::from_params("cat", "Dragons", "???", "sideways", 0);
        assert_eq!(query.search_term, "cat");
        assert_eq!(query.category, None);
        assert_eq!(query.price_bucket, PriceBucket::Any);
        assert_eq!(query.sort_key, SortKey::Newest);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let listing = Listing::new("1", "Golden Retriever", Category::Pets, 300.0);
        assert!(ListingQuery::default().with_search("golden").matches(&listing));
        assert!(ListingQuery::default().with_search("RETRIEVER").matches(&listing));
        assert!(!ListingQuery::default().with_search("poodle").matches(&listing));
    }

    #[test]
    fn test_query_deserializes_with_defaults() {
        let query: ListingQuery = serde_json::from_str(r#"{"priceBucket":"free"}"#).unwrap();
        assert_eq!(query.price_bucket, PriceBucket::Free);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort_key, SortKey::Newest);
    }

    #[test]
    fn test_query_decodes_unknown_values_as_defaults() {
        let query: ListingQuery = serde_json::from_str(
            r#"{"priceBucket":"bargain","sortKey":"sideways","category":"Reptiles"}"#,
        )
        .unwrap();
        assert_eq!(query, ListingQuery::default());
    }

    #[test]
    fn test_query_decodes_known_values_and_page_zero() {
        let query: ListingQuery = serde_json::from_str(
            r#"{"searchTerm":"cat","category":"Pet Food","priceBucket":"MID","sortKey":"priceDesc","page":0}"#,
        )
        .unwrap();
        assert_eq!(query.category, Some(Category::PetFood));
        assert_eq!(query.price_bucket, PriceBucket::Mid);
        assert_eq!(query.sort_key, SortKey::PriceDesc);
        assert_eq!(query.page, 1);

        let nulls: ListingQuery =
            serde_json::from_str(r#"{"category":null,"priceBucket":null,"page":null}"#).unwrap();
        assert_eq!(nulls, ListingQuery::default());
    }

    #[test]
    fn test_query_serializes_back_to_wire_names() {
        let query = ListingQuery::default()
            .with_category(Category::PetCareProducts)
            .with_price(PriceBucket::High)
            .sorted_by(SortKey::NameAsc);
        let json = serde_json::to_string(&query).unwrap();
        let decoded: ListingQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, query);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PriceBucket::Free.label(), "Free (adoption)");
        assert_eq!(SortKey::PriceAsc.label(), "Price: low to high");
    }
}
