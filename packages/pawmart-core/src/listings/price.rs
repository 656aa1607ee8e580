//! Price display. `0` is the free-adoption sentinel, never "$0".

use super::types::Listing;

/// "Free" for the adoption sentinel, otherwise a dollar amount in its
/// shortest form ("$45", "$12.5").
pub fn price_label(price: f64) -> String {
    if price == 0.0 {
        "Free".to_string()
    } else {
        format!("${price}")
    }
}

/// Whether the listing shows the "Adoption" badge.
pub fn is_adoption(listing: &Listing) -> bool {
    listing.price == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::Category;

    #[test]
    fn test_price_label() {
        assert_eq!(price_label(0.0), "Free");
        assert_eq!(price_label(45.0), "$45");
        assert_eq!(price_label(12.5), "$12.5");
    }

    #[test]
    fn test_adoption_badge() {
        assert!(is_adoption(&Listing::new("1", "Tom Cat", Category::Pets, 0.0)));
        assert!(!is_adoption(&Listing::new("2", "Kibble", Category::PetFood, 0.5)));
    }
}
