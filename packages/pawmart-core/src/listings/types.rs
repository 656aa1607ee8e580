use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

// ============================================================================
// Category
// ============================================================================

/// The closed set of listing categories.
///
/// Serialized with the display names the backend stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Pets")]
    Pets,
    #[serde(rename = "Pet Food")]
    PetFood,
    #[serde(rename = "Accessories")]
    Accessories,
    #[serde(rename = "Pet Care Products")]
    PetCareProducts,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Pets => "Pets",
            Category::PetFood => "Pet Food",
            Category::Accessories => "Accessories",
            Category::PetCareProducts => "Pet Care Products",
        }
    }

    pub fn variants() -> &'static [Category] {
        &[
            Category::Pets,
            Category::PetFood,
            Category::Accessories,
            Category::PetCareProducts,
        ]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseError;

    /// Accepts the display name or a compact form ("pet-food", "PetFood"),
    /// ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match key.as_str() {
            "pets" => Ok(Category::Pets),
            "petfood" => Ok(Category::PetFood),
            "accessories" => Ok(Category::Accessories),
            "petcareproducts" => Ok(Category::PetCareProducts),
            _ => Err(ParseError::UnknownCategory(s.to_string())),
        }
    }
}

// ============================================================================
// Listing
// ============================================================================

/// One marketplace entry, a pet or a product.
///
/// The core only ever reads listings. A price of `0` means free adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "image", default)]
    pub image_url: String,
    #[serde(rename = "email", default)]
    pub owner_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Minimal listing, mostly useful for fixtures and previews.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            price,
            location: String::new(),
            description: String::new(),
            image_url: String::new(),
            owner_email: String::new(),
            created_at: None,
        }
    }

    pub fn is_owned_by(&self, email: &str) -> bool {
        !email.is_empty() && self.owner_email.eq_ignore_ascii_case(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_display_and_compact_forms() {
        assert_eq!("Pet Food".parse::<Category>().unwrap(), Category::PetFood);
        assert_eq!("pet-food".parse::<Category>().unwrap(), Category::PetFood);
        assert_eq!("PETCAREPRODUCTS".parse::<Category>().unwrap(), Category::PetCareProducts);
        assert!(matches!(
            "Reptiles".parse::<Category>(),
            Err(ParseError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_listing_deserializes_backend_shape() {
        let json = r#"{
            "_id": "665f1c",
            "name": "Tom Cat",
            "category": "Pets",
            "price": 0,
            "location": "Dhaka",
            "description": "Friendly",
            "image": "https://i.ibb.co/cat.png",
            "email": "owner@example.com",
            "date": "2025-01-01"
        }"#;

        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, "665f1c");
        assert_eq!(listing.category, Category::Pets);
        assert_eq!(listing.price, 0.0);
        assert_eq!(listing.image_url, "https://i.ibb.co/cat.png");
        assert!(listing.is_owned_by("OWNER@example.com"));
        assert!(listing.created_at.is_none());
    }

    #[test]
    fn test_empty_email_owns_nothing() {
        let listing = Listing::new("1", "Leash", Category::Accessories, 12.0);
        assert!(!listing.is_owned_by(""));
    }
}
