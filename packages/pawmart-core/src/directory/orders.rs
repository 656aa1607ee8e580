use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field_contains;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Approved,
    Completed,
    Cancelled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        })
    }
}

impl FromStr for OrderStatus {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "approved" => Ok(OrderStatus::Approved),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" | "canceled" => Ok(OrderStatus::Cancelled),
            _ => Err(ParseError::UnknownOrderStatus(s.to_string())),
        }
    }
}

/// An adoption or purchase request placed from a listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    #[serde(default)]
    pub buyer_name: Option<String>,
    pub email: String,
    #[serde(deserialize_with = "quantity_from_wire")]
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

impl Order {
    /// Orders without a stored status are pending.
    pub fn status(&self) -> OrderStatus {
        self.status.unwrap_or_default()
    }

    pub fn total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The order form posts quantity as text; older records store a number.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireQuantity {
    Number(u32),
    Text(String),
}

fn quantity_from_wire<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match WireQuantity::deserialize(deserializer)? {
        WireQuantity::Number(n) => Ok(n),
        WireQuantity::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Filter the All Orders table.
///
/// `search` matches product name, buyer email or buyer name, ignoring case.
pub fn filter_orders<'a>(
    orders: &'a [Order],
    search: &str,
    status: Option<OrderStatus>,
) -> Vec<&'a Order> {
    let needle = search.to_lowercase();
    orders
        .iter()
        .filter(|o| {
            needle.is_empty()
                || field_contains(Some(o.product_name.as_str()), &needle)
                || field_contains(Some(o.email.as_str()), &needle)
                || field_contains(o.buyer_name.as_deref(), &needle)
        })
        .filter(|o| status.map_or(true, |s| o.status() == s))
        .collect()
}
