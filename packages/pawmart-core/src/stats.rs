//! Numbers for the dashboard overview cards and charts.

use serde::Serialize;

use crate::directory::{Order, OrderStatus};
use crate::listings::{is_adoption, Category, Listing};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub category: Category,
    pub count: usize,
}

/// A seller's own listings and orders at a glance.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerOverview {
    pub total_listings: usize,
    pub total_orders: usize,
    pub total_revenue: f64,
    pub free_adoptions: usize,
    /// One entry per category, in [`Category::variants`] order.
    pub by_category: Vec<CategoryCount>,
}

impl SellerOverview {
    pub fn compute(listings: &[Listing], orders: &[Order]) -> Self {
        let by_category = Category::variants()
            .iter()
            .map(|&category| CategoryCount {
                category,
                count: listings.iter().filter(|l| l.category == category).count(),
            })
            .collect();

        Self {
            total_listings: listings.len(),
            total_orders: orders.len(),
            total_revenue: orders.iter().map(Order::total).sum(),
            free_adoptions: listings.iter().filter(|l| is_adoption(l)).count(),
            by_category,
        }
    }

    /// Categories with at least one listing, for the pie chart.
    pub fn non_empty_categories(&self) -> impl Iterator<Item = &CategoryCount> {
        self.by_category.iter().filter(|c| c.count > 0)
    }
}

/// Header cards of the All Orders page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub total_revenue: f64,
    pub pending: usize,
    pub completed: usize,
}

impl OrderSummary {
    pub fn compute(orders: &[Order]) -> Self {
        Self {
            total_revenue: orders.iter().map(Order::total).sum(),
            pending: orders
                .iter()
                .filter(|o| o.status() == OrderStatus::Pending)
                .count(),
            completed: orders
                .iter()
                .filter(|o| o.status() == OrderStatus::Completed)
                .count(),
        }
    }
}
