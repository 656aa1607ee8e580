//! Read-only helpers behind the dashboard tables: user accounts and orders.

pub mod orders;
pub mod users;

pub use orders::{filter_orders, Order, OrderStatus};
pub use users::{filter_users, role_counts, AccountStatus, RoleCounts, UserAccount};

/// Case-insensitive substring test over an optional field.
fn field_contains(field: Option<&str>, needle_lower: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(needle_lower))
}
