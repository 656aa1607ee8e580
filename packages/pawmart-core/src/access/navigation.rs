//! Dashboard sidebar sections, chosen by role.

use serde::Serialize;

use super::role::{Capability, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Main,
    Seller,
    Admin,
}

impl SectionKind {
    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::Main => "Main",
            SectionKind::Seller => "Seller",
            SectionKind::Admin => "Admin",
        }
    }

    fn required(&self) -> Capability {
        match self {
            SectionKind::Main => Capability::Authenticated,
            SectionKind::Seller => Capability::Seller,
            SectionKind::Admin => Capability::Admin,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: &'static str,
    pub to: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuSection {
    pub kind: SectionKind,
    pub items: Vec<MenuItem>,
}

const MAIN_ITEMS: &[MenuItem] = &[
    MenuItem { label: "Overview", to: "/dashboard" },
    MenuItem { label: "My Profile", to: "/dashboard/profile" },
    MenuItem { label: "My Orders", to: "/dashboard/my-orders" },
];

const SELLER_ITEMS: &[MenuItem] = &[
    MenuItem { label: "My Listings", to: "/dashboard/my-listings" },
    MenuItem { label: "Add Listing", to: "/dashboard/add-listing" },
];

const ADMIN_ITEMS: &[MenuItem] = &[
    MenuItem { label: "Admin Overview", to: "/dashboard/admin" },
    MenuItem { label: "Manage Users", to: "/dashboard/manage-users" },
    MenuItem { label: "All Orders", to: "/dashboard/all-orders" },
];

/// Sidebar sections visible to `role`, in display order. Guests get none.
pub fn menu_for(role: Role) -> Vec<MenuSection> {
    [
        (SectionKind::Main, MAIN_ITEMS),
        (SectionKind::Seller, SELLER_ITEMS),
        (SectionKind::Admin, ADMIN_ITEMS),
    ]
    .into_iter()
    .filter(|(kind, _)| role.satisfies(kind.required()))
    .map(|(kind, items)| MenuSection {
        kind,
        items: items.to_vec(),
    })
    .collect()
}
