//! Static route table: which capability each application path needs.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::policy::{evaluate, Decision};
use super::role::{Capability, Role};

/// Redirect targets the policy can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteRef {
    Login,
    DashboardHome,
}

impl RouteRef {
    pub fn path(&self) -> &'static str {
        match self {
            RouteRef::Login => "/login",
            RouteRef::DashboardHome => "/dashboard",
        }
    }
}

impl fmt::Display for RouteRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Route patterns; `:name` matches exactly one non-empty segment.
const ROUTES: &[(&str, Capability)] = &[
    // Main site
    ("/", Capability::Public),
    ("/login", Capability::Public),
    ("/register", Capability::Public),
    ("/pets-supplies", Capability::Public),
    ("/category-filtered-product/:categoryName", Capability::Public),
    ("/listings/:id", Capability::Public),
    ("/about", Capability::Public),
    ("/contact", Capability::Public),
    ("/faq", Capability::Public),
    // Legacy top-level pages
    ("/my-orders", Capability::Authenticated),
    ("/add-listing", Capability::Seller),
    ("/my-listings", Capability::Seller),
    ("/update-listing/:id", Capability::Seller),
    // Dashboard
    ("/dashboard", Capability::Authenticated),
    ("/dashboard/profile", Capability::Authenticated),
    ("/dashboard/my-orders", Capability::Authenticated),
    ("/dashboard/my-listings", Capability::Seller),
    ("/dashboard/add-listing", Capability::Seller),
    ("/dashboard/update-listing/:id", Capability::Seller),
    ("/dashboard/admin", Capability::Admin),
    ("/dashboard/manage-users", Capability::Admin),
    ("/dashboard/all-orders", Capability::Admin),
];

/// Capability required by `path`.
///
/// Query strings and trailing slashes are ignored. Unknown paths are public;
/// they render the error page.
pub fn required_capability(path: &str) -> Capability {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    ROUTES
        .iter()
        .find(|(pattern, _)| pattern_matches(pattern, &segments))
        .map(|(_, capability)| *capability)
        .unwrap_or(Capability::Public)
}

/// Evaluate `role` against the capability `path` requires.
pub fn authorize_path(role: Role, path: &str) -> Decision {
    evaluate(role, required_capability(path))
}

fn pattern_matches(pattern: &str, segments: &[&str]) -> bool {
    let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
    parts.len() == segments.len()
        && parts
            .iter()
            .zip(segments)
            .all(|(part, segment)| part.starts_with(':') || part == segment)
}
