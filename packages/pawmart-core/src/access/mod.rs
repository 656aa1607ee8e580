//! Role-gated access for PawMart routes and actions.
//!
//! The session role is resolved elsewhere (auth provider plus the backend's
//! user record). This module only consumes a snapshot of it:
//!
//! ```rust
//! use pawmart_core::access::{authorize_path, Capability, RouteRef, Session};
//!
//! let session = Session::authenticated("buyer@example.com", Some("user"));
//!
//! let decision = authorize_path(session.role, "/dashboard/add-listing");
//! assert!(!decision.allowed);
//! assert_eq!(decision.redirect_to, Some(RouteRef::DashboardHome));
//!
//! assert!(session.can(Capability::Authenticated).check().is_ok());
//! ```

mod errors;
mod navigation;
mod policy;
mod role;
mod routes;
mod session;

pub use errors::AccessDenied;
pub use navigation::{menu_for, MenuItem, MenuSection, SectionKind};
pub use policy::{evaluate, Decision, DenyReason};
pub use role::{Capability, Role};
pub use routes::{authorize_path, required_capability, RouteRef};
pub use session::{CapabilityCheck, Session};
