use serde::{Deserialize, Serialize};

use super::errors::AccessDenied;
use super::policy::{evaluate, Decision};
use super::role::{Capability, Role};

/// Snapshot of the viewer's identity, owned by the caller.
///
/// Built from the auth provider's user and the role stored on the backend's
/// user record. The core never mutates or caches it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Session {
    pub email: Option<String>,
    pub role: Role,
}

impl Session {
    pub fn guest() -> Self {
        Self::default()
    }

    /// A signed-in viewer. A missing or blank backend role reads as `user`;
    /// an unrecognized one fails closed to `guest`.
    pub fn authenticated(email: impl Into<String>, role: Option<&str>) -> Self {
        Self {
            email: Some(email.into()),
            role: Role::from_stored(role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_authenticated()
    }

    pub fn is_seller(&self) -> bool {
        self.role.is_seller()
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Start a capability check:
    ///
    /// ```rust
    /// use pawmart_core::access::{Capability, Session};
    ///
    /// let result = Session::guest().can(Capability::Seller).check();
    /// assert!(result.is_err());
    /// ```
    pub fn can(&self, capability: Capability) -> CapabilityCheck {
        CapabilityCheck {
            role: self.role,
            capability,
        }
    }
}

/// Builder returned by [`Session::can`].
#[derive(Debug, Clone, Copy)]
pub struct CapabilityCheck {
    role: Role,
    capability: Capability,
}

impl CapabilityCheck {
    pub fn decision(self) -> Decision {
        evaluate(self.role, self.capability)
    }

    pub fn check(self) -> Result<(), AccessDenied> {
        self.decision().into_result()
    }
}
