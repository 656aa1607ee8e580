use serde::{Deserialize, Serialize};

use super::errors::AccessDenied;
use super::role::{Capability, Role};
use super::routes::RouteRef;

/// Why a request was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DenyReason {
    NotAuthenticated,
    InsufficientRole,
}

/// Outcome of one access check. `redirect_to` and `reason` are set only on deny.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub allowed: bool,
    pub redirect_to: Option<RouteRef>,
    pub reason: Option<DenyReason>,
    pub required: Capability,
}

impl Decision {
    fn allow(required: Capability) -> Self {
        Self {
            allowed: true,
            redirect_to: None,
            reason: None,
            required,
        }
    }

    fn deny(required: Capability, reason: DenyReason, redirect_to: RouteRef) -> Self {
        Self {
            allowed: false,
            redirect_to: Some(redirect_to),
            reason: Some(reason),
            required,
        }
    }

    pub fn into_result(self) -> Result<(), AccessDenied> {
        match (self.allowed, self.reason, self.redirect_to) {
            (true, _, _) => Ok(()),
            (false, Some(reason), Some(redirect_to)) => {
                Err(AccessDenied::new(reason, self.required, redirect_to))
            }
            // Unreachable through `evaluate`, kept closed anyway.
            (false, _, _) => Err(AccessDenied::new(
                DenyReason::NotAuthenticated,
                self.required,
                RouteRef::Login,
            )),
        }
    }
}

/// Decide whether `role` may use something that requires `required`.
///
/// Rules, first match wins:
/// 1. public is always allowed
/// 2. guests are sent to login
/// 3. authenticated is allowed for any signed-in role
/// 4. seller is allowed for sellers and admins, users go to the dashboard
/// 5. admin is allowed for admins only, everyone else goes to the dashboard
pub fn evaluate(role: Role, required: Capability) -> Decision {
    let decision = match (required, role) {
        (Capability::Public, _) => Decision::allow(required),
        (_, Role::Guest) => {
            Decision::deny(required, DenyReason::NotAuthenticated, RouteRef::Login)
        }
        (Capability::Authenticated, _) => Decision::allow(required),
        (Capability::Seller, Role::Seller | Role::Admin) => Decision::allow(required),
        (Capability::Admin, Role::Admin) => Decision::allow(required),
        (Capability::Seller | Capability::Admin, _) => {
            Decision::deny(required, DenyReason::InsufficientRole, RouteRef::DashboardHome)
        }
    };

    if !decision.allowed {
        tracing::debug!(%role, %required, reason = ?decision.reason, "Access denied");
    }

    decision
}
