use thiserror::Error;

use super::policy::DenyReason;
use super::role::Capability;
use super::routes::RouteRef;

/// A denied [`Decision`](super::Decision), for callers that want `?`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    #[error("Authentication required for {required} access")]
    NotAuthenticated {
        required: Capability,
        redirect_to: RouteRef,
    },

    #[error("{required} access required")]
    InsufficientRole {
        required: Capability,
        redirect_to: RouteRef,
    },
}

impl AccessDenied {
    pub fn new(reason: DenyReason, required: Capability, redirect_to: RouteRef) -> Self {
        match reason {
            DenyReason::NotAuthenticated => AccessDenied::NotAuthenticated {
                required,
                redirect_to,
            },
            DenyReason::InsufficientRole => AccessDenied::InsufficientRole {
                required,
                redirect_to,
            },
        }
    }

    pub fn redirect_to(&self) -> RouteRef {
        match self {
            AccessDenied::NotAuthenticated { redirect_to, .. }
            | AccessDenied::InsufficientRole { redirect_to, .. } => *redirect_to,
        }
    }
}
