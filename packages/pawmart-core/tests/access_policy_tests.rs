//! Access policy tests
//!
//! Each gated area gets the same three checks:
//! 1. the intended role is allowed
//! 2. a signed-in role below it is sent to the dashboard
//! 3. a guest is sent to login

use pawmart_core::access::{
    authorize_path, evaluate, menu_for, Capability, DenyReason, Role, RouteRef, Session,
};

// ============================================================================
// Rule table
// ============================================================================

#[test]
fn user_requesting_seller_is_sent_to_dashboard() {
    let decision = evaluate(Role::User, Capability::Seller);
    assert!(!decision.allowed);
    assert_eq!(decision.redirect_to, Some(RouteRef::DashboardHome));
    assert_eq!(decision.reason, Some(DenyReason::InsufficientRole));
}

#[test]
fn admin_has_seller_capability() {
    assert!(evaluate(Role::Admin, Capability::Seller).allowed);
}

#[test]
fn unrecognized_role_is_treated_as_guest() {
    let unknown = evaluate(Role::from_session("unrecognized-role"), Capability::Admin);
    let guest = evaluate(Role::Guest, Capability::Admin);
    assert_eq!(unknown, guest);
    assert!(!unknown.allowed);
    assert_eq!(unknown.redirect_to, Some(RouteRef::Login));
}

#[test]
fn full_decision_matrix() {
    use Capability as C;
    use Role as R;

    let expected: &[(R, C, Option<RouteRef>)] = &[
        (R::Guest, C::Public, None),
        (R::Guest, C::Authenticated, Some(RouteRef::Login)),
        (R::Guest, C::Seller, Some(RouteRef::Login)),
        (R::Guest, C::Admin, Some(RouteRef::Login)),
        (R::User, C::Public, None),
        (R::User, C::Authenticated, None),
        (R::User, C::Seller, Some(RouteRef::DashboardHome)),
        (R::User, C::Admin, Some(RouteRef::DashboardHome)),
        (R::Seller, C::Public, None),
        (R::Seller, C::Authenticated, None),
        (R::Seller, C::Seller, None),
        (R::Seller, C::Admin, Some(RouteRef::DashboardHome)),
        (R::Admin, C::Public, None),
        (R::Admin, C::Authenticated, None),
        (R::Admin, C::Seller, None),
        (R::Admin, C::Admin, None),
    ];

    for (role, capability, redirect) in expected {
        let decision = evaluate(*role, *capability);
        assert_eq!(decision.allowed, redirect.is_none(), "{role} / {capability}");
        assert_eq!(decision.redirect_to, *redirect, "{role} / {capability}");
        assert_eq!(decision.required, *capability);
    }
}

// ============================================================================
// Routes
// ============================================================================

#[test]
fn seller_pages() {
    assert!(authorize_path(Role::Seller, "/dashboard/my-listings").allowed);
    assert_eq!(
        authorize_path(Role::User, "/dashboard/my-listings").redirect_to,
        Some(RouteRef::DashboardHome)
    );
    assert_eq!(
        authorize_path(Role::Guest, "/dashboard/my-listings").redirect_to,
        Some(RouteRef::Login)
    );
}

#[test]
fn admin_pages() {
    for path in ["/dashboard/admin", "/dashboard/manage-users", "/dashboard/all-orders"] {
        assert!(authorize_path(Role::Admin, path).allowed, "{path}");
        assert_eq!(
            authorize_path(Role::Seller, path).reason,
            Some(DenyReason::InsufficientRole),
            "{path}"
        );
        assert_eq!(
            authorize_path(Role::Guest, path).reason,
            Some(DenyReason::NotAuthenticated),
            "{path}"
        );
    }
}

#[test]
fn public_pages_open_to_guests() {
    for path in ["/", "/pets-supplies", "/listings/abc123", "/category-filtered-product/Pets"] {
        assert!(authorize_path(Role::Guest, path).allowed, "{path}");
    }
}

// ============================================================================
// Sessions
// ============================================================================

#[test]
fn session_from_backend_role() {
    let session = Session::authenticated("seller@example.com", Some("seller"));
    assert!(session.can(Capability::Seller).check().is_ok());
    assert_eq!(menu_for(session.role).len(), 2);

    let tampered = Session::authenticated("x@example.com", Some("ADMINISTRATOR"));
    assert_eq!(tampered.role, Role::Guest);
    assert!(menu_for(tampered.role).is_empty());
}
