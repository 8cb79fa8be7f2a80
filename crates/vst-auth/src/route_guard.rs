use crate::{Route, RouteAccess, SessionState};

use vst_core::ROLE_ADMIN;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Pure navigation check over the current session.
pub trait RouteGuard {
    fn check(&self, state: &SessionState) -> GuardDecision;
}

/// Requires a token to be present. Validity is not re-checked here: an
/// invalid token would already have been cleared by the resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticatedGuard;

impl RouteGuard for AuthenticatedGuard {
    fn check(&self, state: &SessionState) -> GuardDecision {
        if state.is_authenticated() {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(Route::Login)
        }
    }
}

/// Requires the administrator role.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminGuard;

impl RouteGuard for AdminGuard {
    fn check(&self, state: &SessionState) -> GuardDecision {
        if state.has_role(ROLE_ADMIN) {
            GuardDecision::Allow
        } else {
            GuardDecision::Redirect(Route::Dashboard)
        }
    }
}

impl RouteGuard for RouteAccess {
    fn check(&self, state: &SessionState) -> GuardDecision {
        match self {
            RouteAccess::Public => GuardDecision::Allow,
            RouteAccess::Authenticated => AuthenticatedGuard.check(state),
            RouteAccess::Admin => AdminGuard.check(state),
        }
    }
}
