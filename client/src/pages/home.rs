//! `/`: send the visitor to the dashboard for their role.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use market::guard::{GuardState, RoleGuard, SIGN_IN_PATH, UNAUTHORIZED_PATH, landing_path};

use crate::components::require_role::use_guard;
use crate::components::skeleton::Skeleton;

/// Redirect target once the guard has settled, `None` while resolving.
pub fn home_target(state: &GuardState) -> Option<&'static str> {
    match state {
        GuardState::Resolving => None,
        GuardState::Allowed(role) => Some(landing_path(*role)),
        GuardState::DeniedNoSession => Some(SIGN_IN_PATH),
        GuardState::DeniedWrongRole => Some(UNAUTHORIZED_PATH),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_guard(RoleGuard::any_role());

    move || match home_target(&state.get()) {
        Some(path) => view! { <Redirect path=path/> }.into_any(),
        None => view! { <Skeleton/> }.into_any(),
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;
