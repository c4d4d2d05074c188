//! Role-gated wrapper for protected routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route renders through [`RequireRole`]. The guard runs once
//! per mount: no token means an immediate redirect to `/login` without a
//! network call; otherwise one current-user lookup decides between the
//! protected content and `/unauthorized`. A skeleton shows meanwhile.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use market::guard::{AuthorizationDecision, GuardState, RoleGuard, SIGN_IN_PATH};
use market::{ApiClient, Role, RoleResolver};

use crate::components::skeleton::Skeleton;

/// Run `guard` for the current session and expose its state.
pub fn use_guard(guard: RoleGuard) -> ReadSignal<GuardState> {
    let api = expect_context::<ApiClient>();
    let initial = guard.begin(api.session());
    let (state, set_state) = signal(initial.clone());
    if initial == GuardState::Resolving {
        leptos::task::spawn_local(async move {
            let outcome = api.resolve_current_user().await;
            set_state.set(guard.decide(outcome));
        });
    }
    state
}

/// Render `children` only for a signed-in user whose role is in `allow`.
#[component]
pub fn RequireRole(#[prop(into)] allow: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let state = use_guard(RoleGuard::new(allow));

    move || match state.get().decision() {
        AuthorizationDecision::Allow => children().into_any(),
        AuthorizationDecision::Pending => view! { <Skeleton lines=4/> }.into_any(),
        denied => {
            let path = denied.redirect_path().unwrap_or(SIGN_IN_PATH);
            view! { <Redirect path=path/> }.into_any()
        }
    }
}
