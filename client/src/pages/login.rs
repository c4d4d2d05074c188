//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use market::guard::landing_path;
use market::types::LoginResponse;
use market::{ApiClient, ErrorInfo};

use crate::state::slices::MarketSlices;
use crate::util::forms::credentials;

/// Where to go after signing in. Without a role in the response, the home
/// route resolves it from the backend.
pub fn after_login_path(response: &LoginResponse) -> &'static str {
    response.role.map_or("/", landing_path)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let creds = credentials(&email.get(), &password.get());
        busy.set(true);
        info.set("Signing in...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.login(&creds).await {
                Ok(response) => {
                    slices.clear();
                    navigate(after_login_path(&response), NavigateOptions::default());
                }
                Err(e) => {
                    info.set(ErrorInfo::from(e).message);
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HireTeach"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? "
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
