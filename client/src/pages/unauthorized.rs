//! Shown when a signed-in account opens a page its role cannot use.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use market::ApiClient;
use market::guard::SIGN_IN_PATH;

use crate::state::slices::{MarketSlices, sign_out};

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();
    let navigate = use_navigate();

    let on_switch = move |_| {
        sign_out(&api, slices);
        navigate(SIGN_IN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Not available"</h1>
                <p class="login-message">"Your account does not have access to that page."</p>
                <a class="login-button" href="/">"Go to my dashboard"</a>
                <button class="login-button login-button--secondary" on:click=on_switch>
                    "Sign in with another account"
                </button>
            </div>
        </div>
    }
}
