//! Account creation for teachers, schools and recruiters.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use market::guard::{SIGN_IN_PATH, landing_path};
use market::types::RegisterResponse;
use market::{ApiClient, ErrorInfo, Role};

use crate::state::slices::MarketSlices;
use crate::util::forms::registration;

/// Signed in straight away when the backend issued a token, otherwise off to
/// the sign-in page.
pub fn after_register_path(response: &RegisterResponse, chosen: Role) -> &'static str {
    match response.token {
        Some(_) => landing_path(response.role.unwrap_or(chosen)),
        None => SIGN_IN_PATH,
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match registration(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(form) => form,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let api = api.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match api.register(&form).await {
                Ok(response) => {
                    slices.clear();
                    navigate(after_register_path(&response, form.role), NavigateOptions::default());
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
                <p class="login-card__subtitle">"Create an account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name or organisation"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <select class="login-input" on:change=move |ev| role.set(event_target_value(&ev))>
                        <option value="" selected=move || role.get().is_empty()>
                            "I am a..."
                        </option>
                        {Role::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.as_str()>{r.as_str()}</option> })
                            .collect_view()}
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=SIGN_IN_PATH>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;
