//! Top bar for signed-in pages: title, section links, identity and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use market::ApiClient;
use market::guard::SIGN_IN_PATH;

use crate::state::slices::{MarketSlices, sign_out};

#[component]
pub fn NavBar(
    title: &'static str,
    /// `(href, label)` pairs rendered after the title.
    #[prop(default = Vec::new())]
    links: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();
    let navigate = use_navigate();

    let profile = api.session().profile();
    let identity = profile.name.or(profile.email).unwrap_or_else(|| "Signed in".to_owned());

    let on_logout = move |_| {
        sign_out(&api, slices);
        navigate(SIGN_IN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            <nav class="toolbar__links">
                {links
                    .into_iter()
                    .map(|(href, label)| view! { <a class="toolbar__link" href=href>{label}</a> })
                    .collect_view()}
            </nav>
            <span class="toolbar__spacer"></span>
            <span class="toolbar__self">{identity}</span>
            <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
