//! Inline loading/error line for any slice, with an optional retry button.

use leptos::prelude::*;
use market::Status;

use crate::state::remote::{RemoteSignal, status_line};

#[component]
pub fn ResourceNotice<T>(slice: RemoteSignal<T>, #[prop(optional)] on_retry: Option<Callback<()>>) -> impl IntoView
where
    T: Send + Sync + 'static,
{
    let line = move || slice.with(|r| status_line(r.status(), r.error()));
    let failed = move || slice.with(|r| r.status() == Status::Failed);

    view! {
        <Show when=move || line().is_some()>
            <p class="resource-notice" class:resource-notice--error=failed role="status">
                <span>{line}</span>
                {move || {
                    on_retry
                        .filter(|_| failed())
                        .map(|retry| {
                            view! {
                                <button class="btn resource-notice__retry" on:click=move |_| retry.run(())>
                                    "Retry"
                                </button>
                            }
                        })
                }}
            </p>
        </Show>
    }
}
