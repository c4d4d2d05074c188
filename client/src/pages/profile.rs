//! `/profile`: a teacher's public details plus education and experience.

use leptos::prelude::*;
use market::ApiClient;
use market::types::EntryKind;

use crate::components::entry_list::EntryList;
use crate::components::nav_bar::NavBar;
use crate::components::resource_notice::ResourceNotice;
use crate::state::remote::dispatch;
use crate::state::slices::MarketSlices;
use crate::util::forms::profile_patch;

#[component]
fn ProfileDetails() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let current_user = expect_context::<MarketSlices>().current_user;

    let name = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let subjects = RwSignal::new(String::new());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let patch = profile_patch(&name.get(), &bio.get(), &city.get(), &subjects.get());
        let api = api.clone();
        // The PATCH response is the updated user record.
        dispatch(current_user, async move { api.update_profile(&patch).await });
    };

    view! {
        <form class="profile-details" on:submit=on_save>
            <h2>"Public details"</h2>
            <p class="profile-details__hint">"Leave a field blank to keep its current value."</p>
            <input
                class="input"
                type="text"
                placeholder="Display name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="input"
                type="text"
                placeholder="City"
                prop:value=move || city.get()
                on:input=move |ev| city.set(event_target_value(&ev))
            />
            <input
                class="input"
                type="text"
                placeholder="Subjects, comma separated"
                prop:value=move || subjects.get()
                on:input=move |ev| subjects.set(event_target_value(&ev))
            />
            <textarea
                class="input"
                placeholder="About you"
                prop:value=move || bio.get()
                on:input=move |ev| bio.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || current_user.with(|r| r.is_loading())>
                "Save details"
            </button>
            <ResourceNotice slice=current_user/>
        </form>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <NavBar title="My profile" links=vec![("/teacher", "Dashboard")]/>
            <ProfileDetails/>
            <EntryList kind=EntryKind::Education/>
            <EntryList kind=EntryKind::Experience/>
        </div>
    }
}
