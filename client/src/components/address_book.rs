//! Saved addresses with an inline add form.

use leptos::prelude::*;
use market::types::Address;
use market::{ApiClient, Status};

use crate::components::resource_notice::ResourceNotice;
use crate::state::remote::{dispatch, dispatch_then};
use crate::state::slices::MarketSlices;
use crate::util::forms::AddressForm;

/// Single-line rendering, skipping empty parts.
pub fn address_line(address: &Address) -> String {
    [
        Some(address.line1.as_str()),
        address.line2.as_deref(),
        Some(address.city.as_str()),
        address.state.as_deref(),
        address.postal_code.as_deref(),
        address.country.as_deref(),
    ]
    .into_iter()
    .flatten()
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(", ")
}

#[component]
pub fn AddressBook() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();
    let addresses = slices.addresses;
    let form = RwSignal::new(AddressForm::default());

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            dispatch(addresses, async move { api.addresses().await });
        }
    });
    load.run(());

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if slices.address_save.with_untracked(|r| r.is_loading()) {
            return;
        }
        let address = form.with_untracked(AddressForm::to_address);
        let api = api.clone();
        dispatch_then(slices.address_save, async move { api.create_address(&address).await }, move |status| {
            if status == Status::Succeeded {
                form.set(AddressForm::default());
                load.run(());
            }
        });
    };

    let field = move |placeholder: &'static str, get: fn(&AddressForm) -> String, set: fn(&mut AddressForm, String)| {
        view! {
            <input
                class="input"
                type="text"
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <section class="address-book">
            <h2>"Addresses"</h2>
            <ResourceNotice slice=addresses on_retry=load/>
            <ul class="address-book__items">
                {move || {
                    addresses
                        .with(|r| r.data().cloned().unwrap_or_default())
                        .iter()
                        .map(|address| view! { <li>{address_line(address)}</li> })
                        .collect_view()
                }}
            </ul>

            <form class="address-book__form" on:submit=on_add>
                {field("Address line 1", |f| f.line1.clone(), |f, v| f.line1 = v)}
                {field("Address line 2", |f| f.line2.clone(), |f, v| f.line2 = v)}
                {field("City", |f| f.city.clone(), |f, v| f.city = v)}
                {field("State / region", |f| f.state.clone(), |f, v| f.state = v)}
                {field("Postal code", |f| f.postal_code.clone(), |f, v| f.postal_code = v)}
                {field("Country", |f| f.country.clone(), |f, v| f.country = v)}
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || slices.address_save.with(|r| r.is_loading())
                >
                    "Add address"
                </button>
                <ResourceNotice slice=slices.address_save/>
            </form>
        </section>
    }
}

#[cfg(test)]
#[path = "address_book_test.rs"]
mod address_book_test;
