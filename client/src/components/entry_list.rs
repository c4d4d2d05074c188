//! One profile section (education or experience) with add/edit/delete.

use leptos::prelude::*;
use market::ApiClient;
use market::types::{EntryCommand, EntryKind, ProfileEntry};

use crate::components::entry_editor::{EntryEditor, submit};
use crate::components::resource_notice::ResourceNotice;
use crate::state::remote::dispatch;
use crate::state::slices::MarketSlices;

#[derive(Clone, Debug, PartialEq)]
enum Editing {
    New,
    Existing(ProfileEntry),
}

/// `"2016 – present"`, `"2010 – 2013"`.
pub fn year_span(start: i32, end: Option<i32>) -> String {
    match end {
        Some(end) => format!("{start} – {end}"),
        None => format!("{start} – present"),
    }
}

#[component]
pub fn EntryList(kind: EntryKind) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();
    let entries = slices.entries(kind);
    let editing = RwSignal::new(None::<Editing>);

    let load = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            dispatch(entries, async move { api.entries(kind).await });
        }
    });
    load.run(());

    let on_delete = Callback::new(move |id: i64| {
        if !slices.entry_delete.with_untracked(|r| r.is_loading()) {
            submit(&api, slices, EntryCommand::Delete { kind, id }, || {});
        }
    });
    let deleting = move || slices.entry_delete.with(|r| r.is_loading());
    let on_close = Callback::new(move |()| editing.set(None));
    let heading = match kind {
        EntryKind::Education => "Education",
        EntryKind::Experience => "Experience",
    };

    view! {
        <section class="entry-list">
            <header class="entry-list__header">
                <h2>{heading}</h2>
                <button class="btn" on:click=move |_| editing.set(Some(Editing::New))>
                    "+ Add"
                </button>
            </header>

            <ResourceNotice slice=entries on_retry=load/>
            <ResourceNotice slice=slices.entry_delete/>

            <ul class="entry-list__items">
                {move || {
                    entries
                        .with(|r| r.data().cloned().unwrap_or_default())
                        .into_iter()
                        .map(|entry| {
                            let id = entry.id;
                            let span = year_span(entry.start_year, entry.end_year);
                            let for_edit = entry.clone();
                            view! {
                                <li class="entry-list__item">
                                    <strong>{entry.title}</strong>
                                    <span class="entry-list__org">{entry.organization}</span>
                                    <span class="entry-list__years">{span}</span>
                                    {entry.description.map(|d| view! { <p>{d}</p> })}
                                    <button
                                        class="btn btn--small"
                                        on:click=move |_| editing.set(Some(Editing::Existing(for_edit.clone())))
                                    >
                                        "Edit"
                                    </button>
                                    <button
                                        class="btn btn--small btn--danger"
                                        disabled=deleting
                                        on:click=move |_| on_delete.run(id)
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            {move || {
                editing
                    .get()
                    .map(|mode| {
                        let initial = match mode {
                            Editing::New => None,
                            Editing::Existing(entry) => Some(entry),
                        };
                        view! { <EntryEditor kind initial on_close/> }
                    })
            }}
        </section>
    }
}

#[cfg(test)]
#[path = "entry_list_test.rs"]
mod entry_list_test;
