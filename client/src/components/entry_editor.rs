//! Modal editor for one education or experience entry.
//!
//! DESIGN
//! ======
//! Saving submits an explicit `EntryCommand` through the `entry_save` slice.
//! Deletes use `entry_delete`, so they never race a save.
//! The modal closes only once that command succeeds; on failure it stays open
//! with the server's message so nothing typed is lost.

use leptos::prelude::*;
use market::types::{EntryCommand, EntryKind, ProfileEntry};
use market::{ApiClient, Status};

use crate::components::resource_notice::ResourceNotice;
use crate::state::remote::{dispatch, dispatch_then};
use crate::state::slices::MarketSlices;
use crate::util::forms::EntryForm;

/// Command for saving `form`: update when editing a saved entry, else create.
///
/// # Errors
///
/// Returns the form's user-facing message when a field does not convert.
pub fn save_command(kind: EntryKind, editing: Option<&ProfileEntry>, form: &EntryForm) -> Result<EntryCommand, &'static str> {
    let draft = form.to_draft()?;
    Ok(match editing {
        Some(entry) => EntryCommand::Update { kind, id: entry.id, draft },
        None => EntryCommand::Create { kind, draft },
    })
}

/// Submit `command` into its slice and reload the matching list once it is
/// applied.
pub fn submit(api: &ApiClient, slices: MarketSlices, command: EntryCommand, then: impl FnOnce() + 'static) {
    let kind = command.kind();
    let slice = slices.command_slice(&command);
    let request_api = api.clone();
    let reload_api = api.clone();
    dispatch_then(slice, async move { request_api.submit_entry(&command).await }, move |status| {
        if status == Status::Succeeded {
            dispatch(slices.entries(kind), async move { reload_api.entries(kind).await });
            then();
        }
    });
}

#[component]
pub fn EntryEditor(kind: EntryKind, initial: Option<ProfileEntry>, on_close: Callback<()>) -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();

    let form = RwSignal::new(initial.as_ref().map(EntryForm::from_entry).unwrap_or_default());
    let problem = RwSignal::new(None::<&'static str>);
    let submitted = RwSignal::new(false);
    let heading = match (&initial, kind) {
        (Some(_), EntryKind::Education) => "Edit education",
        (Some(_), EntryKind::Experience) => "Edit experience",
        (None, EntryKind::Education) => "Add education",
        (None, EntryKind::Experience) => "Add experience",
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if slices.entry_save.with_untracked(|r| r.is_loading()) {
            return;
        }
        let command = match form.with_untracked(|f| save_command(kind, initial.as_ref(), f)) {
            Ok(command) => command,
            Err(message) => {
                problem.set(Some(message));
                return;
            }
        };
        problem.set(None);
        submitted.set(true);
        submit(&api, slices, command, move || on_close.run(()));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let field = move |label: &'static str, get: fn(&EntryForm) -> String, set: fn(&mut EntryForm, String)| {
        view! {
            <label class="dialog__field">
                <span>{label}</span>
                <input
                    class="input"
                    type="text"
                    prop:value=move || form.with(get)
                    on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <form
                class="dialog dialog--entry"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                on:submit=on_save
                tabindex="0"
            >
                <h2>{heading}</h2>
                {field("Title", |f| f.title.clone(), |f, v| f.title = v)}
                {field("Organization", |f| f.organization.clone(), |f, v| f.organization = v)}
                {field("Start year", |f| f.start_year.clone(), |f, v| f.start_year = v)}
                {field("End year", |f| f.end_year.clone(), |f, v| f.end_year = v)}
                <label class="dialog__field">
                    <span>"Description"</span>
                    <textarea
                        class="input"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>

                {move || problem.get().map(|message| view! { <p class="dialog__error">{message}</p> })}
                <Show when=move || submitted.get()>
                    <ResourceNotice slice=slices.entry_save/>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || slices.entry_save.with(|r| r.is_loading())
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(test)]
#[path = "entry_editor_test.rs"]
mod entry_editor_test;
