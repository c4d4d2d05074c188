//! Searchable teacher directory used by the school and recruiter dashboards.
//!
//! DESIGN
//! ======
//! Subject, city and free-text search go to the backend as query parameters.
//! The minimum-experience box filters the fetched list in memory, so typing
//! in it never issues a request.

use leptos::prelude::*;
use market::ApiClient;
use market::types::{TeacherFilter, TeacherQuery};

use crate::components::resource_notice::ResourceNotice;
use crate::components::teacher_card::TeacherCard;
use crate::state::remote::dispatch;
use crate::state::slices::MarketSlices;
use crate::util::forms::{min_experience, teacher_query};

#[component]
pub fn TeacherDirectory() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let slices = expect_context::<MarketSlices>();
    let teachers = slices.teachers;

    let subject = RwSignal::new(String::new());
    let city = RwSignal::new(String::new());
    let search = RwSignal::new(String::new());
    let min_years = RwSignal::new(String::new());

    let load = Callback::new(move |query: TeacherQuery| {
        let api = api.clone();
        dispatch(teachers, async move { api.teachers(&query).await });
    });
    load.run(TeacherQuery::default());

    let current_query = move || teacher_query(&subject.get_untracked(), &city.get_untracked(), &search.get_untracked());
    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        load.run(current_query());
    };
    let on_retry = Callback::new(move |()| load.run(current_query()));

    let visible = move || {
        let filter = TeacherFilter { min_experience: min_experience(&min_years.get()), ..TeacherFilter::default() };
        teachers.with(|r| r.data().map(|all| filter.apply(all).into_iter().cloned().collect::<Vec<_>>()))
    };

    view! {
        <section class="teacher-directory">
            <form class="teacher-directory__search" on:submit=on_search>
                <input
                    class="input"
                    type="search"
                    placeholder="Name, subject or keyword"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="Subject"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
                <input
                    class="input"
                    type="text"
                    placeholder="City"
                    prop:value=move || city.get()
                    on:input=move |ev| city.set(event_target_value(&ev))
                />
                <input
                    class="input input--narrow"
                    type="number"
                    min="0"
                    placeholder="Min. years"
                    prop:value=move || min_years.get()
                    on:input=move |ev| min_years.set(event_target_value(&ev))
                />
                <button class="btn" type="submit" disabled=move || teachers.with(|r| r.is_loading())>
                    "Search"
                </button>
            </form>

            <ResourceNotice slice=teachers on_retry=on_retry/>

            {move || match visible() {
                None => ().into_any(),
                Some(list) if list.is_empty() => {
                    view! { <p class="teacher-directory__empty">"No teachers match."</p> }.into_any()
                }
                Some(list) => {
                    view! {
                        <div class="teacher-directory__grid">
                            {list.into_iter().map(|teacher| view! { <TeacherCard teacher/> }).collect_view()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
