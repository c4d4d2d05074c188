//! Role dashboards: `/teacher`, `/school`, `/recruiter`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router wraps each dashboard in `RequireRole` for its one role, so
//! these components assume a signed-in account of the right kind.

use leptos::prelude::*;
use market::ApiClient;
use market::types::{CurrentUser, Question};

use crate::components::address_book::AddressBook;
use crate::components::nav_bar::NavBar;
use crate::components::resource_notice::ResourceNotice;
use crate::components::teacher_directory::TeacherDirectory;
use crate::state::remote::dispatch;
use crate::state::slices::MarketSlices;

/// Greeting for the account summary.
pub fn greeting(user: &CurrentUser) -> String {
    match (&user.name, &user.email) {
        (Some(name), _) if !name.trim().is_empty() => format!("Welcome back, {}", name.trim()),
        (_, Some(email)) => format!("Signed in as {email}"),
        _ => "Welcome back".to_owned(),
    }
}

#[component]
fn AccountSummary() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let current_user = expect_context::<MarketSlices>().current_user;
    dispatch(current_user, async move { api.current_user().await });

    view! {
        <section class="account-summary">
            <ResourceNotice slice=current_user/>
            {move || current_user.with(|r| r.data().map(|user| view! { <h1>{greeting(user)}</h1> }))}
        </section>
    }
}

#[component]
fn QuestionBank() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let questions = expect_context::<MarketSlices>().questions;
    let load = Callback::new(move |()| {
        let api = api.clone();
        dispatch(questions, async move { api.questions().await });
    });
    load.run(());

    let row = |question: Question| {
        view! {
            <li class="question-bank__item">
                <span>{question.text}</span>
                {question.subject.map(|s| view! { <span class="question-bank__subject">{s}</span> })}
                <span class="question-bank__options">{format!("{} options", question.options.len())}</span>
            </li>
        }
    };

    view! {
        <section class="question-bank">
            <h2>"Question bank"</h2>
            <ResourceNotice slice=questions on_retry=load/>
            <ul>
                {move || {
                    questions.with(|r| r.data().cloned().unwrap_or_default()).into_iter().map(row).collect_view()
                }}
            </ul>
        </section>
    }
}

#[component]
pub fn TeacherDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <NavBar title="Teacher" links=vec![("/profile", "My profile")]/>
            <AccountSummary/>
            <QuestionBank/>
        </div>
    }
}

#[component]
pub fn SchoolDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <NavBar title="School" links=vec![("/teachers", "Find teachers")]/>
            <AccountSummary/>
            <AddressBook/>
        </div>
    }
}

#[component]
pub fn RecruiterDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <NavBar title="Recruiter" links=vec![("/teachers", "Find teachers")]/>
            <AccountSummary/>
            <TeacherDirectory/>
        </div>
    }
}

#[cfg(test)]
#[path = "dashboards_test.rs"]
mod dashboards_test;
