//! Root application component with routing and context providers.

use leptos::error::Errors;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use market::{ApiClient, Role};

use crate::components::require_role::RequireRole;
use crate::pages::{
    dashboards::{RecruiterDashboard, SchoolDashboard, TeacherDashboard},
    home::HomePage,
    login::LoginPage,
    profile::ProfilePage,
    register::RegisterPage,
    teachers::TeachersPage,
    unauthorized::UnauthorizedPage,
};
use crate::state::slices::MarketSlices;
use crate::util::connect::browser_client;

/// Root application component.
///
/// Builds the shared `ApiClient` and wraps everything below it in an error
/// boundary, so a failure anywhere shows a recoverable message instead of a
/// blank page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let client = browser_client();

    view! {
        <Stylesheet id="leptos" href="/pkg/hireteach.css"/>
        <Title text="HireTeach"/>

        <ErrorBoundary fallback=error_fallback>
            {client.map(|api| view! { <AppRoutes api/> })}
        </ErrorBoundary>
    }
}

/// Logs every captured error and offers to clear them.
fn error_fallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    for (_, error) in errors.get_untracked() {
        leptos::logging::error!("unhandled error: {error}");
    }
    let messages = {
        let errors = errors.clone();
        move || errors.get().into_iter().map(|(_, e)| view! { <li>{e.to_string()}</li> }).collect_view()
    };

    view! {
        <div class="error-page">
            <h1>"Something went wrong"</h1>
            <ul class="error-page__list">{messages}</ul>
            <button class="btn btn--primary" on:click=move |_| errors.set(Errors::default())>
                "Try again"
            </button>
        </div>
    }
}

/// Provides the client and slices, then routes.
#[component]
fn AppRoutes(api: ApiClient) -> impl IntoView {
    provide_context(api);
    provide_context(MarketSlices::new());

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=StaticSegment("teacher")
                    view=|| view! { <RequireRole allow=vec![Role::Teacher]><TeacherDashboard/></RequireRole> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <RequireRole allow=vec![Role::Teacher]><ProfilePage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("school")
                    view=|| view! { <RequireRole allow=vec![Role::School]><SchoolDashboard/></RequireRole> }
                />
                <Route
                    path=StaticSegment("recruiter")
                    view=|| view! { <RequireRole allow=vec![Role::Recruiter]><RecruiterDashboard/></RequireRole> }
                />
                <Route
                    path=StaticSegment("teachers")
                    view=|| {
                        view! {
                            <RequireRole allow=vec![Role::School, Role::Recruiter]>
                                <TeachersPage/>
                            </RequireRole>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
