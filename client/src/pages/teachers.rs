//! `/teachers`: full-page directory for schools and recruiters.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::components::teacher_directory::TeacherDirectory;

#[component]
pub fn TeachersPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <NavBar title="Find teachers" links=vec![("/", "Dashboard")]/>
            <TeacherDirectory/>
        </div>
    }
}
