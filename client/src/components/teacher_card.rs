//! Card for one teacher in the directory.

use leptos::prelude::*;
use market::types::Teacher;

/// `"7 years"` / `"1 year"`, or nothing when the backend did not say.
pub fn experience_label(years: Option<u32>) -> Option<String> {
    years.map(|y| if y == 1 { "1 year".to_owned() } else { format!("{y} years") })
}

pub fn rate_label(rate: Option<f64>) -> Option<String> {
    rate.map(|r| format!("{r:.2}/hr"))
}

#[component]
pub fn TeacherCard(teacher: Teacher) -> impl IntoView {
    let subjects = teacher.subjects.join(", ");
    let experience = experience_label(teacher.experience_years);
    let rate = rate_label(teacher.hourly_rate);

    view! {
        <article class="teacher-card">
            <h3 class="teacher-card__name">{teacher.name}</h3>
            <p class="teacher-card__subjects">{subjects}</p>
            <p class="teacher-card__meta">
                {teacher.city.map(|city| view! { <span class="teacher-card__city">{city}</span> })}
                {experience.map(|label| view! { <span class="teacher-card__experience">{label}</span> })}
                {rate.map(|label| view! { <span class="teacher-card__rate">{label}</span> })}
            </p>
            {teacher.bio.map(|bio| view! { <p class="teacher-card__bio">{bio}</p> })}
            {teacher.email.map(|email| {
                let mailto = format!("mailto:{email}");
                view! { <a class="teacher-card__contact" href=mailto>"Contact"</a> }
            })}
        </article>
    }
}

#[cfg(test)]
#[path = "teacher_card_test.rs"]
mod teacher_card_test;
