use leptos::*;

use crate::utils::*;

#[component]
pub fn CheckIn() -> impl IntoView {
    let session = use_session();
    // teachers open check ins, students answer them
    let hint = move || {
        if session.current_user().is_some_and(|user| user.is_teacher()) {
            "Start a check in for your class."
        } else {
            "Check in for today."
        }
    };

    view! {
        <section class="p-4 text-text">
            <h1 class="text-2xl">"Check In"</h1>
            <p>{hint}</p>
        </section>
    }
}
