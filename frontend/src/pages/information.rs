use leptos::*;

#[component]
pub fn Information() -> impl IntoView {
    view! {
        <section class="p-4 text-text">
            <h1 class="text-2xl">"Student Information"</h1>
        </section>
    }
}
