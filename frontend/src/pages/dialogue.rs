use leptos::*;

#[component]
pub fn Dialogue() -> impl IntoView {
    view! {
        <section class="p-4 text-text">
            <h1 class="text-2xl">"Dialogue"</h1>
        </section>
    }
}
