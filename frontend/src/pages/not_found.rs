use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="h-full flex items-center justify-center text-text">
            <h1 class="text-2xl">"404 · Page not found"</h1>
        </section>
    }
}
