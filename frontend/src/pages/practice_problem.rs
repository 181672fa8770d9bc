use leptos::*;

#[component]
pub fn PracticeProblem() -> impl IntoView {
    view! {
        <section class="p-4 text-text">
            <h1 class="text-2xl">"Practice Problems"</h1>
        </section>
    }
}
