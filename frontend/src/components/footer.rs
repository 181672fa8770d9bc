use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="w-full mt-auto p-2 flex flex-col justify-center items-center">
            <p class="text-text text-sm">"AI Tutor · practice, check in, ask"</p>
        </footer>
    }
}
