use leptos::*;
use leptos_router::*;

use crate::routes::{INDEX, LOGIN};

#[component]
pub fn Welcome() -> impl IntoView {
    view! {
        <section class="h-full flex flex-col items-center justify-center gap-4 text-text">
            <h1 class="text-3xl">"AI Tutor"</h1>
            <p>"Practice problems, daily check in and a tutor to talk to."</p>
            <div class="flex flex-row gap-4">
                <A href=LOGIN.path class="text-primary">"Login"</A>
                <A href=INDEX.path class="text-primary">"Start"</A>
            </div>
        </section>
    }
}
