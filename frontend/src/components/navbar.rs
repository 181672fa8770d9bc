use leptos::*;
use leptos_router::*;

use crate::{
    components::{Button, ButtonVariant},
    routes::{CHECK_IN, DIALOGUE, INDEX, INFORMATION, LOGIN, PRACTICE_PROBLEM, REGISTER, WELCOME},
    utils::*,
};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let user = {
        let session = session.clone();
        create_memo(move |_| session.current_user())
    };
    let logged_in = {
        let session = session.clone();
        create_memo(move |_| session.is_authenticated())
    };
    let is_teacher = move || user.with(|u| u.as_ref().is_some_and(User::is_teacher));
    let name = move || {
        user.with(|u| u.as_ref().map(|u| u.display_name().to_owned()))
            .unwrap_or_default()
    };

    let logout = move |_| {
        session.clear_auth();
        navigate(WELCOME.path, Default::default());
    };

    view! {
        <nav class="bg-background sticky top-0 p-2 flex flex-row justify-between border-b-2 border-primary">
            <div class="flex flex-row flex-nowrap">
                <A href=WELCOME.path class="text-text text-lg px-5">
                    "AI Tutor"
                </A>
                <ul class="flex flex-row flex-nowrap justify-between items-center">
                    <Show when=move || logged_in.get()>
                        <NavLink href=INDEX.path label="Home"/>
                        <NavLink href=DIALOGUE.path label="Dialogue"/>
                        <NavLink href=PRACTICE_PROBLEM.path label="Practice"/>
                        <NavLink href=CHECK_IN.path label="Check In"/>
                    </Show>
                    <Show when=is_teacher>
                        <NavLink href=INFORMATION.path label="Students"/>
                    </Show>
                </ul>
            </div>
            <div class="flex flex-row flex-nowrap justify-between items-center">
                <Show
                    when=move || logged_in.get()
                    fallback=|| {
                        view! {
                            <NavLink href=LOGIN.path label="Login"/>
                            <NavLink href=REGISTER.path label="Register"/>
                        }
                    }
                >
                    <span class="text-text text-base px-6">{name}</span>
                    <Button variant=ButtonVariant::Secondary class="px-6" on:click=logout.clone()>
                        "Logout"
                    </Button>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li class="list-none transition-opacity duration-300 hover:opacity-60">
            <A href=href class="text-text text-base px-6">
                {label}
            </A>
        </li>
    }
}
