use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::{
    components::*,
    guard::{provide_last_path, Guarded},
    pages::NotFound,
    routes::*,
    utils::*,
};

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_session(Rc::new(BrowserStorage));
    provide_last_path();

    view! {
        <Title text="AI Tutor"/>
        <div class="bg-background w-full min-h-screen flex flex-col">
            <Router>
                <Navbar/>
                <main class="grow">
                    <Routes>
                        <Route path=WELCOME.path view=|| view! { <Guarded route=WELCOME/> }/>
                        <Route path=DIALOGUE.path view=|| view! { <Guarded route=DIALOGUE/> }/>
                        <Route path=LOGIN.path view=|| view! { <Guarded route=LOGIN/> }/>
                        <Route path=REGISTER.path view=|| view! { <Guarded route=REGISTER/> }/>
                        <Route
                            path=INFORMATION.path
                            view=|| view! { <Guarded route=INFORMATION/> }
                        />
                        <Route path=CHECK_IN.path view=|| view! { <Guarded route=CHECK_IN/> }/>
                        <Route
                            path=PRACTICE_PROBLEM.path
                            view=|| view! { <Guarded route=PRACTICE_PROBLEM/> }
                        />
                        <Route path=INDEX.path view=|| view! { <Guarded route=INDEX/> }/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <Footer/>
            </Router>
        </div>
    }
}
