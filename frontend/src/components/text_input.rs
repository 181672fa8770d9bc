use leptos::*;
use tailwind_fuse::tw_join;

#[component]
pub fn TextInput(
    #[prop(into, default = "text".to_owned())] kind: String,
    #[prop(into)] get: Signal<String>,
    set: WriteSignal<String>,
    #[prop(into)] id: String,
    #[prop(into, default = "".into())] class: String,
) -> impl IntoView {
    view! {
        <input
            class=tw_join!(
                class,
                "text-text outline-none p-2 bg-background border-2 rounded-md border-background focus:border-primary transition-colors",
            )
            id=id
            type=kind
            prop:value=get
            on:input=move |e| set.set(event_target_value(&e))
        />
    }
}
