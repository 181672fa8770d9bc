use leptos::*;
use tailwind_fuse::*;

#[derive(TwVariant)]
pub enum ButtonVariant {
    #[tw(default, class = "text-background bg-primary")]
    Primary,
    #[tw(class = "text-background bg-secondary")]
    Secondary,
}

#[component]
pub fn Button(
    #[prop(into, default = "button".to_owned())] kind: String,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, optional)] disabled: MaybeSignal<bool>,
    #[prop(into, default = "".into())] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=tw_join!(
                class, variant,
                "p-2 rounded-md hover:brightness-110 disabled:cursor-not-allowed disabled:brightness-50 transition-all",
            )
            type=kind
            disabled=disabled
        >
            {children()}
        </button>
    }
}
