use leptos::*;
use leptos_router::*;

use super::login::{enter_session, use_login_query};
use crate::{
    components::*,
    routes::LOGIN,
    utils::{api::*, *},
};

#[component]
pub fn Register() -> impl IntoView {
    let (username, set_username) = create_signal("".to_owned());
    let (real_name, set_real_name) = create_signal("".to_owned());
    let (email, set_email) = create_signal("".to_owned());
    let (password, set_password) = create_signal("".to_owned());
    let (password2, set_password2) = create_signal("".to_owned());
    let (teacher, set_teacher) = create_signal(false);
    let session = use_session();
    let navigate = use_navigate();
    let query = use_login_query();

    let submit = create_action(move |_: &()| {
        let request = RegisterRequest {
            username: username.get_untracked(),
            real_name: real_name.get_untracked(),
            email: email.get_untracked(),
            role: if teacher.get_untracked() {
                Role::Teacher
            } else {
                Role::Student
            },
            password: password.get_untracked(),
            password2: password2.get_untracked(),
        };
        let session = session.clone();
        let navigate = navigate.clone();
        let query = query.clone();
        async move {
            if request.password != request.password2 {
                return Err(Error::new(
                    ErrorKind::BadRequest,
                    "passwords do not match",
                ));
            }
            let client =
                ApiClient::new(frontend_config(), session.session().clone());
            let resp = client.register(&request).await?;
            enter_session(&session, resp, &query, navigate)
        }
    });
    let error = move || {
        submit
            .value()
            .get()
            .and_then(|res| res.err())
            .map(|err| err.to_string())
    };

    let field = |id: &'static str,
                 label: &'static str,
                 kind: &'static str,
                 get: ReadSignal<String>,
                 set: WriteSignal<String>| {
        view! {
            <div class="p-2 flex flex-col">
                <label for=id class="text-text pb-2">
                    {label}
                </label>
                <TextInput kind id get set/>
            </div>
        }
    };

    view! {
        <div class="h-full flex items-center justify-center">
            <form
                class="flex flex-col flex-nowrap justify-center items-center rounded-xl bg-lighten border-2 border-primary p-2"
                on:submit=move |e| {
                    e.prevent_default();
                    submit.dispatch(());
                }
            >
                {field("username", "Username", "text", username, set_username)}
                {field("real_name", "Name", "text", real_name, set_real_name)}
                {field("email", "Email", "email", email, set_email)}
                {field("password", "Password", "password", password, set_password)}
                {field("password2", "Repeat password", "password", password2, set_password2)}
                <label class="text-text p-2">
                    <input
                        type="checkbox"
                        prop:checked=teacher
                        on:change=move |e| set_teacher.set(event_target_checked(&e))
                    />
                    " I am a teacher"
                </label>
                <p class="text-red-500 px-4">{error}</p>
                <div class="p-2 w-full">
                    <Button kind="submit" class="w-full" disabled=submit.pending()>
                        Register
                    </Button>
                </div>
                <A href=LOGIN.path class="text-primary pb-2">"Have an account? Login"</A>
            </form>
        </div>
    }
}
