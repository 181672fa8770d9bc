use leptos::*;
use leptos_router::*;

use crate::{
    components::*,
    routes::{INDEX, REGISTER},
    utils::{api::*, *},
};

/// Store the session handed out by the backend and leave the auth pages.
///
/// Goes back to the page the guard bounced the user from, or to the index.
pub(crate) fn enter_session(
    session: &SessionContext,
    resp: AuthResponse,
    query: &LoginQuery,
    navigate: impl Fn(&str, NavigateOptions),
) -> Result<()> {
    session
        .set_auth(&resp.token, &resp.user)
        .context("saving session")?;
    let target = query.target().unwrap_or(INDEX.path);
    navigate(
        target,
        NavigateOptions {
            replace: true,
            ..Default::default()
        },
    );
    Ok(())
}

/// Query of the current location, malformed ones are ignored
pub(crate) fn use_login_query() -> LoginQuery {
    let query = use_location().query.get_untracked().to_query_string();
    LoginQuery::parse(&query).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring login query");
        LoginQuery::default()
    })
}

#[component]
pub fn Login() -> impl IntoView {
    let (username, set_username) = create_signal("".to_owned());
    let (password, set_password) = create_signal("".to_owned());
    let session = use_session();
    let navigate = use_navigate();
    let query = use_login_query();

    let submit = create_action(move |_: &()| {
        let request = LoginRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        let session = session.clone();
        let navigate = navigate.clone();
        let query = query.clone();
        async move {
            let client =
                ApiClient::new(frontend_config(), session.session().clone());
            let resp = client.login(&request).await?;
            enter_session(&session, resp, &query, navigate)
        }
    });
    let error = move || {
        submit
            .value()
            .get()
            .and_then(|res| res.err())
            .map(|err| err.kind.to_string())
    };

    view! {
        <div class="h-full flex items-center justify-center">
            <form
                class="flex flex-col flex-nowrap justify-center items-center rounded-xl bg-lighten border-2 border-primary"
                on:submit=move |e| {
                    e.prevent_default();
                    submit.dispatch(());
                }
            >
                <div class="p-4 flex flex-col">
                    <label for="username" class="text-text pb-2">
                        Username
                    </label>
                    <TextInput id="username" get=username set=set_username/>
                </div>
                <div class="p-4 flex flex-col">
                    <label for="password" class="text-text pb-2">
                        Password
                    </label>
                    <TextInput kind="password" id="password" get=password set=set_password/>
                </div>
                <p class="text-red-500 px-4">{error}</p>
                <div class="p-4 w-full">
                    <Button
                        kind="submit"
                        class="w-full disabled:opacity-70"
                        disabled=submit.pending()
                    >
                        Login
                    </Button>
                </div>
                <A href=REGISTER.path class="text-primary pb-4">"No account? Register"</A>
            </form>
        </div>
    }
}
