use leptos::*;

use crate::utils::*;

/// Re-fetch the profile of the stored token and store it with the token.
///
/// Keeps role changes made on the backend from going unnoticed until the
/// next login. Nothing happens when logged out.
async fn refresh_profile(session: SessionContext) -> Result<()> {
    let Some(token) = session.session().token() else {
        return Ok(());
    };
    let client = ApiClient::new(frontend_config(), session.session().clone());
    let user = client.profile().await?;
    session.set_auth(&token, &user).context("refreshing profile")
}

#[component]
pub fn Index() -> impl IntoView {
    let session = use_session();

    let refresh = {
        let session = session.clone();
        create_action(move |_: &()| refresh_profile(session.clone()))
    };
    refresh.dispatch(());
    create_effect(move |_| {
        if let Some(Err(err)) = refresh.value().get() {
            tracing::warn!(%err, "keeping stored profile");
        }
    });

    let greeting = move || match session.current_user() {
        Some(user) => format!("Welcome back, {}", user.display_name()),
        None => "Welcome back".to_owned(),
    };

    view! {
        <section class="p-4 text-text">
            <h1 class="text-2xl">{greeting}</h1>
        </section>
    }
}
