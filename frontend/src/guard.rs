//! Navigation guard, runs before any view of the route table is shown.
use leptos::*;
use leptos_router::*;

use crate::{
    routes::{RouteDescriptor, INDEX, LOGIN},
    utils::*,
};

/// What the guard needs to know about the route being entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target<'a> {
    /// path with query, kept for the login redirect
    pub full_path: &'a str,
    pub requires_auth: bool,
    pub requires_teacher: bool,
}

impl RouteDescriptor {
    pub fn target<'a>(&self, full_path: &'a str) -> Target<'a> {
        Target {
            full_path,
            requires_auth: self.requires_auth,
            requires_teacher: self.requires_teacher,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Redirect(Redirect),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub to: &'static str,
    pub query: Option<LoginQuery>,
}

impl Redirect {
    pub fn login(from: &str) -> Self {
        Self {
            to: LOGIN.path,
            query: Some(LoginQuery::new(from)),
        }
    }

    pub fn index() -> Self {
        Self {
            to: INDEX.path,
            query: None,
        }
    }

    /// Url to navigate to, dropping the query if it cannot be encoded
    pub fn url(&self) -> String {
        let Some(query) = &self.query else {
            return self.to.to_owned();
        };
        match query.to_query_string() {
            Ok(query) => format!("{}{query}", self.to),
            Err(err) => {
                tracing::warn!(%err, "dropping redirect query");
                self.to.to_owned()
            }
        }
    }
}

/// Decide whether the session may enter `to`.
///
/// Checks run in order and the first failing one picks the redirect:
/// no token goes to login, a non teacher on a teacher route goes to index.
/// `from` is the last path let through, only logged, the decision never
/// depends on it.
pub fn evaluate<S: SessionStore>(
    to: &Target,
    from: Option<&str>,
    session: &Session<S>,
) -> Decision {
    let decision = if to.requires_auth && !session.is_authenticated() {
        Decision::Redirect(Redirect::login(to.full_path))
    } else if to.requires_teacher
        && !session.current_user().is_some_and(|user| user.is_teacher())
    {
        Decision::Redirect(Redirect::index())
    } else {
        Decision::Proceed
    };
    tracing::debug!(to = to.full_path, ?from, ?decision, "navigation guard");
    decision
}

/// What [`Guarded`] does with a decision: show the view or leave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Navigate { url: String, replace: bool },
}

impl Decision {
    /// Redirects replace the history entry, so going back does not land on
    /// the refused route again.
    pub fn outcome(&self) -> Outcome {
        match self {
            Decision::Proceed => Outcome::Render,
            Decision::Redirect(redirect) => Outcome::Navigate {
                url: redirect.url(),
                replace: true,
            },
        }
    }
}

/// Path of the last route a [`Guarded`] let through, shared by all of them
#[derive(Clone, Copy)]
pub struct LastPath(StoredValue<Option<String>>);

pub fn provide_last_path() {
    provide_context(LastPath(store_value(None)));
}

/// Renders `route` once the guard lets the current session in, otherwise
/// replaces the history entry with the redirect.
///
/// Re-evaluated on every location change and session write.
#[component]
pub fn Guarded(route: RouteDescriptor) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();
    let last_path = use_context::<LastPath>();

    let full_path = create_memo(move |_| {
        format!(
            "{}{}",
            location.pathname.get(),
            location.query.get().to_query_string()
        )
    });
    let outcome = create_memo(move |_| {
        session.track();
        let full_path = full_path.get();
        let from = last_path.and_then(|last| last.0.get_value());
        let outcome =
            evaluate(&route.target(&full_path), from.as_deref(), session.session())
                .outcome();
        if let (Outcome::Render, Some(last)) = (&outcome, last_path) {
            last.0.set_value(Some(full_path));
        }
        outcome
    });

    create_effect(move |_| {
        if let Outcome::Navigate { url, replace } = outcome.get() {
            tracing::info!(route = route.name, %url, "redirecting");
            navigate(
                &url,
                NavigateOptions {
                    replace,
                    ..Default::default()
                },
            );
        }
    });

    move || match outcome.get() {
        Outcome::Render => (route.view)(),
        Outcome::Navigate { .. } => ().into_view(),
    }
}
