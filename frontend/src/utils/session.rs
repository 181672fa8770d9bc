use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use leptos::*;
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{config::frontend_config, error::*};

/// Storage key of the raw token string
pub const TOKEN_KEY: &str = "authToken";
/// Storage key of the json encoded [`User`]
pub const USER_KEY: &str = "user";

/// String key/value store holding the session.
///
/// Writes go through `&self`, the browser store is a tab-wide singleton.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str);
}

impl<S: SessionStore + ?Sized> SessionStore for Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

impl<S: SessionStore + ?Sized> SessionStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}

/// `window.localStorage`
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStorage;

impl SessionStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::raw().get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::raw().set_item(key, value).map_err(|err| {
            Error::new(ErrorKind::Storage, format!("{err:?}"))
                .context(format!("writing `{key}`"))
        })
    }

    fn remove(&self, key: &str) {
        use gloo::storage::{LocalStorage, Storage};
        LocalStorage::delete(key);
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage(RefCell<HashMap<String, String>>);

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.0.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Teacher,
    Student,
    Other(String),
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "teacher" => Role::Teacher,
            "student" => Role::Student,
            _ => Role::Other(value),
        }
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        match value {
            Role::Teacher => "teacher".to_owned(),
            Role::Student => "student".to_owned(),
            Role::Other(s) => s,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Teacher => write!(f, "teacher"),
            Role::Student => write!(f, "student"),
            Role::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Profile of the logged in user
///
/// Fields the backend adds later are kept in `extra` and written back as-is.
/// Only `role` has to decode, the other known fields become `None` when
/// their type is off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub real_name: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl User {
    pub fn new(role: Role) -> Self {
        Self {
            id: None,
            username: None,
            real_name: None,
            email: None,
            role,
            extra: Map::new(),
        }
    }

    pub fn is_teacher(&self) -> bool {
        self.role == Role::Teacher
    }

    /// Name shown in the navbar
    pub fn display_name(&self) -> &str {
        self.real_name
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("user")
    }
}

/// Read and write access to the stored session.
///
/// Nothing is cached, every call goes back to the store.
#[derive(Debug, Clone, Default)]
pub struct Session<S> {
    store: S,
}

impl<S: SessionStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Stored profile, `None` if missing or not decodable.
    pub fn current_user(&self) -> Option<User> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                tracing::warn!(%err, "stored user profile is malformed");
                None
            }
        }
    }

    /// Persist token and profile together.
    ///
    /// When the second write fails the token is removed again, so readers
    /// never see a token without the profile that came with it.
    #[tracing::instrument(skip_all, level = "debug")]
    pub fn set_auth(&self, token: &str, user: &User) -> Result<()> {
        let user = serde_json::to_string(user).context("encoding user")?;
        let previous = self.store.get(TOKEN_KEY);
        self.store.set(TOKEN_KEY, token)?;
        if let Err(err) = self.store.set(USER_KEY, &user) {
            tracing::warn!(%err, "rolling back token write");
            match previous {
                Some(previous) => {
                    if self.store.set(TOKEN_KEY, &previous).is_err() {
                        self.store.remove(TOKEN_KEY);
                    }
                }
                None => self.store.remove(TOKEN_KEY),
            }
            return Err(err);
        }
        tracing::info!("session stored");
        Ok(())
    }

    pub fn clear_auth(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        tracing::info!("session cleared");
    }

    /// `Authorization` header for the api client, empty when logged out.
    pub fn auth_headers(&self) -> HashMap<String, String> {
        self.auth_headers_with_scheme(&frontend_config().token_scheme)
    }

    pub fn auth_headers_with_scheme(
        &self,
        scheme: &str,
    ) -> HashMap<String, String> {
        self.token()
            .map(|token| {
                ("Authorization".to_owned(), format!("{scheme} {token}"))
            })
            .into_iter()
            .collect()
    }
}

/// Session shared through leptos context.
///
/// `revision` is bumped on every write so views reading the session re-run.
#[derive(Clone)]
pub struct SessionContext {
    session: Session<Rc<dyn SessionStore>>,
    revision: RwSignal<u64>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            session: Session::new(store),
            revision: create_rw_signal(0),
        }
    }

    /// Subscribe the running effect to session writes.
    pub fn track(&self) {
        self.revision.track();
    }

    /// Untracked access to the session
    pub fn session(&self) -> &Session<Rc<dyn SessionStore>> {
        &self.session
    }

    pub fn is_authenticated(&self) -> bool {
        self.track();
        self.session.is_authenticated()
    }

    pub fn current_user(&self) -> Option<User> {
        self.track();
        self.session.current_user()
    }

    pub fn set_auth(&self, token: &str, user: &User) -> Result<()> {
        let res = self.session.set_auth(token, user);
        self.revision.update(|r| *r += 1);
        res
    }

    pub fn clear_auth(&self) {
        self.session.clear_auth();
        self.revision.update(|r| *r += 1);
    }
}

pub fn provide_session(store: Rc<dyn SessionStore>) {
    provide_context(SessionContext::new(store));
}

/// Session from context, falls back to browser storage when none provided.
pub fn use_session() -> SessionContext {
    use_context().unwrap_or_else(|| {
        let ctx = SessionContext::new(Rc::new(BrowserStorage));
        provide_context(ctx.clone());
        ctx
    })
}

#[cfg(test)]
mod test {
    use super::*;

    /// Store that refuses writes to one key
    struct RejectKey(MemoryStorage, &'static str);

    impl SessionStore for RejectKey {
        fn get(&self, key: &str) -> Option<String> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            if key == self.1 {
                return Err(Error::new(ErrorKind::Storage, "quota exceeded"));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) {
            self.0.remove(key)
        }
    }

    fn teacher() -> User {
        User::new(Role::Teacher)
    }

    #[test]
    fn empty_store_is_logged_out() {
        let session = Session::new(MemoryStorage::new());
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.current_user(), None);
        assert!(session.auth_headers_with_scheme("Token").is_empty());
    }

    #[test]
    fn set_auth_then_headers() {
        let session = Session::new(MemoryStorage::new());
        session.set_auth("tok123", &teacher()).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok123"));
        assert!(session.current_user().unwrap().is_teacher());

        let headers = session.auth_headers_with_scheme("Token");
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["Authorization"], "Token tok123");
    }

    #[test]
    fn default_scheme_is_token() {
        let session = Session::new(MemoryStorage::new());
        session.set_auth("tok123", &teacher()).unwrap();
        assert_eq!(session.auth_headers()["Authorization"], "Token tok123");
    }

    #[test]
    fn stored_formats() {
        let store = MemoryStorage::new();
        let session = Session::new(&store);
        session.set_auth("abc", &User::new(Role::Student)).unwrap();

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("abc"));
        let user: Value =
            serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(user["role"], "student");
    }

    #[test]
    fn clear_auth_removes_both() {
        let session = Session::new(MemoryStorage::new());
        session.set_auth("tok123", &teacher()).unwrap();
        session.clear_auth();

        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);
        assert!(session.auth_headers_with_scheme("Token").is_empty());
    }

    #[test]
    fn malformed_profile_is_absent() {
        let store = MemoryStorage::new();
        store.set(USER_KEY, "{not json").unwrap();
        store.set(TOKEN_KEY, "tok").unwrap();
        let session = Session::new(&store);

        assert_eq!(session.current_user(), None);
        assert!(session.is_authenticated());
    }

    #[test]
    fn profile_without_role_is_absent() {
        let store = MemoryStorage::new();
        store.set(USER_KEY, r#"{"username":"li"}"#).unwrap();
        assert_eq!(Session::new(&store).current_user(), None);
    }

    #[test]
    fn role_decides_even_if_other_fields_are_off() {
        let store = MemoryStorage::new();
        let session = Session::new(&store);
        for raw in [
            r#"{"id":"u-7","role":"teacher"}"#,
            r#"{"username":42,"role":"teacher"}"#,
            r#"{"email":null,"real_name":["a"],"role":"teacher"}"#,
        ] {
            store.set(USER_KEY, raw).unwrap();
            let user = session.current_user().unwrap();
            assert!(user.is_teacher(), "{raw}");
        }
        let user = session.current_user().unwrap();
        assert_eq!(user.real_name, None);
        assert_eq!(user.email, None);
    }

    #[test]
    fn empty_token_is_logged_out() {
        let store = MemoryStorage::new();
        store.set(TOKEN_KEY, "").unwrap();
        assert!(!Session::new(&store).is_authenticated());
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = r#"{"id":7,"username":"wang","role":"assistant","grade":3}"#;
        let store = MemoryStorage::new();
        store.set(USER_KEY, raw).unwrap();
        let session = Session::new(&store);

        let user = session.current_user().unwrap();
        assert_eq!(user.id, Some(7));
        assert_eq!(user.role, Role::Other("assistant".to_owned()));
        assert!(!user.is_teacher());
        assert_eq!(user.extra["grade"], 3);

        session.set_auth("t", &user).unwrap();
        let stored: Value =
            serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(stored["role"], "assistant");
        assert_eq!(stored["grade"], 3);
    }

    #[test]
    fn failed_profile_write_rolls_back_token() {
        let store = RejectKey(MemoryStorage::new(), USER_KEY);
        let session = Session::new(&store);

        let err = session.set_auth("tok", &teacher()).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Storage);
        assert!(!session.is_authenticated());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn failed_profile_write_restores_previous_token() {
        let store = RejectKey(MemoryStorage::new(), USER_KEY);
        store.0.set(TOKEN_KEY, "old").unwrap();
        let session = Session::new(&store);

        assert!(session.set_auth("new", &teacher()).is_err());
        assert_eq!(session.token().as_deref(), Some("old"));
    }

    #[test]
    fn failed_token_write_leaves_profile_untouched() {
        let store = RejectKey(MemoryStorage::new(), TOKEN_KEY);
        let session = Session::new(&store);

        assert!(session.set_auth("tok", &teacher()).is_err());
        assert_eq!(store.get(USER_KEY), None);
    }

    #[test]
    fn display_name_prefers_real_name() {
        let mut user = User::new(Role::Student);
        assert_eq!(user.display_name(), "user");
        user.username = Some("zhang3".to_owned());
        assert_eq!(user.display_name(), "zhang3");
        user.real_name = Some("Zhang San".to_owned());
        assert_eq!(user.display_name(), "Zhang San");
    }
}
