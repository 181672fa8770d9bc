use gloo::net::http::{Request, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{config::FrontendConfig, error::*, session::*};

pub const LOGIN_ENDPOINT: &str = "/api/users/login/";
pub const REGISTER_ENDPOINT: &str = "/api/users/register/";
pub const PROFILE_ENDPOINT: &str = "/api/users/me/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub real_name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
    pub password2: String,
}

/// Body the backend answers a successful login or register with
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Thin client for the tutor backend.
///
/// Only assembles urls and headers, every request carries whatever
/// `Authorization` the session currently yields.
#[derive(Clone)]
pub struct ApiClient<S> {
    config: FrontendConfig,
    session: Session<S>,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(config: FrontendConfig, session: Session<S>) -> Self {
        Self { config, session }
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.config.api_server.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// Headers attached to every request
    pub fn headers(&self) -> Vec<(String, String)> {
        let mut headers: Vec<_> = self
            .session
            .auth_headers_with_scheme(&self.config.token_scheme)
            .into_iter()
            .collect();
        headers.push(("Accept".to_owned(), "application/json".to_owned()));
        headers.sort();
        headers
    }

    fn with_headers(&self, mut builder: RequestBuilder) -> RequestBuilder {
        for (key, value) in self.headers() {
            builder = builder.header(&key, &value);
        }
        builder
    }

    pub fn get(&self, endpoint: &str) -> RequestBuilder {
        self.with_headers(Request::get(&self.url(endpoint)))
    }

    pub fn post(&self, endpoint: &str) -> RequestBuilder {
        self.with_headers(Request::post(&self.url(endpoint)))
    }

    /// Exchange credentials for a token, the caller stores the session.
    #[tracing::instrument(skip_all, fields(username = %request.username))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let resp = self
            .post(LOGIN_ENDPOINT)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        decode(resp).await.context("login")
    }

    #[tracing::instrument(skip_all, fields(username = %request.username))]
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<AuthResponse> {
        let resp = self
            .post(REGISTER_ENDPOINT)
            .json(request)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        decode(resp).await.context("register")
    }

    /// Profile of the token holder, used to refresh a stale stored profile
    pub async fn profile(&self) -> Result<User> {
        let resp = self
            .get(PROFILE_ENDPOINT)
            .send()
            .await
            .map_err(network_error)?;
        decode(resp).await.context("fetching profile")
    }
}

fn network_error(err: gloo::net::Error) -> Error {
    Error::new(ErrorKind::Network, err.to_string())
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        let kind = match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::Unauthenticated,
            403 => ErrorKind::PermissionDenied,
            _ => ErrorKind::Network,
        };
        tracing::warn!(status, "api request failed");
        return Err(Error::new(kind, body));
    }
    resp.json().await.map_err(|err| {
        Error::new(ErrorKind::Malformed, err.to_string())
    })
}

#[cfg(test)]
mod test {
    use super::*;

    fn client(session: Session<MemoryStorage>) -> ApiClient<MemoryStorage> {
        let config = FrontendConfig {
            api_server: "http://tutor.local:8000/".to_owned(),
            token_scheme: "Token".to_owned(),
        };
        ApiClient::new(config, session)
    }

    #[test]
    fn joins_urls() {
        let client = client(Session::new(MemoryStorage::new()));
        assert_eq!(
            client.url(LOGIN_ENDPOINT),
            "http://tutor.local:8000/api/users/login/"
        );
        assert_eq!(client.url("checkin/today/"), "http://tutor.local:8000/checkin/today/");
    }

    #[test]
    fn logged_out_sends_no_authorization() {
        let client = client(Session::new(MemoryStorage::new()));
        assert_eq!(
            client.headers(),
            vec![("Accept".to_owned(), "application/json".to_owned())]
        );
    }

    #[test]
    fn logged_in_sends_token() {
        let session = Session::new(MemoryStorage::new());
        session.set_auth("tok123", &User::new(Role::Student)).unwrap();
        let headers = client(session).headers();
        assert!(headers.contains(&(
            "Authorization".to_owned(),
            "Token tok123".to_owned()
        )));
    }

    #[test]
    fn auth_response_shape() {
        let body = r#"{
            "user": {"id": 1, "username": "li4", "real_name": "Li Si",
                     "role": "teacher", "email": "li@example.org"},
            "token": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b"
        }"#;
        let resp: AuthResponse = serde_json::from_str(body).unwrap();
        assert!(resp.user.is_teacher());
        assert_eq!(resp.user.display_name(), "Li Si");
        assert_eq!(resp.token.len(), 40);
    }

    #[test]
    fn register_request_encodes_role() {
        let request = RegisterRequest {
            username: "s1".to_owned(),
            real_name: "Student One".to_owned(),
            email: "s1@example.org".to_owned(),
            role: Role::Student,
            password: "pw".to_owned(),
            password2: "pw".to_owned(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["role"], "student");
    }
}
