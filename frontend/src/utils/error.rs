use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, ThisError, Serialize, Deserialize)]
#[error("{kind} : {context}")]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Self {
            kind,
            context: context.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, ThisError, Serialize, Deserialize)]
pub enum ErrorKind {
    /// api error
    #[error("Bad Request")]
    BadRequest,
    #[error("Unauthenticated")]
    Unauthenticated,
    #[error("Permission Denied")]
    PermissionDenied,

    /// runtime error
    #[error("Network Error")]
    Network,
    /// browser storage refused a write, usually quota or private mode
    #[error("Storage Error")]
    Storage,
    /// a stored or configured value could not be decoded
    #[error("Malformed Value")]
    Malformed,
    #[error("Malformed Url")]
    MalformedUrl,
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        Self {
            kind: ErrorKind::Malformed,
            context: value.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(value: toml::de::Error) -> Self {
        Self {
            kind: ErrorKind::Malformed,
            context: value.to_string(),
        }
    }
}

impl From<serde_qs::Error> for Error {
    fn from(value: serde_qs::Error) -> Self {
        Self {
            kind: ErrorKind::MalformedUrl,
            context: value.to_string(),
        }
    }
}

pub trait Context {
    type Output;
    fn context(self, c: impl AsRef<str>) -> Self::Output;
}

impl<E> Context for E
where
    E: Into<Error>,
{
    type Output = Error;

    fn context(self, c: impl AsRef<str>) -> Self::Output {
        let mut err: Error = self.into();
        err.context.push_str("\n  >");
        err.context.push_str(c.as_ref());
        err
    }
}

impl<T, E> Context for Result<T, E>
where
    E: Into<Error>,
{
    type Output = Result<T>;

    fn context(self, c: impl AsRef<str>) -> Self::Output {
        self.map_err(|err| err.context(c))
    }
}
