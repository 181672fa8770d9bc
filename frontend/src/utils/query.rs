use serde::{Deserialize, Serialize};

use super::error::*;
use crate::routes::find_by_path;

/// Query of the login page, remembers where the user was headed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl LoginQuery {
    pub fn new(redirect: impl Into<String>) -> Self {
        Self {
            redirect: Some(redirect.into()),
        }
    }

    /// Parse a query string, with or without the leading `?`.
    pub fn parse(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        serde_qs::from_str(query).context("parsing login query")
    }

    /// `?redirect=...`, or an empty string when there is nothing to remember
    pub fn to_query_string(&self) -> Result<String> {
        let query = serde_qs::to_string(self).context("encoding login query")?;
        Ok(if query.is_empty() {
            query
        } else {
            format!("?{query}")
        })
    }

    /// The redirect target if it names a route of the app.
    ///
    /// Absolute and protocol-relative urls are dropped so the login page
    /// cannot be used to bounce users to another site.
    pub fn target(&self) -> Option<&str> {
        let target = self.redirect.as_deref()?;
        let in_app = target.starts_with('/')
            && !target.starts_with("//")
            && !target.contains('\\')
            && find_by_path(target).is_some();
        in_app.then_some(target)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keeps_destination_with_query() {
        let query = LoginQuery::new("/checkin?day=3");
        let encoded = query.to_query_string().unwrap();
        assert!(encoded.starts_with("?redirect="));

        let parsed = LoginQuery::parse(&encoded).unwrap();
        assert_eq!(parsed.target(), Some("/checkin?day=3"));
    }

    #[test]
    fn empty_query() {
        assert_eq!(LoginQuery::default().to_query_string().unwrap(), "");
        let parsed = LoginQuery::parse("").unwrap();
        assert_eq!(parsed.target(), None);
    }

    #[test]
    fn rejects_external_targets() {
        for target in ["https://evil.example", "//evil.example", "/\\evil", ""] {
            assert_eq!(LoginQuery::new(target).target(), None, "{target}");
        }
        assert_eq!(LoginQuery::new("/index").target(), Some("/index"));
    }

    #[test]
    fn rejects_unknown_routes() {
        assert_eq!(LoginQuery::new("/nowhere").target(), None);
        assert_eq!(LoginQuery::new("/checkin/").target(), Some("/checkin/"));
    }
}
