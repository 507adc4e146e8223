//! Link wire types and input validation

use serde::{Deserialize, Serialize};
use url::Url;

use crate::shared::error::SharedError;
use crate::shared::LinkId;

/// A link as returned by the API, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkView {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    pub position: i32,
    pub clicks: i64,
}

/// Body of `POST /links` and `PUT /links/{id}`
///
/// Fields default to empty so a missing field is reported as a validation
/// error rather than a body-parsing failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
}

/// A link input that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidLink {
    pub title: String,
    pub url: String,
}

impl LinkInput {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// Check that the title is non-empty and the URL is absolute http(s)
    ///
    /// The URL is stored as typed (trimmed), not in normalised form.
    pub fn validate(&self) -> Result<ValidLink, SharedError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(SharedError::validation("title", "Title is required"));
        }

        parse_link_url(&self.url)?;

        Ok(ValidLink {
            title: title.to_string(),
            url: self.url.trim().to_string(),
        })
    }
}

/// Parse a link target; only absolute `http` and `https` URLs are accepted
pub fn parse_link_url(raw: &str) -> Result<Url, SharedError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(SharedError::validation("url", "URL is required"));
    }

    let url = Url::parse(raw)
        .map_err(|_| SharedError::validation("url", "URL must be a valid absolute URL"))?;

    match url.scheme() {
        "http" | "https" if url.host().is_some() => Ok(url),
        _ => Err(SharedError::validation("url", "URL must use http or https")),
    }
}

/// Body of `POST /links/reorder`: every link id in the desired display order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderRequest {
    #[serde(default)]
    pub link_ids: Vec<LinkId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_https_link() {
        let link = LinkInput::new("  My site ", "https://x.test").validate().unwrap();
        assert_eq!(link.title, "My site");
        assert_eq!(link.url, "https://x.test");
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let err = LinkInput::new("   ", "https://x.test").validate().unwrap_err();
        assert_eq!(err.field(), Some("title"));
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        for url in ["", "not a url", "/relative/path", "mailto:me@x.test", "javascript:alert(1)", "ftp://x.test"] {
            let err = LinkInput::new("Title", url).validate().unwrap_err();
            assert_eq!(err.field(), Some("url"), "input {url:?}");
        }
    }

    #[test]
    fn test_link_input_missing_fields_default_to_empty() {
        let input: LinkInput = serde_json::from_str("{}").unwrap();
        assert!(input.title.is_empty());
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_reorder_request_uses_camel_case() {
        let request: ReorderRequest = serde_json::from_str(r#"{"linkIds":[3,1,2]}"#).unwrap();
        assert_eq!(request.link_ids, vec![3, 1, 2]);
    }
}
