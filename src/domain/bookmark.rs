/// Bookmark entity: a titled link

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{require_text, BookmarkId, DomainError};

const MAX_TITLE_LEN: usize = 200;
const MAX_URL_LEN: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl Bookmark {
    /// Create a bookmark, defaulting the scheme to `https://`
    pub fn new(title: &str, url: &str) -> Result<Self, DomainError> {
        let title = require_text("Bookmark title", title, MAX_TITLE_LEN)?;
        let url = require_text("Bookmark URL", url, MAX_URL_LEN)?;

        Ok(Self {
            id: BookmarkId::new(),
            title,
            url: normalize_url(&url),
            created_at: Utc::now(),
        })
    }

    /// Host name without a leading `www.`, or the raw URL when it doesn't parse
    pub fn domain(&self) -> String {
        match Url::parse(&self.url) {
            Ok(parsed) => match parsed.host_str() {
                Some(host) => host.strip_prefix("www.").unwrap_or(host).to_string(),
                None => self.url.clone(),
            },
            Err(_) => self.url.clone(),
        }
    }
}

/// Prefix `https://` unless the URL already names http or https
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
