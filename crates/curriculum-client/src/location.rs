//! Where fragments are served from
//!
//! Fragments live at `{origin}{base_path}curriculum/{encoded name}`. The base
//! path is the configured one when set; otherwise, a page served from a
//! GitHub Pages project site (`https://user.github.io/repo/...`) uses its
//! first path segment; otherwise `/`.

use url::Url;

use crate::error::{FetchError, Result};
use crate::source::INDEX_FILE;

const CURRICULUM_DIR: &str = "curriculum/";

/// Resolve the base path once at startup.
pub fn resolve_base_path(configured: Option<&str>, page_url: Option<&Url>) -> String {
    if let Some(configured) = configured.map(str::trim).filter(|p| !p.is_empty() && *p != "/") {
        return normalize(configured);
    }

    page_url
        .filter(|url| url.host_str().map(|h| h.contains("github.io")).unwrap_or(false))
        .and_then(|url| first_segment(url.path()))
        .map(|segment| format!("/{}/", segment))
        .unwrap_or_else(|| "/".to_string())
}

/// `repo` for `/repo/...`; nothing unless the segment is followed by `/`
fn first_segment(path: &str) -> Option<&str> {
    let rest = path.strip_prefix('/')?;
    let end = rest.find('/')?;
    Some(&rest[..end]).filter(|s| !s.is_empty())
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", trimmed)
    }
}

/// Resolved origin and base path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    origin: String,
    base_path: String,
}

impl SourceLocation {
    pub fn new(origin: &str, base_path: &str) -> Result<Self> {
        let parsed = Url::parse(origin)
            .map_err(|e| FetchError::InvalidConfig(format!("origin {}: {}", origin, e)))?;
        if parsed.cannot_be_a_base() {
            return Err(FetchError::InvalidConfig(format!("origin {} cannot be a base", origin)));
        }

        Ok(Self {
            origin: origin.trim_end_matches('/').to_string(),
            base_path: normalize(base_path),
        })
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn index_url(&self) -> String {
        format!("{}{}{}{}", self.origin, self.base_path, CURRICULUM_DIR, INDEX_FILE)
    }

    pub fn fragment_url(&self, source_name: &str) -> String {
        format!(
            "{}{}{}{}",
            self.origin,
            self.base_path,
            CURRICULUM_DIR,
            urlencoding::encode(source_name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_configured_base_path_wins() {
        let page = url("https://someone.github.io/ita-rp/disciplines");
        assert_eq!(resolve_base_path(Some("app"), Some(&page)), "/app/");
        assert_eq!(resolve_base_path(Some("/app/"), None), "/app/");
    }

    #[test]
    fn test_github_pages_fallback() {
        let page = url("https://someone.github.io/ita-rp/disciplines");
        assert_eq!(resolve_base_path(Some("/"), Some(&page)), "/ita-rp/");
        assert_eq!(resolve_base_path(None, Some(&url("https://someone.github.io/ita-rp/"))), "/ita-rp/");
    }

    #[test]
    fn test_root_when_no_subdirectory() {
        assert_eq!(resolve_base_path(None, None), "/");
        assert_eq!(resolve_base_path(None, Some(&url("https://someone.github.io/"))), "/");
        assert_eq!(resolve_base_path(None, Some(&url("https://someone.github.io/ita-rp"))), "/");
        assert_eq!(resolve_base_path(None, Some(&url("https://example.com/ita-rp/x"))), "/");
    }

    #[test]
    fn test_fragment_url_is_encoded() {
        let location = SourceLocation::new("https://example.com/", "/ita-rp/").unwrap();
        assert_eq!(
            location.fragment_url("AT-17 - 17 - Vetores.json"),
            "https://example.com/ita-rp/curriculum/AT-17%20-%2017%20-%20Vetores.json"
        );
        assert_eq!(location.index_url(), "https://example.com/ita-rp/curriculum/index.json");
    }

    #[test]
    fn test_invalid_origin() {
        assert!(matches!(
            SourceLocation::new("not a url", "/"),
            Err(FetchError::InvalidConfig(_))
        ));
    }
}
