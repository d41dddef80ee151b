//! Read-only HTTP client for the external blog CMS.
//!
//! The CMS is an external collaborator exposing paginated "list posts" and
//! "get post by slug" operations. Its identifiers (numeric ids, string
//! slugs) and dates pass through unchanged. There is no retry, backoff, or
//! cancellation: callers that render pages use the `_lenient` variants,
//! which degrade to an empty result instead of failing the page.

use serde::{Deserialize, Serialize};

/// A blog post as served by the CMS.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    /// Publication date exactly as the CMS formats it.
    #[serde(default)]
    pub published_at: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CmsError {
    #[error("CMS request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("CMS returned unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Client for one CMS deployment.
pub struct CmsClient {
    base_url: String,
    http: reqwest::Client,
}

impl CmsClient {
    /// Create a client for the CMS at `base_url` (e.g. `https://cms.example.com/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base}/posts?page=&per_page=` -- one page of posts.
    pub async fn list_posts(&self, page: u32, per_page: u32) -> Result<Vec<Post>, CmsError> {
        let url = format!("{}/posts", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("page", page), ("per_page", per_page)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CmsError::Status(response.status()));
        }

        Ok(response.json().await?)
    }

    /// GET `{base}/posts/{slug}` -- a single post, `None` when the CMS
    /// reports 404.
    pub async fn get_post(&self, slug: &str) -> Result<Option<Post>, CmsError> {
        let url = format!("{}/posts/{slug}", self.base_url);
        let response = self.http.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CmsError::Status(response.status()));
        }

        Ok(Some(response.json().await?))
    }

    /// Like [`list_posts`](Self::list_posts), but an unreachable CMS yields
    /// an empty page so the blog index still renders.
    pub async fn list_posts_lenient(&self, page: u32, per_page: u32) -> Vec<Post> {
        match self.list_posts(page, per_page).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(error = %e, page, "CMS unavailable, serving empty post list");
                Vec::new()
            }
        }
    }

    /// Like [`get_post`](Self::get_post), but CMS failures collapse into
    /// `None` (rendered as a 404 by the caller).
    pub async fn get_post_lenient(&self, slug: &str) -> Option<Post> {
        match self.get_post(slug).await {
            Ok(post) => post,
            Err(e) => {
                tracing::warn!(error = %e, slug, "CMS unavailable, treating post as missing");
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_from_cms_payload() {
        let raw = r#"{
            "id": 42,
            "slug": "five-step-wash",
            "title": "Our Five Step Wash",
            "excerpt": "How we wash without marring.",
            "content": "<p>Long form.</p>",
            "publishedAt": "2025-03-14T09:00:00Z"
        }"#;

        let post: Post = serde_json::from_str(raw).unwrap();
        assert_eq!(post.id, 42);
        assert_eq!(post.slug, "five-step-wash");
        assert_eq!(post.published_at, "2025-03-14T09:00:00Z");
    }

    #[test]
    fn post_tolerates_missing_optional_fields() {
        let post: Post =
            serde_json::from_str(r#"{ "id": 1, "slug": "s", "title": "T" }"#).unwrap();
        assert!(post.excerpt.is_empty());
        assert!(post.content.is_empty());
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        let client = CmsClient::new("https://cms.example.com/api/");
        assert_eq!(client.base_url(), "https://cms.example.com/api");
    }
}
