use crate::document::HeadingEntry;
use serde::{Deserialize, Serialize};

fn default_authors() -> Vec<String> {
    vec!["default".to_string()]
}

/// A blog post reduced to the fields needed for listing and rendering.
///
/// The raw body is not part of this record; it is rendered by the content
/// layer and handed to the presentation layer separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    /// Route path without the leading slash, e.g. `blog/hello-world`.
    pub path: String,
    /// ISO-8601 date or date-time string.
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub toc: Vec<HeadingEntry>,
    #[serde(default)]
    pub draft: bool,
    /// Author slugs, resolved against the author records.
    #[serde(default = "default_authors")]
    pub authors: Vec<String>,
}

impl Post {
    /// Read-only projection used by list layouts.
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            path: self.path.clone(),
            date: self.date.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            tags: self.tags.clone(),
            categories: self.categories.clone(),
        }
    }

    pub fn link(&self) -> PostLink {
        PostLink {
            path: self.path.clone(),
            title: self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub path: String,
    pub date: String,
    pub title: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub categories: Vec<String>,
}

/// Target of a previous/next navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostLink {
    pub path: String,
    pub title: String,
}

impl PostLink {
    pub fn href(&self) -> String {
        format!("/{}", self.path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_defaults_for_optional_fields() {
        let post: Post = serde_json::from_str(
            r#"{"slug": "hello", "path": "blog/hello", "date": "2024-01-02", "title": "Hello"}"#,
        )
        .unwrap();
        assert!(post.tags.is_empty());
        assert!(post.categories.is_empty());
        assert!(post.toc.is_empty());
        assert!(!post.draft);
        assert_eq!(post.authors, vec!["default".to_string()]);
        assert_eq!(post.summary, None);
    }

    #[test]
    fn test_summary_projection() {
        let post: Post = serde_json::from_str(
            r#"{"slug": "hello", "path": "blog/hello", "date": "2024-01-02", "title": "Hello",
                "summary": "First post", "tags": ["rust"], "categories": ["Taipei"]}"#,
        )
        .unwrap();
        let summary = post.summary();
        assert_eq!(summary.path, "blog/hello");
        assert_eq!(summary.summary.as_deref(), Some("First post"));
        assert_eq!(summary.tags, vec!["rust".to_string()]);
        assert_eq!(summary.categories, vec!["Taipei".to_string()]);
        assert_eq!(post.link().href(), "/blog/hello");
    }
}
