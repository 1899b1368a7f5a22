//! Defines the [`Post`] record. The content layer that turns files on disk
//! into records is outside this crate; posts arrive here already extracted
//! (typically as a YAML sequence) and this module only gives them a shape,
//! drops drafts, and orders them newest-first for the index builder.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One blog post record as supplied by the content layer. Only the fields
/// the index and tag logic consume are modeled; the rendered body stays
/// with the renderer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Post {
    /// The post's URL slug, e.g. `introducing-marginalia`.
    pub slug: String,

    /// The post's title.
    pub title: String,

    /// The publication date. Posts are ordered newest-first by this field.
    pub date: NaiveDate,

    /// Tag names as written by the author (not yet slugified; see
    /// [`crate::tag`]).
    #[serde(default)]
    pub tags: Vec<String>,

    /// An optional one-paragraph summary for list pages.
    #[serde(default)]
    pub summary: Option<String>,

    /// Draft posts are excluded from indices and tag counts.
    #[serde(default)]
    pub draft: bool,
}

/// Parses a YAML sequence of [`Post`] records.
pub fn from_yaml(input: &str) -> Result<Vec<Post>, serde_yaml::Error> {
    serde_yaml::from_str(input)
}

/// Drops drafts and sorts what's left newest-first. Posts sharing a date
/// keep their relative input order.
pub fn published(mut posts: Vec<Post>) -> Vec<Post> {
    posts.retain(|post| !post.draft);
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts
}
