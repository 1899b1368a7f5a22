//! Defines the [`Tag`] type, which represents a [`crate::post::Post`] tag,
//! and the per-tag post counting behind the "filter by tag" sidebar.

use crate::post::Post;
use serde::Serialize;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};
use url::Url;

/// Represents a [`crate::post::Post`] tag. The name is slugified so e.g.,
/// `macOS` and `MacOS` resolve to the same tag, and also so the name can be
/// dropped into a [`Url`]. The URL points at the tag's first index page,
/// `{site_url}tags/{name}/`.
#[derive(Clone, Debug, Serialize)]
pub struct Tag {
    pub name: String,
    pub url: Url,
}

impl Tag {
    /// Constructs a [`Tag`] from an author-written name, slugifying it and
    /// deriving its index URL from `site_url` (which must end in a trailing
    /// slash; see [`crate::config::Config`]).
    pub fn new(name: &str, site_url: &Url) -> Result<Tag> {
        let name = slug::slugify(name);
        let url = site_url.join(&format!("tags/{}/", name))?;
        Ok(Tag { name, url })
    }
}

impl Hash for Tag {
    /// Implements [`Hash`] for [`Tag`] by delegating directly to the `name`
    /// field.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl PartialEq for Tag {
    /// Implements [`PartialEq`] and [`Eq`] for [`Tag`] by delegating
    /// directly to the `name` field.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
impl Eq for Tag {}

/// A [`Tag`] together with the number of posts carrying it.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TagCount {
    pub tag: Tag,
    pub count: usize,
}

/// Counts posts per tag, merging tag names that slugify identically and
/// skipping drafts. The result is ordered the way the sidebar lists tags:
/// most-used first, ties alphabetical.
pub fn tag_counts(posts: &[Post], site_url: &Url) -> Result<Vec<TagCount>> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for post in posts {
        if post.draft {
            continue;
        }
        for name in &post.tags {
            *counts.entry(slug::slugify(name)).or_insert(0) += 1;
        }
    }

    let mut tags = Vec::with_capacity(counts.len());
    for (name, count) in counts {
        tags.push(TagCount {
            tag: Tag::new(&name, site_url)?,
            count,
        });
    }
    tags.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.tag.name.cmp(&b.tag.name))
    });
    Ok(tags)
}

/// The result of a tag operation; joining a tag name onto the site URL is
/// the only thing that can fail.
pub type Result<T> = std::result::Result<T, url::ParseError>;

#[cfg(test)]
mod test {
    use super::*;
    use crate::post::Post;

    fn site_url() -> Url {
        Url::parse("https://example.org/").unwrap()
    }

    fn post(slug: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_owned(),
            title: slug.to_owned(),
            date: "2021-04-16".parse().unwrap(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            summary: None,
            draft: false,
        }
    }

    #[test]
    fn test_tag_slugified_with_url() -> Result<()> {
        let tag = Tag::new("Open Source", &site_url())?;
        assert_eq!(tag.name, "open-source");
        assert_eq!(tag.url.as_str(), "https://example.org/tags/open-source/");
        Ok(())
    }

    #[test]
    fn test_counts_ordered_by_count_then_name() -> Result<()> {
        let posts = vec![
            post("a", &["rust", "blog"]),
            post("b", &["rust"]),
            post("c", &["analytics"]),
        ];
        let counts = tag_counts(&posts, &site_url())?;
        let summary: Vec<(&str, usize)> = counts
            .iter()
            .map(|c| (c.tag.name.as_str(), c.count))
            .collect();
        assert_eq!(
            summary,
            vec![("rust", 2), ("analytics", 1), ("blog", 1)]
        );
        Ok(())
    }

    #[test]
    fn test_counts_merge_slug_variants() -> Result<()> {
        let posts = vec![post("a", &["macOS"]), post("b", &["MacOS"])];
        let counts = tag_counts(&posts, &site_url())?;
        assert_eq!(
            counts,
            vec![TagCount {
                tag: Tag::new("macos", &site_url())?,
                count: 2,
            }]
        );
        Ok(())
    }

    #[test]
    fn test_counts_skip_drafts() -> Result<()> {
        let mut draft = post("wip", &["rust"]);
        draft.draft = true;
        let counts = tag_counts(&[draft], &site_url())?;
        assert!(counts.is_empty());
        Ok(())
    }
}
