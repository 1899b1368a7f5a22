//! Builds the paginated post indices: one index over all posts plus one per
//! tag, each chunked into pages with `prev`/`next` links. These are the data
//! behind the blog's list pages; rendering them is the downstream site's
//! job, so everything here is serializable and carries no markup.

use crate::post::Post;
use crate::tag::{self, Tag};
use serde::Serialize;
use url::Url;

/// A group of [`Post`]s sharing a tag (or all posts, for the main index),
/// chunked into pages.
#[derive(Debug, PartialEq, Serialize)]
pub struct Index<'a> {
    /// The index's display title: the tag name, or "All Posts".
    pub title: String,

    /// The URL of the index's first page.
    pub url: Url,

    /// The index's pages, in order. Empty when the index has no posts.
    pub pages: Vec<Page<'a>>,
}

/// One page of an [`Index`].
#[derive(Debug, PartialEq, Serialize)]
pub struct Page<'a> {
    /// 1-based page number.
    pub number: usize,

    /// Total number of pages in this index.
    pub total: usize,

    /// This page's URL: the index base for page 1, `{base}page/{n}/` after.
    pub url: Url,

    /// The previous page's URL, if any.
    pub prev: Option<Url>,

    /// The next page's URL, if any.
    pub next: Option<Url>,

    /// The posts on this page, newest first.
    pub posts: Vec<&'a Post>,
}

/// Builds all indices for a set of posts: the main index (under
/// `{site_url}blog/`) followed by the tag indices (under
/// `{site_url}tags/{name}/`), ordered like the tag sidebar. Drafts are
/// excluded. `posts` is expected to be sorted newest-first already (see
/// [`crate::post::published`]).
pub fn build<'a>(
    posts: &'a [Post],
    site_url: &Url,
    page_size: usize,
) -> Result<Vec<Index<'a>>> {
    let published: Vec<&Post> = posts.iter().filter(|p| !p.draft).collect();

    let blog_url = site_url.join("blog/")?;
    let mut indices = vec![Index {
        title: "All Posts".to_owned(),
        url: blog_url.clone(),
        pages: paginate(published.clone(), &blog_url, page_size)?,
    }];

    for counted in tag_counts_for(posts, site_url)? {
        let tagged: Vec<&Post> = published
            .iter()
            .cloned()
            .filter(|p| p.tags.iter().any(|t| slug::slugify(t) == counted.name))
            .collect();
        indices.push(Index {
            title: counted.name.clone(),
            url: counted.url.clone(),
            pages: paginate(tagged, &counted.url, page_size)?,
        });
    }
    Ok(indices)
}

/// The tags to index, in sidebar order.
fn tag_counts_for(posts: &[Post], site_url: &Url) -> Result<Vec<Tag>> {
    Ok(tag::tag_counts(posts, site_url)?
        .into_iter()
        .map(|counted| counted.tag)
        .collect())
}

/// Chunks an ordered post list into [`Page`]s rooted at `base` (which must
/// end in a trailing slash, like every index URL built here).
fn paginate<'a>(
    posts: Vec<&'a Post>,
    base: &Url,
    page_size: usize,
) -> Result<Vec<Page<'a>>> {
    // A page size of zero would mean infinitely many empty pages; clamp it.
    let page_size = page_size.max(1);
    let total = match posts.len() % page_size {
        0 => posts.len() / page_size,
        _ => posts.len() / page_size + 1,
    };

    let mut pages = Vec::with_capacity(total);
    for (i, chunk) in posts.chunks(page_size).enumerate() {
        let number = i + 1;
        pages.push(Page {
            number,
            total,
            url: page_url(base, number)?,
            prev: match number {
                1 => None,
                _ => Some(page_url(base, number - 1)?),
            },
            next: match number < total {
                true => Some(page_url(base, number + 1)?),
                false => None,
            },
            posts: chunk.to_vec(),
        });
    }
    Ok(pages)
}

fn page_url(base: &Url, number: usize) -> Result<Url> {
    match number {
        1 => Ok(base.clone()),
        _ => base.join(&format!("page/{}/", number)),
    }
}

/// The result of an index-building operation; URL joins are the only
/// fallible step.
pub type Result<T> = std::result::Result<T, url::ParseError>;

#[cfg(test)]
mod test {
    use super::*;

    fn site_url() -> Url {
        Url::parse("https://example.org/").unwrap()
    }

    fn post(slug: &str, date: &str, tags: &[&str]) -> Post {
        Post {
            slug: slug.to_owned(),
            title: slug.to_owned(),
            date: date.parse().unwrap(),
            tags: tags.iter().map(|t| (*t).to_owned()).collect(),
            summary: None,
            draft: false,
        }
    }

    fn slugs<'a>(page: &Page<'a>) -> Vec<&'a str> {
        page.posts.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_main_index_pagination() -> Result<()> {
        let posts = vec![
            post("e", "2021-05-01", &[]),
            post("d", "2021-04-01", &[]),
            post("c", "2021-03-01", &[]),
            post("b", "2021-02-01", &[]),
            post("a", "2021-01-01", &[]),
        ];
        let indices = build(&posts, &site_url(), 2)?;
        let main = &indices[0];
        assert_eq!(main.title, "All Posts");
        assert_eq!(main.url.as_str(), "https://example.org/blog/");
        assert_eq!(main.pages.len(), 3);

        let first = &main.pages[0];
        assert_eq!((first.number, first.total), (1, 3));
        assert_eq!(first.url.as_str(), "https://example.org/blog/");
        assert_eq!(first.prev, None);
        assert_eq!(
            first.next.as_ref().map(Url::as_str),
            Some("https://example.org/blog/page/2/")
        );
        assert_eq!(slugs(first), vec!["e", "d"]);

        let second = &main.pages[1];
        assert_eq!(
            second.prev.as_ref().map(Url::as_str),
            Some("https://example.org/blog/")
        );
        assert_eq!(
            second.next.as_ref().map(Url::as_str),
            Some("https://example.org/blog/page/3/")
        );

        let last = &main.pages[2];
        assert_eq!(last.url.as_str(), "https://example.org/blog/page/3/");
        assert_eq!(last.next, None);
        assert_eq!(slugs(last), vec!["a"]);
        Ok(())
    }

    #[test]
    fn test_tag_indices_in_sidebar_order() -> Result<()> {
        let posts = vec![
            post("c", "2021-03-01", &["rust"]),
            post("b", "2021-02-01", &["rust", "blog"]),
            post("a", "2021-01-01", &["blog", "rust"]),
        ];
        let indices = build(&posts, &site_url(), 10)?;
        let titles: Vec<&str> = indices.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["All Posts", "rust", "blog"]);

        let rust = &indices[1];
        assert_eq!(rust.url.as_str(), "https://example.org/tags/rust/");
        assert_eq!(slugs(&rust.pages[0]), vec!["c", "b", "a"]);

        let blog = &indices[2];
        assert_eq!(slugs(&blog.pages[0]), vec!["b", "a"]);
        Ok(())
    }

    #[test]
    fn test_drafts_excluded() -> Result<()> {
        let mut draft = post("wip", "2021-06-01", &["rust"]);
        draft.draft = true;
        let posts = vec![draft, post("a", "2021-01-01", &[])];
        let indices = build(&posts, &site_url(), 10)?;
        assert_eq!(indices.len(), 1);
        assert_eq!(slugs(&indices[0].pages[0]), vec!["a"]);
        Ok(())
    }

    #[test]
    fn test_empty_index_has_no_pages() -> Result<()> {
        let indices = build(&[], &site_url(), 10)?;
        assert_eq!(indices.len(), 1);
        assert!(indices[0].pages.is_empty());
        Ok(())
    }
}
