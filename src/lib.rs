//! The library code for `marginalia`, the build-time content core of a
//! personal blog. The site's pages themselves are declarative templates;
//! everything with actual logic in it lives here, in three steps:
//!
//! 1. Parsing a post's markdown into a document tree ([`crate::markdown`],
//!    [`crate::tree`])
//! 2. Rewriting inline `^[...]` footnotes into reference/definition pairs
//!    ([`crate::footnotes`])
//! 3. Computing the tag counts and paginated post indices the list pages
//!    are rendered from ([`crate::tag`], [`crate::index`])
//!
//! Of the three, the second is the interesting one: freshly minted footnote
//! identifiers must never collide with footnotes the author already wrote
//! the long way (`[^1]` plus `[^1]: ...`), nor with each other, while the
//! surrounding literal text is preserved byte-for-byte. The rewriter runs
//! once per document during the site build; its output trees and the index
//! data both serialize to YAML for whatever renders the site.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod footnotes;
pub mod index;
pub mod markdown;
pub mod post;
pub mod tag;
pub mod tree;
