//! Render-ready view models handed to the presentation layer.

use folio_listing::{PageLinks, format_date, parse_date};
use folio_taxonomy::{CATEGORY_ROUTE, SidebarNode, TAG_ROUTE, slugify};
use folio_types::{Author, NumberedHeading, Post, PostLink};
use serde::Serialize;

/// A category or tag chip linking to its listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermLink {
    pub name: String,
    pub href: String,
}

impl TermLink {
    fn category(name: &str) -> Self {
        Self {
            name: name.to_string(),
            href: format!("{CATEGORY_ROUTE}/{}", slugify(name)),
        }
    }

    fn tag(name: &str) -> Self {
        Self {
            name: name.to_string(),
            href: format!("{TAG_ROUTE}/{}", slugify(name)),
        }
    }
}

/// A post as shown in a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub path: String,
    pub href: String,
    pub date: String,
    pub formatted_date: String,
    pub title: String,
    pub summary: Option<String>,
    pub categories: Vec<TermLink>,
    pub tags: Vec<TermLink>,
}

impl PostCard {
    pub(crate) fn new(post: &Post, locale: &str) -> Self {
        let summary = post.summary();
        Self {
            href: format!("/{}", summary.path),
            formatted_date: display_date(&summary.date, locale),
            categories: summary.categories.iter().map(|c| TermLink::category(c)).collect(),
            tags: summary.tags.iter().map(|t| TermLink::tag(t)).collect(),
            path: summary.path,
            date: summary.date,
            title: summary.title,
            summary: summary.summary,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub posts: Vec<PostCard>,
    /// Whether an "all posts" link follows the cards.
    pub has_more: bool,
}

/// A post list with the category sidebar: blog pages and category pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListView {
    pub title: String,
    pub posts: Vec<PostCard>,
    /// Present only when the listing spans more than one page.
    pub pagination: Option<PageLinks>,
    pub sidebar: Vec<SidebarNode>,
}

/// One line of a post's rendered table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TocLine {
    pub number: String,
    pub label: String,
    pub href: String,
    pub depth: u8,
    pub indent_rem: u8,
}

impl From<&NumberedHeading> for TocLine {
    fn from(heading: &NumberedHeading) -> Self {
        Self {
            number: heading.number.clone(),
            label: heading.label(),
            href: heading.heading.href(),
            depth: heading.heading.depth.get(),
            indent_rem: heading.indent_rem(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

impl From<PostLink> for NavLink {
    fn from(link: PostLink) -> Self {
        Self {
            href: link.href(),
            title: link.title,
        }
    }
}

/// Everything a single post page renders around the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub slug: String,
    pub path: String,
    pub title: String,
    pub date: String,
    pub formatted_date: String,
    pub toc: Vec<TocLine>,
    pub categories: Vec<TermLink>,
    pub tags: Vec<TermLink>,
    /// The next older post.
    pub prev: Option<NavLink>,
    /// The next newer post.
    pub next: Option<NavLink>,
    pub authors: Vec<Author>,
}

impl PostView {
    pub(crate) fn new(
        post: &Post,
        toc: &[NumberedHeading],
        prev: Option<&Post>,
        next: Option<&Post>,
        authors: Vec<Author>,
        locale: &str,
    ) -> Self {
        Self {
            slug: post.slug.clone(),
            path: post.path.clone(),
            title: post.title.clone(),
            date: post.date.clone(),
            formatted_date: display_date(&post.date, locale),
            toc: toc.iter().map(TocLine::from).collect(),
            categories: post.categories.iter().map(|c| TermLink::category(c)).collect(),
            tags: post.tags.iter().map(|t| TermLink::tag(t)).collect(),
            prev: prev.map(|p| p.link().into()),
            next: next.map(|p| p.link().into()),
            authors,
        }
    }
}

/// Dates are validated when the site loads, so the raw string only shows
/// through for records built outside the loader.
fn display_date(raw: &str, locale: &str) -> String {
    parse_date(raw)
        .map(|date| format_date(&date, locale))
        .unwrap_or_else(|_| raw.to_string())
}
