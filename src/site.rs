// src/site.rs
use crate::config::SiteConfig;
use crate::error::FolioError;
use crate::views::{HomeView, ListView, PostCard, PostView};
use folio_listing::{Pagination, neighbors, page_slice, parse_date, published, sort_newest_first};
use folio_source::{ContentSource, FilesystemSource, artifacts};
use folio_taxonomy::{
    ActiveCategory, CATEGORY_ROUTE, CategoryData, CategoryEntry, SidebarNode, TagCount, TagWeight,
    category_index, decode_uri, encode_uri, sidebar, slugify, tag_cloud,
};
use folio_types::{Author, Post};
use log::{debug, info, warn};
use std::path::Path;

/// Route segment of the main post listing.
pub const BLOG_ROUTE: &str = "blog";

/// A loaded site: config, posts and taxonomy data, read once and then shared
/// by every view.
#[derive(Debug, Clone)]
pub struct Site {
    config: SiteConfig,
    /// Published posts, newest first.
    posts: Vec<Post>,
    authors: Vec<Author>,
    categories: CategoryData,
    tags: TagCount,
}

impl Site {
    pub fn builder() -> SiteBuilder {
        SiteBuilder::new()
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn categories(&self) -> &CategoryData {
        &self.categories
    }

    pub fn tags(&self) -> &TagCount {
        &self.tags
    }

    fn card(&self, post: &Post) -> PostCard {
        PostCard::new(post, &self.config.locale)
    }

    /// The newest posts for the landing page.
    pub fn home(&self) -> HomeView {
        let shown = self.posts.len().min(self.config.max_display);
        HomeView {
            posts: self.posts[..shown].iter().map(|p| self.card(p)).collect(),
            has_more: self.posts.len() > self.config.max_display,
        }
    }

    /// Page `page` of the main listing, `/blog` for page 1 and
    /// `/blog/page/{n}` after that.
    pub fn blog_page(&self, page: u32) -> Result<ListView, FolioError> {
        let per_page = self.config.posts_per_page;
        let shown = page_slice(&self.posts, page, per_page)
            .ok_or_else(|| FolioError::NotFound(format!("/{BLOG_ROUTE}/page/{page}")))?;
        let pagination = Pagination::for_items(page, self.posts.len(), per_page)?;

        let pathname = if page == 1 {
            format!("/{BLOG_ROUTE}")
        } else {
            format!("/{BLOG_ROUTE}/page/{page}")
        };
        debug!("Rendering {} with {} posts", pathname, shown.len());

        Ok(ListView {
            title: "All Posts".to_string(),
            posts: shown.iter().map(|p| self.card(p)).collect(),
            pagination: pagination
                .is_visible()
                .then(|| pagination.links(BLOG_ROUTE)),
            sidebar: self.sidebar(&pathname),
        })
    }

    /// The listing for one category, addressed by its (encoded) route parameter.
    pub fn category_page(&self, param: &str) -> Result<ListView, FolioError> {
        let not_found = || FolioError::NotFound(format!("{CATEGORY_ROUTE}/{param}"));
        let category = decode_uri(param).map_err(|_| not_found())?;
        let slug = slugify(&category);

        let posts: Vec<PostCard> = folio_listing::filter_by_category(&self.posts, &slug)
            .into_iter()
            .map(|p| self.card(p))
            .collect();
        if posts.is_empty() {
            return Err(not_found());
        }

        Ok(ListView {
            title: folio_listing::category_title(&category),
            posts,
            pagination: None,
            sidebar: self.sidebar(&format!("{CATEGORY_ROUTE}/{param}")),
        })
    }

    /// Every category with its count, for the category index page.
    pub fn category_index(&self) -> Vec<CategoryEntry> {
        category_index(&self.categories.counts)
    }

    /// The sidebar tree with the category of `pathname` highlighted.
    pub fn sidebar(&self, pathname: &str) -> Vec<SidebarNode> {
        let active = ActiveCategory::from_pathname(pathname);
        sidebar(&self.categories, active.as_ref())
    }

    /// Route parameters of every category page to pre-render.
    pub fn category_params(&self) -> Vec<String> {
        self.categories.counts.names().map(encode_uri).collect()
    }

    pub fn post(&self, slug: &str) -> Result<PostView, FolioError> {
        let around = neighbors(&self.posts, slug)
            .ok_or_else(|| FolioError::NotFound(format!("post '{slug}'")))?;
        let post = self
            .posts
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| FolioError::NotFound(format!("post '{slug}'")))?;

        let toc = folio_toc::number(&post.toc);
        let authors = post
            .authors
            .iter()
            .filter_map(|author| {
                let found = self.authors.iter().find(|a| &a.slug == author);
                if found.is_none() {
                    warn!("Post '{}' references unknown author '{}'", slug, author);
                }
                found.cloned()
            })
            .collect();

        Ok(PostView::new(
            post,
            &toc,
            around.prev,
            around.next,
            authors,
            &self.config.locale,
        ))
    }

    pub fn author(&self, slug: &str) -> Option<&Author> {
        self.authors.iter().find(|a| a.slug == slug)
    }

    pub fn tag_cloud(&self) -> Vec<TagWeight> {
        let bounds = self.config.tag_cloud;
        tag_cloud(&self.tags, bounds.min_size, bounds.max_size)
    }
}

/// A builder for loading a [`Site`] from a content source.
#[derive(Debug, Default)]
pub struct SiteBuilder {
    source: Option<Box<dyn ContentSource>>,
    config: Option<SiteConfig>,
}

impl SiteBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads artifacts from `source`.
    pub fn with_source<S: ContentSource + 'static>(mut self, source: S) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Reads artifacts from a content directory on disk.
    pub fn with_content_dir<P: AsRef<Path>>(self, dir: P) -> Self {
        self.with_source(FilesystemSource::new(dir.as_ref()))
    }

    /// Uses `config` instead of the source's `site.json`.
    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Loads and validates every artifact.
    pub fn build(self) -> Result<Site, FolioError> {
        let source = self.source.ok_or_else(|| {
            FolioError::Config(
                "No content source has been configured. Use `with_source` or `with_content_dir`."
                    .to_string(),
            )
        })?;
        debug!("Loading site from {}", source.describe());

        let config = match self.config {
            Some(config) => {
                config.validate()?;
                config
            }
            None => match source.load_optional(artifacts::SITE_CONFIG)? {
                Some(bytes) => SiteConfig::from_slice(&bytes)?,
                None => SiteConfig::default(),
            },
        };

        let all_posts: Vec<Post> = serde_json::from_slice(&source.load(artifacts::POSTS)?)?;
        for post in &all_posts {
            validate_post(post)?;
        }
        let mut posts: Vec<Post> = published(&all_posts, config.include_drafts)
            .cloned()
            .collect();
        sort_newest_first(&mut posts);

        let authors: Vec<Author> = match source.load_optional(artifacts::AUTHORS)? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => Vec::new(),
        };

        let categories = CategoryData::from_slice(&source.load(artifacts::CATEGORY_DATA)?)?;
        let referenced = posts.iter().flat_map(|p| p.categories.iter().map(String::as_str));
        for name in categories.missing_counts(referenced) {
            warn!("Category '{}' is referenced but has no count in {}", name, artifacts::CATEGORY_DATA);
        }

        let tags = match source.load_optional(artifacts::TAG_DATA)? {
            Some(bytes) => TagCount::from_slice(&bytes)?,
            None => TagCount::tally(&posts),
        };

        info!(
            "Loaded site with {} posts ({} drafts hidden), {} categories, {} tags",
            posts.len(),
            all_posts.len() - posts.len(),
            categories.counts.len(),
            tags.len()
        );

        Ok(Site {
            config,
            posts,
            authors,
            categories,
            tags,
        })
    }
}

/// Required-field checks at the loading boundary.
fn validate_post(post: &Post) -> Result<(), FolioError> {
    let invalid = |message: String| FolioError::InvalidPost {
        slug: post.slug.clone(),
        message,
    };
    if post.slug.is_empty() {
        return Err(invalid("slug is empty".to_string()));
    }
    if post.path.is_empty() {
        return Err(invalid("path is empty".to_string()));
    }
    parse_date(&post.date).map_err(|e| invalid(e.to_string()))?;
    Ok(())
}
