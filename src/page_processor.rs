use std::sync::Arc;

use spdlog::{info, warn};

use crate::config::Config;
use crate::content::assets::AssetResolver;
use crate::content::content_queries::ContentQueries;
use crate::paginator::Paginator;
use crate::store::query::{CardFields, Window};
use crate::store::{ContentStore, StoreError};
use crate::text_utils::{category_heading, is_valid_slug};
use crate::view::card_renderer::CardStyle;
use crate::view::home_renderer::HomeRenderer;
use crate::view::layout_renderer::LayoutRenderer;
use crate::view::list_renderer::{ListRenderer, PaginationView};
use crate::view::page_renderer::PageRenderer;
use crate::view::post_renderer::PostRenderer;
use crate::view::rss_renderer::RssChannel;
use crate::view::*;

pub const POST_NOT_FOUND: &str = "Post not found.";
pub const PAGE_NOT_FOUND: &str = "Page not found.";
pub const EMPTY_CATEGORY: &str = "No posts found in this category.";
pub const EMPTY_BLOG: &str = "No posts yet.";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Error rendering feed: {0}")]
    Feed(#[from] quick_xml::Error),
}

pub type PageResult<T> = Result<T, PageError>;

/// A rendered page, or the layout-wrapped message shown instead.
#[derive(Debug, PartialEq)]
pub enum Page {
    Found(String),
    NotFound(String),
}

/// Everything a request needs. Immutable once built.
pub struct Site {
    pub config: Config,
    pub templates: SiteTemplates,
    pub store: Arc<dyn ContentStore>,
    pub assets: AssetResolver,
}

impl Site {
    pub fn new(config: Config, templates: SiteTemplates, store: Arc<dyn ContentStore>) -> Self {
        let assets = AssetResolver::new(&config.store.project_id, &config.store.dataset);
        Site {
            config,
            templates,
            store,
            assets,
        }
    }

    fn queries(&self) -> ContentQueries<'_> {
        ContentQueries::new(self.store.as_ref(), &self.assets)
    }

    fn layout(&self, title: Option<&str>, content: &str) -> String {
        let has_feed = self.config.rss_feed.is_some();
        LayoutRenderer::new(self.templates.get(LAYOUT_TPL), &self.config.site, has_feed)
            .render(title, content)
    }

    pub async fn render_home(&self) -> PageResult<String> {
        let window = Window::first(self.config.defaults.home_page_size);
        let latest = self.queries().latest_posts(window, CardFields::WithCategory).await?;

        let content = HomeRenderer::new(self.templates.get(HOME_TPL)).render(&self.config.site, &latest);
        Ok(self.layout(None, &content))
    }

    /// Blog index, `page` is 1-based.
    pub async fn render_blog(&self, page: u32) -> PageResult<String> {
        let paginator = Paginator::new(self.config.defaults.blog_page_size);
        let (page, window) = match paginator.window(page) {
            Ok(window) => (page, window),
            Err(e) => {
                warn!("Invalid blog page {}: {}", page, e);
                (1, Window::first(self.config.defaults.blog_page_size))
            }
        };

        let posts = self.queries().latest_posts(window, CardFields::Basic).await?;
        let pagination = PaginationView::between(
            "/blog",
            page,
            paginator.has_previous(page),
            paginator.may_have_next(posts.len()),
        );

        let content = ListRenderer::new(self.templates.get(POST_LIST_TPL))
            .render("Blog", &posts, CardStyle::BLOG, EMPTY_BLOG, pagination);
        Ok(self.layout(Some("Blog"), &content))
    }

    /// Post page with up to three related posts. The related posts are
    /// only looked up once the post and its category are known.
    pub async fn render_post(&self, slug: &str) -> PageResult<Page> {
        if !is_valid_slug(slug) {
            info!("Rejecting post slug {:?}", slug);
            return Ok(Page::NotFound(self.render_message(POST_NOT_FOUND)));
        }

        let queries = self.queries();
        let Some(post) = queries.post_by_slug(slug).await? else {
            info!("Post not found: {}", slug);
            return Ok(Page::NotFound(self.render_message(POST_NOT_FOUND)));
        };

        let related = queries.related_posts(post.category_slug(), &post.slug).await?;

        let content = PostRenderer::new(self.templates.get(POST_TPL), &self.assets).render(&post, &related);
        Ok(Page::Found(self.layout(Some(&post.title), &content)))
    }

    pub async fn render_category(&self, slug: &str) -> PageResult<String> {
        let heading = category_heading(slug);
        let posts = if is_valid_slug(slug) {
            self.queries().posts_by_category(slug).await?
        } else {
            info!("Rejecting category slug {:?}", slug);
            vec![]
        };

        let content = ListRenderer::new(self.templates.get(POST_LIST_TPL))
            .render(&heading, &posts, CardStyle::CATEGORY, EMPTY_CATEGORY, None);
        Ok(self.layout(Some(&heading), &content))
    }

    pub fn render_static(&self, template_name: &str, title: &str) -> String {
        let content = PageRenderer::new(self.templates.get(template_name)).render(&self.config.site.name);
        self.layout(Some(title), &content)
    }

    pub fn render_message(&self, message: &str) -> String {
        let content = PageRenderer::new(self.templates.get(NOT_FOUND_TPL)).render_message(message);
        self.layout(None, &content)
    }

    /// `None` when no feed is configured.
    pub async fn render_rss(&self) -> PageResult<Option<Vec<u8>>> {
        let Some(ref feed) = self.config.rss_feed else {
            return Ok(None);
        };

        let window = Window::first(feed.page_size);
        let latest = self.queries().latest_posts(window, CardFields::WithCategory).await?;

        let channel = RssChannel {
            ch_title: feed.title.as_str(),
            ch_link: self.config.site.url.as_str(),
            ch_desc: feed.description.as_str(),
        };
        Ok(Some(channel.render(&latest)?))
    }
}
