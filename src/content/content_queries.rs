use spdlog::debug;

use crate::content::assets::AssetResolver;
use crate::content::document::{decode_cards, decode_post};
use crate::content::{Post, PostCard};
use crate::store::query::{CardFields, Window, RELATED_POSTS_LIMIT};
use crate::store::{ContentStore, Query, StoreResult};

/// Typed access to the site's queries.
pub struct ContentQueries<'a> {
    store: &'a dyn ContentStore,
    assets: &'a AssetResolver,
}

impl<'a> ContentQueries<'a> {
    pub fn new(store: &'a dyn ContentStore, assets: &'a AssetResolver) -> Self {
        ContentQueries { store, assets }
    }

    /// Newest posts first, sliced to `window`.
    pub async fn latest_posts(&self, window: Window, fields: CardFields) -> StoreResult<Vec<PostCard>> {
        let result = self.store.fetch(&Query::latest_posts(window, fields)).await?;
        let mut cards = decode_cards(result, self.assets)?;
        cards.truncate(window.limit as usize);
        Ok(cards)
    }

    /// `None` when no post has this slug.
    pub async fn post_by_slug(&self, slug: &str) -> StoreResult<Option<Post>> {
        let result = self.store.fetch(&Query::post_by_slug(slug)).await?;
        decode_post(result, self.assets)
    }

    pub async fn posts_by_category(&self, category_slug: &str) -> StoreResult<Vec<PostCard>> {
        let result = self.store.fetch(&Query::posts_by_category(category_slug)).await?;
        decode_cards(result, self.assets)
    }

    /// Other posts of the same category. Without a category there is
    /// nothing to relate to and the store is not asked.
    pub async fn related_posts(&self, category_slug: Option<&str>, exclude_slug: &str) -> StoreResult<Vec<PostCard>> {
        let Some(category_slug) = category_slug else {
            debug!("No category for {}, skipping related posts", exclude_slug);
            return Ok(vec![]);
        };

        let result = self.store.fetch(&Query::related_posts(category_slug, exclude_slug)).await?;
        let mut cards = decode_cards(result, self.assets)?;
        cards.retain(|card| card.slug != exclude_slug);
        cards.truncate(RELATED_POSTS_LIMIT as usize);
        Ok(cards)
    }
}
