use chrono::{DateTime, Utc};

use crate::content::portable_text::Block;

pub mod assets;
pub mod content_queries;
pub mod document;
pub mod portable_text;

pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Category {
    pub title: Option<String>,
    pub slug: Option<String>,
}

impl Category {
    /// Slug and label of a category that can be linked to. A category
    /// without slug is never linked.
    pub fn link(&self) -> Option<(&str, &str)> {
        let slug = self.slug.as_deref()?;
        let title = self.title.as_deref().unwrap_or(slug);
        Some((slug, title))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Author {
    pub name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub title: String,
    pub slug: String,
    pub body: Vec<Block>,
    pub main_image: Option<String>,
    pub category: Option<Category>,
    pub author: Option<Author>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| c.slug.as_deref())
    }
}

/// Reduced projection of a post used in grids.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub main_image: Option<String>,
    pub category: Option<Category>,
    pub created_at: Option<DateTime<Utc>>,
}
