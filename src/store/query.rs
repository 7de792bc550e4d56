use serde_json::{Map, Value};

/// Maximum number of related posts shown under a post.
pub const RELATED_POSTS_LIMIT: u32 = 3;

const CARD_PROJECTION: &str = r#"{
    title,
    slug,
    excerpt,
    mainImage{ asset->{ url } },
  }"#;

const CARD_WITH_CATEGORY_PROJECTION: &str = r#"{
    title,
    slug,
    excerpt,
    mainImage{ asset->{ url } },
    "category": categories[0]->{ title, slug },
    _createdAt
  }"#;

const POST_PROJECTION: &str = r#"{
    title,
    slug,
    body,
    mainImage{ asset->{ url } },
    "category": categories[0]->{ title, slug },
    author->{ name, image },
    _createdAt
  }"#;

const RELATED_PROJECTION: &str = r#"{
    title, slug, mainImage{ asset->{ url } }
  }"#;

/// Slice of an ordered result set, `offset..offset + limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u32,
    pub limit: u32,
}

impl Window {
    pub fn first(limit: u32) -> Self {
        Window { offset: 0, limit }
    }

    pub fn end(&self) -> u32 {
        self.offset.saturating_add(self.limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFields {
    Basic,
    /// Also resolves the first category and the creation time.
    WithCategory,
}

/// The fixed set of read-only queries the site issues.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    LatestPosts { window: Window, fields: CardFields },
    PostBySlug { slug: String },
    PostsByCategory { category_slug: String },
    RelatedPosts { category_slug: String, exclude_slug: String },
}

impl Query {
    pub fn latest_posts(window: Window, fields: CardFields) -> Self {
        Query::LatestPosts { window, fields }
    }

    pub fn post_by_slug(slug: &str) -> Self {
        Query::PostBySlug { slug: slug.to_string() }
    }

    pub fn posts_by_category(category_slug: &str) -> Self {
        Query::PostsByCategory { category_slug: category_slug.to_string() }
    }

    pub fn related_posts(category_slug: &str, exclude_slug: &str) -> Self {
        Query::RelatedPosts {
            category_slug: category_slug.to_string(),
            exclude_slug: exclude_slug.to_string(),
        }
    }

    /// GROQ text sent to the store. Field names and dereference syntax must
    /// stay as they are, the store schema depends on them.
    pub fn groq(&self) -> String {
        match self {
            Query::LatestPosts { window, fields } => {
                let projection = match fields {
                    CardFields::Basic => CARD_PROJECTION,
                    CardFields::WithCategory => CARD_WITH_CATEGORY_PROJECTION,
                };
                format!(
                    r#"*[_type == "post"] | order(_createdAt desc)[{}...{}]{}"#,
                    window.offset,
                    window.end(),
                    projection
                )
            }
            Query::PostBySlug { .. } => {
                format!(r#"*[_type == "post" && slug.current == $slug][0]{}"#, POST_PROJECTION)
            }
            Query::PostsByCategory { .. } => {
                format!(r#"*[_type == "post" && category->slug.current == $slug]{}"#, CARD_PROJECTION)
            }
            Query::RelatedPosts { .. } => {
                format!(
                    r#"*[_type == "post" && category->slug.current == $categorySlug && slug.current != $excludeSlug][0...{}]{}"#,
                    RELATED_POSTS_LIMIT,
                    RELATED_PROJECTION
                )
            }
        }
    }

    /// Named parameters referenced as `$name` in the GROQ text.
    pub fn params(&self) -> Map<String, Value> {
        let mut params = Map::new();
        match self {
            Query::LatestPosts { .. } => {}
            Query::PostBySlug { slug } => {
                params.insert("slug".to_string(), Value::from(slug.as_str()));
            }
            Query::PostsByCategory { category_slug } => {
                params.insert("slug".to_string(), Value::from(category_slug.as_str()));
            }
            Query::RelatedPosts { category_slug, exclude_slug } => {
                params.insert("categorySlug".to_string(), Value::from(category_slug.as_str()));
                params.insert("excludeSlug".to_string(), Value::from(exclude_slug.as_str()));
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_posts_slices_by_window() {
        let query = Query::latest_posts(Window { offset: 12, limit: 12 }, CardFields::Basic);
        let groq = query.groq();
        assert!(groq.starts_with(r#"*[_type == "post"] | order(_createdAt desc)[12...24]{"#));
        assert!(groq.contains("mainImage{ asset->{ url } }"));
        assert!(!groq.contains("categories[0]"));
        assert!(query.params().is_empty());
    }

    #[test]
    fn home_posts_resolve_first_category() {
        let query = Query::latest_posts(Window::first(6), CardFields::WithCategory);
        let groq = query.groq();
        assert!(groq.contains("[0...6]"));
        assert!(groq.contains(r#""category": categories[0]->{ title, slug }"#));
        assert!(groq.contains("_createdAt"));
    }

    #[test]
    fn post_by_slug_takes_first_match() {
        let query = Query::post_by_slug("pasta");
        assert!(query.groq().starts_with(r#"*[_type == "post" && slug.current == $slug][0]{"#));
        assert!(query.groq().contains("author->{ name, image }"));
        assert_eq!(query.params().get("slug"), Some(&Value::from("pasta")));
    }

    #[test]
    fn posts_by_category_binds_slug() {
        let query = Query::posts_by_category("cuisine");
        assert!(query.groq().contains("category->slug.current == $slug"));
        assert_eq!(query.params().get("slug"), Some(&Value::from("cuisine")));
    }

    #[test]
    fn related_posts_exclude_current_and_limit() {
        let query = Query::related_posts("season", "pumpkin-soup");
        let groq = query.groq();
        assert!(groq.contains("slug.current != $excludeSlug][0...3]"));
        let params = query.params();
        assert_eq!(params.get("categorySlug"), Some(&Value::from("season")));
        assert_eq!(params.get("excludeSlug"), Some(&Value::from("pumpkin-soup")));
    }
}
