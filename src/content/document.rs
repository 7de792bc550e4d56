//! Raw document shapes returned by the store and their conversion into the
//! typed records the views use. Everything optional on the wire is checked
//! here once, so the views only deal with `Option` fields.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use spdlog::warn;

use crate::content::assets::{AssetResolver, ImageField};
use crate::content::portable_text::Block;
use crate::content::{Author, Category, Post, PostCard, UNTITLED};
use crate::store::StoreResult;
use crate::text_utils::non_empty;

#[derive(Deserialize, Default)]
struct SlugField {
    current: Option<String>,
}

#[derive(Deserialize)]
struct CategoryDocument {
    title: Option<String>,
    slug: Option<SlugField>,
}

#[derive(Deserialize)]
struct AuthorDocument {
    name: Option<String>,
    image: Option<ImageField>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardDocument {
    title: Option<String>,
    slug: Option<SlugField>,
    excerpt: Option<String>,
    main_image: Option<ImageField>,
    category: Option<CategoryDocument>,
    #[serde(rename = "_createdAt")]
    created_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostDocument {
    title: Option<String>,
    slug: Option<SlugField>,
    #[serde(default)]
    body: Option<Vec<Block>>,
    main_image: Option<ImageField>,
    category: Option<CategoryDocument>,
    author: Option<AuthorDocument>,
    #[serde(rename = "_createdAt")]
    created_at: Option<DateTime<Utc>>,
}

fn owned(value: Option<String>) -> Option<String> {
    non_empty(value.as_deref()).map(str::to_string)
}

fn slug_of(slug: Option<SlugField>) -> Option<String> {
    owned(slug.and_then(|s| s.current))
}

fn title_of(title: Option<String>) -> String {
    owned(title).unwrap_or_else(|| UNTITLED.to_string())
}

fn image_of(image: Option<ImageField>, assets: &AssetResolver) -> Option<String> {
    image.and_then(|img| assets.resolve(&img))
}

impl From<CategoryDocument> for Category {
    fn from(doc: CategoryDocument) -> Self {
        Category {
            title: owned(doc.title),
            slug: slug_of(doc.slug),
        }
    }
}

/// Decodes the result of a card query. `null` is an empty list; cards
/// without slug can't be linked and are dropped.
pub fn decode_cards(result: Value, assets: &AssetResolver) -> StoreResult<Vec<PostCard>> {
    if result.is_null() {
        return Ok(vec![]);
    }

    let documents: Vec<CardDocument> = serde_json::from_value(result)?;
    let mut cards = Vec::with_capacity(documents.len());
    for doc in documents {
        let Some(slug) = slug_of(doc.slug) else {
            warn!("Skipping post without slug: {:?}", doc.title);
            continue;
        };

        cards.push(PostCard {
            title: title_of(doc.title),
            slug,
            excerpt: owned(doc.excerpt),
            main_image: image_of(doc.main_image, assets),
            category: doc.category.map(Category::from),
            created_at: doc.created_at,
        });
    }

    Ok(cards)
}

/// Decodes the result of the single post query. `null` means not found.
pub fn decode_post(result: Value, assets: &AssetResolver) -> StoreResult<Option<Post>> {
    if result.is_null() {
        return Ok(None);
    }

    let doc: PostDocument = serde_json::from_value(result)?;
    let Some(slug) = slug_of(doc.slug) else {
        warn!("Post without slug returned by the store: {:?}", doc.title);
        return Ok(None);
    };

    let author = doc.author.map(|a| Author {
        name: owned(a.name),
        image_url: image_of(a.image, assets),
    });

    Ok(Some(Post {
        title: title_of(doc.title),
        slug,
        body: doc.body.unwrap_or_default(),
        main_image: image_of(doc.main_image, assets),
        category: doc.category.map(Category::from),
        author,
        created_at: doc.created_at,
    }))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;

    fn assets() -> AssetResolver {
        AssetResolver::new("abc123", "production")
    }

    #[test]
    fn decodes_card_with_optional_fields() {
        let result = json!([{
            "title": "Lemon pasta",
            "slug": { "current": "lemon-pasta" },
            "excerpt": "Bright and quick",
            "mainImage": { "asset": { "url": "https://cdn.sanity.io/images/abc123/production/x-10x10.jpg" } },
            "category": { "title": "Cuisine", "slug": { "current": "cuisine" } },
            "_createdAt": "2024-03-04T10:00:00Z"
        }]);
        let cards = decode_cards(result, &assets()).unwrap();
        assert_eq!(cards.len(), 1);
        let card = &cards[0];
        assert_eq!(card.title, "Lemon pasta");
        assert_eq!(card.slug, "lemon-pasta");
        assert_eq!(card.excerpt.as_deref(), Some("Bright and quick"));
        assert!(card.main_image.is_some());
        assert_eq!(card.category.as_ref().unwrap().link(), Some(("cuisine", "Cuisine")));
        assert_eq!(card.created_at, Some(Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap()));
    }

    #[test]
    fn empty_strings_are_absent() {
        let result = json!([{
            "title": "",
            "slug": { "current": "bare" },
            "excerpt": "",
            "mainImage": { "asset": null },
            "category": { "title": "Loose", "slug": null }
        }]);
        let cards = decode_cards(result, &assets()).unwrap();
        let card = &cards[0];
        assert_eq!(card.title, UNTITLED);
        assert_eq!(card.excerpt, None);
        assert_eq!(card.main_image, None);
        assert_eq!(card.category.as_ref().unwrap().link(), None);
    }

    #[test]
    fn drops_cards_without_slug() {
        let result = json!([
            { "title": "No slug" },
            { "title": "Has slug", "slug": { "current": "has-slug" } }
        ]);
        let cards = decode_cards(result, &assets()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].slug, "has-slug");
    }

    #[test]
    fn null_cards_are_empty() {
        assert!(decode_cards(Value::Null, &assets()).unwrap().is_empty());
    }

    #[test]
    fn malformed_cards_are_an_error() {
        assert!(decode_cards(json!({ "title": "not a list" }), &assets()).is_err());
    }

    #[test]
    fn null_post_is_not_found() {
        assert_eq!(decode_post(Value::Null, &assets()).unwrap(), None);
    }

    #[test]
    fn decodes_post_with_author_reference() {
        let result = json!({
            "title": "Pumpkin soup",
            "slug": { "current": "pumpkin-soup" },
            "body": [{ "_type": "block", "style": "normal", "children": [{ "_type": "span", "text": "Roast it." }] }],
            "author": { "name": "Sam", "image": { "asset": { "_ref": "image-abc-100x100-png" } } },
            "category": { "title": "Season", "slug": { "current": "season" } }
        });
        let post = decode_post(result, &assets()).unwrap().unwrap();
        assert_eq!(post.slug, "pumpkin-soup");
        assert_eq!(post.body.len(), 1);
        assert_eq!(post.category_slug(), Some("season"));
        let author = post.author.unwrap();
        assert_eq!(author.name.as_deref(), Some("Sam"));
        assert_eq!(author.image_url.as_deref(), Some("https://cdn.sanity.io/images/abc123/production/abc-100x100.png"));
        assert_eq!(post.main_image, None);
        assert_eq!(post.created_at, None);
    }
}
