#![cfg(test)]

use serde_json::{json, Value};

use crate::content::assets::AssetResolver;

pub const PROJECT_ID: &str = "abc123";
pub const DATASET: &str = "production";

pub fn assets() -> AssetResolver {
    AssetResolver::new(PROJECT_ID, DATASET)
}

/// A post document as the store returns it after projection.
pub fn post_doc(slug: &str, category: Option<&str>, created_at: &str) -> Value {
    let mut doc = json!({
        "title": format!("Title of {}", slug),
        "slug": { "current": slug },
        "excerpt": format!("Excerpt of {}", slug),
        "mainImage": { "asset": { "url": format!("https://cdn.sanity.io/images/{}/{}/{}-800x600.jpg", PROJECT_ID, DATASET, slug) } },
        "body": [
            { "_type": "block", "_key": "b1", "style": "normal", "markDefs": [],
              "children": [{ "_type": "span", "_key": "s1", "text": format!("Body of {}", slug), "marks": [] }] }
        ],
        "author": { "name": "Sam Cook", "image": { "asset": { "_ref": "image-author-64x64-png" } } },
        "_createdAt": created_at
    });

    if let Some(category) = category {
        doc["category"] = json!({ "title": format!("Category {}", category), "slug": { "current": category } });
    }

    doc
}

pub fn without_image(mut doc: Value) -> Value {
    if let Some(map) = doc.as_object_mut() {
        map.remove("mainImage");
    }
    doc
}

pub fn without_excerpt(mut doc: Value) -> Value {
    if let Some(map) = doc.as_object_mut() {
        map.remove("excerpt");
    }
    doc
}

/// `count` posts named `post-1..=count`, one day apart, the highest number
/// being the newest, alternating between the `cuisine` and `season` categories.
pub fn many_posts(count: u32) -> Vec<Value> {
    (1..=count)
        .map(|i| {
            let category = if i % 2 == 0 { "cuisine" } else { "season" };
            let created_at = format!("2024-01-{:02}T12:00:00Z", i);
            post_doc(&format!("post-{}", i), Some(category), &created_at)
        })
        .collect()
}
