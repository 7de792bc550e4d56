use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::text_utils::non_empty;

const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// Image field as stored on a document, `{ asset: { url } }` once
/// dereferenced or `{ asset: { _ref } }` when left as a reference.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ImageField {
    #[serde(default)]
    pub asset: Option<AssetField>,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AssetField {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "_ref")]
    pub reference: Option<String>,
}

/// Turns image fields into absolute URLs.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    project_id: String,
    dataset: String,
}

impl AssetResolver {
    pub fn new(project_id: &str, dataset: &str) -> Self {
        AssetResolver {
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
        }
    }

    pub fn resolve(&self, image: &ImageField) -> Option<String> {
        let asset = image.asset.as_ref()?;
        if let Some(url) = non_empty(asset.url.as_deref()) {
            return Some(url.to_string());
        }
        asset.reference.as_deref().and_then(|r| self.image_url(r))
    }

    /// `image-<id>-<width>x<height>-<ext>` -> CDN URL.
    pub fn image_url(&self, reference: &str) -> Option<String> {
        lazy_static! {
            static ref IMAGE_REF_REGEX: Regex = Regex::new(
                r"^image-(?P<id>[A-Za-z0-9]+)-(?P<size>\d+x\d+)-(?P<ext>[a-z0-9]+)$"
            ).unwrap();
        }

        let caps = IMAGE_REF_REGEX.captures(reference)?;
        Some(format!(
            "{}/{}/{}/{}-{}.{}",
            IMAGE_CDN, self.project_id, self.dataset, &caps["id"], &caps["size"], &caps["ext"]
        ))
    }
}
