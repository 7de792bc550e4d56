use ramhorns::Template;

use crate::config::Site;
use crate::content::PostCard;
use crate::view::card_renderer::{card_views, CardStyle, CardView};

#[derive(ramhorns::Content)]
struct HomePage<'a> {
    site_name: &'a str,
    tagline: &'a str,
    hero_image: &'a str,
    cards: Vec<CardView>,
    has_categories: bool,
    categories: Vec<CategoryTile<'a>>,
}

#[derive(ramhorns::Content)]
struct CategoryTile<'a> {
    name: &'a str,
    slug: &'a str,
    image_url: &'a str,
}

pub struct HomeRenderer<'a> {
    template: &'a Template<'static>,
}

impl<'a> HomeRenderer<'a> {
    pub fn new(template: &'a Template<'static>) -> Self {
        HomeRenderer { template }
    }

    pub fn render(&self, site: &Site, latest: &[PostCard]) -> String {
        let categories: Vec<CategoryTile> = site.featured_categories.iter()
            .map(|c| CategoryTile {
                name: c.name.as_str(),
                slug: c.slug.as_str(),
                image_url: c.image_url.as_str(),
            })
            .collect();

        self.template.render(&HomePage {
            site_name: site.name.as_str(),
            tagline: site.tagline.as_str(),
            hero_image: site.hero_image.as_str(),
            cards: card_views(latest, CardStyle::HOME),
            has_categories: !categories.is_empty(),
            categories,
        })
    }
}
