use ramhorns::Template;

use crate::content::assets::AssetResolver;
use crate::content::portable_text::PortableTextRenderer;
use crate::content::{Post, PostCard};
use crate::text_utils::format_date;
use crate::view::card_renderer::{card_views, CardStyle, CardView};

#[derive(ramhorns::Content)]
struct PostPage<'a> {
    title: &'a str,
    category: Option<CategoryLink<'a>>,
    date: Option<String>,
    author: Option<AuthorView<'a>>,
    main_image: Option<&'a str>,
    body: String,
    has_related: bool,
    related: Vec<CardView>,
}

#[derive(ramhorns::Content)]
struct CategoryLink<'a> {
    slug: &'a str,
    name: &'a str,
}

#[derive(ramhorns::Content)]
struct AuthorView<'a> {
    name: &'a str,
    image_url: Option<&'a str>,
}

pub struct PostRenderer<'a> {
    template: &'a Template<'static>,
    assets: &'a AssetResolver,
}

impl<'a> PostRenderer<'a> {
    pub fn new(template: &'a Template<'static>, assets: &'a AssetResolver) -> Self {
        PostRenderer { template, assets }
    }

    pub fn render(&self, post: &Post, related: &[PostCard]) -> String {
        let category = post.category.as_ref()
            .and_then(|c| c.link())
            .map(|(slug, name)| CategoryLink { slug, name });

        let author = post.author.as_ref().and_then(|a| {
            let name = a.name.as_deref()?;
            Some(AuthorView { name, image_url: a.image_url.as_deref() })
        });

        self.template.render(&PostPage {
            title: post.title.as_str(),
            category,
            date: post.created_at.as_ref().map(format_date),
            author,
            main_image: post.main_image.as_deref(),
            body: PortableTextRenderer::new(self.assets).render(&post.body),
            has_related: !related.is_empty(),
            related: card_views(related, CardStyle::RELATED),
        })
    }
}
