use crate::content::PostCard;

/// What a grid shows of each post.
#[derive(Clone, Copy, Debug)]
pub struct CardStyle {
    pub excerpt: bool,
    pub category: bool,
}

impl CardStyle {
    pub const HOME: CardStyle = CardStyle { excerpt: true, category: true };
    pub const BLOG: CardStyle = CardStyle { excerpt: true, category: false };
    pub const CATEGORY: CardStyle = CardStyle { excerpt: false, category: false };
    pub const RELATED: CardStyle = CardStyle { excerpt: false, category: false };
}

#[derive(ramhorns::Content, Debug, PartialEq)]
pub struct CardView {
    pub title: String,
    pub link: String,
    pub excerpt: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

pub fn post_link(slug: &str) -> String {
    format!("/blog/{}", slug)
}

impl CardView {
    pub fn from(card: &PostCard, style: CardStyle) -> Self {
        let excerpt = if style.excerpt { card.excerpt.clone() } else { None };
        let category = if style.category {
            // Titled categories with a slug only
            card.category.as_ref()
                .filter(|c| c.slug.is_some())
                .and_then(|c| c.title.clone())
        } else {
            None
        };

        CardView {
            title: card.title.clone(),
            link: post_link(&card.slug),
            excerpt,
            image_url: card.main_image.clone(),
            category,
        }
    }
}

pub fn card_views(cards: &[PostCard], style: CardStyle) -> Vec<CardView> {
    cards.iter().map(|card| CardView::from(card, style)).collect()
}

#[cfg(test)]
mod tests {
    use crate::content::Category;

    use super::*;

    fn card() -> PostCard {
        PostCard {
            title: "Lemon pasta".to_string(),
            slug: "lemon-pasta".to_string(),
            excerpt: Some("Bright".to_string()),
            main_image: None,
            category: Some(Category { title: Some("Cuisine".to_string()), slug: Some("cuisine".to_string()) }),
            created_at: None,
        }
    }

    #[test]
    fn home_cards_show_category_title() {
        let view = CardView::from(&card(), CardStyle::HOME);
        assert_eq!(view.link, "/blog/lemon-pasta");
        assert_eq!(view.excerpt.as_deref(), Some("Bright"));
        assert_eq!(view.category.as_deref(), Some("Cuisine"));
        assert_eq!(view.image_url, None);
    }

    #[test]
    fn badge_needs_category_slug() {
        let mut card = card();
        card.category = Some(Category { title: Some("Cuisine".to_string()), slug: None });
        assert_eq!(CardView::from(&card, CardStyle::HOME).category, None);
    }

    #[test]
    fn badge_needs_category_title() {
        let mut card = card();
        card.category = Some(Category { title: None, slug: Some("cuisine".to_string()) });
        assert_eq!(CardView::from(&card, CardStyle::HOME).category, None);
    }

    #[test]
    fn category_cards_are_reduced() {
        let view = CardView::from(&card(), CardStyle::CATEGORY);
        assert_eq!(view.excerpt, None);
        assert_eq!(view.category, None);
    }
}
