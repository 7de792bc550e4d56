use ramhorns::Template;

use crate::content::PostCard;
use crate::view::card_renderer::{card_views, CardStyle, CardView};

#[derive(ramhorns::Content)]
struct ListPage {
    heading: String,
    cards: Vec<CardView>,
    empty_message: Option<String>,
    pagination: Option<PaginationView>,
}

#[derive(ramhorns::Content, Debug, PartialEq)]
pub struct PaginationView {
    pub previous_link: Option<String>,
    pub next_link: Option<String>,
}

impl PaginationView {
    /// `None` when there is nowhere to go.
    pub fn between(base: &str, page: u32, has_previous: bool, has_next: bool) -> Option<Self> {
        if !has_previous && !has_next {
            return None;
        }

        let link = |p: u32| if p == 1 { base.to_string() } else { format!("{}?page={}", base, p) };
        Some(PaginationView {
            previous_link: has_previous.then(|| link(page - 1)),
            next_link: has_next.then(|| link(page + 1)),
        })
    }
}

/// Grid of cards for the blog index and category pages.
pub struct ListRenderer<'a> {
    template: &'a Template<'static>,
}

impl<'a> ListRenderer<'a> {
    pub fn new(template: &'a Template<'static>) -> Self {
        ListRenderer { template }
    }

    /// `empty_message` replaces the grid when there are no cards.
    pub fn render(&self, heading: &str, cards: &[PostCard], style: CardStyle,
                  empty_message: &str, pagination: Option<PaginationView>) -> String {
        let empty_message = if cards.is_empty() { Some(empty_message.to_string()) } else { None };

        self.template.render(&ListPage {
            heading: heading.to_string(),
            cards: card_views(cards, style),
            empty_message,
            pagination,
        })
    }
}
