use html_escape::{encode_quoted_attribute, encode_text};
use serde::Deserialize;

use crate::content::assets::{AssetResolver, ImageField};

/// Deeper list levels are rendered at this depth.
const MAX_LIST_DEPTH: usize = 8;

/// One entry of a Portable Text array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
    #[serde(rename = "block")]
    Text(TextBlock),
    #[serde(rename = "image")]
    Image(ImageField),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub children: Vec<Span>,
    #[serde(default)]
    pub mark_defs: Vec<MarkDef>,
    #[serde(default)]
    pub list_item: Option<String>,
    #[serde(default)]
    pub level: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Span {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub marks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MarkDef {
    #[serde(default, rename = "_key")]
    pub key: String,
    #[serde(default, rename = "_type")]
    pub kind: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn from(list_item: &str) -> Self {
        match list_item {
            "number" => ListKind::Number,
            _ => ListKind::Bullet,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            ListKind::Bullet => "ul",
            ListKind::Number => "ol",
        }
    }
}

pub struct PortableTextRenderer<'a> {
    assets: &'a AssetResolver,
}

impl<'a> PortableTextRenderer<'a> {
    pub fn new(assets: &'a AssetResolver) -> Self {
        PortableTextRenderer { assets }
    }

    pub fn render(&self, blocks: &[Block]) -> String {
        let mut html = String::new();
        // One entry per open list level, each with an open <li>
        let mut open_lists: Vec<ListKind> = vec![];

        for block in blocks {
            match block {
                Block::Text(text) if text.list_item.is_some() => {
                    let kind = ListKind::from(text.list_item.as_deref().unwrap_or("bullet"));
                    let level = (text.level.unwrap_or(1).max(1) as usize).min(MAX_LIST_DEPTH);
                    Self::open_list_item(&mut html, &mut open_lists, kind, level);
                    html.push_str(&Self::render_spans(text));
                }
                Block::Text(text) => {
                    Self::close_lists(&mut html, &mut open_lists, 0);
                    let tag = Self::block_tag(text.style.as_deref());
                    html.push_str(&format!("<{}>{}</{}>", tag, Self::render_spans(text), tag));
                }
                Block::Image(image) => {
                    Self::close_lists(&mut html, &mut open_lists, 0);
                    if let Some(url) = self.assets.resolve(image) {
                        let alt = image.alt.as_deref().unwrap_or("");
                        html.push_str(&format!(
                            r#"<figure><img src="{}" alt="{}" loading="lazy"/></figure>"#,
                            encode_quoted_attribute(&url),
                            encode_quoted_attribute(alt)
                        ));
                    }
                }
                Block::Unknown => {}
            }
        }

        Self::close_lists(&mut html, &mut open_lists, 0);
        html
    }

    fn open_list_item(html: &mut String, open_lists: &mut Vec<ListKind>, kind: ListKind, level: usize) {
        Self::close_lists(html, open_lists, level);

        if open_lists.len() == level && open_lists.last() != Some(&kind) {
            Self::close_lists(html, open_lists, level - 1);
        }

        if open_lists.len() == level {
            html.push_str("</li>");
        }

        while open_lists.len() < level {
            html.push_str(&format!("<{}>", kind.tag()));
            open_lists.push(kind);
        }

        html.push_str("<li>");
    }

    fn close_lists(html: &mut String, open_lists: &mut Vec<ListKind>, keep: usize) {
        while open_lists.len() > keep {
            if let Some(kind) = open_lists.pop() {
                html.push_str(&format!("</li></{}>", kind.tag()));
            }
        }
    }

    fn block_tag(style: Option<&str>) -> &'static str {
        match style {
            Some("h1") => "h1",
            Some("h2") => "h2",
            Some("h3") => "h3",
            Some("h4") => "h4",
            Some("h5") => "h5",
            Some("h6") => "h6",
            Some("blockquote") => "blockquote",
            _ => "p",
        }
    }

    fn render_spans(block: &TextBlock) -> String {
        let mut html = String::new();
        for span in block.children.iter() {
            let mut closing = vec![];
            for mark in span.marks.iter() {
                if let Some((open, close)) = Self::mark_tags(mark, &block.mark_defs) {
                    html.push_str(&open);
                    closing.push(close);
                }
            }

            html.push_str(&encode_text(&span.text).replace('\n', "<br/>"));

            for close in closing.iter().rev() {
                html.push_str(close);
            }
        }
        html
    }

    fn mark_tags(mark: &str, mark_defs: &[MarkDef]) -> Option<(String, &'static str)> {
        let tags = match mark {
            "strong" => ("<strong>".to_string(), "</strong>"),
            "em" => ("<em>".to_string(), "</em>"),
            "code" => ("<code>".to_string(), "</code>"),
            "underline" => (r#"<span style="text-decoration:underline">"#.to_string(), "</span>"),
            "strike-through" => ("<del>".to_string(), "</del>"),
            key => {
                let def = mark_defs.iter().find(|d| d.key == key)?;
                match (def.kind.as_str(), def.href.as_deref()) {
                    ("link", Some(href)) => (format!(r#"<a href="{}">"#, encode_quoted_attribute(href)), "</a>"),
                    _ => return None,
                }
            }
        };
        Some(tags)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn render(body: serde_json::Value) -> String {
        let blocks: Vec<Block> = serde_json::from_value(body).unwrap();
        let assets = AssetResolver::new("abc123", "production");
        PortableTextRenderer::new(&assets).render(&blocks)
    }

    fn text(style: &str, text: &str) -> serde_json::Value {
        json!({ "_type": "block", "style": style, "children": [{ "_type": "span", "text": text, "marks": [] }], "markDefs": [] })
    }

    fn item(list: &str, level: u32, text: &str) -> serde_json::Value {
        json!({ "_type": "block", "style": "normal", "listItem": list, "level": level, "children": [{ "_type": "span", "text": text }] })
    }

    #[test]
    fn renders_styles_and_escapes_text() {
        let html = render(json!([text("h2", "Prep"), text("normal", "Salt & <pepper>"), text("blockquote", "Yum")]));
        assert_eq!(html, "<h2>Prep</h2><p>Salt &amp; &lt;pepper&gt;</p><blockquote>Yum</blockquote>");
    }

    #[test]
    fn renders_decorators_and_links() {
        let html = render(json!([{
            "_type": "block",
            "style": "normal",
            "markDefs": [{ "_key": "k1", "_type": "link", "href": "https://example.com/?a=1&b=2" }],
            "children": [
                { "_type": "span", "text": "bold", "marks": ["strong"] },
                { "_type": "span", "text": " and " },
                { "_type": "span", "text": "link", "marks": ["k1", "em"] }
            ]
        }]));
        assert_eq!(
            html,
            r#"<p><strong>bold</strong> and <a href="https://example.com/?a=1&amp;b=2"><em>link</em></a></p>"#
        );
    }

    #[test]
    fn ignores_unknown_marks() {
        let html = render(json!([{
            "_type": "block",
            "children": [{ "_type": "span", "text": "x", "marks": ["missing"] }]
        }]));
        assert_eq!(html, "<p>x</p>");
    }

    #[test]
    fn groups_list_items() {
        let html = render(json!([
            item("bullet", 1, "onion"),
            item("bullet", 1, "garlic"),
            text("normal", "Then"),
            item("number", 1, "chop"),
            item("number", 1, "fry")
        ]));
        assert_eq!(
            html,
            "<ul><li>onion</li><li>garlic</li></ul><p>Then</p><ol><li>chop</li><li>fry</li></ol>"
        );
    }

    #[test]
    fn nests_list_levels() {
        let html = render(json!([
            item("bullet", 1, "sauce"),
            item("bullet", 2, "tomato"),
            item("bullet", 2, "basil"),
            item("bullet", 1, "pasta")
        ]));
        assert_eq!(
            html,
            "<ul><li>sauce<ul><li>tomato</li><li>basil</li></ul></li><li>pasta</li></ul>"
        );
    }

    #[test]
    fn caps_list_depth() {
        let html = render(json!([item("bullet", 1_000_000_000, "deep")]));
        assert_eq!(html.matches("<ul>").count(), MAX_LIST_DEPTH);
        assert_eq!(html.matches("</ul>").count(), MAX_LIST_DEPTH);
        assert!(html.contains("<li>deep</li>"));
    }

    #[test]
    fn escapes_image_attributes() {
        let html = render(json!([
            { "_type": "image", "asset": { "url": "https://cdn.example.com/a.jpg" }, "alt": "Say \"cheese\" & <smile>" }
        ]));
        assert_eq!(
            html,
            r#"<figure><img src="https://cdn.example.com/a.jpg" alt="Say &quot;cheese&quot; &amp; &lt;smile&gt;" loading="lazy"/></figure>"#
        );
    }

    #[test]
    fn switching_list_kind_starts_new_list() {
        let html = render(json!([item("bullet", 1, "a"), item("number", 1, "b")]));
        assert_eq!(html, "<ul><li>a</li></ul><ol><li>b</li></ol>");
    }

    #[test]
    fn renders_images_and_skips_unknown_blocks() {
        let html = render(json!([
            { "_type": "image", "asset": { "_ref": "image-abc-800x600-jpg" }, "alt": "Bowl" },
            { "_type": "image", "asset": { "_ref": "not-an-image" } },
            { "_type": "youtube", "url": "https://youtube.com" }
        ]));
        assert_eq!(
            html,
            r#"<figure><img src="https://cdn.sanity.io/images/abc123/production/abc-800x600.jpg" alt="Bowl" loading="lazy"/></figure>"#
        );
    }

    #[test]
    fn keeps_line_breaks() {
        let html = render(json!([text("normal", "one\ntwo")]));
        assert_eq!(html, "<p>one<br/>two</p>");
    }
}
