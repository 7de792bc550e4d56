use std::io::Cursor;

use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::content::PostCard;
use crate::view::card_renderer::post_link;

/* Example
<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
  <title>DinnerRecipes</title>
  <link>https://dinnerrecipes.example.com</link>
  <description>Discover delicious, easy dinner recipes and cooking tips.</description>
  <item>
    <title>Lemon pasta</title>
    <link>https://dinnerrecipes.example.com/blog/lemon-pasta</link>
    <guid isPermaLink="true">https://dinnerrecipes.example.com/blog/lemon-pasta</guid>
    <description><![CDATA[Bright and quick]]></description>
    <pubDate>Mon, 4 Mar 2024 10:00:00 +0000</pubDate>
  </item>
</channel>
</rss>
*/

pub struct RssChannel<'a> {
    pub ch_title: &'a str,
    pub ch_link: &'a str,
    pub ch_desc: &'a str,
}

impl<'a> RssChannel<'a> {
    pub fn render(&self, cards: &[PostCard]) -> quick_xml::Result<Vec<u8>> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let mut rss = BytesStart::new("rss");
        rss.push_attribute(("version", "2.0"));
        writer.write_event(Event::Start(rss))?;
        writer.write_event(Event::Start(BytesStart::new("channel")))?;

        push_text(&mut writer, "title", self.ch_title)?;
        push_text(&mut writer, "link", self.ch_link)?;
        push_text(&mut writer, "description", self.ch_desc)?;

        for card in cards {
            writer.write_event(Event::Start(BytesStart::new("item")))?;

            push_text(&mut writer, "title", &card.title)?;

            let link = full_link(self.ch_link, &card.slug);
            push_text(&mut writer, "link", &link)?;

            let mut guid = BytesStart::new("guid");
            guid.push_attribute(("isPermaLink", "true"));
            writer.write_event(Event::Start(guid))?;
            writer.write_event(Event::Text(BytesText::new(&link)))?;
            writer.write_event(Event::End(BytesEnd::new("guid")))?;

            if let Some(ref excerpt) = card.excerpt {
                push_cdata(&mut writer, "description", excerpt)?;
            }

            if let Some(created_at) = card.created_at {
                push_text(&mut writer, "pubDate", &created_at.to_rfc2822())?;
            }

            writer.write_event(Event::End(BytesEnd::new("item")))?;
        }

        writer.write_event(Event::End(BytesEnd::new("channel")))?;
        writer.write_event(Event::End(BytesEnd::new("rss")))?;

        Ok(writer.into_inner().into_inner())
    }
}

fn full_link(base_url: &str, slug: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), post_link(slug))
}

fn push_text(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn push_cdata(writer: &mut Writer<Cursor<Vec<u8>>>, tag: &str, text: &str) -> quick_xml::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    let text = text.replace("]]>", "]] >");
    writer.write_event(Event::CData(BytesCData::new(text.as_str())))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
