use ramhorns::Template;

use crate::config::Site;

#[derive(ramhorns::Content)]
struct LayoutPage<'a> {
    page_title: String,
    site_name: &'a str,
    description: &'a str,
    site_url: &'a str,
    has_feed: bool,
    content: &'a str,
    social_links: Vec<SocialView<'a>>,
}

#[derive(ramhorns::Content)]
struct SocialView<'a> {
    label: &'a str,
    name: &'a str,
    url: &'a str,
}

/// `"%s | <site>"`, or the bare site name for pages without title.
pub fn page_title(site_name: &str, title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{} | {}", title, site_name),
        None => site_name.to_string(),
    }
}

/// Wraps rendered page content in the shared chrome.
pub struct LayoutRenderer<'a> {
    template: &'a Template<'static>,
    site: &'a Site,
    has_feed: bool,
}

impl<'a> LayoutRenderer<'a> {
    pub fn new(template: &'a Template<'static>, site: &'a Site, has_feed: bool) -> Self {
        LayoutRenderer { template, site, has_feed }
    }

    pub fn render(&self, title: Option<&str>, content: &str) -> String {
        let social_links = self.site.social_links.iter()
            .map(|link| SocialView {
                label: link.label.as_str(),
                name: link.name.as_str(),
                url: link.url.as_str(),
            })
            .collect();

        self.template.render(&LayoutPage {
            page_title: page_title(&self.site.name, title),
            site_name: self.site.name.as_str(),
            description: self.site.description.as_str(),
            site_url: self.site.url.as_str(),
            has_feed: self.has_feed,
            content,
            social_links,
        })
    }
}
