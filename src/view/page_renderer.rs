use ramhorns::Template;

#[derive(ramhorns::Content)]
struct StaticPage<'a> {
    site_name: &'a str,
}

#[derive(ramhorns::Content)]
struct MessagePage<'a> {
    message: &'a str,
}

/// Pages without store content: contact, legal pages and plain messages.
pub struct PageRenderer<'a> {
    template: &'a Template<'static>,
}

impl<'a> PageRenderer<'a> {
    pub fn new(template: &'a Template<'static>) -> Self {
        PageRenderer { template }
    }

    pub fn render(&self, site_name: &str) -> String {
        self.template.render(&StaticPage { site_name })
    }

    pub fn render_message(&self, message: &str) -> String {
        self.template.render(&MessagePage { message })
    }
}
