use std::io;
use std::io::ErrorKind;
use std::path::Path;

use ramhorns::{Ramhorns, Template};

pub mod card_renderer;
pub mod home_renderer;
pub mod layout_renderer;
pub mod list_renderer;
pub mod page_renderer;
pub mod post_renderer;
pub mod rss_renderer;

pub const LAYOUT_TPL: &str = "layout.tpl";
pub const HOME_TPL: &str = "home.tpl";
pub const POST_LIST_TPL: &str = "post_list.tpl";
pub const POST_TPL: &str = "post.tpl";
pub const NOT_FOUND_TPL: &str = "not_found.tpl";
pub const CONTACT_TPL: &str = "contact.tpl";
pub const PRIVACY_POLICY_TPL: &str = "privacy-policy.tpl";
pub const TERMS_OF_USE_TPL: &str = "terms-of-use.tpl";

const REQUIRED_TEMPLATES: [&str; 8] = [
    LAYOUT_TPL,
    HOME_TPL,
    POST_LIST_TPL,
    POST_TPL,
    NOT_FOUND_TPL,
    CONTACT_TPL,
    PRIVACY_POLICY_TPL,
    TERMS_OF_USE_TPL,
];

/// All `.tpl` files of the template directory, parsed once at startup.
pub struct SiteTemplates {
    templates: Ramhorns,
}

impl SiteTemplates {
    pub fn load(template_dir: &Path) -> io::Result<SiteTemplates> {
        let templates = match Ramhorns::from_folder_with_extension(template_dir, "tpl") {
            Ok(templates) => templates,
            Err(e) => {
                return Err(io::Error::new(ErrorKind::InvalidInput, format!("Error loading templates from {}: {}", template_dir.display(), e)));
            }
        };

        for name in REQUIRED_TEMPLATES {
            if templates.get(name).is_none() {
                return Err(io::Error::new(ErrorKind::NotFound, format!("Missing template {} in {}", name, template_dir.display())));
            }
        }

        Ok(SiteTemplates { templates })
    }

    /// Panics on names outside `REQUIRED_TEMPLATES`, which `load` checked.
    pub fn get(&self, name: &str) -> &Template<'static> {
        match self.templates.get(name) {
            Some(template) => template,
            None => panic!("Template {} was not loaded", name),
        }
    }
}

#[cfg(test)]
pub(crate) fn test_templates() -> SiteTemplates {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("res").join("template");
    SiteTemplates::load(&dir).unwrap()
}
