use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct FeaturedCategory {
    pub name: String,
    pub slug: String,
    pub image_url: String,
}

#[derive(Deserialize, Clone)]
pub struct SocialLink {
    /// Short text shown in the footer, e.g. `FB`
    pub label: String,
    pub name: String,
    pub url: String,
}

#[derive(Deserialize)]
pub struct Site {
    pub name: String,
    pub description: String,
    pub url: String,
    pub tagline: String,
    pub hero_image: String,
    #[serde(default)]
    pub featured_categories: Vec<FeaturedCategory>,
    #[serde(default)]
    pub social_links: Vec<SocialLink>,
}

#[derive(Deserialize)]
pub struct Paths {
    pub template_dir: PathBuf,
    pub public_dir: PathBuf,
}

fn default_api_version() -> String {
    "2023-05-03".to_string()
}

#[derive(Deserialize)]
pub struct Store {
    pub project_id: String,
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default)]
    pub use_cdn: bool,
    pub token: Option<String>,
    pub timeout_secs: Option<u64>,
}

fn default_home_page_size() -> u32 {
    6
}

fn default_blog_page_size() -> u32 {
    12
}

#[derive(Deserialize)]
pub struct Defaults {
    #[serde(default = "default_home_page_size")]
    pub home_page_size: u32,
    #[serde(default = "default_blog_page_size")]
    pub blog_page_size: u32,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            home_page_size: default_home_page_size(),
            blog_page_size: default_blog_page_size(),
        }
    }
}

#[derive(Deserialize)]
pub struct Server {
    pub address: String,
    pub port: u16,
}

#[derive(Deserialize)]
pub struct Log {
    pub level: LogLevel,
    pub log_to_console: bool,
    pub location: Option<PathBuf>,
}

#[derive(Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LogLevel {
    Critical = 0,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Deserialize)]
pub struct RssFeed {
    pub title: String,
    pub description: String,
    pub page_size: u32,
}

#[derive(Deserialize)]
pub struct Config {
    pub site: Site,
    pub paths: Paths,
    pub store: Store,
    #[serde(default)]
    pub defaults: Defaults,
    pub server: Server,
    pub log: Option<Log>,
    pub rss_feed: Option<RssFeed>,
}

fn parse_path(path: PathBuf) -> io::Result<PathBuf> {
    let Some(str_path) = path.to_str() else {
        return Ok(path);
    };

    if str_path.starts_with("${exe_dir}") {
        let cur_exe = env::current_exe()?;
        let exe_dir = cur_exe.parent().unwrap_or(Path::new("."));
        Ok(PathBuf::from(str_path.replace("${exe_dir}", &exe_dir.to_string_lossy())))
    } else {
        Ok(path)
    }
}

pub fn parse_config(cfg_content: &str) -> io::Result<Config> {
    let mut cfg: Config = match toml::from_str::<Config>(cfg_content) {
        Ok(cfg) => cfg,
        Err(e) => return Err(io::Error::new(
            ErrorKind::InvalidData, format!("Error parsing configuration file: {}", e))),
    };

    if cfg.defaults.home_page_size == 0 || cfg.defaults.blog_page_size == 0 {
        return Err(io::Error::new(ErrorKind::InvalidData, "Page sizes must be greater than 0"));
    }

    cfg.paths = Paths {
        template_dir: parse_path(cfg.paths.template_dir)?,
        public_dir: parse_path(cfg.paths.public_dir)?,
    };

    Ok(cfg)
}

pub fn read_config(cfg_path: &Path) -> io::Result<Config> {
    let cfg_content = match fs::read_to_string(cfg_path) {
        Ok(content) => content,
        Err(e) => return Err(io::Error::new(e.kind(), format!("Error opening configuration file {}: {}", cfg_path.display(), e))),
    };

    parse_config(&cfg_content)
}

#[cfg(test)]
pub const CONFIG_SAMPLE: &str = r##"
[site]
name = "DinnerRecipes"
description = "Discover delicious, easy dinner recipes and cooking tips."
url = "https://dinnerrecipes.example.com"
tagline = "Tasty ideas for every night of the week."
hero_image = "https://images.pexels.com/photos/1438672/pexels-photo-1438672.jpeg"

[[site.featured_categories]]
name = "Time & Effort"
slug = "time-and-effort"
image_url = "https://images.pexels.com/photos/8448322/pexels-photo-8448322.jpeg"

[[site.social_links]]
label = "FB"
name = "Facebook"
url = "https://facebook.com"

[paths]
template_dir = "res/template"
public_dir = "res/public"

[store]
project_id = "abc123"
dataset = "production"

[server]
address = "127.0.0.1"
port = 8001

[log]
level = "Info"
log_to_console = true
"##;
