use lazy_static::lazy_static;
use regex::Regex;

use crate::options::ServiceOptions;
use crate::service::{ServiceDescriptor, VideoService};

lazy_static! {
    static ref VINE_PATTERN: Regex =
        Regex::new(r"^https?://(?:www\.)?vine\.co/v/([a-zA-Z0-9]{1,13}).*").unwrap();
    static ref VINE_ID: Regex = Regex::new(r"^[a-zA-Z0-9]{1,13}$").unwrap();
}

/// Vine clips.
///
/// The `embed` option picks the player style (`simple` or `postcard`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Vine;

impl Vine {
    pub const NAME: &'static str = "vine";
}

impl VideoService for Vine {
    fn default_options(&self) -> ServiceOptions {
        ServiceOptions::new()
            .with("width", 600)
            .with("height", 600)
            .with("embed", "simple")
    }

    fn extract_video_id(&self, reference: &str) -> Option<String> {
        if let Some(id) = VINE_PATTERN.captures(reference).and_then(|caps| caps.get(1)) {
            return Some(id.as_str().to_string());
        }
        VINE_ID.is_match(reference).then(|| reference.to_string())
    }

    fn video_url(&self, video_id: &str, descriptor: &ServiceDescriptor) -> String {
        let env = descriptor.environment();
        let embed = descriptor.options().string("embed").unwrap_or("simple");
        format!(
            "//vine.co/v/{}/embed/{}",
            env.escape_html(video_id),
            env.escape_html(embed)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::environment::Environment;

    #[test]
    fn test_extract() {
        assert_eq!(
            Vine.extract_video_id("https://vine.co/v/bjHh0zHdgZT").as_deref(),
            Some("bjHh0zHdgZT")
        );
        assert_eq!(Vine.extract_video_id("bjHh0zHdgZT").as_deref(), Some("bjHh0zHdgZT"));
        assert_eq!(Vine.extract_video_id("https://example.com/v/bjHh0zHdgZT"), None);
    }

    #[test]
    fn test_embed_option_override() {
        let descriptor = ServiceDescriptor::new(
            Vine::NAME,
            Vine,
            ServiceOptions::new().with("embed", "postcard"),
            Arc::new(Environment::default()),
        );
        assert_eq!(
            descriptor.video_url("bjHh0zHdgZT"),
            "//vine.co/v/bjHh0zHdgZT/embed/postcard"
        );
    }

    #[test]
    fn test_embed_option_default() {
        let descriptor = ServiceDescriptor::new(
            Vine::NAME,
            Vine,
            ServiceOptions::new(),
            Arc::new(Environment::default()),
        );
        assert_eq!(
            descriptor.video_url("bjHh0zHdgZT"),
            "//vine.co/v/bjHh0zHdgZT/embed/simple"
        );
    }
}
