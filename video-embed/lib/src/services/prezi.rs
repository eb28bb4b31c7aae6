use lazy_static::lazy_static;
use regex::Regex;

use crate::options::ServiceOptions;
use crate::service::{ServiceDescriptor, VideoService};

lazy_static! {
    static ref PREZI_PATTERN: Regex = Regex::new(r"^https://prezi\.com/([^/]+)").unwrap();
    static ref PREZI_ID: Regex = Regex::new(r"^[A-Za-z0-9_-]+$").unwrap();
}

const EMBED_QUERY: &str = "bgcolor=ffffff&lock_to_path=0&autoplay=0&autohide_ctrls=0&\
landing_data=bHVZZmNaNDBIWnNjdEVENDRhZDFNZGNIUE43MHdLNWpsdFJLb2ZHanI5N1lQVHkxSHFxazZ0UUNCRHloSXZROHh3PT0&\
landing_sign=1kD6c0N6aYpMUS0wxnQjxzSqZlEB8qNFdxtdjYhwSuI";

/// Prezi presentations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Prezi;

impl Prezi {
    pub const NAME: &'static str = "prezi";
}

impl VideoService for Prezi {
    fn default_options(&self) -> ServiceOptions {
        ServiceOptions::new().with("width", 550).with("height", 400)
    }

    fn extract_video_id(&self, reference: &str) -> Option<String> {
        if let Some(id) = PREZI_PATTERN.captures(reference).and_then(|caps| caps.get(1)) {
            return Some(id.as_str().to_string());
        }
        PREZI_ID.is_match(reference).then(|| reference.to_string())
    }

    fn video_url(&self, video_id: &str, descriptor: &ServiceDescriptor) -> String {
        format!(
            "https://prezi.com/embed/{}/?{}",
            descriptor.environment().escape_html(video_id),
            EMBED_QUERY
        )
    }
}
