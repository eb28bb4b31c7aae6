use lazy_static::lazy_static;
use regex::Regex;

use crate::options::ServiceOptions;
use crate::service::{ServiceDescriptor, VideoService};

lazy_static! {
    static ref VIMEO_PATTERN: Regex = Regex::new(
        r"https?://(?:www\.|player\.)?vimeo\.com/(?:channels/(?:\w+/)?|groups/([^/]*)/videos/|album/(\d+)/video/|)(\d+)(?:$|/|\?)"
    ).unwrap();
    static ref VIMEO_ID: Regex = Regex::new(r"^\d+$").unwrap();
}

/// Vimeo videos, referenced by page URL or numeric ID.
#[derive(Debug, Clone, Copy, Default)]
pub struct Vimeo;

impl Vimeo {
    pub const NAME: &'static str = "vimeo";
}

impl VideoService for Vimeo {
    fn default_options(&self) -> ServiceOptions {
        ServiceOptions::new().with("width", 500).with("height", 281)
    }

    fn extract_video_id(&self, reference: &str) -> Option<String> {
        if let Some(id) = VIMEO_PATTERN.captures(reference).and_then(|caps| caps.get(3)) {
            return Some(id.as_str().to_string());
        }
        VIMEO_ID
            .is_match(reference)
            .then(|| reference.to_string())
    }

    fn video_url(&self, video_id: &str, descriptor: &ServiceDescriptor) -> String {
        format!(
            "//player.vimeo.com/video/{}",
            descriptor.environment().escape_html(video_id)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_from_url_forms() {
        let cases = [
            "https://vimeo.com/76979871",
            "http://www.vimeo.com/76979871?autoplay=1",
            "https://player.vimeo.com/76979871/",
            "https://vimeo.com/channels/staffpicks/76979871",
            "https://vimeo.com/groups/shortfilms/videos/76979871",
            "https://vimeo.com/album/2222222/video/76979871",
        ];
        for reference in cases {
            assert_eq!(
                Vimeo.extract_video_id(reference).as_deref(),
                Some("76979871"),
                "reference: {reference}"
            );
        }
    }

    #[test]
    fn test_numeric_id() {
        assert_eq!(Vimeo.extract_video_id("76979871").as_deref(), Some("76979871"));
    }

    #[test]
    fn test_rejects_unrelated_reference() {
        assert_eq!(Vimeo.extract_video_id("https://example.com/76979871x"), None);
        assert_eq!(Vimeo.extract_video_id("not-a-video"), None);
    }
}
