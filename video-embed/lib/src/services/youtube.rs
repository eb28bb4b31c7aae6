use lazy_static::lazy_static;
use regex::Regex;

use crate::options::ServiceOptions;
use crate::service::{ServiceDescriptor, VideoService};

lazy_static! {
    static ref YOUTUBE_PATTERN: Regex = Regex::new(
        r"^.*((youtu.be/)|(v/)|(/u/\w/)|(embed/)|(watch\?))\??v?=?([^#&?]*).*"
    ).unwrap();
}

const ID_LENGTH: usize = 11;

/// YouTube videos.
///
/// Anything that does not parse to an 11 character ID is passed through
/// unchanged, so bare IDs work as references.
///
/// ## Examples
///
/// ```
/// use video_embed::VideoService;
/// use video_embed::services::YouTube;
///
/// assert_eq!(
///     YouTube.extract_video_id("https://youtu.be/dQw4w9WgXcQ").as_deref(),
///     Some("dQw4w9WgXcQ")
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct YouTube;

impl YouTube {
    pub const NAME: &'static str = "youtube";
}

impl VideoService for YouTube {
    fn default_options(&self) -> ServiceOptions {
        ServiceOptions::new().with("width", 640).with("height", 390)
    }

    fn extract_video_id(&self, reference: &str) -> Option<String> {
        let id = YOUTUBE_PATTERN
            .captures(reference)
            .and_then(|caps| caps.get(7))
            .map(|m| m.as_str())
            .filter(|id| id.len() == ID_LENGTH)
            .unwrap_or(reference);
        Some(id.to_string())
    }

    fn video_url(&self, video_id: &str, descriptor: &ServiceDescriptor) -> String {
        format!(
            "//www.youtube.com/embed/{}",
            descriptor.environment().escape_html(video_id)
        )
    }
}
