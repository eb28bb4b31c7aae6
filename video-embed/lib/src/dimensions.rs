use serde::{Deserialize, Serialize};

/// Per-invocation size hints for a single embed.
///
/// Every field is optional. An explicit value, including zero, takes
/// precedence over the service's configured `width`/`height` options.
///
/// ## Examples
///
/// ```
/// use video_embed::VideoDimensions;
///
/// let dims = VideoDimensions::new().with_width(640.0).with_height(360.0);
/// assert_eq!(dims.width, Some(640.0));
/// assert_eq!(dims.aspect_ratio, None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct VideoDimensions {
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Height as a percentage of width (`56.25` for 16:9).
    pub aspect_ratio: Option<f64>,
}

impl VideoDimensions {
    /// No hints at all.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_aspect_ratio(mut self, aspect_ratio: f64) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }
}
