//! Embed code generation.
//!
//! Produces one fixed structure: an outer container `<div>`, an optional
//! viewport `<div>` used for aspect-ratio sizing, and the `<iframe>`:
//!
//! ```text
//! <div class="{container} {prefix}{service}">[<div class="{container}__viewport" style="padding-top: {ratio}%">]<iframe ...></iframe>[</div>]</div>
//! ```
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use video_embed::{Environment, ServiceDescriptor, ServiceOptions, VideoDimensions};
//! use video_embed::services::YouTube;
//!
//! let descriptor = ServiceDescriptor::new(
//!     "youtube",
//!     YouTube,
//!     ServiceOptions::new(),
//!     Arc::new(Environment::default()),
//! );
//! let html = descriptor.embed_code("dQw4w9WgXcQ", &VideoDimensions::new());
//!
//! assert!(html.starts_with(r#"<div class="embed-responsive embed-responsive-youtube">"#));
//! assert!(html.contains(r#"width="640" height="390""#));
//! assert!(html.ends_with("</iframe></div>\n"));
//! ```

use crate::attributes::{AttributeList, format_number};
use crate::dimensions::VideoDimensions;
use crate::environment::EnvironmentOptions;
use crate::service::ServiceDescriptor;

/// Which sizing strategy a render uses. Exactly one applies per call.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Layout {
    /// Explicit `width`/`height` attributes on the iframe.
    Sized {
        width: Option<f64>,
        height: Option<f64>,
    },
    /// A viewport wrapper with `padding-top` set to the ratio percentage.
    Viewport { aspect_ratio: f64 },
    /// The iframe alone inside the container.
    Plain,
}

impl Layout {
    fn resolve(
        env: &EnvironmentOptions,
        width: Option<f64>,
        height: Option<f64>,
        explicit_ratio: Option<f64>,
    ) -> Self {
        if env.output_player_size && (width.is_some() || height.is_some()) {
            return Layout::Sized { width, height };
        }

        if env.output_player_aspect_ratio {
            // A zero ratio would collapse the player, so it counts as absent.
            let usable = |ratio: &f64| ratio.is_finite() && *ratio != 0.0;
            let aspect_ratio = explicit_ratio
                .filter(usable)
                .or_else(|| match (width, height) {
                    (Some(w), Some(h)) if w != 0.0 => Some((h / w) * 100.0),
                    _ => None,
                })
                .filter(usable);

            if let Some(aspect_ratio) = aspect_ratio {
                return Layout::Viewport { aspect_ratio };
            }
            tracing::debug!("aspect ratio requested but not determinable; rendering without viewport");
        }

        Layout::Plain
    }
}

impl ServiceDescriptor {
    /// Renders the embed fragment for an already extracted `video_id`.
    ///
    /// Explicit values in `dimensions` win over the descriptor's `width` and
    /// `height` options; zero counts as explicit. The output always ends with
    /// a newline.
    #[tracing::instrument(level = "debug", skip(self, dimensions), fields(service = %self.name()))]
    pub fn embed_code(&self, video_id: &str, dimensions: &VideoDimensions) -> String {
        let env = self.environment().options();

        let container_classes = self.container_classes();

        let mut iframe = AttributeList::new();
        iframe.push("type", "text/html");
        iframe.push("src", self.filtered_video_url(video_id));
        iframe.push("frameborder", "0");

        let width = dimensions.width.or_else(|| self.options().width());
        let height = dimensions.height.or_else(|| self.options().height());

        let layout = Layout::resolve(env, width, height, dimensions.aspect_ratio);
        tracing::debug!(?layout, "resolved player layout");

        let mut viewport = None;
        match layout {
            Layout::Sized { width, height } => {
                if let Some(width) = width {
                    iframe.push("width", format_number(width));
                }
                if let Some(height) = height {
                    iframe.push("height", format_number(height));
                }
            }
            Layout::Viewport { aspect_ratio } => {
                let mut attrs = AttributeList::new();
                attrs.push("style", format!("padding-top: {}%", format_number(aspect_ratio)));
                viewport = Some(attrs);
            }
            Layout::Plain => {}
        }

        if env.allow_full_screen {
            iframe.push_flag("webkitallowfullscreen");
            iframe.push_flag("mozallowfullscreen");
            iframe.push_flag("allowfullscreen");
        }

        let mut html = format!(r#"<div class="{container_classes}">"#);
        if let Some(attrs) = &viewport {
            html.push_str(&format!(
                r#"<div class="{}__viewport" {}>"#,
                env.container_class_name, attrs
            ));
        }
        html.push_str(&format!("<iframe {iframe}></iframe>"));
        if viewport.is_some() {
            html.push_str("</div>");
        }
        html.push_str("</div>\n");

        html
    }

    /// Classes for the outer container: the container class (when set) and
    /// the prefixed, escaped service name.
    fn container_classes(&self) -> String {
        let env = self.environment().options();
        let mut classes = Vec::with_capacity(2);
        if !env.container_class_name.is_empty() {
            classes.push(env.container_class_name.clone());
        }
        classes.push(format!(
            "{}{}",
            env.service_class_prefix,
            self.environment().escape_html(self.name())
        ));
        classes.join(" ")
    }
}
