//! Ambient configuration shared by every service.
//!
//! [`EnvironmentOptions`] carries the user-facing switches that shape the
//! generated markup. [`Environment`] pairs those options with the HTML escaping
//! routine supplied by the host document renderer.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Post-processes a playback URL before it is embedded.
///
/// Called as `(url, service_name, video_id, options)`. The service name comes
/// before the video ID.
pub type UrlFilter = Arc<dyn Fn(&str, &str, &str, &EnvironmentOptions) -> String + Send + Sync>;

/// Escapes text for inclusion in HTML markup.
pub type HtmlEscaper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// User-facing switches for embed generation.
///
/// Deserializes from camelCase keys; missing keys take their defaults.
///
/// ## Examples
///
/// ```
/// use video_embed::EnvironmentOptions;
///
/// let options = EnvironmentOptions::default()
///     .with_filter_url(|url, _service, _id, _options| format!("{url}?rel=0"));
/// assert!(options.filter_url.is_some());
/// assert_eq!(options.container_class_name, "embed-responsive");
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnvironmentOptions {
    /// Class placed on the outer container; also the stem of the viewport class.
    pub container_class_name: String,
    /// Prefix joined to the escaped service name to form the service class.
    pub service_class_prefix: String,
    /// Emit `width`/`height` on the iframe when dimensions are known.
    pub output_player_size: bool,
    /// Wrap the iframe in a padding-based viewport preserving aspect ratio.
    pub output_player_aspect_ratio: bool,
    /// Emit the fullscreen permission flags on the iframe.
    pub allow_full_screen: bool,
    /// Optional hook applied to every playback URL.
    #[serde(skip)]
    pub filter_url: Option<UrlFilter>,
}

impl Default for EnvironmentOptions {
    fn default() -> Self {
        Self {
            container_class_name: "embed-responsive".to_string(),
            service_class_prefix: "embed-responsive-".to_string(),
            output_player_size: true,
            output_player_aspect_ratio: false,
            allow_full_screen: true,
            filter_url: None,
        }
    }
}

impl fmt::Debug for EnvironmentOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvironmentOptions")
            .field("container_class_name", &self.container_class_name)
            .field("service_class_prefix", &self.service_class_prefix)
            .field("output_player_size", &self.output_player_size)
            .field("output_player_aspect_ratio", &self.output_player_aspect_ratio)
            .field("allow_full_screen", &self.allow_full_screen)
            .field("filter_url", &self.filter_url.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl EnvironmentOptions {
    /// Attaches a URL filter.
    pub fn with_filter_url<F>(mut self, filter: F) -> Self
    where
        F: Fn(&str, &str, &str, &EnvironmentOptions) -> String + Send + Sync + 'static,
    {
        self.filter_url = Some(Arc::new(filter));
        self
    }

    /// Applies the configured filter to `url`, or returns it unchanged when no
    /// filter is configured.
    pub fn apply_filter(&self, url: String, service_name: &str, video_id: &str) -> String {
        match &self.filter_url {
            Some(filter) => {
                tracing::debug!(service = service_name, video_id, "applying URL filter");
                filter(&url, service_name, video_id, self)
            }
            None => url,
        }
    }

    /// Checks the class names can be placed in a `class` attribute.
    ///
    /// Enabling both `outputPlayerSize` and `outputPlayerAspectRatio` is
    /// allowed, but only logged: whenever dimensions are available the size
    /// branch wins and the aspect ratio setting is ignored.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidClassName`] when `containerClassName`
    /// contains `"`, `<` or `>`, or when `serviceClassPrefix` contains those
    /// or whitespace.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.container_class_name.contains(['"', '<', '>']) {
            return Err(ConfigError::InvalidClassName {
                field: "containerClassName",
                value: self.container_class_name.clone(),
            });
        }

        if self
            .service_class_prefix
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '<' | '>'))
        {
            return Err(ConfigError::InvalidClassName {
                field: "serviceClassPrefix",
                value: self.service_class_prefix.clone(),
            });
        }

        if self.output_player_size && self.output_player_aspect_ratio {
            tracing::warn!(
                "both outputPlayerSize and outputPlayerAspectRatio are enabled; \
                 the aspect ratio is only used when no player dimensions are known"
            );
        }

        Ok(())
    }
}

/// Escapes `&`, `<`, `>` and `"`.
///
/// ## Examples
///
/// ```
/// use video_embed::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">&"#), "&lt;a href=&quot;x&quot;&gt;&amp;");
/// ```
pub fn escape_html(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// Options plus the host's HTML escaping routine.
#[derive(Clone)]
pub struct Environment {
    options: EnvironmentOptions,
    escaper: HtmlEscaper,
}

impl Environment {
    /// Creates an environment using [`escape_html`] as the escaper.
    pub fn new(options: EnvironmentOptions) -> Self {
        Self {
            options,
            escaper: Arc::new(escape_html),
        }
    }

    /// Replaces the escaping routine with one supplied by the host.
    pub fn with_escaper<F>(mut self, escaper: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.escaper = Arc::new(escaper);
        self
    }

    pub fn options(&self) -> &EnvironmentOptions {
        &self.options
    }

    /// Escapes `text` with the configured routine.
    pub fn escape_html(&self, text: &str) -> String {
        (self.escaper)(text)
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(EnvironmentOptions::default())
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
