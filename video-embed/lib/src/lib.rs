//! Responsive iframe embed code for video hosting services.
//!
//! Given a reference to a video (a page URL or a bare ID) this crate produces
//! the HTML fragment a markdown renderer inserts in place of an embed marker:
//! a container `<div>` wrapping an `<iframe>`, optionally with an extra
//! viewport `<div>` that preserves the player's aspect ratio.
//!
//! ## Modules
//!
//! - [`service`] - the [`VideoService`] extension points and [`ServiceDescriptor`]
//! - [`render`] - embed code generation on [`ServiceDescriptor::embed_code`]
//! - [`services`] - built-in YouTube, Vimeo, Vine and Prezi services
//! - [`registry`] - name-keyed lookup used by host document renderers
//! - [`environment`] - shared switches, URL filter and HTML escaping
//! - [`config`] - YAML/JSON configuration files
//!
//! ## Examples
//!
//! ```
//! use video_embed::{Environment, EnvironmentOptions, ServiceRegistry, VideoDimensions};
//!
//! let options = EnvironmentOptions {
//!     output_player_size: false,
//!     output_player_aspect_ratio: true,
//!     allow_full_screen: false,
//!     ..EnvironmentOptions::default()
//! };
//! let registry = ServiceRegistry::with_builtin(Environment::new(options));
//!
//! let html = registry
//!     .render(
//!         "youtube",
//!         "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
//!         &VideoDimensions::new().with_width(640.0).with_height(360.0),
//!     )
//!     .unwrap()
//!     .unwrap();
//!
//! assert_eq!(
//!     html,
//!     "<div class=\"embed-responsive embed-responsive-youtube\">\
//!      <div class=\"embed-responsive__viewport\" style=\"padding-top: 56.25%\">\
//!      <iframe type=\"text/html\" src=\"//www.youtube.com/embed/dQw4w9WgXcQ\" frameborder=\"0\"></iframe>\
//!      </div></div>\n"
//! );
//! ```

pub mod attributes;
pub mod config;
pub mod dimensions;
pub mod environment;
pub mod error;
pub mod options;
pub mod registry;
pub mod render;
pub mod service;
pub mod services;

pub use attributes::{Attribute, AttributeList};
pub use config::EmbedConfig;
pub use dimensions::VideoDimensions;
pub use environment::{Environment, EnvironmentOptions, HtmlEscaper, UrlFilter, escape_html};
pub use error::{ConfigError, EmbedError, Result};
pub use options::ServiceOptions;
pub use registry::ServiceRegistry;
pub use service::{ServiceDescriptor, VideoService};
