//! Video services and their descriptors.
//!
//! A [`VideoService`] supplies the two rules that differ between hosting
//! services: how to pull a video ID out of a raw reference, and how to build
//! the playback URL for an ID. A [`ServiceDescriptor`] binds a service to the
//! name it is registered under, its merged options and the shared
//! [`Environment`].
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use video_embed::{Environment, ServiceDescriptor, ServiceOptions, VideoService};
//!
//! struct Example;
//!
//! impl VideoService for Example {
//!     fn video_url(&self, video_id: &str, _descriptor: &ServiceDescriptor) -> String {
//!         format!("https://video.example.com/embed/{video_id}")
//!     }
//! }
//!
//! let descriptor = ServiceDescriptor::new(
//!     "example",
//!     Example,
//!     ServiceOptions::new(),
//!     Arc::new(Environment::default()),
//! );
//! assert_eq!(
//!     descriptor.filtered_video_url("42"),
//!     "https://video.example.com/embed/42"
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::environment::Environment;
use crate::options::ServiceOptions;

/// The per-service extension points.
///
/// Only [`video_url`](VideoService::video_url) has to be supplied; a service
/// without a URL rule does not compile:
///
/// ```compile_fail
/// use video_embed::VideoService;
///
/// struct NoUrl;
///
/// impl VideoService for NoUrl {}
/// ```
pub trait VideoService: Send + Sync {
    /// Options this service starts from before caller overrides are applied.
    fn default_options(&self) -> ServiceOptions {
        ServiceOptions::new()
    }

    /// Extracts the canonical video ID from a raw reference.
    ///
    /// Returns `None` when the reference is not recognised; the caller should
    /// skip this service rather than treat it as an error. The default accepts
    /// the reference as-is.
    fn extract_video_id(&self, reference: &str) -> Option<String> {
        Some(reference.to_string())
    }

    /// Builds the playback URL for `video_id`.
    ///
    /// Implementations escape whatever they interpolate; the URL is written
    /// into the `src` attribute verbatim.
    fn video_url(&self, video_id: &str, descriptor: &ServiceDescriptor) -> String;
}

/// A registered service: name, effective options and environment.
///
/// Immutable once built; rendering reads from it without mutation, so a
/// descriptor can be shared freely across threads.
pub struct ServiceDescriptor {
    name: String,
    options: ServiceOptions,
    environment: Arc<Environment>,
    service: Box<dyn VideoService>,
}

impl ServiceDescriptor {
    /// Builds a descriptor, merging the service's defaults with `overrides`.
    pub fn new(
        name: impl Into<String>,
        service: impl VideoService + 'static,
        overrides: ServiceOptions,
        environment: Arc<Environment>,
    ) -> Self {
        Self::from_boxed(name, Box::new(service), overrides, environment)
    }

    /// Same as [`new`](Self::new) for an already boxed service.
    pub fn from_boxed(
        name: impl Into<String>,
        service: Box<dyn VideoService>,
        overrides: ServiceOptions,
        environment: Arc<Environment>,
    ) -> Self {
        let options = ServiceOptions::merged(service.default_options(), overrides);
        Self {
            name: name.into(),
            options,
            environment,
            service,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Defaults merged with the overrides given at construction.
    pub fn options(&self) -> &ServiceOptions {
        &self.options
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// See [`VideoService::extract_video_id`].
    pub fn extract_video_id(&self, reference: &str) -> Option<String> {
        self.service.extract_video_id(reference)
    }

    /// The unfiltered playback URL.
    pub fn video_url(&self, video_id: &str) -> String {
        self.service.video_url(video_id, self)
    }

    /// The playback URL after the environment's URL filter, if any.
    pub fn filtered_video_url(&self, video_id: &str) -> String {
        let url = self.video_url(video_id);
        self.environment
            .options()
            .apply_filter(url, &self.name, video_id)
    }
}

impl fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}
