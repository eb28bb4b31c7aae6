//! Name-keyed collection of service descriptors sharing one environment.
//!
//! The host document renderer looks up a service by the name it found in the
//! source (`@[youtube](...)` style markers) and hands over the raw reference.
//!
//! ## Examples
//!
//! ```
//! use video_embed::{Environment, ServiceRegistry, VideoDimensions};
//!
//! let registry = ServiceRegistry::with_builtin(Environment::default());
//! let html = registry
//!     .render("vimeo", "https://vimeo.com/76979871", &VideoDimensions::new())
//!     .unwrap()
//!     .expect("vimeo URL is recognised");
//! assert!(html.contains(r#"src="//player.vimeo.com/video/76979871""#));
//!
//! // Unrecognised references are skipped, not errors.
//! let skipped = registry
//!     .render("vimeo", "https://example.com/clip", &VideoDimensions::new())
//!     .unwrap();
//! assert!(skipped.is_none());
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::EmbedConfig;
use crate::dimensions::VideoDimensions;
use crate::environment::Environment;
use crate::error::{EmbedError, Result};
use crate::options::ServiceOptions;
use crate::service::{ServiceDescriptor, VideoService};
use crate::services;

/// Registered services keyed by name.
#[derive(Debug)]
pub struct ServiceRegistry {
    environment: Arc<Environment>,
    services: BTreeMap<String, ServiceDescriptor>,
}

impl ServiceRegistry {
    /// An empty registry.
    pub fn new(environment: Environment) -> Self {
        Self {
            environment: Arc::new(environment),
            services: BTreeMap::new(),
        }
    }

    /// A registry with every built-in service and no overrides.
    pub fn with_builtin(environment: Environment) -> Self {
        let mut registry = Self::new(environment);
        for (name, service) in services::builtin() {
            registry.register_boxed(name, service, ServiceOptions::new());
        }
        registry
    }

    /// A registry with every built-in service, using the environment and
    /// per-service overrides from `config`.
    pub fn from_config(config: EmbedConfig) -> Self {
        let EmbedConfig {
            environment,
            services: overrides,
            ..
        } = config;

        let mut registry = Self::new(Environment::new(environment));
        for (name, service) in services::builtin() {
            let service_overrides = overrides.get(name).cloned().unwrap_or_default();
            registry.register_boxed(name, service, service_overrides);
        }

        for name in overrides.keys().filter(|name| !registry.services.contains_key(*name)) {
            tracing::warn!(service = %name, "overrides configured for unknown video service");
        }
        registry
    }

    /// Registers `service` under `name`, replacing any previous registration.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        service: impl VideoService + 'static,
        overrides: ServiceOptions,
    ) -> &mut Self {
        self.register_boxed(name, Box::new(service), overrides)
    }

    fn register_boxed(
        &mut self,
        name: impl Into<String>,
        service: Box<dyn VideoService>,
        overrides: ServiceOptions,
    ) -> &mut Self {
        let name = name.into();
        let descriptor =
            ServiceDescriptor::from_boxed(name.clone(), service, overrides, Arc::clone(&self.environment));
        if self.services.insert(name.clone(), descriptor).is_some() {
            tracing::debug!(service = %name, "replaced video service registration");
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&ServiceDescriptor> {
        self.services.get(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.services.keys().map(String::as_str)
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Extracts the video ID from `reference` and renders it with the named
    /// service.
    ///
    /// Returns `Ok(None)` when the service does not recognise the reference
    /// (including an empty extracted ID).
    ///
    /// ## Errors
    ///
    /// Returns [`EmbedError::UnknownService`] when nothing is registered under
    /// `name`.
    #[tracing::instrument(level = "debug", skip(self, dimensions))]
    pub fn render(
        &self,
        name: &str,
        reference: &str,
        dimensions: &VideoDimensions,
    ) -> Result<Option<String>> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| EmbedError::UnknownService(name.to_string()))?;

        let Some(video_id) = descriptor
            .extract_video_id(reference)
            .filter(|id| !id.is_empty())
        else {
            tracing::debug!("reference not recognised; skipping");
            return Ok(None);
        };

        Ok(Some(descriptor.embed_code(&video_id, dimensions)))
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::with_builtin(Environment::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::EnvironmentOptions;

    struct Custom;

    impl VideoService for Custom {
        fn extract_video_id(&self, reference: &str) -> Option<String> {
            reference.strip_prefix("custom:").map(str::to_string)
        }

        fn video_url(&self, video_id: &str, _descriptor: &ServiceDescriptor) -> String {
            format!("//custom.test/{video_id}")
        }
    }

    #[test]
    fn test_builtin_names_sorted() {
        let registry = ServiceRegistry::default();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["prezi", "vimeo", "vine", "youtube"]
        );
    }

    #[test]
    fn test_unknown_service() {
        let registry = ServiceRegistry::default();
        let err = registry
            .render("dailymotion", "x7tgad0", &VideoDimensions::new())
            .unwrap_err();
        assert!(matches!(err, EmbedError::UnknownService(ref name) if name == "dailymotion"));
    }

    #[test]
    fn test_unrecognised_reference_is_skipped() {
        let registry = ServiceRegistry::default();
        let rendered = registry
            .render("vine", "https://example.com/nope", &VideoDimensions::new())
            .unwrap();
        assert_eq!(rendered, None);
    }

    #[test]
    fn test_empty_reference_is_skipped() {
        let registry = ServiceRegistry::default();
        assert_eq!(registry.render("youtube", "", &VideoDimensions::new()).unwrap(), None);
    }

    #[test]
    fn test_register_custom_service() {
        let mut registry = ServiceRegistry::new(Environment::default());
        registry.register("custom", Custom, ServiceOptions::new());

        let html = registry
            .render("custom", "custom:abc", &VideoDimensions::new())
            .unwrap()
            .unwrap();
        assert!(html.contains(r#"src="//custom.test/abc""#));
        assert_eq!(registry.render("custom", "abc", &VideoDimensions::new()).unwrap(), None);
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = ServiceRegistry::default();
        registry.register(
            "youtube",
            services::YouTube,
            ServiceOptions::new().with("width", 1280),
        );

        let descriptor = registry.get("youtube").unwrap();
        assert_eq!(descriptor.options().width(), Some(1280.0));
        assert_eq!(descriptor.options().height(), Some(390.0));
        assert_eq!(registry.names().count(), 4);
    }

    #[test]
    fn test_from_config_applies_overrides() {
        let config = EmbedConfig::from_yaml_str(
            "outputPlayerSize: true\nallowFullScreen: false\nservices:\n  youtube:\n    width: 1280\n    height: 720\n",
        )
        .unwrap();
        let registry = ServiceRegistry::from_config(config);

        let html = registry
            .render("youtube", "dQw4w9WgXcQ", &VideoDimensions::new())
            .unwrap()
            .unwrap();
        assert!(html.contains(r#"width="1280" height="720""#));
        assert!(!html.contains("allowfullscreen"));
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_from_config_warns_on_unknown_service() {
        let mut config = EmbedConfig::default();
        config
            .services
            .insert("dailymotion".to_string(), ServiceOptions::new().with("width", 1));

        let registry = ServiceRegistry::from_config(config);
        assert!(registry.get("dailymotion").is_none());
        assert!(logs_contain("overrides configured for unknown video service"));
    }

    #[test]
    fn test_descriptors_share_environment() {
        let options = EnvironmentOptions {
            container_class_name: "shared".to_string(),
            ..EnvironmentOptions::default()
        };
        let registry = ServiceRegistry::with_builtin(Environment::new(options));
        for name in registry.names() {
            let descriptor = registry.get(name).unwrap();
            assert_eq!(descriptor.environment().options().container_class_name, "shared");
        }
    }
}
