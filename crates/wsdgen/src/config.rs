//! Configuration types for the rendering client.
//!
//! This module provides configuration structures that control what is
//! requested from the rendering service and where the service lives. All
//! types implement [`serde::Deserialize`] for flexible loading from external
//! sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining render and service settings.
//! - [`RenderConfig`] - Controls the style and image format requested from the service.
//! - [`ServiceConfig`] - Controls which endpoint requests are sent to.
//!
//! # Example
//!
//! ```
//! # use wsdgen::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.render().format(), "png");
//! ```

use serde::Deserialize;

/// Default remote rendering endpoint.
const DEFAULT_ENDPOINT: &str = "https://www.websequencediagrams.com";

/// Default diagram style requested from the service.
const DEFAULT_STYLE: &str = "default";

/// Default image format requested from the service.
const DEFAULT_FORMAT: &str = "png";

/// Top-level application configuration combining render and service settings.
///
/// Groups [`RenderConfig`] and [`ServiceConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Service configuration section.
    #[serde(default)]
    service: ServiceConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified render and service configurations.
    ///
    /// # Arguments
    ///
    /// * `render` - Style and format requested from the service.
    /// * `service` - Endpoint settings.
    pub fn new(render: RenderConfig, service: ServiceConfig) -> Self {
        Self { render, service }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the service configuration.
    pub fn service(&self) -> &ServiceConfig {
        &self.service
    }
}

/// Style and format settings for the generation request.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Diagram style name understood by the service.
    #[serde(default = "default_style")]
    style: String,

    /// Output image format understood by the service.
    #[serde(default = "default_format")]
    format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            format: default_format(),
        }
    }
}

impl RenderConfig {
    /// Creates a new [`RenderConfig`] with the specified style and format.
    pub fn new(style: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            format: format.into(),
        }
    }

    /// Returns the diagram style name.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns the image format.
    pub fn format(&self) -> &str {
        &self.format
    }
}

/// Endpoint settings for the rendering service.
///
/// The shipped default is the public websequencediagrams.com endpoint; tests
/// point this at a local stub.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the rendering service.
    #[serde(default = "default_endpoint")]
    endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl ServiceConfig {
    /// Creates a new [`ServiceConfig`] with the specified endpoint base URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// Returns the base URL of the rendering service.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn default_style() -> String {
    DEFAULT_STYLE.to_string()
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}
