//! wsdgen - A client for the websequencediagrams.com rendering service.
//!
//! Diagram source text is submitted to the remote rendering endpoint and the
//! response is resolved into either image bytes or pass-through text.

pub mod config;

mod client;
mod error;
mod request;
mod response;

pub use error::WsdError;
pub use request::DiagramRequest;
pub use response::{RenderOutcome, RenderResult};

use log::{debug, info};

use client::RenderClient;
use config::AppConfig;

/// Client for rendering sequence diagrams through the remote service.
///
/// This drives the full submit/classify/resolve flow for one diagram at a
/// time: build the form payload, POST it to the rendering endpoint, classify
/// the response, and follow up with an image fetch when the service answers
/// with a token instead of bytes.
///
/// # Examples
///
/// ```rust,no_run
/// use wsdgen::{DiagramFetcher, config::AppConfig};
///
/// let source = "Alice->Bob: Authentication Request";
///
/// let fetcher = DiagramFetcher::new(AppConfig::default());
/// let outcome = fetcher.render(source)
///     .expect("Failed to render");
/// ```
pub struct DiagramFetcher {
    config: AppConfig,
    client: RenderClient,
}

impl Default for DiagramFetcher {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DiagramFetcher {
    /// Create a new fetcher with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including render settings and
    ///   the service endpoint
    pub fn new(config: AppConfig) -> Self {
        let client = RenderClient::new(config.service());
        Self { config, client }
    }

    /// Render diagram source text through the remote service.
    ///
    /// Issues the generation request and resolves the response. When the
    /// service answers with an image token, a second request fetches the
    /// actual bytes; the two requests are strictly sequential.
    ///
    /// # Arguments
    ///
    /// * `source` - Diagram source text, passed through to the service
    ///   verbatim
    ///
    /// # Errors
    ///
    /// Returns `WsdError` for:
    /// - Transport failures on either request
    /// - A non-2xx status on the generation request
    /// - A non-2xx status on the follow-up image fetch
    /// - Diagram errors reported by the service
    pub fn render(&self, source: &str) -> Result<RenderOutcome, WsdError> {
        let request = DiagramRequest::new(source, self.config.render());

        info!(
            style = request.style(),
            format = request.format();
            "Submitting diagram to rendering service"
        );
        let response = self.client.generate(&request)?;

        if !response.is_success() {
            return Err(WsdError::Generate {
                status: response.status,
                status_text: response.status_text,
            });
        }

        let result = RenderResult::classify(&response.content_type, response.body);
        debug!(content_type = response.content_type; "Classified service response");

        match result {
            RenderResult::ImageBytes { bytes } => {
                info!(size = bytes.len(); "Received image bytes directly");
                Ok(RenderOutcome::Image { bytes })
            }
            RenderResult::ImageToken { token, raw } => {
                info!(token = token.as_str(); "Response references a generated image, fetching");
                let image = self.client.fetch_image(&token)?;
                if !image.is_success() {
                    return Err(WsdError::FetchImage {
                        status: image.status,
                        status_text: image.status_text,
                        response: raw,
                    });
                }
                info!(size = image.body.len(); "Fetched generated image");
                Ok(RenderOutcome::Image { bytes: image.body })
            }
            RenderResult::ServiceErrors { errors, raw } => Err(WsdError::Service {
                errors,
                response: raw,
            }),
            RenderResult::RawText { raw } => {
                info!("Response matched no known shape, passing text through");
                Ok(RenderOutcome::RawText { raw })
            }
        }
    }
}
