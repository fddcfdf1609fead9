//! HTTP client for the rendering service.

use log::debug;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};
use ureq::{Agent, Body};

use crate::config::ServiceConfig;
use crate::error::WsdError;
use crate::request::DiagramRequest;

/// Maximum response body size (32 MB); caps reads from a misbehaving server.
const MAX_RESPONSE_SIZE: u64 = 32 * 1024 * 1024;

/// User agent sent on outbound requests.
const USER_AGENT: &str = concat!("wsdgen/", env!("CARGO_PKG_VERSION"));

/// One HTTP exchange with the rendering service, with the status surfaced
/// as data so callers can branch on it.
#[derive(Debug)]
pub(crate) struct ServiceResponse {
    pub status: u16,
    pub status_text: String,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl ServiceResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking HTTP client for the rendering endpoint.
pub(crate) struct RenderClient {
    agent: Agent,
    endpoint: String,
}

impl RenderClient {
    /// Create a client for the configured endpoint.
    ///
    /// The agent uses native-tls with platform root certificates. Non-2xx
    /// statuses come back as ordinary responses rather than errors, and no
    /// request timeout is configured; the network stack's defaults govern
    /// total latency.
    pub fn new(service: &ServiceConfig) -> Self {
        let tls_config = TlsConfig::builder()
            .provider(TlsProvider::NativeTls)
            .root_certs(RootCerts::PlatformVerifier)
            .build();

        let agent: Agent = Agent::config_builder()
            .tls_config(tls_config)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: service.endpoint().trim_end_matches('/').to_string(),
        }
    }

    /// Submit the generation form to `<endpoint>/index.php`.
    ///
    /// The body is the URL-encoded `message`/`style`/`format` form with
    /// `Content-Type: application/x-www-form-urlencoded`.
    ///
    /// # Errors
    ///
    /// Returns `WsdError::Transport` for connection, TLS, or body-read
    /// failures. HTTP error statuses are not errors at this level.
    pub fn generate(&self, request: &DiagramRequest) -> Result<ServiceResponse, WsdError> {
        let url = format!("{}/index.php", self.endpoint);
        debug!(url = url.as_str(); "Submitting generation request");

        let response = self
            .agent
            .post(&url)
            .header("User-Agent", USER_AGENT)
            .send_form(request.form_fields())?;

        read_response(response)
    }

    /// Fetch a generated image from `<endpoint>/?img=<token>`.
    ///
    /// # Errors
    ///
    /// Returns `WsdError::Transport` for connection, TLS, or body-read
    /// failures. HTTP error statuses are not errors at this level.
    pub fn fetch_image(&self, token: &str) -> Result<ServiceResponse, WsdError> {
        let url = format!("{}/", self.endpoint);
        debug!(url = url.as_str(), token = token; "Fetching generated image");

        let response = self
            .agent
            .get(&url)
            .query("img", token)
            .header("User-Agent", USER_AGENT)
            .call()?;

        read_response(response)
    }
}

/// Read status, content type, and body out of a response.
///
/// The reason phrase is the canonical one for the status code; HTTP/2
/// carries none on the wire.
fn read_response(response: ureq::http::Response<Body>) -> Result<ServiceResponse, WsdError> {
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();

    let body = response
        .into_body()
        .with_config()
        .limit(MAX_RESPONSE_SIZE)
        .read_to_vec()?;

    Ok(ServiceResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        content_type,
        body,
    })
}
