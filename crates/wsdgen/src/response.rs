//! Classification of rendering-service responses.
//!
//! The service answers a generation request in one of four shapes: the image
//! itself, a text body referencing a generated image by token, a text body
//! reporting diagram errors, or arbitrary other text. The checks run in a
//! fixed priority order; that order is part of the service contract.

use std::sync::LazyLock;

use regex::Regex;

/// Matches an `?img=<token>` reference in a text response.
static IMG_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\?img=([A-Za-z0-9_-]+)").expect("valid token pattern"));

/// Matches the `errors: [...]` block in a text response.
static ERRORS_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)errors:\s*\[(.*?)\]").expect("valid errors pattern"));

/// Result of classifying the primary rendering response.
///
/// Exactly one variant is active; the value is consumed immediately to
/// decide the resolution step and is not retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderResult {
    /// The response body is the rendered image itself.
    ImageBytes { bytes: Vec<u8> },

    /// The response references a server-side image by token. The raw body is
    /// kept so a failed follow-up fetch can report the original response.
    ImageToken { token: String, raw: String },

    /// The service parsed the request but reported diagram errors.
    ServiceErrors { errors: String, raw: String },

    /// Unrecognized response body, preserved verbatim.
    RawText { raw: String },
}

impl RenderResult {
    /// Classify a response by declared content type and body.
    ///
    /// Checks run in priority order: an `image/...` content type wins over
    /// any body pattern, an `?img=` token wins over an `errors:` block, and
    /// anything else falls through verbatim.
    pub fn classify(content_type: &str, body: Vec<u8>) -> Self {
        if content_type.starts_with("image/") {
            return Self::ImageBytes { bytes: body };
        }

        let text = String::from_utf8_lossy(&body).into_owned();

        if let Some(captures) = IMG_TOKEN.captures(&text) {
            let token = captures[1].to_string();
            return Self::ImageToken { token, raw: text };
        }

        if let Some(captures) = ERRORS_BLOCK.captures(&text) {
            let errors = captures[1].to_string();
            return Self::ServiceErrors { errors, raw: text };
        }

        Self::RawText { raw: text }
    }
}

/// Successful resolution of a [`RenderResult`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Rendered image bytes, received directly or through a token fetch.
    Image { bytes: Vec<u8> },

    /// Unrecognized response text to persist as-is for inspection.
    RawText { raw: String },
}
