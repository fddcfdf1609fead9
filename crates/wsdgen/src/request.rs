//! Form payload for the diagram generation request.

use crate::config::RenderConfig;

/// Immutable form payload submitted to the rendering endpoint.
///
/// Built once from diagram source text and render settings; the field order
/// of [`form_fields`](Self::form_fields) is the wire order the service
/// expects (`message`, `style`, `format`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramRequest {
    message: String,
    style: String,
    format: String,
}

impl DiagramRequest {
    /// Build a request from diagram source text and render settings.
    ///
    /// # Arguments
    ///
    /// * `message` - Diagram source text, passed through verbatim
    /// * `config` - Style and format to request from the service
    pub fn new(message: impl Into<String>, config: &RenderConfig) -> Self {
        Self {
            message: message.into(),
            style: config.style().to_string(),
            format: config.format().to_string(),
        }
    }

    /// Returns the diagram source text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the requested style.
    pub fn style(&self) -> &str {
        &self.style
    }

    /// Returns the requested image format.
    pub fn format(&self) -> &str {
        &self.format
    }

    /// The `(name, value)` pairs of the URL-encoded body, in wire order.
    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("message", self.message.as_str()),
            ("style", self.style.as_str()),
            ("format", self.format.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_in_wire_order() {
        let request = DiagramRequest::new("Alice->Bob: hi", &RenderConfig::default());

        let fields = request.form_fields();
        assert_eq!(fields[0], ("message", "Alice->Bob: hi"));
        assert_eq!(fields[1], ("style", "default"));
        assert_eq!(fields[2], ("format", "png"));
    }

    #[test]
    fn settings_come_from_config() {
        let config = RenderConfig::new("modern-blue", "svg");
        let request = DiagramRequest::new("a->b", &config);

        assert_eq!(request.style(), "modern-blue");
        assert_eq!(request.format(), "svg");
    }

    #[test]
    fn message_is_passed_through_verbatim() {
        let source = "title Credit Check\nAlice->Bob: hi\n";
        let request = DiagramRequest::new(source, &RenderConfig::default());

        assert_eq!(request.message(), source);
    }
}
