//! Error adapter for converting WsdError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error type
//! and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use wsdgen::WsdError;

/// Adapter wrapping a [`WsdError`] for rich error formatting in the CLI.
///
/// None of the error variants carry source spans, so no labels or source
/// code are exposed; codes and help text are derived per variant.
pub struct ErrorAdapter<'a>(pub &'a WsdError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            WsdError::Io(_) => "wsdgen::io",
            WsdError::InputNotFound(_) => "wsdgen::input_not_found",
            WsdError::Config(_) => "wsdgen::config",
            WsdError::Generate { .. } => "wsdgen::generate",
            WsdError::FetchImage { .. } => "wsdgen::fetch_image",
            WsdError::Service { .. } => "wsdgen::service_errors",
            WsdError::Transport(_) => "wsdgen::transport",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        // Surface the full server response where the extracted message alone
        // is not enough to diagnose the problem.
        match &self.0 {
            WsdError::Service { response, .. } | WsdError::FetchImage { response, .. } => {
                Some(Box::new(format!("Server response: {response}")))
            }
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
