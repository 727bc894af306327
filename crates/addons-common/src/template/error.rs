//! Template error types

use thiserror::Error;

/// Errors that can occur while rendering a packaged template
///
/// Templates ship with the binary, so either variant indicates a packaging
/// defect rather than bad user input.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template text is not syntactically valid
    #[error("template {template} failed to parse: {source}")]
    Parse {
        /// Name of the template that failed
        template: String,
        /// The underlying minijinja error
        #[source]
        source: minijinja::Error,
    },

    /// Template parsed but could not be rendered (e.g. a placeholder has no binding)
    #[error("template {template} failed to render: {source}")]
    Render {
        /// Name of the template that failed
        template: String,
        /// The underlying minijinja error
        #[source]
        source: minijinja::Error,
    },
}

impl TemplateError {
    /// Create a parse error for the named template
    pub fn parse(template: impl Into<String>, source: minijinja::Error) -> Self {
        Self::Parse {
            template: template.into(),
            source,
        }
    }

    /// Create a render error for the named template
    pub fn render(template: impl Into<String>, source: minijinja::Error) -> Self {
        Self::Render {
            template: template.into(),
            source,
        }
    }

    /// Classify a minijinja error raised while handling the named template
    pub fn classify(template: impl Into<String>, source: minijinja::Error) -> Self {
        match source.kind() {
            minijinja::ErrorKind::SyntaxError => Self::parse(template, source),
            _ => Self::render(template, source),
        }
    }

    /// Name of the template that failed
    pub fn template(&self) -> &str {
        match self {
            Self::Parse { template, .. } | Self::Render { template, .. } => template,
        }
    }
}
