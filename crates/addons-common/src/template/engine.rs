//! Template engine for add-on manifests
//!
//! Uses minijinja with:
//! - Default `{{ ... }}` variable delimiters
//! - Strict undefined handling (missing bindings fail the render)
//! - Auto-escaping disabled (output is YAML, values are inserted verbatim)
//! - Trailing newlines preserved so fragments concatenate byte-for-byte

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use super::error::TemplateError;

/// Ordered placeholder bindings for a single render
///
/// Kept as a list rather than a map so the binding set is explicit at the call
/// site and never depends on hash iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    entries: Vec<(&'static str, String)>,
}

impl Bindings {
    /// Create an empty binding list
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a placeholder to a value
    ///
    /// Binding the same key twice replaces the earlier value in place.
    pub fn bind(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Look up the value bound to a placeholder
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Placeholder names in binding order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    /// Number of bound placeholders
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no placeholders are bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn to_value(&self) -> Value {
        Value::from_iter(self.entries.iter().map(|(k, v)| (*k, v.as_str())))
    }
}

/// Strict placeholder renderer
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    /// Create a new template engine
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        Self { env }
    }

    /// Render `template` under `name` with the given bindings
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Parse`] if the template text is malformed and
    /// [`TemplateError::Render`] if rendering fails, including when a
    /// placeholder has no binding. Both carry `name`.
    pub fn render(
        &self,
        name: &str,
        template: &str,
        bindings: &Bindings,
    ) -> Result<String, TemplateError> {
        self.env
            .render_named_str(name, template, bindings.to_value())
            .map_err(|e| TemplateError::classify(name, e))
    }
}
