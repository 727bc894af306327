//! Placeholder templating for add-on manifests
//!
//! Add-on manifests are static YAML text with named placeholders
//! (`{{ OPERATOR_NAMESPACE }}`) filled from an explicit, ordered list of
//! bindings. Rendering is strict: a placeholder with no binding is an error,
//! never an empty string.
//!
//! Documents whose shape depends on cluster state are assembled from named
//! fragments with [`FragmentBuilder`] before rendering, so the set of included
//! fragments can be inspected independently of the rendered text.

mod engine;
mod error;
mod fragments;

pub use engine::{Bindings, TemplateEngine};
pub use error::TemplateError;
pub use fragments::{Fragment, FragmentBuilder};
