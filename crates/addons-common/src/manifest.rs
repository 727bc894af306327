//! Generated manifest sets
//!
//! An add-on emits two groups of documents:
//!
//! - **Per-file** manifests, applied by the installer itself (namespace,
//!   operator group, subscription). Keyed by filename; consumers apply them in
//!   lexical filename order, which the filenames are chosen to encode.
//! - A **combined** blob of documents applied once the add-on's operator is
//!   running (its custom resources), joined by `---` separator lines.

use std::collections::BTreeMap;

use crate::DOCUMENT_SEPARATOR;

/// Documents produced by one manifest synthesis
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSet {
    per_file: BTreeMap<String, Vec<u8>>,
    combined: Vec<u8>,
}

impl ManifestSet {
    /// Create a manifest set from its parts
    pub fn new(per_file: BTreeMap<String, Vec<u8>>, combined: Vec<u8>) -> Self {
        Self { per_file, combined }
    }

    /// Per-file manifests keyed by filename
    pub fn per_file(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.per_file
    }

    /// The combined multi-document blob
    pub fn combined(&self) -> &[u8] {
        &self.combined
    }

    /// Per-file manifests in apply order
    pub fn files(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.per_file
            .iter()
            .map(|(name, content)| (name.as_str(), content.as_slice()))
    }

    /// Split the combined blob into its individual documents
    ///
    /// Splits on standalone separator lines and drops empty documents.
    pub fn combined_documents(&self) -> Vec<String> {
        split_documents(&String::from_utf8_lossy(&self.combined))
    }

    /// Decompose into `(per_file, combined)`
    pub fn into_parts(self) -> (BTreeMap<String, Vec<u8>>, Vec<u8>) {
        (self.per_file, self.combined)
    }
}

/// Split a multi-document YAML stream on standalone `---` lines
///
/// Whitespace-only documents are dropped. Document text is returned without
/// its separator.
pub fn split_documents(stream: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current = String::new();

    for line in stream.lines() {
        if line.trim_end() == DOCUMENT_SEPARATOR {
            push_document(&mut documents, &mut current);
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    push_document(&mut documents, &mut current);

    documents
}

fn push_document(documents: &mut Vec<String>, current: &mut String) {
    if !current.trim().is_empty() {
        documents.push(current.trim_end().to_string());
    }
    current.clear();
}
