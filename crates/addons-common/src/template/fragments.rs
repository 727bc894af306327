//! Ordered fragment assembly
//!
//! Some documents are a fixed sequence of text fragments where individual
//! fragments are gated on cluster state. The builder keeps fragment identity
//! around until the final concatenation so the included set can be asserted
//! directly instead of grepping rendered output.

/// A named piece of template text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    /// Stable identifier for the fragment
    pub name: &'static str,
    /// Raw template text
    pub source: &'static str,
}

impl Fragment {
    /// Create a fragment
    pub const fn new(name: &'static str, source: &'static str) -> Self {
        Self { name, source }
    }
}

/// Builder that appends fragments in order, optionally gated by a condition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FragmentBuilder {
    fragments: Vec<Fragment>,
}

impl FragmentBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment unconditionally
    pub fn push(mut self, fragment: Fragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    /// Append a fragment only when `include` is true
    pub fn push_if(self, include: bool, fragment: Fragment) -> Self {
        if include {
            self.push(fragment)
        } else {
            self
        }
    }

    /// Whether a fragment with this name was included
    pub fn contains(&self, name: &str) -> bool {
        self.fragments.iter().any(|f| f.name == name)
    }

    /// Names of included fragments, in order
    pub fn names(&self) -> Vec<&'static str> {
        self.fragments.iter().map(|f| f.name).collect()
    }

    /// Concatenate the included fragments into one template
    pub fn build(&self) -> String {
        let len = self.fragments.iter().map(|f| f.source.len()).sum();
        let mut out = String::with_capacity(len);
        for fragment in &self.fragments {
            out.push_str(fragment.source);
        }
        out
    }
}
