// src/section.rs
// ============================================================================
// Module: Configuration Section Tree
// Description: Owned, ordered hierarchical key/value configuration nodes.
// Purpose: Provide the read-only lookup surface the binder walks.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`Section`] is one node of hierarchical configuration: an optional
//! scalar value plus an ordered list of named child sections. Key lookup is
//! case-insensitive and paths are dotted (`"Outer.Inner"`). Looking up an
//! absent path yields an empty section rather than an error; absence of
//! required data is a validation concern, not a lookup concern.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// SECTION: Section Tree
// ============================================================================

/// One node of hierarchical key/value configuration.
///
/// Sections are owned, immutable-once-built data. Child order is the order
/// in which children were materialised from the source, which is how ordered
/// sequences keep their declared order through binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    key: String,
    value: Option<String>,
    children: Vec<Section>,
}

/// Shared empty section returned for absent paths.
static EMPTY: Section = Section {
    key: String::new(),
    value: None,
    children: Vec::new(),
};

impl Section {
    /// Creates an empty section with the given key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
            children: Vec::new(),
        }
    }

    /// Returns the section's own key (empty for the root).
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the section's scalar value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the child sections in their original order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns true when the section has no value and no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Looks up a direct child by case-insensitive key.
    #[must_use]
    pub fn child(&self, key: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.key.eq_ignore_ascii_case(key))
    }

    /// Resolves a dotted path to a nested section.
    ///
    /// Absent segments resolve to a shared empty section, so callers can
    /// always bind the result; required-field enforcement happens during
    /// validation.
    #[must_use]
    pub fn section(&self, path: &str) -> &Self {
        let mut node = self;
        for segment in path.split('.') {
            match node.child(segment) {
                Some(child) => node = child,
                None => return &EMPTY,
            }
        }
        node
    }

    /// Returns the scalar value of a direct child, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.child(key).and_then(Self::value)
    }

    /// Returns the scalar value of a direct child, or the empty string.
    #[must_use]
    pub fn get_string(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// Collects the ordered scalar values beneath a direct child.
    ///
    /// This is the sequence-binding primitive: each indexed sub-key of the
    /// matching child contributes its value, in original order. Valueless
    /// sub-keys are skipped.
    #[must_use]
    pub fn get_sequence(&self, key: &str) -> Vec<String> {
        self.child(key)
            .map(|child| {
                child
                    .children
                    .iter()
                    .filter_map(|item| item.value().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Sets the section's scalar value.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = Some(value.into());
    }

    /// Appends a child section, preserving insertion order.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Builder-style variant of [`Section::set_value`].
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Builder-style variant of [`Section::push_child`].
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.push_child(child);
        self
    }
}
