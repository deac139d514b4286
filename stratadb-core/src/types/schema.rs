//! Attribute schemas for entity collections.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

use super::ValueKind;

/// The conventional name of the identity attribute.
pub(crate) const ID_ATTRIBUTE: &str = "id";

/// Descriptor for one attribute of an entity schema: name, value kind, and
/// whether every row must carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    name: String,
    kind: ValueKind,
    required: bool,
}

impl Attribute {
    /// Create an optional attribute of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self { name: name.into(), kind, required: false }
    }

    /// Mark the attribute as required on every row.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// The identity descriptor that leads every schema.
    #[must_use]
    pub fn id() -> Self {
        Self { name: ID_ATTRIBUTE.to_owned(), kind: ValueKind::Id, required: true }
    }

    /// The attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of value this attribute holds.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Whether every row must carry a non-null value for this attribute.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }
}

/// Ordered, immutable list of attribute descriptors defining a
/// collection's schema.
///
/// Attribute 0 is always the identity attribute; columns of a collection
/// are laid out in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    attrs: Vec<Attribute>,
}

impl AttributeSet {
    /// Build a schema from descriptors.
    ///
    /// # Errors
    ///
    /// Returns an error if the list is empty, if descriptor 0 is not the
    /// required identity attribute, if any later descriptor uses the
    /// identity kind, or if two descriptors share a name.
    pub fn new(attrs: Vec<Attribute>) -> Result<Self, CoreError> {
        let Some(first) = attrs.first() else {
            return Err(CoreError::InvalidSchema("a schema needs at least the identity attribute".to_owned()));
        };
        if first.kind != ValueKind::Id || !first.required {
            return Err(CoreError::InvalidSchema(format!(
                "attribute 0 must be the required identity attribute, got {:?} ({})",
                first.name, first.kind
            )));
        }
        for attr in &attrs[1..] {
            if attr.kind == ValueKind::Id {
                return Err(CoreError::InvalidSchema(format!(
                    "attribute {:?} uses the identity kind; only attribute 0 may",
                    attr.name
                )));
            }
        }
        for (i, attr) in attrs.iter().enumerate() {
            if attrs[..i].iter().any(|other| other.name == attr.name) {
                return Err(CoreError::DuplicateAttribute(attr.name.clone()));
            }
        }
        Ok(Self { attrs })
    }

    /// Build a schema from the identity attribute plus the given
    /// descriptors.
    ///
    /// # Errors
    ///
    /// Same as [`AttributeSet::new`].
    pub fn of(attrs: impl IntoIterator<Item = Attribute>) -> Result<Self, CoreError> {
        let mut all = vec![Attribute::id()];
        all.extend(attrs);
        Self::new(all)
    }

    /// Number of attributes, identity included. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Always `false`; kept for interface completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// The position of the named attribute, or `None` if the schema does
    /// not declare it.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.attrs.iter().position(|attr| attr.name == name)
    }

    /// The descriptor at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Attribute> {
        self.attrs.get(index)
    }

    /// The identity descriptor (always at index 0).
    #[must_use]
    pub fn id_attribute(&self) -> &Attribute {
        &self.attrs[0]
    }

    /// Iterate the descriptors in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attrs.iter()
    }
}
