//! Positional, null-aware storage for one attribute.

use stratadb_core::{Value, ValueKind};

/// Bit-packed null mask for one column; one bit per row, set means null.
///
/// Keeping presence out of the value representation lets every column
/// store its values densely in the native type, whatever that type is.
#[derive(Debug, Clone, Default)]
pub struct NullMask {
    words: Vec<u64>,
    len: usize,
}

impl NullMask {
    /// Create an empty mask.
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new(), len: 0 }
    }

    /// Create an empty mask with room for `capacity` rows.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { words: Vec::with_capacity(capacity.div_ceil(64)), len: 0 }
    }

    /// Append one row's null bit.
    pub fn push(&mut self, null: bool) {
        let word = self.len / 64;
        if word >= self.words.len() {
            self.words.push(0);
        }
        if null {
            self.words[word] |= 1 << (self.len % 64);
        }
        self.len += 1;
    }

    /// Whether the row at `index` is null. Out-of-range indexes read as
    /// not-null.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        (self.words[index / 64] >> (index % 64)) & 1 == 1
    }

    /// Number of rows covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the mask covers no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of null rows.
    #[must_use]
    pub fn count_nulls(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Whether any row is null. O(words), not O(rows).
    #[must_use]
    pub fn any_null(&self) -> bool {
        self.words.iter().any(|&word| word != 0)
    }
}

/// Column-oriented storage for one attribute across all rows.
///
/// Values are addressed by dense position `0..len`. Each variant pairs a
/// dense vector of the native type with a [`NullMask`], so the null
/// representation is independent of the value type. Columns are fully
/// populated during construction and never resized afterwards.
///
/// The identity attribute is not stored as a column; the collection's key
/// index is its backing.
#[derive(Debug, Clone)]
pub enum ColumnStore {
    /// 64-bit signed integers.
    Int {
        /// Dense values; the entry at a null position is unspecified.
        values: Vec<i64>,
        /// Null mask.
        nulls: NullMask,
    },
    /// 64-bit floats.
    Float {
        /// Dense values; the entry at a null position is unspecified.
        values: Vec<f64>,
        /// Null mask.
        nulls: NullMask,
    },
    /// Booleans.
    Bool {
        /// Dense values; the entry at a null position is unspecified.
        values: Vec<bool>,
        /// Null mask.
        nulls: NullMask,
    },
    /// UTF-8 strings.
    Str {
        /// Dense values; the entry at a null position is unspecified.
        values: Vec<String>,
        /// Null mask.
        nulls: NullMask,
    },
}

impl ColumnStore {
    /// Create an empty column for the given kind.
    ///
    /// # Panics
    ///
    /// Panics for [`ValueKind::Id`]: the identity column is the key index,
    /// never a `ColumnStore`.
    #[must_use]
    pub fn new(kind: ValueKind) -> Self {
        Self::with_capacity(kind, 0)
    }

    /// Create an empty column for the given kind with room for `capacity`
    /// rows.
    ///
    /// # Panics
    ///
    /// Panics for [`ValueKind::Id`]; see [`ColumnStore::new`].
    #[must_use]
    pub fn with_capacity(kind: ValueKind, capacity: usize) -> Self {
        match kind {
            ValueKind::Int => Self::Int {
                values: Vec::with_capacity(capacity),
                nulls: NullMask::with_capacity(capacity),
            },
            ValueKind::Float => Self::Float {
                values: Vec::with_capacity(capacity),
                nulls: NullMask::with_capacity(capacity),
            },
            ValueKind::Bool => Self::Bool {
                values: Vec::with_capacity(capacity),
                nulls: NullMask::with_capacity(capacity),
            },
            ValueKind::String => Self::Str {
                values: Vec::with_capacity(capacity),
                nulls: NullMask::with_capacity(capacity),
            },
            ValueKind::Id => panic!("the identity attribute is backed by the key index, not a column"),
        }
    }

    /// The kind of value this column holds.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int { .. } => ValueKind::Int,
            Self::Float { .. } => ValueKind::Float,
            Self::Bool { .. } => ValueKind::Bool,
            Self::Str { .. } => ValueKind::String,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int { values, .. } => values.len(),
            Self::Float { values, .. } => values.len(),
            Self::Bool { values, .. } => values.len(),
            Self::Str { values, .. } => values.len(),
        }
    }

    /// Whether the column has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the value at `position` is null.
    #[inline]
    #[must_use]
    pub fn is_null(&self, position: usize) -> bool {
        match self {
            Self::Int { nulls, .. }
            | Self::Float { nulls, .. }
            | Self::Bool { nulls, .. }
            | Self::Str { nulls, .. } => nulls.get(position),
        }
    }

    /// The value at `position`, or `None` when null there.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Value> {
        match self {
            Self::Int { values, nulls } => {
                (!nulls.get(position)).then(|| Value::Int(values[position]))
            }
            Self::Float { values, nulls } => {
                (!nulls.get(position)).then(|| Value::Float(values[position]))
            }
            Self::Bool { values, nulls } => {
                (!nulls.get(position)).then(|| Value::Bool(values[position]))
            }
            Self::Str { values, nulls } => {
                (!nulls.get(position)).then(|| Value::String(values[position].clone()))
            }
        }
    }

    /// The integer at `position`; `None` when null or not an int column.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range of an int column.
    #[must_use]
    pub fn get_int(&self, position: usize) -> Option<i64> {
        match self {
            Self::Int { values, nulls } => (!nulls.get(position)).then(|| values[position]),
            _ => None,
        }
    }

    /// The float at `position`; `None` when null or not a float column.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range of a float column.
    #[must_use]
    pub fn get_float(&self, position: usize) -> Option<f64> {
        match self {
            Self::Float { values, nulls } => (!nulls.get(position)).then(|| values[position]),
            _ => None,
        }
    }

    /// The boolean at `position`; `None` when null or not a bool column.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range of a bool column.
    #[must_use]
    pub fn get_bool(&self, position: usize) -> Option<bool> {
        match self {
            Self::Bool { values, nulls } => (!nulls.get(position)).then(|| values[position]),
            _ => None,
        }
    }

    /// The string at `position`; `None` when null or not a string column.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range of a string column.
    #[must_use]
    pub fn get_str(&self, position: usize) -> Option<&str> {
        match self {
            Self::Str { values, nulls } => {
                (!nulls.get(position)).then(|| values[position].as_str())
            }
            _ => None,
        }
    }

    /// Append a value during construction. `Value::Null` appends a null
    /// row.
    ///
    /// # Panics
    ///
    /// Panics if a non-null value's kind does not match the column's; the
    /// builder validates kinds before pushing.
    pub fn push(&mut self, value: &Value) {
        match (self, value) {
            (Self::Int { values, nulls }, Value::Int(v)) => {
                values.push(*v);
                nulls.push(false);
            }
            (Self::Int { values, nulls }, Value::Null) => {
                values.push(0);
                nulls.push(true);
            }
            (Self::Float { values, nulls }, Value::Float(v)) => {
                values.push(*v);
                nulls.push(false);
            }
            (Self::Float { values, nulls }, Value::Null) => {
                values.push(0.0);
                nulls.push(true);
            }
            (Self::Bool { values, nulls }, Value::Bool(v)) => {
                values.push(*v);
                nulls.push(false);
            }
            (Self::Bool { values, nulls }, Value::Null) => {
                values.push(false);
                nulls.push(true);
            }
            (Self::Str { values, nulls }, Value::String(v)) => {
                values.push(v.clone());
                nulls.push(false);
            }
            (Self::Str { values, nulls }, Value::Null) => {
                values.push(String::new());
                nulls.push(true);
            }
            (column, value) => panic!(
                "cannot push {:?} into a {} column",
                value,
                column.kind()
            ),
        }
    }
}
