//! Open-ended attribute bags forwarded to rendered elements.

/// A single attribute forwarded to the rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attr {
    /// A `name="value"` pair.
    Pair { name: String, value: String },
    /// A bare boolean attribute such as `disabled`.
    Flag { name: String },
}

impl Attr {
    /// The attribute name.
    pub fn name(&self) -> &str {
        match self {
            Attr::Pair { name, .. } => name,
            Attr::Flag { name } => name,
        }
    }
}

/// An ordered, open-ended set of attributes.
///
/// Components accept arbitrary attributes through this bag and forward them
/// to the underlying element unmodified, in insertion order. The bag does
/// not interpret names; `class` is handled separately by each component so
/// that caller classes participate in utility merging instead of clobbering
/// the resolved string.
///
/// # Example
///
/// ```rust
/// use veneer::Attrs;
///
/// let attrs = Attrs::new()
///     .attr("data-testid", "save")
///     .flag("autofocus");
///
/// assert_eq!(attrs.get("data-testid"), Some("save"));
/// assert!(attrs.has("autofocus"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    items: Vec<Attr>,
}

impl Attrs {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `name="value"` pair, returning the bag for chaining.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(Attr::Pair {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Adds a bare boolean attribute, returning the bag for chaining.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.items.push(Attr::Flag { name: name.into() });
        self
    }

    /// Appends an attribute in place.
    pub fn push(&mut self, attr: Attr) {
        self.items.push(attr);
    }

    /// Appends all attributes from another bag, preserving order.
    pub fn extend(&mut self, other: Attrs) {
        self.items.extend(other.items);
    }

    /// Returns the value of the first pair with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.items.iter().find_map(|attr| match attr {
            Attr::Pair { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// Returns true if any attribute (pair or flag) has this name.
    pub fn has(&self, name: &str) -> bool {
        self.items.iter().any(|attr| attr.name() == name)
    }

    /// Iterates over attributes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attr> {
        self.items.iter()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the bag holds no attributes.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Attrs {
    type Item = &'a Attr;
    type IntoIter = std::slice::Iter<'a, Attr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
