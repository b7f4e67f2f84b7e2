//! Named style axes mapping enumerated keys to class fragments.

/// A named style dimension with an enumerated set of keys.
///
/// Each key maps to a utility-class fragment; one key is designated the
/// default. Lookup is total: a missing or unrecognized key resolves to the
/// default fragment rather than failing, so a typo in a selection degrades
/// to the default look instead of an error.
///
/// # Example
///
/// ```rust
/// use veneer::VariantAxis;
///
/// let size = VariantAxis::new("size", "default")
///     .key("default", "h-9 px-4 py-2")
///     .key("sm", "h-8 rounded-md px-3 text-xs");
///
/// assert_eq!(size.fragment_for(Some("sm")), "h-8 rounded-md px-3 text-xs");
/// assert_eq!(size.fragment_for(Some("bogus")), "h-9 px-4 py-2");
/// assert_eq!(size.fragment_for(None), "h-9 px-4 py-2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantAxis {
    name: String,
    default_key: String,
    entries: Vec<(String, String)>,
}

impl VariantAxis {
    /// Creates an axis with the given name and default key.
    ///
    /// The default key should be added via [`VariantAxis::key`] like any
    /// other entry; [`crate::VariantSet::validate`] reports it if missing.
    pub fn new(name: impl Into<String>, default_key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_key: default_key.into(),
            entries: Vec::new(),
        }
    }

    /// Adds a key with its class fragment, returning the axis for chaining.
    pub fn key(mut self, key: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.entries.push((key.into(), fragment.into()));
        self
    }

    /// The axis name, e.g. `"variant"` or `"size"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key used when a selection is missing or unrecognized.
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Returns the fragment for an exact key, if declared.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, fragment)| fragment.as_str())
    }

    /// Resolves a selection to a fragment, falling back to the default.
    ///
    /// Total over all inputs. If the axis is malformed and the default key
    /// itself has no entry, resolves to the empty fragment.
    pub fn fragment_for(&self, key: Option<&str>) -> &str {
        key.and_then(|k| self.get(k))
            .or_else(|| self.get(&self.default_key))
            .unwrap_or("")
    }

    /// Iterates over declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of declared keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no keys are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
