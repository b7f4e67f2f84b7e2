//! Variant set resolution: axes plus selections to one merged class string.

use tailwind_fuse::tw_merge;

use super::axis::VariantAxis;
use super::error::VariantError;

/// Caller-supplied axis selections for one resolution.
///
/// An open-ended `axis name -> key` mapping. Selections for axes a set does
/// not declare are ignored, and keys an axis does not declare fall back to
/// that axis's default, so any `Selections` value is valid input for any
/// [`VariantSet`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    values: Vec<(String, String)>,
}

impl Selections {
    /// Creates an empty selection (every axis resolves to its default).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key for an axis, returning the selections for chaining.
    ///
    /// Setting the same axis again overrides the earlier value.
    pub fn set(mut self, axis: impl Into<String>, key: impl Into<String>) -> Self {
        self.values.push((axis.into(), key.into()));
        self
    }

    /// Returns the selected key for an axis, if any.
    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values
            .iter()
            .rev()
            .find(|(a, _)| a == axis)
            .map(|(_, key)| key.as_str())
    }

    /// Returns true if no axis has a selection.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A base class string plus ordered variant axes.
///
/// This is the resolver core: [`VariantSet::resolve`] concatenates the base,
/// one fragment per axis (selected key if valid, else the axis default), and
/// an optional caller override, then merges the result so that later
/// occurrences of a conflicting utility replace earlier ones. The override
/// comes last and therefore wins any conflict with a table fragment.
///
/// Tables are built once (typically in a `Lazy` static) and never mutated;
/// each `resolve` call produces a fresh string.
///
/// # Example
///
/// ```rust
/// use veneer::{Selections, VariantAxis, VariantSet};
///
/// let badge = VariantSet::new("inline-flex items-center rounded-md px-2")
///     .axis(
///         VariantAxis::new("tone", "default")
///             .key("default", "bg-primary text-primary-foreground")
///             .key("outline", "border border-input"),
///     );
///
/// let class = badge.resolve(&Selections::new().set("tone", "outline"), None);
/// assert_eq!(class, "inline-flex items-center rounded-md px-2 border border-input");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    base: String,
    axes: Vec<VariantAxis>,
}

impl VariantSet {
    /// Creates a set with the given base class string and no axes.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            axes: Vec::new(),
        }
    }

    /// Adds an axis, returning the set for chaining.
    ///
    /// Axes contribute fragments in the order they are added.
    pub fn axis(mut self, axis: VariantAxis) -> Self {
        self.axes.push(axis);
        self
    }

    /// The base class string shared by every resolution.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The declared axes in resolution order.
    pub fn axes(&self) -> &[VariantAxis] {
        &self.axes
    }

    /// Looks up an axis by name.
    pub fn axis_named(&self, name: &str) -> Option<&VariantAxis> {
        self.axes.iter().find(|axis| axis.name() == name)
    }

    /// Resolves selections and an optional override to one class string.
    ///
    /// Total over all inputs: unknown axis names in `selections` are
    /// ignored, unknown keys fall back to the axis default, and the merge
    /// step has no failure mode.
    pub fn resolve(&self, selections: &Selections, override_classes: Option<&str>) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.axes.len() + 2);

        if !self.base.is_empty() {
            parts.push(&self.base);
        }

        for axis in &self.axes {
            let fragment = axis.fragment_for(selections.get(axis.name()));
            if !fragment.is_empty() {
                parts.push(fragment);
            }
        }

        if let Some(extra) = override_classes {
            if !extra.is_empty() {
                parts.push(extra);
            }
        }

        tw_merge!(parts.join(" "))
    }

    /// Checks the table for configuration mistakes.
    ///
    /// Resolution never requires this; it exists for callers that prefer a
    /// loud failure over silent default fallback when a table is malformed.
    ///
    /// # Errors
    ///
    /// Returns the first of: a duplicated axis name, a key declared twice
    /// within one axis, or an axis whose default key has no entry.
    pub fn validate(&self) -> Result<(), VariantError> {
        for (i, axis) in self.axes.iter().enumerate() {
            if self.axes[..i].iter().any(|a| a.name() == axis.name()) {
                return Err(VariantError::DuplicateAxis {
                    name: axis.name().to_string(),
                });
            }

            let keys: Vec<&str> = axis.keys().collect();
            for (j, key) in keys.iter().enumerate() {
                if keys[..j].contains(key) {
                    return Err(VariantError::DuplicateKey {
                        axis: axis.name().to_string(),
                        key: key.to_string(),
                    });
                }
            }

            if axis.get(axis.default_key()).is_none() {
                return Err(VariantError::MissingDefault {
                    axis: axis.name().to_string(),
                    default_key: axis.default_key().to_string(),
                });
            }
        }

        Ok(())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> VariantSet {
        VariantSet::new("base-a base-b")
            .axis(
                VariantAxis::new("variant", "default")
                    .key("default", "tone-default")
                    .key("outline", "tone-outline")
                    .key("ghost", "tone-ghost"),
            )
            .axis(
                VariantAxis::new("size", "default")
                    .key("default", "span-default")
                    .key("sm", "span-sm")
                    .key("lg", "span-lg"),
            )
    }

    proptest! {
        #[test]
        fn resolution_is_total_and_falls_back(
            variant in prop::option::of("[a-z-]{0,12}"),
            size in prop::option::of("[a-z-]{0,12}"),
        ) {
            let set = sample();

            let mut selections = Selections::new();
            if let Some(v) = &variant {
                selections = selections.set("variant", v.clone());
            }
            if let Some(s) = &size {
                selections = selections.set("size", s.clone());
            }

            let resolved = set.resolve(&selections, None);

            // Whatever was supplied, the output equals the output for the
            // canonicalized selection (unknown keys mapped to defaults).
            let canonical = |axis: &str, key: &Option<String>| -> String {
                let axis = set.axis_named(axis).unwrap();
                match key {
                    Some(k) if axis.get(k).is_some() => k.clone(),
                    _ => axis.default_key().to_string(),
                }
            };
            let expected = set.resolve(
                &Selections::new()
                    .set("variant", canonical("variant", &variant))
                    .set("size", canonical("size", &size)),
                None,
            );

            prop_assert_eq!(resolved, expected);
        }

        #[test]
        fn override_always_present_verbatim(token in "[a-z][a-z0-9-]{0,10}") {
            // Single unknown utility token: never merged away.
            let resolved = sample().resolve(&Selections::new(), Some(&token));
            prop_assert!(resolved.ends_with(&token));
        }
    }
}
