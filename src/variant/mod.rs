//! Variant-to-class-name resolution.
//!
//! This module provides the resolver core:
//!
//! - [`VariantAxis`]: a named axis with enumerated keys and a default
//! - [`VariantSet`]: a base class string plus ordered axes
//! - [`Selections`]: caller-supplied axis selections for one resolution
//! - [`VariantError`]: opt-in table validation errors
//!
//! Resolution is total: unknown keys fall back to axis defaults and unknown
//! axis names are ignored. The merged output follows tailwind-merge rules,
//! so later conflicting utilities (and therefore caller overrides, which
//! come last) replace earlier ones.

mod axis;
mod error;
mod resolve;

pub use axis::VariantAxis;
pub use error::VariantError;
pub use resolve::{Selections, VariantSet};
