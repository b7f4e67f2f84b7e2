//! Element plumbing shared by all components.
//!
//! This module provides:
//!
//! - [`Attrs`]: open-ended attribute bags, forwarded unmodified
//! - [`ChildElement`]: caller-substituted elements ("render as child")
//! - [`ElementRef`]: handles resolving to the actually-rendered element
//!
//! Components own no interactive state. Checked, pressed, and focus state
//! belong to the external client-side behavior layer; what passes through
//! here is only that layer's markup contract (tags, `role`, `aria-*`,
//! `data-state`) plus whatever the caller forwards.

mod attrs;
mod handle;
mod render;
mod slot;

pub use attrs::{Attr, Attrs};
pub use handle::{ElementRef, RenderedElement};
pub use slot::ChildElement;

pub(crate) use render::render_element;
pub(crate) use slot::Slot;
