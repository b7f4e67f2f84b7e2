//! Variant-driven utility-class styling for server-rendered UI components.
//!
//! `veneer` provides a small resolver that turns enumerated style axes into
//! a single merged utility-class string, plus two components built on it: a
//! [`Button`] and a toggle [`Switch`]. Components render HTML via [maud]
//! and merge class conflicts with tailwind-merge semantics, so later
//! classes (and therefore caller overrides) win.
//!
//! # Resolution model
//!
//! A [`VariantSet`] holds a base class string and named axes ("variant",
//! "size"), each with enumerated keys and a default. Resolution is total:
//! an unknown or omitted key silently falls back to the axis default, never
//! an error. Use [`VariantSet::validate`] when you want malformed tables
//! surfaced early instead.
//!
//! # Components
//!
//! Components are pure style/structure adapters. They own no interactive
//! state; focus, pressed, and checked transitions belong to an external
//! client-side behavior layer, and the components only render that layer's
//! markup contract (`role`, `aria-*`, `data-state`) while forwarding every
//! other attribute unchanged. A [`ChildElement`] substitutes the rendered
//! element ("render as child") and an [`ElementRef`] resolves to whichever
//! element was actually rendered.
//!
//! # Example
//!
//! ```rust
//! use maud::html;
//! use veneer::{Button, ButtonSize, ButtonVariant, Switch, SwitchSize};
//!
//! let save = Button::new(html! { "Save" })
//!     .variant(ButtonVariant::Secondary)
//!     .size(ButtonSize::Sm)
//!     .class("w-full")
//!     .render();
//! assert!(save.into_string().contains("bg-secondary"));
//!
//! let airplane = Switch::new()
//!     .size(SwitchSize::Sm)
//!     .checked(true)
//!     .render();
//! assert!(airplane.into_string().contains(r#"data-state="checked""#));
//! ```
//!
//! [maud]: https://maud.lambda.xyz

mod components;
mod element;
mod variant;

pub use components::{
    button_class, button_table, switch_class, switch_table, switch_thumb_class, Button,
    ButtonSize, ButtonVariant, Switch, SwitchSize,
};
pub use element::{Attr, Attrs, ChildElement, ElementRef, RenderedElement};
pub use variant::{Selections, VariantAxis, VariantError, VariantSet};
