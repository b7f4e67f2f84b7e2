//! Styled components built on the variant resolver.
//!
//! Each component follows the same pattern: extract the style axes from its
//! props, resolve one merged class string through its static [`crate::VariantSet`],
//! and render the underlying element with that class plus every forwarded
//! attribute. Interactive state lives in the external behavior layer.

mod button;
mod switch;

pub use button::{button_class, button_table, Button, ButtonSize, ButtonVariant};
pub use switch::{switch_class, switch_table, switch_thumb_class, Switch, SwitchSize};
