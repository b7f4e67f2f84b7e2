//! Toggle switch component: a styled root and thumb over an external
//! toggle behavior layer.

use maud::{html, Markup};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::element::{render_element, Attrs, ElementRef};
use crate::variant::{Selections, VariantAxis, VariantSet};

/// Root classes shared by both sizes. Checked and unchecked backgrounds key
/// off the `data-state` attribute written by the behavior layer.
const SWITCH_BASE: &str = "peer inline-flex shrink-0 cursor-pointer items-center \
     rounded-full border-2 border-transparent shadow-sm transition-colors \
     focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
     focus-visible:ring-offset-2 focus-visible:ring-offset-background \
     disabled:cursor-not-allowed disabled:opacity-50 \
     data-[state=checked]:bg-primary data-[state=unchecked]:bg-input";

const SWITCH_THUMB_BASE: &str = "pointer-events-none block rounded-full \
     bg-background shadow-lg ring-0 transition-transform \
     data-[state=unchecked]:translate-x-0";

static SWITCH_CLASSES: Lazy<VariantSet> = Lazy::new(|| {
    VariantSet::new(SWITCH_BASE).axis(
        VariantAxis::new("size", "default")
            .key("default", "h-5 w-9")
            .key("sm", "h-4 w-7"),
    )
});

static SWITCH_THUMB_CLASSES: Lazy<VariantSet> = Lazy::new(|| {
    VariantSet::new(SWITCH_THUMB_BASE).axis(
        VariantAxis::new("size", "default")
            .key("default", "h-4 w-4 data-[state=checked]:translate-x-4")
            .key("sm", "h-3 w-3 data-[state=checked]:translate-x-3"),
    )
});

/// Size of a switch. Thumb travel matches the root dimensions per size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SwitchSize {
    /// 5×9 root with a 4×4 thumb travelling 4 units.
    #[default]
    Default,
    /// 4×7 root with a 3×3 thumb travelling 3 units.
    Sm,
}

impl SwitchSize {
    /// The table key for this size.
    pub fn key(self) -> &'static str {
        match self {
            SwitchSize::Default => "default",
            SwitchSize::Sm => "sm",
        }
    }

    /// Parses a table key; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Every size, in table order.
    pub const ALL: [SwitchSize; 2] = [SwitchSize::Default, SwitchSize::Sm];
}

/// The switch root's variant table.
pub fn switch_table() -> &'static VariantSet {
    &SWITCH_CLASSES
}

/// Resolves the root class string for a size without rendering.
pub fn switch_class(size: SwitchSize, class: Option<&str>) -> String {
    SWITCH_CLASSES.resolve(&Selections::new().set("size", size.key()), class)
}

/// Resolves the thumb class string for a size without rendering.
pub fn switch_thumb_class(size: SwitchSize, class: Option<&str>) -> String {
    SWITCH_THUMB_CLASSES.resolve(&Selections::new().set("size", size.key()), class)
}

/// A styled toggle switch.
///
/// The switch renders the behavior layer's markup contract: a
/// `button type="button" role="switch"` root carrying `aria-checked` and
/// `data-state`, containing a thumb `span` with the same `data-state`. The
/// checked and disabled values are read-only inputs owned by that layer;
/// the component never tracks or transitions them, it only selects static
/// class fragments per size and forwards everything else.
///
/// # Example
///
/// ```rust
/// use veneer::{Switch, SwitchSize};
///
/// let html = Switch::new()
///     .size(SwitchSize::Sm)
///     .checked(true)
///     .attr("id", "airplane-mode")
///     .render()
///     .into_string();
///
/// assert!(html.contains(r#"role="switch""#));
/// assert!(html.contains(r#"data-state="checked""#));
/// assert!(html.contains("h-4 w-7"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Switch {
    size: SwitchSize,
    checked: bool,
    disabled: bool,
    class: Option<String>,
    thumb_class: Option<String>,
    attrs: Attrs,
    node_ref: Option<ElementRef>,
}

impl Switch {
    /// Creates an unchecked switch with default styling.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size.
    pub fn size(mut self, size: SwitchSize) -> Self {
        self.size = size;
        self
    }

    /// Sets the checked state as reported by the behavior layer.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Forwards the `disabled` attribute.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Appends caller classes to the root after the resolved fragments.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Appends caller classes to the thumb after the resolved fragments.
    pub fn thumb_class(mut self, class: impl Into<String>) -> Self {
        self.thumb_class = Some(class.into());
        self
    }

    /// Forwards an arbitrary attribute to the root element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs = self.attrs.attr(name, value);
        self
    }

    /// Forwards a bare boolean attribute to the root element.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs = self.attrs.flag(name);
        self
    }

    /// Attaches a handle that resolves to the rendered root element.
    pub fn node_ref(mut self, node_ref: &ElementRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    /// Renders to markup.
    pub fn render(self) -> Markup {
        let state = if self.checked { "checked" } else { "unchecked" };
        let root_class = switch_class(self.size, self.class.as_deref());
        let thumb_class = switch_thumb_class(self.size, self.thumb_class.as_deref());

        let thumb = html! {
            span class=(thumb_class) data-state=(state) {}
        };

        let mut attrs = Attrs::new()
            .attr("type", "button")
            .attr("role", "switch")
            .attr("aria-checked", if self.checked { "true" } else { "false" })
            .attr("data-state", state);
        if self.disabled {
            attrs = attrs.flag("disabled").flag("data-disabled");
        }
        attrs.extend(self.attrs);

        if let Some(node_ref) = &self.node_ref {
            node_ref.fill("button", attrs.get("id"));
        }

        render_element("button", &root_class, &attrs, Some(&thumb))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_contract_markup() {
        let html = Switch::new().render().into_string();
        assert!(html.starts_with("<button "));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains(r#"role="switch""#));
        assert!(html.contains(r#"aria-checked="false""#));
        assert!(html.contains(r#"data-state="unchecked""#));
        assert!(html.contains("<span "));
    }

    #[test]
    fn test_checked_state_on_root_and_thumb() {
        let html = Switch::new().checked(true).render().into_string();
        assert!(html.contains(r#"aria-checked="true""#));
        assert_eq!(html.matches(r#"data-state="checked""#).count(), 2);
    }

    #[test]
    fn test_default_size_dimensions() {
        let html = Switch::new().render().into_string();
        assert!(html.contains("h-5 w-9"));
        assert!(html.contains("h-4 w-4"));
        assert!(html.contains("data-[state=checked]:translate-x-4"));
    }

    #[test]
    fn test_sm_size_dimensions() {
        let html = Switch::new().size(SwitchSize::Sm).render().into_string();
        assert!(html.contains("h-4 w-7"));
        assert!(html.contains("h-3 w-3"));
        assert!(html.contains("data-[state=checked]:translate-x-3"));
    }

    #[test]
    fn test_disabled_forwarded() {
        let html = Switch::new().disabled(true).render().into_string();
        assert!(html.contains(" disabled"));
        assert!(html.contains(" data-disabled"));
    }

    #[test]
    fn test_attrs_forwarded_to_root() {
        let html = Switch::new()
            .attr("name", "airplane")
            .attr("value", "on")
            .render()
            .into_string();
        assert!(html.contains(r#"name="airplane""#));
        assert!(html.contains(r#"value="on""#));
    }

    #[test]
    fn test_node_ref_resolves_to_root() {
        let handle = ElementRef::new();
        Switch::new().attr("id", "wifi").node_ref(&handle).render();

        let rendered = handle.get().unwrap();
        assert_eq!(rendered.tag(), "button");
        assert_eq!(rendered.id(), Some("wifi"));
    }

    #[test]
    fn test_tables_are_valid() {
        assert!(switch_table().validate().is_ok());
        assert!(SWITCH_THUMB_CLASSES.validate().is_ok());
    }

    #[test]
    fn test_unknown_size_key_falls_back() {
        let fallback = SWITCH_CLASSES.resolve(&Selections::new().set("size", "xl"), None);
        let default = switch_class(SwitchSize::Default, None);
        assert_eq!(fallback, default);
    }

    #[test]
    fn test_keys_round_trip() {
        for size in SwitchSize::ALL {
            assert_eq!(SwitchSize::from_key(size.key()), Some(size));
        }
        assert_eq!(SwitchSize::from_key("xl"), None);
    }
}
