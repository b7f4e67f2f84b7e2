//! Button component with enumerated variants and sizes.

use maud::Markup;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tailwind_fuse::tw_merge;

use crate::element::{render_element, Attrs, ChildElement, ElementRef, Slot};
use crate::variant::{Selections, VariantAxis, VariantSet};

/// Classes shared by every button regardless of variant and size.
const BUTTON_BASE: &str = "inline-flex items-center justify-center gap-2 \
     whitespace-nowrap rounded-md text-sm font-medium transition-colors \
     focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring \
     disabled:pointer-events-none disabled:opacity-50 \
     [&_svg]:pointer-events-none [&_svg]:size-4 [&_svg]:shrink-0";

static BUTTON_CLASSES: Lazy<VariantSet> = Lazy::new(|| {
    VariantSet::new(BUTTON_BASE)
        .axis(
            VariantAxis::new("variant", "default")
                .key(
                    "default",
                    "bg-primary text-primary-foreground shadow hover:bg-primary/90",
                )
                .key(
                    "secondary",
                    "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80",
                )
                .key(
                    "outline",
                    "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground",
                )
                .key("ghost", "hover:bg-accent hover:text-accent-foreground")
                .key(
                    "destructive",
                    "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90",
                )
                .key("link", "text-primary underline-offset-4 hover:underline"),
        )
        .axis(
            VariantAxis::new("size", "default")
                .key("default", "h-9 px-4 py-2")
                .key("sm", "h-8 rounded-md px-3 text-xs")
                .key("lg", "h-10 rounded-md px-8")
                .key("icon", "h-9 w-9"),
        )
});

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    /// Solid primary action.
    #[default]
    Default,
    /// Muted secondary action.
    Secondary,
    /// Bordered, transparent background.
    Outline,
    /// No chrome until hovered.
    Ghost,
    /// Dangerous or irreversible action.
    Destructive,
    /// Styled like an inline link.
    Link,
}

impl ButtonVariant {
    /// The table key for this variant.
    pub fn key(self) -> &'static str {
        match self {
            ButtonVariant::Default => "default",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Link => "link",
        }
    }

    /// Parses a table key; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.key() == key)
    }

    /// Every variant, in table order.
    pub const ALL: [ButtonVariant; 6] = [
        ButtonVariant::Default,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Destructive,
        ButtonVariant::Link,
    ];
}

/// Size of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    /// Standard height and padding.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Spacious.
    Lg,
    /// Square, for icon-only buttons.
    Icon,
}

impl ButtonSize {
    /// The table key for this size.
    pub fn key(self) -> &'static str {
        match self {
            ButtonSize::Default => "default",
            ButtonSize::Sm => "sm",
            ButtonSize::Lg => "lg",
            ButtonSize::Icon => "icon",
        }
    }

    /// Parses a table key; unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Every size, in table order.
    pub const ALL: [ButtonSize; 4] = [
        ButtonSize::Default,
        ButtonSize::Sm,
        ButtonSize::Lg,
        ButtonSize::Icon,
    ];
}

/// The button's variant table, for callers resolving classes directly.
pub fn button_table() -> &'static VariantSet {
    &BUTTON_CLASSES
}

/// Resolves the class string for a variant/size pair without rendering.
///
/// The optional `class` is appended last and wins conflicting utilities.
///
/// # Example
///
/// ```rust
/// use veneer::{button_class, ButtonSize, ButtonVariant};
///
/// let class = button_class(ButtonVariant::Ghost, ButtonSize::Sm, Some("w-full"));
/// assert!(class.contains("hover:bg-accent"));
/// assert!(class.ends_with("w-full"));
/// ```
pub fn button_class(variant: ButtonVariant, size: ButtonSize, class: Option<&str>) -> String {
    BUTTON_CLASSES.resolve(
        &Selections::new()
            .set("variant", variant.key())
            .set("size", size.key()),
        class,
    )
}

/// A styled button wrapping an interactive `button` element.
///
/// The component owns no state: disabled and pressed visuals are pure CSS
/// driven by the forwarded `disabled` attribute and whatever state
/// attributes the client-side behavior layer writes. Everything besides the
/// style axes is forwarded unchanged.
///
/// With [`Button::as_child`], the caller's element renders in place of the
/// default `button`, receiving the resolved class and all forwarded
/// attributes. Use this to style a link as a button without nesting
/// interactive elements.
///
/// # Example
///
/// ```rust
/// use maud::html;
/// use veneer::{Button, ButtonSize, ButtonVariant};
///
/// let markup = Button::new(html! { "Delete" })
///     .variant(ButtonVariant::Destructive)
///     .size(ButtonSize::Sm)
///     .attr("data-testid", "delete")
///     .render();
///
/// let html = markup.into_string();
/// assert!(html.contains("bg-destructive"));
/// assert!(html.contains(r#"data-testid="delete""#));
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    children: Markup,
    variant: ButtonVariant,
    size: ButtonSize,
    class: Option<String>,
    button_type: String,
    disabled: bool,
    attrs: Attrs,
    slot: Slot,
    node_ref: Option<ElementRef>,
}

impl Button {
    /// Creates a button with the given content and default styling.
    pub fn new(children: Markup) -> Self {
        Self {
            children,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            class: None,
            button_type: "button".to_string(),
            disabled: false,
            attrs: Attrs::new(),
            slot: Slot::Default,
            node_ref: None,
        }
    }

    /// Sets the visual variant.
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Sets the size.
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Appends caller classes after the resolved fragments.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the `type` attribute (`"button"` unless overridden).
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = button_type.into();
        self
    }

    /// Forwards the `disabled` attribute.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Forwards an arbitrary attribute to the rendered element.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs = self.attrs.attr(name, value);
        self
    }

    /// Forwards a bare boolean attribute to the rendered element.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs = self.attrs.flag(name);
        self
    }

    /// Renders the caller's element instead of the default `button`.
    ///
    /// The child receives the resolved class (its own classes merged last,
    /// so they win conflicts), every forwarded attribute, and supplies its
    /// own content in place of the button's children.
    pub fn as_child(mut self, child: ChildElement) -> Self {
        self.slot = Slot::Child(child);
        self
    }

    /// Attaches a handle that resolves to the rendered element.
    pub fn node_ref(mut self, node_ref: &ElementRef) -> Self {
        self.node_ref = Some(node_ref.clone());
        self
    }

    /// Renders to markup.
    pub fn render(self) -> Markup {
        let resolved = button_class(self.variant, self.size, self.class.as_deref());

        match self.slot {
            Slot::Default => {
                let mut attrs = Attrs::new().attr("type", self.button_type);
                if self.disabled {
                    attrs = attrs.flag("disabled");
                }
                attrs.extend(self.attrs);

                if let Some(node_ref) = &self.node_ref {
                    node_ref.fill("button", attrs.get("id"));
                }

                render_element("button", &resolved, &attrs, Some(&self.children))
            }
            Slot::Child(child) => {
                let (tag, child_class, child_attrs, children) = child.into_parts();

                let class = match child_class {
                    Some(extra) => tw_merge!(resolved, extra),
                    None => resolved,
                };

                let mut attrs = Attrs::new();
                if self.disabled {
                    attrs = attrs.flag("disabled");
                }
                attrs.extend(self.attrs);
                attrs.extend(child_attrs);

                if let Some(node_ref) = &self.node_ref {
                    node_ref.fill(&tag, attrs.get("id"));
                }

                render_element(&tag, &class, &attrs, Some(&children))
            }
        }
    }
}
