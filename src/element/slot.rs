//! Child substitution for components that support rendering as another
//! element.
//!
//! A component normally renders its default element (`button` for
//! [`crate::Button`]). With a [`ChildElement`] supplied, it renders the
//! caller's element instead, forwarding the resolved class and every
//! forwarded attribute onto it. This keeps the component a pure
//! style/structure adapter: the substituted element carries the same
//! attribute contract as the default one.

use maud::{Markup, PreEscaped};

use super::attrs::Attrs;

/// A caller-supplied element rendered in place of a component's default.
///
/// # Example
///
/// ```rust
/// use maud::html;
/// use veneer::{Button, ChildElement};
///
/// let link = ChildElement::new("a")
///     .attr("href", "/settings")
///     .children(html! { "Settings" });
///
/// let markup = Button::new(html! {}).as_child(link).render();
/// assert!(markup.into_string().starts_with("<a "));
/// ```
#[derive(Debug, Clone)]
pub struct ChildElement {
    tag: String,
    class: Option<String>,
    attrs: Attrs,
    children: Markup,
}

impl ChildElement {
    /// Creates a child element with the given tag and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            class: None,
            attrs: Attrs::new(),
            children: PreEscaped(String::new()),
        }
    }

    /// Adds an attribute owned by the child itself.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs = self.attrs.attr(name, value);
        self
    }

    /// Adds a bare boolean attribute owned by the child itself.
    pub fn flag(mut self, name: impl Into<String>) -> Self {
        self.attrs = self.attrs.flag(name);
        self
    }

    /// Sets the child's own classes.
    ///
    /// These are merged after the component's resolved class, so the child
    /// wins conflicting utilities.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Sets the child's content.
    pub fn children(mut self, children: Markup) -> Self {
        self.children = children;
        self
    }

    /// The tag this child renders as.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>, Attrs, Markup) {
        (self.tag, self.class, self.attrs, self.children)
    }
}

/// Which element a component renders: its default or a substituted child.
#[derive(Debug, Clone)]
pub(crate) enum Slot {
    Default,
    Child(ChildElement),
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[test]
    fn test_child_element_builder() {
        let child = ChildElement::new("a")
            .attr("href", "/docs")
            .class("w-full")
            .children(html! { "Docs" });

        assert_eq!(child.tag(), "a");
        let (tag, class, attrs, children) = child.into_parts();
        assert_eq!(tag, "a");
        assert_eq!(class.as_deref(), Some("w-full"));
        assert_eq!(attrs.get("href"), Some("/docs"));
        assert_eq!(children.0, "Docs");
    }

    #[test]
    fn test_child_element_defaults_empty() {
        let (_, class, attrs, children) = ChildElement::new("span").into_parts();
        assert_eq!(class, None);
        assert!(attrs.is_empty());
        assert_eq!(children.0, "");
    }
}
