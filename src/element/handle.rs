//! External handles to rendered elements.

use std::cell::RefCell;
use std::rc::Rc;

/// Identity of the element a component actually rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedElement {
    tag: String,
    id: Option<String>,
}

impl RenderedElement {
    /// The tag of the rendered element (`"button"`, or the substituted
    /// child's tag).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The `id` attribute forwarded to the element, if any.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// A shared handle filled in when a component renders.
///
/// Attach a clone of the handle to a component before rendering; after the
/// render it resolves to the underlying element that was actually produced,
/// never an intermediate wrapper. With child substitution in play the
/// handle reports the substituted element.
///
/// Handles are `Rc`-based: the render model is single-threaded and each
/// render is an independent, synchronous call.
///
/// # Example
///
/// ```rust
/// use maud::html;
/// use veneer::{Button, ElementRef};
///
/// let handle = ElementRef::new();
/// Button::new(html! { "Save" }).node_ref(&handle).render();
///
/// assert_eq!(handle.get().unwrap().tag(), "button");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ElementRef {
    inner: Rc<RefCell<Option<RenderedElement>>>,
}

impl ElementRef {
    /// Creates an unattached handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rendered element, if the component has rendered.
    pub fn get(&self) -> Option<RenderedElement> {
        self.inner.borrow().clone()
    }

    /// Returns true once a render has filled the handle.
    pub fn is_attached(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Records the rendered element. Called by components at render time;
    /// a later render overwrites the earlier value.
    pub(crate) fn fill(&self, tag: &str, id: Option<&str>) {
        *self.inner.borrow_mut() = Some(RenderedElement {
            tag: tag.to_string(),
            id: id.map(str::to_string),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unattached_handle() {
        let handle = ElementRef::new();
        assert!(!handle.is_attached());
        assert!(handle.get().is_none());
    }

    #[test]
    fn test_fill_resolves_clones() {
        let handle = ElementRef::new();
        let clone = handle.clone();

        handle.fill("button", Some("save"));

        let rendered = clone.get().unwrap();
        assert_eq!(rendered.tag(), "button");
        assert_eq!(rendered.id(), Some("save"));
    }

    #[test]
    fn test_refill_overwrites() {
        let handle = ElementRef::new();
        handle.fill("button", None);
        handle.fill("a", None);
        assert_eq!(handle.get().unwrap().tag(), "a");
    }
}
