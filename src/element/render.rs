//! Dynamic-tag element rendering.
//!
//! maud's `html!` macro requires attribute names to be known at compile
//! time, so components that forward an open-ended attribute bag (or render
//! a caller-substituted tag) go through this writer instead. Attribute
//! values are escaped with [`maud::Escaper`], the same escaping `html!`
//! applies to interpolated values.

use std::fmt::Write;

use maud::{Escaper, Markup, PreEscaped};

use super::attrs::{Attr, Attrs};

/// Elements that never take a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Renders one element with a dynamic tag and forwarded attributes.
///
/// The class is written first when non-empty, then the bag in insertion
/// order. Children are ignored for void tags.
pub(crate) fn render_element(
    tag: &str,
    class: &str,
    attrs: &Attrs,
    children: Option<&Markup>,
) -> Markup {
    let mut out = String::new();

    out.push('<');
    out.push_str(tag);

    if !class.is_empty() {
        write_attr(&mut out, "class", class);
    }
    for attr in attrs {
        match attr {
            Attr::Pair { name, value } => write_attr(&mut out, name, value),
            Attr::Flag { name } => {
                out.push(' ');
                out.push_str(name);
            }
        }
    }

    out.push('>');

    if !is_void(tag) {
        if let Some(children) = children {
            out.push_str(&children.0);
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }

    PreEscaped(out)
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    let mut escaper = Escaper::new(out);
    let _ = escaper.write_str(value);
    out.push('"');
}

fn is_void(tag: &str) -> bool {
    VOID_TAGS.contains(&tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[test]
    fn test_render_plain_element() {
        let markup = render_element("button", "h-9", &Attrs::new(), None);
        assert_eq!(markup.into_string(), r#"<button class="h-9"></button>"#);
    }

    #[test]
    fn test_render_with_attrs_and_children() {
        let attrs = Attrs::new().attr("type", "button").flag("disabled");
        let children = html! { "Save" };
        let markup = render_element("button", "h-9", &attrs, Some(&children));
        assert_eq!(
            markup.into_string(),
            r#"<button class="h-9" type="button" disabled>Save</button>"#
        );
    }

    #[test]
    fn test_render_empty_class_omitted() {
        let markup = render_element("span", "", &Attrs::new(), None);
        assert_eq!(markup.into_string(), "<span></span>");
    }

    #[test]
    fn test_attribute_values_escaped() {
        let attrs = Attrs::new().attr("data-note", r#"a "quoted" <tag> & more"#);
        let markup = render_element("span", "", &attrs, None);
        assert_eq!(
            markup.into_string(),
            r#"<span data-note="a &quot;quoted&quot; &lt;tag&gt; &amp; more"></span>"#
        );
    }

    #[test]
    fn test_void_tag_has_no_closer() {
        let children = html! { "ignored" };
        let markup = render_element("input", "h-9", &Attrs::new(), Some(&children));
        assert_eq!(markup.into_string(), r#"<input class="h-9">"#);
    }
}
