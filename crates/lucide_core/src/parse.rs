//! SVG source parsing
//!
//! Loads icon shapes from SVG text. Both complete documents and bare
//! fragments of shape elements are accepted. Source whose first element
//! (after any XML declaration, doctype or comments) is `<svg>` is a
//! document; anything else is a fragment and is wrapped in an `<svg>` root
//! before parsing. Only element nodes are kept.

use roxmltree::{Document, Node};
use tracing::trace;

use crate::element::{AttrValue, Attributes, Element};
use crate::error::IconError;
use crate::SVG_NAMESPACE;

const XLINK_NAMESPACE: &str = "http://www.w3.org/1999/xlink";

/// Result of parsing SVG source
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParsedSvg {
    /// Attributes of the `<svg>` root (empty for fragments)
    pub attrs: Attributes,
    /// Shape elements under the root, in document order
    pub children: Vec<Element>,
}

/// Parse an SVG document or fragment
pub fn parse_svg(source: &str) -> Result<ParsedSvg, IconError> {
    let is_fragment = !starts_with_svg_root(source);
    let wrapped;
    let text = if is_fragment {
        wrapped = format!(r#"<svg xmlns="{}">{}</svg>"#, SVG_NAMESPACE, source);
        wrapped.as_str()
    } else {
        source
    };

    let doc = Document::parse(text)?;
    let root = doc.root_element();

    let attrs = if is_fragment {
        Attributes::new()
    } else {
        collect_attrs(root)
    };
    let children: Vec<Element> = root
        .children()
        .filter(Node::is_element)
        .map(to_element)
        .collect();

    trace!(shapes = children.len(), "parsed svg source");

    Ok(ParsedSvg { attrs, children })
}

/// Whether the first element of `source` is an `<svg>` tag
fn starts_with_svg_root(source: &str) -> bool {
    let mut rest = source.trim_start();
    loop {
        let skipped = if rest.starts_with("<?") {
            rest.find("?>").map(|end| end + 2)
        } else if rest.starts_with("<!--") {
            rest.find("-->").map(|end| end + 3)
        } else if rest.starts_with("<!") {
            rest.find('>').map(|end| end + 1)
        } else {
            break;
        };
        match skipped {
            Some(end) => rest = rest[end..].trim_start(),
            None => return false,
        }
    }

    rest.strip_prefix("<svg").is_some_and(|after| {
        after
            .chars()
            .next()
            .map_or(false, |c| c.is_whitespace() || c == '>' || c == '/')
    })
}

fn to_element(node: Node<'_, '_>) -> Element {
    Element {
        tag: node.tag_name().name().to_string(),
        attrs: collect_attrs(node),
        children: node
            .children()
            .filter(Node::is_element)
            .map(to_element)
            .collect(),
    }
}

fn collect_attrs(node: Node<'_, '_>) -> Attributes {
    node.attributes()
        .map(|attr| {
            let name = match attr.namespace() {
                Some(XLINK_NAMESPACE) => format!("xlink:{}", attr.name()),
                _ => attr.name().to_string(),
            };
            (name, AttrValue::from(attr.value()))
        })
        .collect()
}
