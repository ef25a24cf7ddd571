//! SVG element tree
//!
//! [`Element`] is the output of every icon factory. It is plain data: a tag,
//! an insertion-ordered attribute map and child elements. Turning it into
//! something visible is the job of an [`ElementFactory`], the seam where a
//! host rendering runtime plugs in. [`MarkupFactory`] is the built-in one and
//! produces SVG markup.

use std::fmt;

use indexmap::IndexMap;

/// Ordered attribute map; re-inserting a key replaces its value in place
pub type Attributes = IndexMap<String, AttrValue>;

/// An attribute value
#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f32),
}

impl AttrValue {
    /// Numeric view of the value, parsing text that holds a bare number
    pub fn as_number(&self) -> Option<f32> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<f32> for AttrValue {
    fn from(value: f32) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value as f32)
    }
}

/// A node in a rendered vector graphic
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Attributes,
    pub children: Vec<Element>,
}

impl Element {
    /// Create an element with no attributes or children
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Attributes::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value under the same name
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Append a child element
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several child elements
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Look up an attribute value
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Build this tree through a rendering runtime
    ///
    /// Children are created before their parent, so the factory always
    /// receives finished child nodes.
    pub fn build<F: ElementFactory>(&self, factory: &mut F) -> F::Output {
        let children = self
            .children
            .iter()
            .map(|child| child.build(factory))
            .collect();
        factory.create_element(&self.tag, &self.attrs, children)
    }

    /// Serialize as SVG markup
    pub fn to_markup(&self) -> String {
        self.build(&mut MarkupFactory)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}

/// Element-creation primitive of a rendering runtime
pub trait ElementFactory {
    /// The runtime's node type
    type Output;

    fn create_element(
        &mut self,
        tag: &str,
        attrs: &Attributes,
        children: Vec<Self::Output>,
    ) -> Self::Output;
}

/// Renders elements to SVG/XML markup
#[derive(Clone, Copy, Debug, Default)]
pub struct MarkupFactory;

impl ElementFactory for MarkupFactory {
    type Output = String;

    fn create_element(&mut self, tag: &str, attrs: &Attributes, children: Vec<String>) -> String {
        let mut out = String::with_capacity(16 + attrs.len() * 16);
        out.push('<');
        out.push_str(tag);
        for (name, value) in attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(&value.to_string(), &mut out);
            out.push('"');
        }

        if children.is_empty() {
            out.push_str("/>");
        } else {
            out.push('>');
            for child in children {
                out.push_str(&child);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }
        out
    }
}

fn escape_into(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
