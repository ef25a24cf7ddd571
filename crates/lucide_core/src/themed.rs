//! Themed icon factory
//!
//! The older factory style used for hand-drawn and brand icons. Unlike
//! [`Icon`](crate::Icon), a themed icon carries fixed root attributes of its
//! own (its own `viewBox`, a fill mode) and is styled by an optional shared
//! [`IconContext`].
//!
//! Root attributes are layered, lowest to highest:
//!
//! 1. library defaults (`stroke`/`fill` = `currentColor`, `stroke-width="0"`)
//! 2. context `attr`
//! 3. the icon's fixed attributes
//! 4. computed `class`, `style`, `width`, `height` and `xmlns`
//! 5. call-site `attrs`

use std::borrow::Cow;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::class::merge_classes;
use crate::dimension::Dimension;
use crate::element::{AttrValue, Attributes, Element};
use crate::error::IconError;
use crate::icon::IconShape;
use crate::parse::{parse_svg, ParsedSvg};
use crate::SVG_NAMESPACE;

/// Size used when neither props nor context give one
pub const THEMED_DEFAULT_SIZE: &str = "1em";

/// Static data of a themed icon: fixed root attributes and child shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconTree {
    pub attr: &'static [(&'static str, &'static str)],
    pub children: &'static [IconShape],
}

impl IconTree {
    pub const fn new(
        attr: &'static [(&'static str, &'static str)],
        children: &'static [IconShape],
    ) -> Self {
        Self { attr, children }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum TreeData {
    Static(IconTree),
    Owned(Arc<ParsedSvg>),
}

/// Shared styling for themed icons
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconContext {
    pub color: Option<String>,
    pub size: Option<Dimension>,
    pub class: Option<String>,
    pub style: IndexMap<String, String>,
    pub attr: IndexMap<String, String>,
}

impl IconContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn size(mut self, size: impl Into<Dimension>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attr.insert(name.into(), value.into());
        self
    }
}

/// Per-render options for a themed icon
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ThemedProps {
    pub size: Option<Dimension>,
    pub color: Option<String>,
    pub class: Option<String>,
    pub style: IndexMap<String, String>,
    pub attrs: Attributes,
    pub children: Vec<Element>,
}

impl ThemedProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(mut self, size: impl Into<Dimension>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
}

/// A themed icon definition
#[derive(Clone, Debug, PartialEq)]
pub struct ThemedIcon {
    name: Cow<'static, str>,
    tree: TreeData,
}

impl ThemedIcon {
    pub const fn new(name: &'static str, tree: IconTree) -> Self {
        Self {
            name: Cow::Borrowed(name),
            tree: TreeData::Static(tree),
        }
    }

    /// Load from an SVG document, keeping its root attributes as the fixed ones
    ///
    /// `width`, `height` and `class` on the source root are dropped since
    /// those are computed at render time.
    pub fn from_svg(name: impl Into<String>, source: &str) -> Result<Self, IconError> {
        let mut parsed = parse_svg(source)?;
        for computed in ["width", "height", "class"] {
            parsed.attrs.shift_remove(computed);
        }
        Ok(Self {
            name: Cow::Owned(name.into()),
            tree: TreeData::Owned(Arc::new(parsed)),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The icon's fixed root attributes
    pub fn fixed_attrs(&self) -> Attributes {
        match &self.tree {
            TreeData::Static(tree) => tree
                .attr
                .iter()
                .map(|(k, v)| ((*k).to_string(), AttrValue::from(*v)))
                .collect(),
            TreeData::Owned(parsed) => parsed.attrs.clone(),
        }
    }

    fn shapes(&self) -> Vec<Element> {
        match &self.tree {
            TreeData::Static(tree) => tree.children.iter().map(IconShape::to_element).collect(),
            TreeData::Owned(parsed) => parsed.children.clone(),
        }
    }

    /// Render, optionally under a shared context
    pub fn render(&self, context: Option<&IconContext>, props: &ThemedProps) -> Element {
        let empty = IconContext::default();
        let context = context.unwrap_or(&empty);

        let mut svg = Element::new("svg")
            .attr("stroke", "currentColor")
            .attr("fill", "currentColor")
            .attr("stroke-width", "0");

        for (name, value) in &context.attr {
            svg.attrs.insert(name.clone(), AttrValue::from(value));
        }
        for (name, value) in self.fixed_attrs() {
            svg.attrs.insert(name, value);
        }

        let class = merge_classes([
            context.class.as_deref().unwrap_or_default(),
            props.class.as_deref().unwrap_or_default(),
        ]);
        set_or_remove(&mut svg.attrs, "class", class);

        let mut style: IndexMap<&str, &str> = IndexMap::new();
        if let Some(color) = props.color.as_deref().or(context.color.as_deref()) {
            style.insert("color", color);
        }
        for (property, value) in context.style.iter().chain(props.style.iter()) {
            style.insert(property.as_str(), value.as_str());
        }
        let style = style
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ");
        set_or_remove(&mut svg.attrs, "style", style);

        let size = props
            .size
            .clone()
            .or_else(|| context.size.clone())
            .unwrap_or_else(|| Dimension::from(THEMED_DEFAULT_SIZE));
        svg.attrs.insert("height".into(), size.clone().into());
        svg.attrs.insert("width".into(), size.into());
        svg.attrs.insert("xmlns".into(), SVG_NAMESPACE.into());

        for (name, value) in &props.attrs {
            svg.attrs.insert(name.clone(), value.clone());
        }

        svg.children = self.shapes();
        svg.children.extend(props.children.iter().cloned());
        svg
    }
}

fn set_or_remove(attrs: &mut Attributes, name: &str, value: String) {
    if value.is_empty() {
        attrs.shift_remove(name);
    } else {
        attrs.insert(name.to_string(), AttrValue::Text(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BADGE: ThemedIcon = ThemedIcon::new(
        "Badge",
        IconTree::new(
            &[("viewBox", "0 0 16 16"), ("fill", "none")],
            &[IconShape::new("circle", &[("cx", "8"), ("cy", "8"), ("r", "6")])],
        ),
    );

    fn text(el: &Element, name: &str) -> Option<String> {
        el.get(name).map(|v| v.to_string())
    }

    #[test]
    fn test_library_defaults_without_context() {
        let svg = BADGE.render(None, &ThemedProps::default());
        assert_eq!(text(&svg, "stroke").as_deref(), Some("currentColor"));
        assert_eq!(text(&svg, "stroke-width").as_deref(), Some("0"));
        assert_eq!(text(&svg, "width").as_deref(), Some("1em"));
        assert_eq!(text(&svg, "height").as_deref(), Some("1em"));
        assert_eq!(text(&svg, "xmlns").as_deref(), Some(SVG_NAMESPACE));
        assert_eq!(text(&svg, "class"), None);
        assert_eq!(text(&svg, "style"), None);
        assert_eq!(svg.children.len(), 1);
    }

    #[test]
    fn test_fixed_overrides_beat_context_and_defaults() {
        let context = IconContext::new()
            .attr("fill", "red")
            .attr("viewBox", "0 0 24 24")
            .attr("role", "img");
        let svg = BADGE.render(Some(&context), &ThemedProps::default());
        assert_eq!(text(&svg, "fill").as_deref(), Some("none"));
        assert_eq!(text(&svg, "viewBox").as_deref(), Some("0 0 16 16"));
        assert_eq!(text(&svg, "role").as_deref(), Some("img"));
    }

    #[test]
    fn test_call_site_beats_fixed_overrides() {
        let props = ThemedProps::new().attr("viewBox", "0 0 8 8").attr("width", "3rem");
        let svg = BADGE.render(None, &props);
        assert_eq!(text(&svg, "viewBox").as_deref(), Some("0 0 8 8"));
        assert_eq!(text(&svg, "width").as_deref(), Some("3rem"));
    }

    #[test]
    fn test_size_precedence() {
        let context = IconContext::new().size("2em");
        let svg = BADGE.render(Some(&context), &ThemedProps::default());
        assert_eq!(text(&svg, "width").as_deref(), Some("2em"));

        let svg = BADGE.render(Some(&context), &ThemedProps::new().size(20));
        assert_eq!(text(&svg, "width").as_deref(), Some("20"));
        assert_eq!(text(&svg, "height").as_deref(), Some("20"));
    }

    #[test]
    fn test_class_concatenation() {
        let context = IconContext::new().class("brand");
        let svg = BADGE.render(Some(&context), &ThemedProps::new().class("large"));
        assert_eq!(text(&svg, "class").as_deref(), Some("brand large"));
    }

    #[test]
    fn test_style_merge_order() {
        let context = IconContext::new()
            .color("tomato")
            .style("vertical-align", "middle")
            .style("opacity", "0.5");
        let props = ThemedProps::new().color("teal").style("opacity", "1");
        let svg = BADGE.render(Some(&context), &props);
        assert_eq!(
            text(&svg, "style").as_deref(),
            Some("color: teal; vertical-align: middle; opacity: 1")
        );

        let svg = BADGE.render(Some(&context), &ThemedProps::default());
        assert_eq!(
            text(&svg, "style").as_deref(),
            Some("color: tomato; vertical-align: middle; opacity: 0.5")
        );
    }

    #[test]
    fn test_children_follow_definition() {
        let extra = Element::new("rect").attr("width", 2);
        let svg = BADGE.render(None, &ThemedProps::new().child(extra.clone()));
        assert_eq!(svg.children.len(), 2);
        assert_eq!(svg.children[0].tag, "circle");
        assert_eq!(svg.children[1], extra);
    }

    #[test]
    fn test_from_svg_keeps_root_overrides() {
        let icon = ThemedIcon::from_svg(
            "Square",
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512" width="512" class="x"><rect width="512" height="512"/></svg>"#,
        )
        .unwrap();
        let fixed = icon.fixed_attrs();
        assert_eq!(fixed.get("viewBox"), Some(&AttrValue::from("0 0 512 512")));
        assert!(fixed.get("width").is_none());
        assert!(fixed.get("class").is_none());

        let svg = icon.render(None, &ThemedProps::default());
        assert_eq!(text(&svg, "viewBox").as_deref(), Some("0 0 512 512"));
        assert_eq!(text(&svg, "width").as_deref(), Some("1em"));
    }

    #[test]
    fn test_render_is_pure() {
        let context = IconContext::new().color("red");
        let props = ThemedProps::new().size(12).class("a");
        assert_eq!(BADGE.render(Some(&context), &props), BADGE.render(Some(&context), &props));
    }
}
