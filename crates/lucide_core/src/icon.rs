//! Icon factory
//!
//! An [`Icon`] is an immutable description: a display name, a slug and an
//! ordered list of shapes drawn on a 24×24 grid. Rendering it with
//! [`IconProps`] produces an `<svg>` [`Element`] sized, colored and classed
//! for the call site.
//!
//! Shared defaults (what a provider/context would supply in a component
//! framework) are passed explicitly as [`IconDefaults`]. Resolution order for
//! every option is: call-site props, then defaults, then the library
//! constants below.
//!
//! # Example
//!
//! ```rust
//! use lucide_core::{create_icon, IconDefaults, IconProps, IconShape};
//!
//! const CHECK: lucide_core::Icon =
//!     create_icon("Check", "check", &[IconShape::new("path", &[("d", "M20 6 9 17l-5-5")])]);
//!
//! let defaults = IconDefaults::new().size(32).class("toolbar-icon");
//! let svg = CHECK.render_with(&defaults, &IconProps::new().color("red"));
//!
//! assert_eq!(svg.get("width").unwrap().to_string(), "32");
//! assert_eq!(svg.get("class").unwrap().to_string(), "lucide lucide-check toolbar-icon");
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::class::{merge_classes, to_kebab_case};
use crate::dimension::Dimension;
use crate::element::{AttrValue, Attributes, Element};
use crate::error::IconError;
use crate::parse::parse_svg;
use crate::SVG_NAMESPACE;

/// Width and height when nothing else is given; also the icon grid size
pub const DEFAULT_SIZE: f32 = 24.0;

/// Nominal stroke width
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Stroke color; inherits the surrounding text color
pub const DEFAULT_COLOR: &str = "currentColor";

/// Marker class present on every rendered icon
pub const LIBRARY_CLASS: &str = "lucide";

/// One static shape of an icon definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconShape {
    pub tag: &'static str,
    pub attrs: &'static [(&'static str, &'static str)],
    pub children: &'static [IconShape],
}

impl IconShape {
    pub const fn new(tag: &'static str, attrs: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            tag,
            attrs,
            children: &[],
        }
    }

    /// A grouping shape with nested shapes
    pub const fn with_children(
        tag: &'static str,
        attrs: &'static [(&'static str, &'static str)],
        children: &'static [IconShape],
    ) -> Self {
        Self {
            tag,
            attrs,
            children,
        }
    }

    pub fn to_element(&self) -> Element {
        let mut el = Element::new(self.tag);
        for (name, value) in self.attrs {
            el.attrs.insert((*name).to_string(), AttrValue::from(*value));
        }
        el.children = self.children.iter().map(IconShape::to_element).collect();
        el
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Shapes {
    Static(&'static [IconShape]),
    Owned(Arc<[Element]>),
}

/// An icon definition
#[derive(Clone, Debug, PartialEq)]
pub struct Icon {
    name: Cow<'static, str>,
    slug: Cow<'static, str>,
    shapes: Shapes,
}

/// Define an icon from static shapes
///
/// Usable in `const` items, which is how the bundled icon set is declared.
pub const fn create_icon(
    name: &'static str,
    slug: &'static str,
    shapes: &'static [IconShape],
) -> Icon {
    Icon::new(name, slug, shapes)
}

impl Icon {
    pub const fn new(name: &'static str, slug: &'static str, shapes: &'static [IconShape]) -> Self {
        Self {
            name: Cow::Borrowed(name),
            slug: Cow::Borrowed(slug),
            shapes: Shapes::Static(shapes),
        }
    }

    /// Define an icon from elements built at runtime
    pub fn from_elements(
        name: impl Into<String>,
        slug: impl Into<String>,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            slug: Cow::Owned(slug.into()),
            shapes: Shapes::Owned(elements.into()),
        }
    }

    /// Define an icon from SVG source
    ///
    /// Accepts a whole `<svg>` document or a bare fragment of shapes. Root
    /// attributes are dropped: sizing and stroke come from render props.
    pub fn from_svg(
        name: impl Into<String>,
        slug: impl Into<String>,
        source: &str,
    ) -> Result<Self, IconError> {
        let parsed = parse_svg(source)?;
        Ok(Self::from_elements(name, slug, parsed.children))
    }

    /// Display name, e.g. `ArrowDownAZ`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registry slug, e.g. `arrow-down-a-z`
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The class derived from the display name, e.g. `lucide-arrow-down-a-z`
    pub fn class_name(&self) -> String {
        format!("{}-{}", LIBRARY_CLASS, to_kebab_case(&self.name))
    }

    /// The icon's own shapes as elements
    pub fn shapes(&self) -> Vec<Element> {
        match &self.shapes {
            Shapes::Static(shapes) => shapes.iter().map(IconShape::to_element).collect(),
            Shapes::Owned(elements) => elements.to_vec(),
        }
    }

    pub fn shape_count(&self) -> usize {
        match &self.shapes {
            Shapes::Static(shapes) => shapes.len(),
            Shapes::Owned(elements) => elements.len(),
        }
    }

    /// Render with library defaults
    pub fn render(&self, props: &IconProps) -> Element {
        self.render_with(&IconDefaults::default(), props)
    }

    /// Render with shared defaults
    pub fn render_with(&self, defaults: &IconDefaults, props: &IconProps) -> Element {
        let size = props
            .size
            .clone()
            .or_else(|| defaults.size.clone())
            .unwrap_or(Dimension::Number(DEFAULT_SIZE));
        let color = props
            .color
            .as_deref()
            .or(defaults.color.as_deref())
            .unwrap_or(DEFAULT_COLOR);
        let stroke_width = props
            .stroke_width
            .or(defaults.stroke_width)
            .unwrap_or(DEFAULT_STROKE_WIDTH);
        let absolute = props
            .absolute_stroke_width
            .or(defaults.absolute_stroke_width)
            .unwrap_or(false);

        let name_class = self.class_name();
        let slug_class = format!("{}-{}", LIBRARY_CLASS, self.slug);
        let class = merge_classes([
            LIBRARY_CLASS,
            name_class.as_str(),
            slug_class.as_str(),
            defaults.class.as_deref().unwrap_or_default(),
            props.class.as_deref().unwrap_or_default(),
        ]);

        let mut svg = Element::new("svg")
            .attr("xmlns", SVG_NAMESPACE)
            .attr("width", size.clone())
            .attr("height", size.clone())
            .attr("viewBox", "0 0 24 24")
            .attr("fill", "none")
            .attr("stroke", color)
            .attr("stroke-width", effective_stroke_width(stroke_width, &size, absolute))
            .attr("stroke-linecap", "round")
            .attr("stroke-linejoin", "round")
            .attr("class", class);

        for (name, value) in &props.attrs {
            svg.attrs.insert(name.clone(), value.clone());
        }

        svg.children = self.shapes();
        svg.children.extend(props.children.iter().cloned());
        svg
    }

    /// A reusable render function for this icon
    pub fn component(&self) -> impl Fn(&IconProps) -> Element {
        let icon = self.clone();
        move |props| icon.render(props)
    }

    /// A reusable render function bound to shared defaults
    pub fn component_with(&self, defaults: IconDefaults) -> impl Fn(&IconProps) -> Element {
        let icon = self.clone();
        move |props| icon.render_with(&defaults, props)
    }
}

/// Stroke width actually written to the root element
///
/// With `absolute` set, the width is scaled by `24 / size` so the stroke
/// keeps its on-screen thickness at any icon size. Sizes that are not a
/// positive number leave the width untouched.
pub fn effective_stroke_width(stroke_width: f32, size: &Dimension, absolute: bool) -> f32 {
    if !absolute {
        return stroke_width;
    }
    match size.as_number() {
        Some(n) if n > 0.0 && n.is_finite() => stroke_width * DEFAULT_SIZE / n,
        _ => stroke_width,
    }
}

/// Shared icon defaults, typically loaded from configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconDefaults {
    pub size: Option<Dimension>,
    pub color: Option<String>,
    pub stroke_width: Option<f32>,
    pub absolute_stroke_width: Option<bool>,
    pub class: Option<String>,
}

impl IconDefaults {
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

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// Per-render options
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IconProps {
    pub size: Option<Dimension>,
    pub color: Option<String>,
    pub stroke_width: Option<f32>,
    pub absolute_stroke_width: Option<bool>,
    /// Extra classes, appended after the computed ones
    pub class: Option<String>,
    /// Pass-through attributes, applied last
    pub attrs: Attributes,
    /// Extra children, appended after the icon's shapes
    pub children: Vec<Element>,
}

impl IconProps {
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

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
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
