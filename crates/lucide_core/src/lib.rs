//! Lucide Core
//!
//! The building blocks shared by every Lucide icon:
//!
//! - **Element tree**: [`Element`] with ordered attributes, built through any
//!   [`ElementFactory`] (markup output ships with the crate)
//! - **Icon factory**: [`Icon`] turns a static shape list into a configured
//!   `<svg>` tree from [`IconProps`] and explicit [`IconDefaults`]
//! - **Themed factory**: [`ThemedIcon`] for icons with fixed root overrides
//!   and an optional shared [`IconContext`]
//! - **Parsing**: load icons from SVG documents or bare shape fragments
//!
//! # Example
//!
//! ```rust
//! use lucide_core::{create_icon, IconProps, IconShape};
//!
//! const MINUS: lucide_core::Icon = create_icon(
//!     "Minus",
//!     "minus",
//!     &[IconShape::new("path", &[("d", "M5 12h14")])],
//! );
//!
//! let svg = MINUS.render(&IconProps::new().size(48).absolute_stroke_width(true));
//! assert_eq!(svg.get("stroke-width").map(|v| v.to_string()), Some("1".into()));
//! ```

pub mod class;
pub mod dimension;
pub mod element;
pub mod error;
pub mod icon;
pub mod parse;
pub mod themed;

pub use class::{merge_classes, to_kebab_case, to_pascal_case};
pub use dimension::Dimension;
pub use element::{AttrValue, Attributes, Element, ElementFactory, MarkupFactory};
pub use error::IconError;
pub use icon::{
    create_icon, Icon, IconDefaults, IconProps, IconShape, DEFAULT_COLOR, DEFAULT_SIZE,
    DEFAULT_STROKE_WIDTH, LIBRARY_CLASS,
};
pub use parse::{parse_svg, ParsedSvg};
pub use themed::{IconContext, IconTree, ThemedIcon, ThemedProps};

/// SVG namespace written on every root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
