//! Icon rasterization
//!
//! Turns rendered icon elements into pixels with `usvg` for parsing and
//! `resvg`/`tiny-skia` for anti-aliased drawing. Output is straight-alpha
//! RGBA and can be encoded to PNG.
//!
//! # Example
//!
//! ```ignore
//! use lucide_icons::{IconProps, SETTINGS};
//! use lucide_svg::RasterizedIcon;
//!
//! let svg = SETTINGS.render(&IconProps::new().color("#1e293b"));
//! let png = RasterizedIcon::from_element(&svg, 64, 64)?.to_png()?;
//! ```

mod error;
mod rasterize;

pub use error::SvgError;
pub use rasterize::RasterizedIcon;
