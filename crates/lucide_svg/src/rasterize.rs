//! Icon rasterization using resvg

use std::fs;
use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};
use lucide_core::Element;
use tiny_skia::{Pixmap, Transform};
use tracing::debug;
use usvg::{Options, Tree};

use crate::error::SvgError;

/// Rasterized icon pixels
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterizedIcon {
    /// RGBA pixel data (straight alpha)
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RasterizedIcon {
    /// Rasterize a rendered icon to the given pixel size
    pub fn from_element(element: &Element, width: u32, height: u32) -> Result<Self, SvgError> {
        Self::from_str(&element.to_markup(), width, height)
    }

    /// Rasterize SVG markup to the given pixel size
    ///
    /// The graphic is scaled to fit while keeping its aspect ratio and is
    /// centered in the output.
    pub fn from_str(svg: &str, width: u32, height: u32) -> Result<Self, SvgError> {
        if width == 0 || height == 0 {
            return Err(SvgError::InvalidSize { width, height });
        }

        let tree = Tree::from_str(svg, &Options::default())?;
        Self::from_tree(&tree, width, height)
    }

    fn from_tree(tree: &Tree, width: u32, height: u32) -> Result<Self, SvgError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(SvgError::Pixmap { width, height })?;

        let svg_size = tree.size();
        let scale = (width as f32 / svg_size.width()).min(height as f32 / svg_size.height());
        let offset_x = (width as f32 - svg_size.width() * scale) / 2.0;
        let offset_y = (height as f32 - svg_size.height() * scale) / 2.0;

        debug!(
            source_width = svg_size.width(),
            source_height = svg_size.height(),
            width,
            height,
            scale,
            "rasterizing icon"
        );

        let transform = Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);
        resvg::render(tree, transform, &mut pixmap.as_mut());

        Ok(Self {
            pixels: unpremultiply_alpha(pixmap.data()),
            width,
            height,
        })
    }

    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether any pixel has non-zero alpha
    pub fn is_blank(&self) -> bool {
        self.pixels.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Encode as PNG
    pub fn to_png(&self) -> Result<Vec<u8>, SvgError> {
        let image = RgbaImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            SvgError::InvalidSize {
                width: self.width,
                height: self.height,
            },
        )?;

        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Encode as PNG and write to `path`
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SvgError> {
        fs::write(path, self.to_png()?)?;
        Ok(())
    }
}

/// Convert premultiplied alpha to straight alpha
///
/// tiny-skia works in premultiplied alpha; PNG stores straight alpha.
fn unpremultiply_alpha(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());

    for chunk in data.chunks_exact(4) {
        let a = chunk[3] as f32 / 255.0;
        if a > 0.0 {
            let r = (chunk[0] as f32 / a).min(255.0) as u8;
            let g = (chunk[1] as f32 / a).min(255.0) as u8;
            let b = (chunk[2] as f32 / a).min(255.0) as u8;
            result.extend_from_slice(&[r, g, b, chunk[3]]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }

    result
}
