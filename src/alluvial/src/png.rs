// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Rasterizing rendered diagrams with resvg.
//!
//! Labels are drawn with whatever sans-serif face the system font database
//! provides; without one, labels are dropped and the rest still renders.

use std::sync::Arc;

use resvg::tiny_skia;
use resvg::usvg;
use tracing::debug;

use crate::common::Result;
use crate::render_err;

/// Options controlling PNG rendering output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngRenderOpts {
    /// Target width in pixels; the height follows the SVG's aspect ratio.
    /// With neither dimension set the SVG's own size is used.
    pub width: Option<u32>,
    /// Target height in pixels. `width` wins when both are set.
    pub height: Option<u32>,
}

/// Rasterize an SVG string onto a white canvas and encode it as PNG.
pub fn svg_to_png(svg_str: &str, opts: &PngRenderOpts) -> Result<Vec<u8>> {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    debug!(faces = fontdb.len(), "loaded system fonts");

    let usvg_opts = usvg::Options {
        font_family: "sans-serif".to_string(),
        fontdb: Arc::new(fontdb),
        ..usvg::Options::default()
    };

    let tree = match usvg::Tree::from_str(svg_str, &usvg_opts) {
        Ok(tree) => tree,
        Err(e) => return render_err!(SvgParse, e.to_string()),
    };

    let svg_size = tree.size();
    let svg_w = svg_size.width();
    let svg_h = svg_size.height();

    let (px_w, px_h) = match (opts.width, opts.height) {
        (Some(w), _) => {
            let scale = w as f32 / svg_w;
            (w, (svg_h * scale).ceil() as u32)
        }
        (None, Some(h)) => {
            let scale = h as f32 / svg_h;
            ((svg_w * scale).ceil() as u32, h)
        }
        (None, None) => (svg_w.ceil() as u32, svg_h.ceil() as u32),
    };

    if px_w == 0 || px_h == 0 {
        return render_err!(EmptyImage, format!("{px_w}x{px_h}"));
    }

    let Some(mut pixmap) = tiny_skia::Pixmap::new(px_w, px_h) else {
        return render_err!(PixmapAllocation, format!("{px_w}x{px_h}"));
    };
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(px_w as f32 / svg_w, px_h as f32 / svg_h);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    match pixmap.encode_png() {
        Ok(bytes) => Ok(bytes),
        Err(e) => render_err!(PngEncode, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorCode;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn png_dimensions(png: &[u8]) -> (u32, u32) {
        // IHDR follows the 8-byte signature, 4-byte length and 4-byte tag
        let w = u32::from_be_bytes([png[16], png[17], png[18], png[19]]);
        let h = u32::from_be_bytes([png[20], png[21], png[22], png[23]]);
        (w, h)
    }

    const SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="50" viewBox="0 0 100 50"><rect x="10" y="10" width="20" height="20" fill="#808080"/></svg>"##;

    #[test]
    fn test_svg_to_png_intrinsic_size() {
        let png = svg_to_png(SQUARE, &PngRenderOpts::default()).unwrap();
        assert!(png.starts_with(PNG_MAGIC));
        assert_eq!(png_dimensions(&png), (100, 50));
    }

    #[test]
    fn test_svg_to_png_scaled() {
        let opts = PngRenderOpts {
            width: Some(200),
            height: None,
        };
        let png = svg_to_png(SQUARE, &opts).unwrap();
        assert_eq!(png_dimensions(&png), (200, 100));

        let opts = PngRenderOpts {
            width: None,
            height: Some(25),
        };
        let png = svg_to_png(SQUARE, &opts).unwrap();
        assert_eq!(png_dimensions(&png), (50, 25));
    }

    #[test]
    fn test_svg_to_png_invalid() {
        let err = svg_to_png("not an svg", &PngRenderOpts::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::SvgParse);
    }
}
