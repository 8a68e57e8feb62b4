// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::fmt::Write;

use crate::bezier::Point;
use crate::color::Color;
use crate::common::{escape_xml_text, format_number};
use crate::scene::{Scene, ShapeKind, Stroke, X_LIMITS, Y_LIMITS};

/// Output size of a rendered SVG, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            width: 640.0,
            height: 480.0,
        }
    }
}

/// Maps the diagram window onto the pixel viewport, flipping y.
struct Viewport {
    sx: f64,
    sy: f64,
}

impl Viewport {
    fn new(opts: &SvgOptions) -> Self {
        Viewport {
            sx: opts.width / (X_LIMITS.1 - X_LIMITS.0),
            sy: opts.height / (Y_LIMITS.1 - Y_LIMITS.0),
        }
    }

    fn x(&self, x: f64) -> f64 {
        (x - X_LIMITS.0) * self.sx
    }

    fn y(&self, y: f64) -> f64 {
        (Y_LIMITS.1 - y) * self.sy
    }

    fn points(&self, points: &[Point]) -> String {
        let mut out = String::with_capacity(points.len() * 16);
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format_number(self.x(p.x)));
            out.push(',');
            out.push_str(&format_number(self.y(p.y)));
        }
        out
    }
}

fn paint_attrs(fill: Option<Color>, stroke: Option<Stroke>) -> String {
    let mut attrs = String::new();
    match fill {
        Some(color) => {
            let _ = write!(attrs, " fill=\"{}\"", color.to_hex_rgb());
            if !color.is_opaque() {
                let _ = write!(attrs, " fill-opacity=\"{}\"", format_number(color.a));
            }
        }
        None => attrs.push_str(" fill=\"none\""),
    }
    if let Some(stroke) = stroke {
        let _ = write!(
            attrs,
            " stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color.to_hex_rgb(),
            format_number(stroke.width)
        );
        if !stroke.color.is_opaque() {
            let _ = write!(
                attrs,
                " stroke-opacity=\"{}\"",
                format_number(stroke.color.a)
            );
        }
    }
    attrs
}

/// Serialize a scene as a standalone SVG document, painting shapes in
/// z-order.
pub fn render_svg(scene: &Scene, opts: &SvgOptions) -> String {
    let vp = Viewport::new(opts);
    let width = format_number(opts.width);
    let height = format_number(opts.height);

    let mut svg = String::new();
    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\" class=\"alluvial-diagram\">"
    );
    svg.push_str("<g>");

    for shape in scene.draw_order() {
        match &shape.kind {
            ShapeKind::Rect {
                x,
                y,
                width,
                height,
                fill,
                stroke,
            } => {
                let _ = write!(
                    svg,
                    "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}></rect>",
                    format_number(vp.x(*x)),
                    format_number(vp.y(y + height)),
                    format_number(width * vp.sx),
                    format_number(height * vp.sy),
                    paint_attrs(Some(*fill), *stroke)
                );
            }
            ShapeKind::Polygon {
                points,
                fill,
                stroke,
            } => {
                let _ = write!(
                    svg,
                    "<polygon points=\"{}\"{}></polygon>",
                    vp.points(points),
                    paint_attrs(Some(*fill), *stroke)
                );
            }
            ShapeKind::Polyline { points, stroke } => {
                let _ = write!(
                    svg,
                    "<polyline points=\"{}\"{}></polyline>",
                    vp.points(points),
                    paint_attrs(None, Some(*stroke))
                );
            }
            ShapeKind::Text { pos, text, size } => {
                let _ = write!(
                    svg,
                    "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"sans-serif\">{}</text>",
                    format_number(vp.x(pos.x)),
                    format_number(vp.y(pos.y)),
                    format_number(*size),
                    escape_xml_text(text)
                );
            }
        }
    }

    svg.push_str("</g>");
    svg.push_str("</svg>");

    svg
}
