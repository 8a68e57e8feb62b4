// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! The drawing surface an alluvial diagram is rendered into.
//!
//! A `Scene` is a flat list of shapes in diagram coordinates (y pointing
//! up), each tagged with a z-order. Exporters paint shapes in
//! [`Scene::draw_order`]: ascending z, insertion order among equals.

use ordered_float::OrderedFloat;

use crate::bezier::Point;
use crate::color::Color;

/// z-order of module blocks.
pub const BLOCK_Z_ORDER: f64 = 1.0;
/// z-order of module labels.
pub const LABEL_Z_ORDER: f64 = 3.0;
/// Base z-order for background ribbons, far below everything else.
pub const BACKGROUND_Z_ORDER: f64 = -10_000.0;

/// Diagram-space window covered by a rendered scene.
pub const X_LIMITS: (f64, f64) = (0.0, 2.0);
pub const Y_LIMITS: (f64, f64) = (-0.05, 1.0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Color, width: f64) -> Self {
        Stroke { color, width }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Polygon {
        points: Vec<Point>,
        fill: Color,
        stroke: Option<Stroke>,
    },
    Polyline {
        points: Vec<Point>,
        stroke: Stroke,
    },
    Text {
        pos: Point,
        text: String,
        size: f64,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub z_order: f64,
    pub kind: ShapeKind,
}

#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    pub fn new() -> Self {
        Scene { shapes: Vec::new() }
    }

    pub fn push(&mut self, z_order: f64, kind: ShapeKind) {
        self.shapes.push(Shape { z_order, kind });
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in paint order. The sort is stable, so shapes sharing a
    /// z-order keep the order they were pushed in.
    pub fn draw_order(&self) -> Vec<&Shape> {
        let mut ordered: Vec<&Shape> = self.shapes.iter().collect();
        ordered.sort_by_key(|shape| OrderedFloat(shape.z_order));
        ordered
    }

    pub fn rects(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Rect { .. }))
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Polygon { .. }))
    }

    pub fn polylines(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Polyline { .. }))
    }

    pub fn texts(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s.kind, ShapeKind::Text { .. }))
    }
}
