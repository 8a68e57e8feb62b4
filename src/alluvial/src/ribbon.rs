// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Ribbons between modules of consecutive time steps.
//!
//! A ribbon is the band between two cubic Bezier curves, its lower and
//! upper boundary, running from the right edge of the source column to the
//! left edge of the target column. Both curves leave and enter the blocks
//! horizontally: the inner control points share the y of their endpoint and
//! are pulled `curvature * column_gap` toward the middle of the gap.

use float_cmp::approx_eq;
use tracing::{debug, trace, warn};

use crate::bezier::{CubicBezier, Point};
use crate::color::{Color, blend};
use crate::config::AlluvialConfig;
use crate::cursor::{Slice, SliceCursors};
use crate::datamodel::Flow;
use crate::layout::Layout;
use crate::scene::{BACKGROUND_Z_ORDER, Scene, ShapeKind, Stroke};

/// z offset of a ribbon's boundary strokes above its fill.
const BOUNDARY_Z_OFFSET: f64 = 0.5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RibbonStats {
    /// Ribbons emitted into the scene.
    pub drawn: usize,
    /// Ribbons at or below the visibility threshold; their slices are
    /// reserved but nothing is drawn.
    pub hidden: usize,
    /// Flows with a zero fraction.
    pub degenerate: usize,
    /// Flows pointing at a step or module that doesn't exist.
    pub skipped: usize,
}

/// Lower and upper boundary curves for a ribbon leaving column `step`.
pub fn ribbon_curves(
    layout: &Layout,
    step: usize,
    source: Slice,
    target: Slice,
    curvature: f64,
) -> (CubicBezier, CubicBezier) {
    let x_start = layout.column_x(step) + layout.column_width();
    let x_end = layout.column_x(step + 1);
    let pull = curvature * layout.column_gap();

    let curve = |y_src: f64, y_dst: f64| {
        CubicBezier::new(
            Point::new(x_start, y_src),
            Point::new(x_start + pull, y_src),
            Point::new(x_end - pull, y_dst),
            Point::new(x_end, y_dst),
        )
    };

    (
        curve(source.start, target.start),
        curve(source.end, target.end),
    )
}

/// Background ribbons sink below everything else, ordered by target;
/// the rest take the next value of the forward counter.
pub fn ribbon_z_order(flow: &Flow, target: usize, threshold: f64, next_z: &mut f64) -> f64 {
    if flow.dominant() < threshold {
        BACKGROUND_Z_ORDER - target as f64
    } else {
        let z = *next_z;
        *next_z += 1.0;
        z
    }
}

/// Normalized horizontal position of the midpoint of `[x_a, x_b]` within
/// the ribbon's span `[x_first, x_last]`.
pub fn strip_fraction(x_a: f64, x_b: f64, x_first: f64, x_last: f64) -> f64 {
    let span = x_last - x_first;
    if approx_eq!(f64, span, 0.0) {
        return 0.0;
    }
    ((x_a + x_b) * 0.5 - x_first) / span
}

/// Split the band between two sampled boundaries into quads, each colored
/// by where its midpoint falls between `from` (left) and `to` (right).
pub fn gradient_strips(
    lower: &[Point],
    upper: &[Point],
    from: Color,
    to: Color,
) -> Vec<(Vec<Point>, Color)> {
    let n = lower.len().min(upper.len());
    if n < 2 {
        return Vec::new();
    }
    let x_first = lower[0].x;
    let x_last = lower[n - 1].x;

    (0..n - 1)
        .map(|k| {
            let t = strip_fraction(lower[k].x, lower[k + 1].x, x_first, x_last);
            let quad = vec![lower[k], lower[k + 1], upper[k + 1], upper[k]];
            (quad, blend(from, to, t))
        })
        .collect()
}

fn band_polygon(lower: &[Point], upper: &[Point]) -> Vec<Point> {
    lower
        .iter()
        .copied()
        .chain(upper.iter().rev().copied())
        .collect()
}

fn draw_ribbon(
    scene: &mut Scene,
    z_order: f64,
    lower: Vec<Point>,
    upper: Vec<Point>,
    from: Color,
    to: Color,
    config: &AlluvialConfig,
) {
    if from == to {
        scene.push(
            z_order,
            ShapeKind::Polygon {
                points: band_polygon(&lower, &upper),
                fill: from,
                stroke: Some(Stroke::new(from, config.edge_width)),
            },
        );
    } else {
        for (quad, color) in gradient_strips(&lower, &upper, from, to) {
            scene.push(
                z_order,
                ShapeKind::Polygon {
                    points: quad,
                    fill: color,
                    stroke: Some(Stroke::new(color, config.edge_width)),
                },
            );
        }
    }

    let edge = Stroke::new(config.edge_color, config.edge_width);
    for boundary in [lower, upper] {
        scene.push(
            z_order + BOUNDARY_Z_OFFSET,
            ShapeKind::Polyline {
                points: boundary,
                stroke: edge,
            },
        );
    }
}

/// Draw every ribbon, walking steps, then sources, then targets in index
/// order. That order decides which slice of each block a ribbon occupies.
pub fn render_ribbons(
    layout: &Layout,
    flows: &[Vec<Vec<Flow>>],
    config: &AlluvialConfig,
    cursors: &mut SliceCursors,
    scene: &mut Scene,
) -> RibbonStats {
    let mut stats = RibbonStats::default();
    let mut next_z = 0.0;

    let transitions = layout.step_count().saturating_sub(1);
    if flows.len() > transitions {
        warn!(
            layers = flows.len(),
            transitions, "more ribbon layers than transitions; extra layers ignored"
        );
    }

    for (step, matrix) in flows.iter().enumerate() {
        for (source, row) in matrix.iter().enumerate() {
            for (target, flow) in row.iter().enumerate() {
                if flow.is_degenerate() {
                    stats.degenerate += 1;
                    continue;
                }

                if !cursors.contains(step, source) || !cursors.contains(step + 1, target) {
                    warn!(step, source, target, "flow references a missing module");
                    stats.skipped += 1;
                    continue;
                }
                let (Some(src), Some(dst)) = (
                    cursors.take_outflow(step, source, flow.outflow),
                    cursors.take_inflow(step + 1, target, flow.inflow),
                ) else {
                    stats.skipped += 1;
                    continue;
                };

                if !flow.is_visible(config.visibility_threshold) {
                    stats.hidden += 1;
                    continue;
                }

                let (Some(from), Some(to)) =
                    (layout.block(step, source), layout.block(step + 1, target))
                else {
                    stats.skipped += 1;
                    continue;
                };

                let z_order =
                    ribbon_z_order(flow, target, config.background_mass_threshold, &mut next_z);
                let (lower, upper) = ribbon_curves(layout, step, src, dst, config.curvature);
                trace!(step, source, target, z_order, ?src, ?dst, "drawing ribbon");

                draw_ribbon(
                    scene,
                    z_order,
                    lower.sample(config.curve_samples),
                    upper.sample(config.curve_samples),
                    from.color,
                    to.color,
                    config,
                );
                stats.drawn += 1;
            }
        }
    }

    debug!(
        drawn = stats.drawn,
        hidden = stats.hidden,
        degenerate = stats.degenerate,
        skipped = stats.skipped,
        "rendered ribbons"
    );

    stats
}
