// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Rendering configuration for an alluvial diagram.
///
/// Vertical and horizontal quantities are in normalized diagram units:
/// blocks share `y in [0, 1]` and columns share `x in [0, 2]`. Stroke widths
/// and font sizes are in output pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlluvialConfig {
    /// Ribbons whose larger fraction is below this value are pushed behind
    /// every other shape.
    pub background_mass_threshold: f64,
    /// Both fractions must be strictly greater than this for a ribbon to be
    /// drawn. Hidden ribbons still reserve their slices.
    pub visibility_threshold: f64,
    /// Reserved for alternate ribbon coloring. Accepted and ignored.
    pub rainbow: bool,

    /// Horizontal offset of the inner Bezier control points, as a fraction
    /// of the gap between columns.
    pub curvature: f64,
    /// Samples taken along each ribbon boundary.
    pub curve_samples: usize,

    // Spacing
    /// Vertical gap between consecutive blocks in a column.
    pub module_gap: f64,
    /// Padding above and below the blocks.
    pub vertical_margin: f64,
    /// Padding left and right of the columns.
    pub horizontal_margin: f64,

    // Styling
    pub label_font_size: f64,
    pub edge_color: Color,
    pub edge_width: f64,
}

impl Default for AlluvialConfig {
    fn default() -> Self {
        Self {
            background_mass_threshold: 20.0,
            visibility_threshold: 0.0,
            rainbow: false,
            curvature: 0.6,
            curve_samples: 100,
            module_gap: 0.010,
            vertical_margin: 0.0,
            horizontal_margin: 0.0,
            label_font_size: 7.0,
            edge_color: Color::EDGE,
            edge_width: 1.0,
        }
    }
}
