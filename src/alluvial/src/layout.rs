// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Block geometry for every module at every time step.
//!
//! Columns are laid out left to right, one per time step, with a uniform
//! width and a uniform gap derived from the number of transitions. Within a
//! column, blocks stack upward from the bottom margin in index order. Block
//! heights share one scale factor across all columns, fixed by the column
//! with the largest total mass, so masses stay comparable across time.

use tracing::debug;

use crate::bezier::Point;
use crate::color::Color;
use crate::common::Result;
use crate::config::AlluvialConfig;
use crate::datamodel::AlluvialData;
use crate::layout_err;
use crate::scene::{BLOCK_Z_ORDER, LABEL_Z_ORDER, Scene, ShapeKind, Stroke};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModuleBlock {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
}

impl ModuleBlock {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Clone, Debug)]
pub struct Layout {
    scale: f64,
    column_width: f64,
    column_gap: f64,
    horizontal_margin: f64,
    columns: Vec<Vec<ModuleBlock>>,
}

/// One color list per time step, either the caller's (after checking it
/// matches the sizes) or a freshly built all-gray one.
fn resolve_colors(data: &AlluvialData) -> Result<Vec<Vec<Color>>> {
    let Some(colors) = &data.module_colors else {
        return Ok(data
            .module_sizes
            .iter()
            .map(|sizes| vec![Color::GRAY; sizes.len()])
            .collect());
    };

    if colors.len() != data.module_sizes.len() {
        return layout_err!(
            ColorStepMismatch,
            format!(
                "{} time steps of module sizes but {} of module colors",
                data.module_sizes.len(),
                colors.len()
            )
        );
    }

    for (step, (sizes, step_colors)) in data.module_sizes.iter().zip(colors).enumerate() {
        if sizes.len() != step_colors.len() {
            return layout_err!(
                ColorCountMismatch,
                format!(
                    "step {} has {} modules but {} colors",
                    step,
                    sizes.len(),
                    step_colors.len()
                )
            );
        }
    }

    Ok(colors.clone())
}

impl Layout {
    /// Compute the shared scale, the column geometry, and every block.
    ///
    /// Fails only when the module colors don't line up with the module
    /// sizes; nothing is drawn in that case.
    pub fn configure(data: &AlluvialData, config: &AlluvialConfig) -> Result<Self> {
        let colors = resolve_colors(data)?;

        let steps = data.module_sizes.len();
        let max_modules = data.module_sizes.iter().map(Vec::len).max().unwrap_or(0);
        let max_mass = data
            .module_sizes
            .iter()
            .map(|sizes| sizes.iter().sum::<f64>())
            .fold(0.0, f64::max);

        let available = 1.0
            - 2.0 * config.vertical_margin
            - config.module_gap * max_modules.saturating_sub(1) as f64;
        let scale = if max_mass > 0.0 {
            available / max_mass
        } else {
            0.0
        };

        let transitions = steps.saturating_sub(1);
        let span = 1.0 - 2.0 * config.horizontal_margin;
        let column_width = span / (transitions + 1) as f64;
        let column_gap = if transitions > 0 {
            span / transitions as f64
        } else {
            0.0
        };

        let mut layout = Layout {
            scale,
            column_width,
            column_gap,
            horizontal_margin: config.horizontal_margin,
            columns: Vec::with_capacity(steps),
        };

        for (step, (sizes, step_colors)) in data.module_sizes.iter().zip(&colors).enumerate() {
            let x = layout.column_x(step);
            let mut cursor = config.vertical_margin;
            let column = sizes
                .iter()
                .zip(step_colors)
                .map(|(&size, &color)| {
                    let height = size * scale;
                    let block = ModuleBlock {
                        x,
                        y: cursor,
                        width: column_width,
                        height,
                        color,
                    };
                    cursor += height + config.module_gap;
                    block
                })
                .collect();
            layout.columns.push(column);
        }

        debug!(
            steps,
            max_modules, max_mass, scale, column_width, column_gap, "configured alluvial layout"
        );

        Ok(layout)
    }

    /// Emit one rectangle per module, plus its label when it has one.
    pub fn place_blocks(&self, data: &AlluvialData, config: &AlluvialConfig, scene: &mut Scene) {
        let stroke = Stroke::new(config.edge_color, config.edge_width);
        for (step, column) in self.columns.iter().enumerate() {
            for (module, block) in column.iter().enumerate() {
                scene.push(
                    BLOCK_Z_ORDER,
                    ShapeKind::Rect {
                        x: block.x,
                        y: block.y,
                        width: block.width,
                        height: block.height,
                        fill: block.color,
                        stroke: Some(stroke),
                    },
                );
                if let Some(label) = data.label(step, module) {
                    scene.push(
                        LABEL_Z_ORDER,
                        ShapeKind::Text {
                            pos: Point::new(block.x, block.y),
                            text: label.to_string(),
                            size: config.label_font_size,
                        },
                    );
                }
            }
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn column_width(&self) -> f64 {
        self.column_width
    }

    pub fn column_gap(&self) -> f64 {
        self.column_gap
    }

    pub fn step_count(&self) -> usize {
        self.columns.len()
    }

    /// Left edge of the column for `step`.
    pub fn column_x(&self, step: usize) -> f64 {
        self.horizontal_margin + step as f64 * (self.column_width + self.column_gap)
    }

    pub fn blocks(&self, step: usize) -> &[ModuleBlock] {
        self.columns.get(step).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn block(&self, step: usize, module: usize) -> Option<&ModuleBlock> {
        self.columns.get(step)?.get(module)
    }
}
