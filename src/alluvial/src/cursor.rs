// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Running slice cursors for the ribbon pass.
//!
//! Every block hands out its height to ribbons in the order the ribbons are
//! processed: the first ribbon leaving a block gets the slice starting at
//! the block's origin, the next one the slice right after it, and so on.
//! Leaving and arriving ribbons consume independent cursors. The cursors are
//! transient render state, built fresh from a [`Layout`] for every pass.

use tracing::warn;

use crate::layout::Layout;

/// Consumption past the block by more than this is reported.
const OVERFLOW_TOLERANCE: f64 = 1e-9;

/// The vertical extent a ribbon reserves on one block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
}

#[derive(Clone, Copy, Debug)]
struct Cursor {
    base: f64,
    height: f64,
    top: f64,
}

impl Cursor {
    fn take(&mut self, fraction: f64) -> Slice {
        let start = self.top;
        let end = start + fraction * self.height;
        self.top = end;
        Slice { start, end }
    }

    fn consumed(&self) -> f64 {
        if self.height > 0.0 {
            (self.top - self.base) / self.height
        } else {
            0.0
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Side {
    Outflow,
    Inflow,
}

#[derive(Clone, Debug)]
pub struct SliceCursors {
    outflow: Vec<Vec<Cursor>>,
    inflow: Vec<Vec<Cursor>>,
}

impl SliceCursors {
    pub fn new(layout: &Layout) -> Self {
        let cursors: Vec<Vec<Cursor>> = (0..layout.step_count())
            .map(|step| {
                layout
                    .blocks(step)
                    .iter()
                    .map(|block| Cursor {
                        base: block.y,
                        height: block.height,
                        top: block.y,
                    })
                    .collect()
            })
            .collect();

        SliceCursors {
            outflow: cursors.clone(),
            inflow: cursors,
        }
    }

    /// Reserve the next `fraction` of a block's height for a ribbon leaving
    /// it. `None` when there is no such block.
    pub fn take_outflow(&mut self, step: usize, module: usize, fraction: f64) -> Option<Slice> {
        self.take(Side::Outflow, step, module, fraction)
    }

    /// Reserve the next `fraction` of a block's height for a ribbon entering
    /// it. `None` when there is no such block.
    pub fn take_inflow(&mut self, step: usize, module: usize, fraction: f64) -> Option<Slice> {
        self.take(Side::Inflow, step, module, fraction)
    }

    /// Share of the block's height reserved so far by leaving ribbons.
    pub fn outflow_consumed(&self, step: usize, module: usize) -> Option<f64> {
        Some(self.outflow.get(step)?.get(module)?.consumed())
    }

    /// Share of the block's height reserved so far by entering ribbons.
    pub fn inflow_consumed(&self, step: usize, module: usize) -> Option<f64> {
        Some(self.inflow.get(step)?.get(module)?.consumed())
    }

    pub fn contains(&self, step: usize, module: usize) -> bool {
        self.outflow
            .get(step)
            .is_some_and(|column| module < column.len())
    }

    fn take(&mut self, side: Side, step: usize, module: usize, fraction: f64) -> Option<Slice> {
        let cursors = match side {
            Side::Outflow => &mut self.outflow,
            Side::Inflow => &mut self.inflow,
        };
        let cursor = cursors.get_mut(step)?.get_mut(module)?;

        if !(0.0..=1.0).contains(&fraction) {
            warn!(?side, step, module, fraction, "ribbon fraction outside [0, 1]");
        }

        let slice = cursor.take(fraction);
        let consumed = cursor.consumed();
        if consumed > 1.0 + OVERFLOW_TOLERANCE {
            warn!(
                ?side,
                step, module, consumed, "ribbons consume more than the whole block"
            );
        }

        Some(slice)
    }
}
