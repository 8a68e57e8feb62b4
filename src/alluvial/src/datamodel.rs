// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// The fraction pair carried by one ribbon: the share of the source block
/// it leaves from and the share of the target block it arrives in.
///
/// Serialized as `[outflow, inflow]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Flow {
    pub outflow: f64,
    pub inflow: f64,
}

impl Flow {
    pub const NONE: Flow = Flow {
        outflow: 0.0,
        inflow: 0.0,
    };

    pub const fn new(outflow: f64, inflow: f64) -> Self {
        Flow { outflow, inflow }
    }

    /// A flow with either fraction exactly zero connects nothing.
    pub fn is_degenerate(&self) -> bool {
        self.outflow == 0.0 || self.inflow == 0.0
    }

    pub fn dominant(&self) -> f64 {
        self.outflow.max(self.inflow)
    }

    pub fn is_visible(&self, threshold: f64) -> bool {
        self.outflow > threshold && self.inflow > threshold
    }
}

impl From<(f64, f64)> for Flow {
    fn from((outflow, inflow): (f64, f64)) -> Self {
        Flow { outflow, inflow }
    }
}

impl From<Flow> for (f64, f64) {
    fn from(flow: Flow) -> Self {
        (flow.outflow, flow.inflow)
    }
}

/// Everything an alluvial diagram is drawn from.
///
/// `module_sizes[t][i]` is the mass of module `i` at time step `t`, and
/// `ribbon_flows[t][i][j]` the flow from that module to module `j` at step
/// `t + 1`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AlluvialData {
    pub module_sizes: Vec<Vec<f64>>,
    pub ribbon_flows: Vec<Vec<Vec<Flow>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_labels: Option<Vec<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_colors: Option<Vec<Vec<Color>>>,
}

impl AlluvialData {
    pub fn new(module_sizes: Vec<Vec<f64>>, ribbon_flows: Vec<Vec<Vec<Flow>>>) -> Self {
        AlluvialData {
            module_sizes,
            ribbon_flows,
            module_labels: None,
            module_colors: None,
        }
    }

    pub fn with_labels(mut self, labels: Vec<Vec<String>>) -> Self {
        self.module_labels = Some(labels);
        self
    }

    pub fn with_colors(mut self, colors: Vec<Vec<Color>>) -> Self {
        self.module_colors = Some(colors);
        self
    }

    pub fn step_count(&self) -> usize {
        self.module_sizes.len()
    }

    /// The label of a module, if one was supplied for it.
    pub fn label(&self, step: usize, module: usize) -> Option<&str> {
        self.module_labels
            .as_ref()?
            .get(step)?
            .get(module)
            .map(String::as_str)
    }
}
