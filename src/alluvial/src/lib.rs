// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! Alluvial diagrams: how a population redistributes across modules over
//! a sequence of time steps.
//!
//! Each step is a column of stacked blocks, one per module, sized by the
//! module's mass. Consecutive columns are joined by ribbons whose ends
//! cover a fraction of the source and target blocks. Rendering produces a
//! [`Scene`] that can be exported to SVG (and to PNG with the `png_render`
//! feature).

#![forbid(unsafe_code)]

pub mod bezier;
pub mod color;
pub mod common;
pub mod config;
mod cursor;
pub mod datamodel;
mod diagram;
pub mod layout;
#[cfg(feature = "png_render")]
pub mod png;
pub mod ribbon;
pub mod scene;
pub mod svg;

pub use self::bezier::{CubicBezier, Point};
pub use self::color::Color;
pub use self::common::{Error, ErrorCode, ErrorKind, Result};
pub use self::config::AlluvialConfig;
pub use self::cursor::{Slice, SliceCursors};
pub use self::datamodel::{AlluvialData, Flow};
pub use self::diagram::AlluvialDiagram;
pub use self::layout::{Layout, ModuleBlock};
#[cfg(feature = "png_render")]
pub use self::png::{PngRenderOpts, svg_to_png};
pub use self::scene::{Scene, Shape, ShapeKind, Stroke};
pub use self::svg::{SvgOptions, render_svg};
