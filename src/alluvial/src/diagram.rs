// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use tracing::debug;

use crate::common::Result;
use crate::config::AlluvialConfig;
use crate::cursor::SliceCursors;
use crate::datamodel::AlluvialData;
use crate::layout::Layout;
use crate::ribbon::render_ribbons;
use crate::scene::Scene;
use crate::svg::{self, SvgOptions};

/// An alluvial diagram: the data to draw and how to draw it.
///
/// Rendering is a pure function of the two. Every call lays the diagram
/// out from scratch, so a diagram can be rendered any number of times.
#[derive(Clone, Debug)]
pub struct AlluvialDiagram {
    data: AlluvialData,
    config: AlluvialConfig,
}

impl AlluvialDiagram {
    pub fn new(data: AlluvialData) -> Self {
        AlluvialDiagram {
            data,
            config: AlluvialConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AlluvialConfig) -> Self {
        self.config = config;
        self
    }

    pub fn data(&self) -> &AlluvialData {
        &self.data
    }

    pub fn config(&self) -> &AlluvialConfig {
        &self.config
    }

    /// Block geometry only. Fails on module colors that don't match the
    /// module sizes.
    pub fn layout(&self) -> Result<Layout> {
        Layout::configure(&self.data, &self.config)
    }

    /// Lay out the blocks and draw blocks, labels and ribbons into a new
    /// scene. Nothing is drawn when the layout fails.
    pub fn render(&self) -> Result<Scene> {
        if self.config.rainbow {
            debug!("rainbow coloring requested; ribbons keep module colors");
        }

        let layout = self.layout()?;
        let mut scene = Scene::new();
        layout.place_blocks(&self.data, &self.config, &mut scene);

        let mut cursors = SliceCursors::new(&layout);
        render_ribbons(
            &layout,
            &self.data.ribbon_flows,
            &self.config,
            &mut cursors,
            &mut scene,
        );

        debug!(
            steps = layout.step_count(),
            shapes = scene.len(),
            "rendered alluvial diagram"
        );

        Ok(scene)
    }

    pub fn render_svg(&self, opts: &SvgOptions) -> Result<String> {
        let scene = self.render()?;
        Ok(svg::render_svg(&scene, opts))
    }

    #[cfg(feature = "png_render")]
    pub fn render_png(&self, opts: &crate::png::PngRenderOpts) -> Result<Vec<u8>> {
        let svg = self.render_svg(&SvgOptions::default())?;
        crate::png::svg_to_png(&svg, opts)
    }
}
