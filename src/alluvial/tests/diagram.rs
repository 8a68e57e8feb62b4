// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use alluvial::ribbon::render_ribbons;
use alluvial::scene::BLOCK_Z_ORDER;
use alluvial::{
    AlluvialConfig, AlluvialData, AlluvialDiagram, Color, ErrorCode, ErrorKind, Flow, Layout,
    Point, Scene, ShapeKind, SliceCursors, SvgOptions,
};
use float_cmp::approx_eq;

fn two_step_example() -> AlluvialData {
    AlluvialData::new(
        vec![vec![10.0, 10.0], vec![10.0, 10.0]],
        vec![vec![
            vec![Flow::new(1.0, 0.5), Flow::NONE],
            vec![Flow::NONE, Flow::new(1.0, 1.0)],
        ]],
    )
}

fn polyline_points(scene: &Scene) -> Vec<&[Point]> {
    scene
        .polylines()
        .map(|shape| match &shape.kind {
            ShapeKind::Polyline { points, .. } => points.as_slice(),
            _ => unreachable!(),
        })
        .collect()
}

#[test]
fn test_two_step_example() {
    let data = two_step_example();
    let config = AlluvialConfig::default();
    let layout = Layout::configure(&data, &config).unwrap();
    let mut cursors = SliceCursors::new(&layout);
    let mut scene = Scene::new();

    let stats = render_ribbons(&layout, &data.ribbon_flows, &config, &mut cursors, &mut scene);
    assert_eq!(stats.drawn, 2);
    assert_eq!(stats.degenerate, 2);

    let consumed = |v: Option<f64>| v.unwrap();
    assert!(approx_eq!(f64, consumed(cursors.outflow_consumed(0, 0)), 1.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, consumed(cursors.outflow_consumed(0, 1)), 1.0, epsilon = 1e-12));
    assert!(approx_eq!(f64, consumed(cursors.inflow_consumed(1, 0)), 0.5, epsilon = 1e-12));
    assert!(approx_eq!(f64, consumed(cursors.inflow_consumed(1, 1)), 1.0, epsilon = 1e-12));

    // lower and upper boundary of each ribbon, in drawing order
    let lines = polyline_points(&scene);
    assert_eq!(lines.len(), 4);

    let src = layout.block(0, 0).unwrap();
    let dst = layout.block(1, 0).unwrap();
    let (lower, upper) = (lines[0], lines[1]);
    assert_eq!(lower[0], Point::new(src.right(), src.y));
    assert_eq!(upper[0].x, src.right());
    assert!(approx_eq!(f64, upper[0].y, src.top(), epsilon = 1e-12));
    assert_eq!(*lower.last().unwrap(), Point::new(dst.x, dst.y));
    assert!(approx_eq!(
        f64,
        upper.last().unwrap().y,
        dst.y + 0.5 * dst.height,
        epsilon = 1e-12
    ));

    let src = layout.block(0, 1).unwrap();
    let dst = layout.block(1, 1).unwrap();
    let (lower, upper) = (lines[2], lines[3]);
    assert_eq!(lower[0].y, src.y);
    assert!(approx_eq!(f64, upper.last().unwrap().y, dst.top(), epsilon = 1e-12));
}

#[test]
fn test_two_step_example_through_facade() {
    let scene = AlluvialDiagram::new(two_step_example()).render().unwrap();

    assert_eq!(scene.rects().count(), 4);
    assert_eq!(scene.polygons().count(), 2);
    assert_eq!(scene.polylines().count(), 4);
    assert_eq!(scene.texts().count(), 0);

    // both ribbons fall under the default background threshold
    let order = scene.draw_order();
    let first_block = order
        .iter()
        .position(|s| s.z_order >= BLOCK_Z_ORDER)
        .unwrap();
    assert_eq!(first_block, 6);
    assert!(matches!(order[first_block].kind, ShapeKind::Rect { .. }));
}

#[test]
fn test_color_mismatch_fails_before_drawing() {
    let data = two_step_example().with_colors(vec![
        vec![Color::BLACK, Color::WHITE],
        vec![Color::BLACK],
    ]);
    let diagram = AlluvialDiagram::new(data);

    let err = diagram.render().unwrap_err();
    assert_eq!(err.kind, ErrorKind::Layout);
    assert_eq!(err.code, ErrorCode::ColorCountMismatch);
    assert_eq!(
        err.to_string(),
        "LayoutError{color_count_mismatch: step 1 has 2 modules but 1 colors}"
    );
    assert!(diagram.render_svg(&SvgOptions::default()).is_err());
}

#[test]
fn test_gradient_ribbon_between_colored_modules() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);
    let data = AlluvialData::new(
        vec![vec![10.0], vec![10.0]],
        vec![vec![vec![Flow::new(1.0, 1.0)]]],
    )
    .with_colors(vec![vec![red], vec![blue]]);
    let scene = AlluvialDiagram::new(data).render().unwrap();

    let fills: Vec<Color> = scene
        .polygons()
        .map(|shape| match &shape.kind {
            ShapeKind::Polygon { fill, .. } => *fill,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(fills.len(), 99);
    assert!(fills[0].r > 0.95 && fills[0].b < 0.05);
    assert!(fills[98].b > 0.95 && fills[98].r < 0.05);
    assert!(fills.windows(2).all(|w| w[0].r >= w[1].r));
}

#[test]
fn test_svg_export() {
    let data = two_step_example().with_labels(vec![
        vec!["left <a>".to_string(), "left b".to_string()],
        vec!["right a".to_string(), "right b".to_string()],
    ]);
    let svg = AlluvialDiagram::new(data)
        .render_svg(&SvgOptions {
            width: 800.0,
            height: 420.0,
        })
        .unwrap();

    assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(svg.contains("viewBox=\"0 0 800 420\""));
    assert_eq!(svg.matches("<rect").count(), 4);
    assert_eq!(svg.matches("<polygon").count(), 2);
    assert_eq!(svg.matches("<polyline").count(), 4);
    assert_eq!(svg.matches("<text").count(), 4);
    assert!(svg.contains("left &lt;a&gt;"));
    assert!(svg.find("<polygon").unwrap() < svg.find("<rect").unwrap());
}

#[test]
fn test_config_from_json() {
    let config: AlluvialConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, AlluvialConfig::default());

    let config: AlluvialConfig = serde_json::from_str(
        r#"{"background_mass_threshold": 0.25, "edge_color": "black", "curve_samples": 10}"#,
    )
    .unwrap();
    assert!(approx_eq!(f64, config.background_mass_threshold, 0.25));
    assert_eq!(config.edge_color, Color::BLACK);
    assert_eq!(config.curve_samples, 10);
    assert!(approx_eq!(f64, config.curvature, 0.6));

    let err = serde_json::from_str::<AlluvialConfig>(r#"{"edge_color": "not-a-color"}"#);
    assert!(err.is_err());
}

#[test]
fn test_data_from_json() {
    let data: AlluvialData = serde_json::from_str(
        r##"{
            "module_sizes": [[10, 10], [10, 10]],
            "ribbon_flows": [[[[1.0, 0.5], [0, 0]], [[0, 0], [1.0, 1.0]]]],
            "module_colors": [["#ff0000", "tab:blue"], ["0.5", "g"]]
        }"##,
    )
    .unwrap();

    assert_eq!(data.step_count(), 2);
    assert_eq!(data.ribbon_flows[0][0][0], Flow::new(1.0, 0.5));
    assert!(data.ribbon_flows[0][0][1].is_degenerate());
    assert!(data.module_labels.is_none());
    let colors = data.module_colors.as_ref().unwrap();
    assert_eq!(colors[0][0], Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(colors[1][0], Color::gray(0.5));

    let scene = AlluvialDiagram::new(data).render().unwrap();
    assert_eq!(scene.rects().count(), 4);
}
