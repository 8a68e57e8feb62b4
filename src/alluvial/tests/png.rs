// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use alluvial::{AlluvialData, AlluvialDiagram, Color, Flow, PngRenderOpts};

const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn png_width(png: &[u8]) -> u32 {
    u32::from_be_bytes([png[16], png[17], png[18], png[19]])
}

#[test]
fn test_render_png() {
    let data = AlluvialData::new(
        vec![vec![30.0, 10.0], vec![20.0, 20.0]],
        vec![vec![
            vec![Flow::new(0.5, 0.75), Flow::new(0.5, 0.75)],
            vec![Flow::new(0.5, 0.25), Flow::new(0.5, 0.25)],
        ]],
    )
    .with_colors(vec![
        vec![Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)],
        vec![Color::GRAY, Color::BLACK],
    ])
    .with_labels(vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ]);

    let diagram = AlluvialDiagram::new(data);
    let png = diagram.render_png(&PngRenderOpts::default()).unwrap();
    assert!(png.starts_with(PNG_MAGIC));
    assert_eq!(png_width(&png), 640);

    let opts = PngRenderOpts {
        width: Some(320),
        height: None,
    };
    let png = diagram.render_png(&opts).unwrap();
    assert_eq!(png_width(&png), 320);
}
