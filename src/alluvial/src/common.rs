// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

use std::{error, fmt, result};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    NoError, // will never be produced
    ColorStepMismatch,
    ColorCountMismatch,
    InvalidColor,
    SvgParse,
    PixmapAllocation,
    EmptyImage,
    PngEncode,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ErrorCode::*;
        let name = match self {
            NoError => "no_error",
            ColorStepMismatch => "color_step_mismatch",
            ColorCountMismatch => "color_count_mismatch",
            InvalidColor => "invalid_color",
            SvgParse => "svg_parse",
            PixmapAllocation => "pixmap_allocation",
            EmptyImage => "empty_image",
            PngEncode => "png_encode",
        };

        write!(f, "{name}")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Layout,
    Render,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    pub kind: ErrorKind,
    pub code: ErrorCode,
    pub details: Option<String>,
}

impl Error {
    pub fn new(kind: ErrorKind, code: ErrorCode, details: Option<String>) -> Self {
        Error {
            kind,
            code,
            details,
        }
    }

    pub fn get_details(&self) -> Option<String> {
        self.details.clone()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let kind = match self.kind {
            ErrorKind::Layout => "LayoutError",
            ErrorKind::Render => "RenderError",
        };
        match self.details {
            Some(ref details) => write!(f, "{}{{{}: {}}}", kind, self.code, details),
            None => write!(f, "{}{{{}}}", kind, self.code),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = result::Result<T, Error>;

#[macro_export]
macro_rules! layout_err {
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Layout, ErrorCode::$code, Some($str)))
    }};
    ($code:tt) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Layout, ErrorCode::$code, None))
    }};
}

#[macro_export]
macro_rules! render_err {
    ($code:tt, $str:expr) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Render, ErrorCode::$code, Some($str)))
    }};
    ($code:tt) => {{
        use $crate::common::{Error, ErrorCode, ErrorKind};
        Err(Error::new(ErrorKind::Render, ErrorCode::$code, None))
    }};
}

/// Format a number for SVG attributes: no trailing `.0` for integers and
/// at most four decimal places otherwise.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "0".to_string();
    }

    let rounded = (n * 10_000.0).round() / 10_000.0;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        return format!("{}", rounded as i64);
    }

    format!("{rounded}")
}

/// Escape text content for XML (inside elements)
pub fn escape_xml_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

#[test]
fn test_error_display() {
    let err = Error::new(
        ErrorKind::Layout,
        ErrorCode::ColorCountMismatch,
        Some("step 2 has 3 sizes but 2 colors".to_string()),
    );
    assert_eq!(
        format!("{err}"),
        "LayoutError{color_count_mismatch: step 2 has 3 sizes but 2 colors}"
    );

    let err = Error::new(ErrorKind::Render, ErrorCode::EmptyImage, None);
    assert_eq!(format!("{err}"), "RenderError{empty_image}");
}

#[test]
fn test_layout_err_macro() {
    let result: Result<()> = layout_err!(ColorStepMismatch, "2 vs 3".to_string());
    let err = result.unwrap_err();
    assert_eq!(err.kind, ErrorKind::Layout);
    assert_eq!(err.code, ErrorCode::ColorStepMismatch);
    assert_eq!(err.get_details().as_deref(), Some("2 vs 3"));
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(45.0), "45");
    assert_eq!(format_number(0.0), "0");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(0.5), "0.5");
    assert_eq!(format_number(-3.125), "-3.125");
    assert_eq!(format_number(1.0 / 3.0), "0.3333");
    assert_eq!(format_number(f64::NAN), "0");
}

#[test]
fn test_escape_xml_text() {
    assert_eq!(escape_xml_text("hello"), "hello");
    assert_eq!(escape_xml_text("a & b"), "a &amp; b");
    assert_eq!(escape_xml_text("<tag>"), "&lt;tag&gt;");
}
