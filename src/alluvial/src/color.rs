// Copyright 2026 The Simlin Authors. All rights reserved.
// Use of this source code is governed by the Apache License,
// Version 2.0, that can be found in the LICENSE file.

//! RGBA colors and color-spec parsing.
//!
//! Colors are stored as `f64` components in `[0, 1]` so that ribbon
//! gradients blend without intermediate quantization. The accepted string
//! forms follow matplotlib's color conventions: hex triplets, single-letter
//! base colors, CSS names, the `tab:` palette, and bare gray levels such as
//! `"0.85"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::{Error, ErrorCode, ErrorKind};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    /// `#808080`, the fill used for modules without an explicit color.
    pub const GRAY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    /// Outline color for blocks and ribbon boundaries.
    pub const EDGE: Color = Color::gray(0.85);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Color { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b, a: 1.0 }
    }

    pub const fn gray(level: f64) -> Self {
        Color::rgb(level, level, level)
    }

    const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// `#rrggbb`, ignoring alpha.
    pub fn to_hex_rgb(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn lerp(self, other: Color, t: f64) -> Color {
        blend(self, other, t)
    }
}

/// Linear blend between two colors: `from` at `t == 0`, `to` at `t == 1`.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let mix = |a: f64, b: f64| a * (1.0 - t) + b * t;
    Color {
        r: mix(from.r, to.r),
        g: mix(from.g, to.g),
        b: mix(from.b, to.b),
        a: mix(from.a, to.a),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn invalid_color(spec: &str) -> Error {
    Error::new(
        ErrorKind::Layout,
        ErrorCode::InvalidColor,
        Some(format!("unrecognized color spec '{spec}'")),
    )
}

fn parse_hex(spec: &str, digits: &str) -> Result<Color, Error> {
    if !digits.is_ascii() {
        return Err(invalid_color(spec));
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid_color(spec));
    // #rgb expands each nibble, the CSS way
    let nibble = |s: &str| byte(s).map(|n| n * 17);

    let (r, g, b, a) = match digits.len() {
        3 => (
            nibble(&digits[0..1])?,
            nibble(&digits[1..2])?,
            nibble(&digits[2..3])?,
            255,
        ),
        6 => (
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
            255,
        ),
        8 => (
            byte(&digits[0..2])?,
            byte(&digits[2..4])?,
            byte(&digits[4..6])?,
            byte(&digits[6..8])?,
        ),
        _ => return Err(invalid_color(spec)),
    };

    Ok(Color::rgba(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    ))
}

fn named_color(name: &str) -> Option<Color> {
    let c = match name {
        // single-letter base colors
        "b" => Color::rgb(0.0, 0.0, 1.0),
        "g" => Color::rgb(0.0, 0.5, 0.0),
        "r" => Color::rgb(1.0, 0.0, 0.0),
        "c" => Color::rgb(0.0, 0.75, 0.75),
        "m" => Color::rgb(0.75, 0.0, 0.75),
        "y" => Color::rgb(0.75, 0.75, 0.0),
        "k" => Color::BLACK,
        "w" => Color::WHITE,

        // qualitative palette
        "tab:blue" => Color::from_rgb8(0x1f, 0x77, 0xb4),
        "tab:orange" => Color::from_rgb8(0xff, 0x7f, 0x0e),
        "tab:green" => Color::from_rgb8(0x2c, 0xa0, 0x2c),
        "tab:red" => Color::from_rgb8(0xd6, 0x27, 0x28),
        "tab:purple" => Color::from_rgb8(0x94, 0x67, 0xbd),
        "tab:brown" => Color::from_rgb8(0x8c, 0x56, 0x4b),
        "tab:pink" => Color::from_rgb8(0xe3, 0x77, 0xc2),
        "tab:gray" | "tab:grey" => Color::from_rgb8(0x7f, 0x7f, 0x7f),
        "tab:olive" => Color::from_rgb8(0xbc, 0xbd, 0x22),
        "tab:cyan" => Color::from_rgb8(0x17, 0xbe, 0xcf),

        "black" => Color::BLACK,
        "white" => Color::WHITE,
        "gray" | "grey" => Color::GRAY,
        "lightgray" | "lightgrey" => Color::from_rgb8(0xd3, 0xd3, 0xd3),
        "darkgray" | "darkgrey" => Color::from_rgb8(0xa9, 0xa9, 0xa9),
        "silver" => Color::from_rgb8(0xc0, 0xc0, 0xc0),
        "red" => Color::from_rgb8(0xff, 0x00, 0x00),
        "darkred" => Color::from_rgb8(0x8b, 0x00, 0x00),
        "maroon" => Color::from_rgb8(0x80, 0x00, 0x00),
        "crimson" => Color::from_rgb8(0xdc, 0x14, 0x3c),
        "salmon" => Color::from_rgb8(0xfa, 0x80, 0x72),
        "coral" => Color::from_rgb8(0xff, 0x7f, 0x50),
        "orange" => Color::from_rgb8(0xff, 0xa5, 0x00),
        "gold" => Color::from_rgb8(0xff, 0xd7, 0x00),
        "yellow" => Color::from_rgb8(0xff, 0xff, 0x00),
        "khaki" => Color::from_rgb8(0xf0, 0xe6, 0x8c),
        "olive" => Color::from_rgb8(0x80, 0x80, 0x00),
        "lime" => Color::from_rgb8(0x00, 0xff, 0x00),
        "green" => Color::from_rgb8(0x00, 0x80, 0x00),
        "darkgreen" => Color::from_rgb8(0x00, 0x64, 0x00),
        "teal" => Color::from_rgb8(0x00, 0x80, 0x80),
        "turquoise" => Color::from_rgb8(0x40, 0xe0, 0xd0),
        "cyan" | "aqua" => Color::from_rgb8(0x00, 0xff, 0xff),
        "skyblue" => Color::from_rgb8(0x87, 0xce, 0xeb),
        "steelblue" => Color::from_rgb8(0x46, 0x82, 0xb4),
        "blue" => Color::from_rgb8(0x00, 0x00, 0xff),
        "navy" => Color::from_rgb8(0x00, 0x00, 0x80),
        "indigo" => Color::from_rgb8(0x4b, 0x00, 0x82),
        "purple" => Color::from_rgb8(0x80, 0x00, 0x80),
        "violet" => Color::from_rgb8(0xee, 0x82, 0xee),
        "magenta" | "fuchsia" => Color::from_rgb8(0xff, 0x00, 0xff),
        "pink" => Color::from_rgb8(0xff, 0xc0, 0xcb),
        "brown" => Color::from_rgb8(0xa5, 0x2a, 0x2a),
        "tan" => Color::from_rgb8(0xd2, 0xb4, 0x8c),
        "beige" => Color::from_rgb8(0xf5, 0xf5, 0xdc),
        _ => return None,
    };
    Some(c)
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let trimmed = spec.trim();

        if let Some(digits) = trimmed.strip_prefix('#') {
            return parse_hex(spec, digits);
        }

        // a bare decimal is a gray level
        if trimmed.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            return match trimmed.parse::<f64>() {
                Ok(level) if (0.0..=1.0).contains(&level) => Ok(Color::gray(level)),
                _ => Err(invalid_color(spec)),
            };
        }

        // single letters are case sensitive, names are not
        if trimmed.len() == 1 {
            return named_color(trimmed).ok_or_else(|| invalid_color(spec));
        }
        named_color(&trimmed.to_ascii_lowercase()).ok_or_else(|| invalid_color(spec))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(spec: String) -> Result<Self, Self::Error> {
        spec.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}
