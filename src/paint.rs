// Copyright 2023 The Rondel Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-element drawing resources.
//!
//! Each ring or text element of a widget owns one of these small value
//! structs. Setters mutate them in place; nothing is shared between widget
//! instances.

use piet::Color;

/// Resources for a stroked element: a ring outline or an arc.
#[derive(Clone, Debug)]
pub struct StrokePaint {
    pub color: Color,
    pub width: f64,
}

impl StrokePaint {
    pub fn new(color: Color, width: f64) -> StrokePaint {
        StrokePaint { color, width }
    }
}

/// Resources for a filled element, such as the wheel's inner disc.
#[derive(Clone, Debug)]
pub struct FillPaint {
    pub color: Color,
}

impl FillPaint {
    pub fn new(color: Color) -> FillPaint {
        FillPaint { color }
    }
}

/// Resources for a text run.
#[derive(Clone, Debug)]
pub struct TextPaint {
    pub color: Color,
    pub size: f64,
}

impl TextPaint {
    pub fn new(color: Color, size: f64) -> TextPaint {
        TextPaint { color, size }
    }
}

/// Whether an element is drawn as an outline or a filled shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
}

/// Converts a packed 32-bit ARGB value (the configuration color format)
/// into a [`Color`].
pub fn from_argb(argb: u32) -> Color {
    Color::rgba8(
        (argb >> 16) as u8,
        (argb >> 8) as u8,
        argb as u8,
        (argb >> 24) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_unpacks_in_channel_order() {
        let c = from_argb(0xAA11_2233);
        assert_eq!(c.as_rgba8(), (0x11, 0x22, 0x33, 0xAA));
    }

    #[test]
    fn argb_transparent() {
        assert_eq!(from_argb(0).as_rgba8(), (0, 0, 0, 0));
    }
}
