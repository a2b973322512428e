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

//! A ring-style progress widget.

use tracing::trace;

use crate::attrs::Attrs;
use crate::draw::DrawOp;
use crate::error::GaugeError;
use crate::kurbo::{Insets, Point, Rect, Size};
use crate::paint::{from_argb, FillPaint, PaintStyle, StrokePaint, TextPaint};
use crate::theme;
use crate::widget::Gauge;
use piet::Color;

/// How the progress arc is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressStyle {
    /// An open stroke arc along the ring.
    Outline,
    /// A closed pie wedge from the center.
    Filled,
}

/// A single ring with a progress arc and a centered percentage readout.
///
/// Progress runs from `0` to a configurable maximum (100 by default).
/// In [`ProgressStyle::Filled`] mode the center text is never drawn,
/// whatever the visibility flag says; the wedge would sit on top of it.
pub struct RingProgress {
    ring: StrokePaint,
    ring_style: PaintStyle,
    progress: FillPaint,
    style: ProgressStyle,
    text: TextPaint,
    text_visible: bool,

    current: i32,
    max: i32,

    bounds: Rect,
    center: Point,
    needs_paint: bool,
}

impl RingProgress {
    pub fn new() -> RingProgress {
        RingProgress {
            ring: StrokePaint::new(from_argb(theme::RING_COLOR), theme::RING_WIDTH),
            ring_style: PaintStyle::Stroke,
            progress: FillPaint::new(from_argb(theme::PROGRESS_COLOR)),
            style: ProgressStyle::Outline,
            text: TextPaint::new(from_argb(theme::TEXT_COLOR), theme::TEXT_SIZE),
            text_visible: true,
            current: 0,
            max: theme::MAX_PROGRESS,
            bounds: Rect::ZERO,
            center: Point::ZERO,
            needs_paint: false,
        }
    }

    /// Builds a ring from a style-attribute mapping.
    pub fn from_attrs(attrs: &Attrs) -> RingProgress {
        let mut ring = RingProgress::new();
        ring.ring.color = from_argb(attrs.color("ring_color", theme::RING_COLOR));
        ring.ring.width = attrs.dimension("ring_width", theme::RING_WIDTH);
        ring.ring_style = if attrs.boolean("ring_is_stroke", true) {
            PaintStyle::Stroke
        } else {
            PaintStyle::Fill
        };
        ring.progress.color = from_argb(attrs.color("progress_color", theme::PROGRESS_COLOR));
        ring.style = match attrs.integer("progress_style", 0) {
            1 => ProgressStyle::Filled,
            _ => ProgressStyle::Outline,
        };
        ring.text.color = from_argb(attrs.color("text_color", theme::TEXT_COLOR));
        ring.text.size = attrs.dimension("text_size", theme::TEXT_SIZE);
        ring.text_visible = attrs.boolean("text_visible", true);
        ring.max = attrs.integer("max_progress", theme::MAX_PROGRESS);
        ring
    }

    /// Sets the current progress.
    ///
    /// Fails on negative values, leaving the widget untouched; values above
    /// the maximum clamp to it.
    pub fn set_current_progress(&mut self, value: i32) -> Result<(), GaugeError> {
        if value < 0 {
            return Err(GaugeError::NegativeProgress(value));
        }
        self.current = value.min(self.max);
        self.needs_paint = true;
        Ok(())
    }

    pub fn current_progress(&self) -> i32 {
        self.current
    }

    /// Sets the maximum. Fails on negative values; an existing current
    /// progress above the new maximum is not clamped retroactively.
    pub fn set_max_progress(&mut self, value: i32) -> Result<(), GaugeError> {
        if value < 0 {
            return Err(GaugeError::NegativeMaxProgress(value));
        }
        self.max = value;
        Ok(())
    }

    pub fn max_progress(&self) -> i32 {
        self.max
    }

    pub fn ring_color(&self) -> Color {
        self.ring.color.clone()
    }

    pub fn set_ring_color(&mut self, color: Color) {
        self.ring.color = color;
    }

    pub fn ring_width(&self) -> f64 {
        self.ring.width
    }

    /// Sets the ring stroke width. The paint changes immediately; the
    /// cached circle keeps the old radius until the next layout.
    pub fn set_ring_width(&mut self, width: f64) {
        self.ring.width = width;
    }

    pub fn ring_style(&self) -> PaintStyle {
        self.ring_style
    }

    pub fn set_ring_style(&mut self, style: PaintStyle) {
        self.ring_style = style;
    }

    pub fn progress_color(&self) -> Color {
        self.progress.color.clone()
    }

    pub fn set_progress_color(&mut self, color: Color) {
        self.progress.color = color;
    }

    pub fn progress_style(&self) -> ProgressStyle {
        self.style
    }

    pub fn set_progress_style(&mut self, style: ProgressStyle) {
        self.style = style;
    }

    pub fn text_color(&self) -> Color {
        self.text.color.clone()
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text.color = color;
    }

    pub fn text_size(&self) -> f64 {
        self.text.size
    }

    pub fn set_text_size(&mut self, size: f64) {
        self.text.size = size;
    }

    pub fn text_visible(&self) -> bool {
        self.text_visible
    }

    pub fn set_text_visible(&mut self, visible: bool) {
        self.text_visible = visible;
    }
}

impl Default for RingProgress {
    fn default() -> Self {
        RingProgress::new()
    }
}

impl Gauge for RingProgress {
    fn layout(&mut self, size: Size, _padding: Insets) {
        let radius = size.width.min(size.height) / 2.0 - self.ring.width / 2.0;
        self.center = Point::new(size.width / 2.0, size.height / 2.0);
        self.bounds = Rect::new(
            self.center.x - radius,
            self.center.y - radius,
            self.center.x + radius,
            self.center.y + radius,
        );
        trace!("ring geometry rebuilt: bounds {:?}", self.bounds);
        self.needs_paint = true;
    }

    fn draw(&self) -> Vec<DrawOp> {
        let mut ops = vec![match self.ring_style {
            PaintStyle::Stroke => DrawOp::StrokeOval {
                bounds: self.bounds,
                color: self.ring.color.clone(),
                width: self.ring.width,
                pattern: None,
            },
            PaintStyle::Fill => DrawOp::FillOval {
                bounds: self.bounds,
                color: self.ring.color.clone(),
            },
        }];

        let sweep = if self.max > 0 {
            360.0 * f64::from(self.current) / f64::from(self.max)
        } else {
            0.0
        };
        match self.style {
            ProgressStyle::Outline => ops.push(DrawOp::StrokeArc {
                bounds: self.bounds,
                start: -90.0,
                sweep,
                color: self.progress.color.clone(),
                width: self.ring.width,
            }),
            ProgressStyle::Filled => {
                if self.current != 0 {
                    ops.push(DrawOp::FillPie {
                        bounds: self.bounds,
                        start: -90.0,
                        sweep,
                        color: self.progress.color.clone(),
                        width: self.ring.width,
                    });
                }
            }
        }

        if self.text_visible && self.style == ProgressStyle::Outline {
            let percent = if self.max > 0 {
                (f64::from(self.current) / f64::from(self.max) * 100.0).round() as i32
            } else {
                0
            };
            ops.push(DrawOp::Text {
                lines: vec![format!("{}%", percent)],
                center: self.center,
                color: self.text.color.clone(),
                size: self.text.size,
            });
        }
        ops
    }

    fn take_paint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_paint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_text(ops: &[DrawOp]) -> bool {
        ops.iter().any(|op| matches!(op, DrawOp::Text { .. }))
    }

    #[test]
    fn negative_progress_is_rejected_without_effect() {
        let mut ring = RingProgress::new();
        ring.set_current_progress(40).unwrap();
        ring.take_paint_request();

        let err = ring.set_current_progress(-1).unwrap_err();
        assert_eq!(err, GaugeError::NegativeProgress(-1));
        assert_eq!(ring.current_progress(), 40);
        assert!(!ring.take_paint_request());
    }

    #[test]
    fn progress_above_max_clamps() {
        let mut ring = RingProgress::new();
        ring.set_current_progress(250).unwrap();
        assert_eq!(ring.current_progress(), 100);
    }

    #[test]
    fn max_is_validated_but_never_clamps_current() {
        let mut ring = RingProgress::new();
        ring.set_current_progress(80).unwrap();
        assert_eq!(
            ring.set_max_progress(-5),
            Err(GaugeError::NegativeMaxProgress(-5))
        );
        ring.set_max_progress(50).unwrap();
        assert_eq!(ring.current_progress(), 80);
        assert_eq!(ring.max_progress(), 50);
    }

    #[test]
    fn filled_mode_never_draws_text() {
        let mut ring = RingProgress::new();
        ring.layout(Size::new(100.0, 100.0), Insets::ZERO);
        ring.set_current_progress(63).unwrap();

        ring.set_progress_style(ProgressStyle::Filled);
        ring.set_text_visible(true);
        let ops = ring.draw();
        assert!(!has_text(&ops));
        assert!(ops.iter().any(|op| matches!(op, DrawOp::FillPie { .. })));

        ring.set_progress_style(ProgressStyle::Outline);
        assert!(has_text(&ring.draw()));

        ring.set_text_visible(false);
        assert!(!has_text(&ring.draw()));
    }

    #[test]
    fn filled_mode_skips_wedge_at_zero() {
        let mut ring = RingProgress::new();
        ring.layout(Size::new(100.0, 100.0), Insets::ZERO);
        ring.set_progress_style(ProgressStyle::Filled);
        let ops = ring.draw();
        assert_eq!(ops.len(), 1);
        assert!(matches!(ops[0], DrawOp::StrokeOval { .. }));
    }

    #[test]
    fn outline_arc_sweep_tracks_progress() {
        let mut ring = RingProgress::new();
        ring.layout(Size::new(100.0, 100.0), Insets::ZERO);
        ring.set_current_progress(25).unwrap();
        match &ring.draw()[1] {
            DrawOp::StrokeArc { start, sweep, .. } => {
                assert_eq!(*start, -90.0);
                assert_eq!(*sweep, 90.0);
            }
            other => panic!("expected arc, got {:?}", other),
        }
        match ring.draw().last().unwrap() {
            DrawOp::Text { lines, .. } => assert_eq!(lines, &["25%".to_string()]),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn geometry_insets_by_half_ring_width() {
        let mut ring = RingProgress::new();
        ring.layout(Size::new(200.0, 100.0), Insets::ZERO);
        assert_eq!(ring.bounds, Rect::new(52.5, 2.5, 147.5, 97.5));
        assert_eq!(ring.center, Point::new(100.0, 50.0));
    }

    #[test]
    fn ring_width_change_defers_geometry() {
        let mut ring = RingProgress::new();
        ring.layout(Size::new(100.0, 100.0), Insets::ZERO);
        let before = ring.bounds;
        ring.set_ring_width(11.0);
        assert_eq!(ring.bounds, before);
        match &ring.draw()[0] {
            DrawOp::StrokeOval { width, .. } => assert_eq!(*width, 11.0),
            other => panic!("expected ring, got {:?}", other),
        }
        ring.layout(Size::new(100.0, 100.0), Insets::ZERO);
        assert_ne!(ring.bounds, before);
    }
}
