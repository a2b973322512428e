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

//! A segmented round progress widget.

use tracing::trace;

use crate::attrs::Attrs;
use crate::draw::DrawOp;
use crate::error::GaugeError;
use crate::kurbo::{Insets, Point, Rect, Size};
use crate::paint::{from_argb, StrokePaint, TextPaint};
use crate::theme;
use crate::widget::Gauge;
use piet::Color;

/// One slice of a segmented display: a sweep in degrees and its color.
#[derive(Clone, Debug)]
pub struct Segment {
    pub color: Color,
    pub sweep: f64,
}

/// What the widget currently displays. The two modes are mutually
/// exclusive; setting one discards the other.
#[derive(Clone, Debug)]
enum ProgressKind {
    /// A single arc, in degrees of sweep. Deliberately unclamped.
    Single(f64),
    /// Consecutive arcs starting at the top of the circle.
    Segments(Vec<Segment>),
}

/// A round progress bar that can show either one arc with a percentage
/// readout, or a sequence of colored segments laid end to end clockwise
/// from the top.
pub struct RoundProgress {
    round: StrokePaint,
    progress: StrokePaint,
    text: TextPaint,
    text_visible: bool,

    kind: ProgressKind,

    bounds: Rect,
    center: Point,
    needs_paint: bool,
}

impl RoundProgress {
    pub fn new() -> RoundProgress {
        RoundProgress {
            round: StrokePaint::new(from_argb(theme::RING_COLOR), theme::RING_WIDTH),
            progress: StrokePaint::new(from_argb(theme::PROGRESS_COLOR), theme::RING_WIDTH),
            text: TextPaint::new(from_argb(theme::TEXT_COLOR), theme::TEXT_SIZE),
            text_visible: true,
            kind: ProgressKind::Single(0.0),
            bounds: Rect::ZERO,
            center: Point::ZERO,
            needs_paint: false,
        }
    }

    /// Builds a round progress bar from a style-attribute mapping.
    pub fn from_attrs(attrs: &Attrs) -> RoundProgress {
        let mut round = RoundProgress::new();
        round.round.color = from_argb(attrs.color("round_color", theme::RING_COLOR));
        round.round.width = attrs.float("round_width", theme::RING_WIDTH);
        round.progress.color = from_argb(attrs.color("progress_color", theme::PROGRESS_COLOR));
        round.progress.width = round.round.width;
        round.kind = ProgressKind::Single(attrs.float("progress_ratio", 0.0));
        round.text.color = from_argb(attrs.color("text_color", theme::TEXT_COLOR));
        round.text.size = attrs.dimension("text_size", theme::TEXT_SIZE);
        round.text_visible = attrs.boolean("text_visible", true);
        round
    }

    /// Shows a single arc of `degrees` sweep from the top of the circle.
    ///
    /// The value is not clamped: a sweep past 360 wraps over itself and the
    /// readout reports more than 100%. Discards any segments.
    pub fn set_progress_ratio(&mut self, degrees: f64) {
        self.kind = ProgressKind::Single(degrees);
        self.needs_paint = true;
    }

    /// The single-arc sweep, or `None` in segmented mode.
    pub fn progress_ratio(&self) -> Option<f64> {
        match &self.kind {
            ProgressKind::Single(deg) => Some(*deg),
            ProgressKind::Segments(_) => None,
        }
    }

    /// Shows `sweeps` (in degrees) as consecutive arcs, each with the
    /// matching color. Fails when the slices differ in length, leaving the
    /// widget untouched. Discards any single-arc progress.
    pub fn set_progress(&mut self, sweeps: &[f64], colors: &[Color]) -> Result<(), GaugeError> {
        if sweeps.len() != colors.len() {
            return Err(GaugeError::SegmentMismatch {
                sweeps: sweeps.len(),
                colors: colors.len(),
            });
        }
        self.kind = ProgressKind::Segments(
            sweeps
                .iter()
                .zip(colors)
                .map(|(sweep, color)| Segment {
                    color: color.clone(),
                    sweep: *sweep,
                })
                .collect(),
        );
        self.needs_paint = true;
        Ok(())
    }

    /// The current segments, or `None` in single-arc mode.
    pub fn segments(&self) -> Option<&[Segment]> {
        match &self.kind {
            ProgressKind::Single(_) => None,
            ProgressKind::Segments(segments) => Some(segments),
        }
    }

    pub fn round_color(&self) -> Color {
        self.round.color.clone()
    }

    pub fn set_round_color(&mut self, color: Color) {
        self.round.color = color;
    }

    pub fn round_width(&self) -> f64 {
        self.round.width
    }

    /// Sets the base-circle stroke width. The progress stroke width and the
    /// cached circle only pick it up at the next layout.
    pub fn set_round_width(&mut self, width: f64) {
        self.round.width = width;
    }

    pub fn progress_color(&self) -> Color {
        self.progress.color.clone()
    }

    /// Sets the color used for the single-arc mode.
    pub fn set_progress_color(&mut self, color: Color) {
        self.progress.color = color;
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

impl Default for RoundProgress {
    fn default() -> Self {
        RoundProgress::new()
    }
}

impl Gauge for RoundProgress {
    fn layout(&mut self, size: Size, _padding: Insets) {
        let side = size.width.min(size.height);
        let centre = side / 2.0;
        let radius = centre - self.round.width / 2.0;
        self.bounds = Rect::new(
            centre - radius,
            centre - radius,
            centre + radius,
            centre + radius,
        );
        self.center = Point::new(size.width / 2.0, size.height / 2.0);
        self.progress.width = self.round.width;
        trace!("round geometry rebuilt: bounds {:?}", self.bounds);
        self.needs_paint = true;
    }

    fn draw(&self) -> Vec<DrawOp> {
        let mut ops = vec![DrawOp::StrokeOval {
            bounds: self.bounds,
            color: self.round.color.clone(),
            width: self.round.width,
            pattern: None,
        }];

        match &self.kind {
            ProgressKind::Single(degrees) => {
                ops.push(DrawOp::StrokeArc {
                    bounds: self.bounds,
                    start: -90.0,
                    sweep: *degrees,
                    color: self.progress.color.clone(),
                    width: self.progress.width,
                });
                if self.text_visible {
                    let percent = (degrees / 360.0 * 100.0).round() as i32;
                    ops.push(DrawOp::Text {
                        lines: vec![format!("{}%", percent)],
                        center: self.center,
                        color: self.text.color.clone(),
                        size: self.text.size,
                    });
                }
            }
            ProgressKind::Segments(segments) => {
                let mut start = -90.0;
                for segment in segments {
                    ops.push(DrawOp::StrokeArc {
                        bounds: self.bounds,
                        start,
                        sweep: segment.sweep,
                        color: segment.color.clone(),
                        width: self.progress.width,
                    });
                    start += segment.sweep;
                }
            }
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

    fn arc_starts(ops: &[DrawOp]) -> Vec<f64> {
        ops.iter()
            .filter_map(|op| match op {
                DrawOp::StrokeArc { start, .. } => Some(*start),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn segments_lie_end_to_end_from_the_top() {
        let mut round = RoundProgress::new();
        round.layout(Size::new(100.0, 100.0), Insets::ZERO);
        round
            .set_progress(
                &[60.0, 120.0, 180.0],
                &[
                    Color::rgb8(0xA0, 0xDD, 0x2A),
                    Color::rgb8(0xFF, 0xAF, 0x8B),
                    Color::rgb8(0x36, 0xD9, 0xF1),
                ],
            )
            .unwrap();
        assert_eq!(arc_starts(&round.draw()), vec![-90.0, -30.0, 90.0]);
    }

    #[test]
    fn segmented_mode_suppresses_text() {
        let mut round = RoundProgress::new();
        round.layout(Size::new(100.0, 100.0), Insets::ZERO);
        round.set_text_visible(true);
        round
            .set_progress(&[90.0], &[Color::rgb8(1, 2, 3)])
            .unwrap();
        assert!(!round
            .draw()
            .iter()
            .any(|op| matches!(op, DrawOp::Text { .. })));
    }

    #[test]
    fn mismatched_slices_are_rejected_without_effect() {
        let mut round = RoundProgress::new();
        round.set_progress_ratio(90.0);
        round.take_paint_request();

        let err = round
            .set_progress(&[60.0, 120.0], &[Color::rgb8(1, 2, 3)])
            .unwrap_err();
        assert_eq!(err, GaugeError::SegmentMismatch { sweeps: 2, colors: 1 });
        assert_eq!(round.progress_ratio(), Some(90.0));
        assert!(round.segments().is_none());
        assert!(!round.take_paint_request());
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let mut round = RoundProgress::new();
        round
            .set_progress(&[120.0], &[Color::rgb8(1, 2, 3)])
            .unwrap();
        assert!(round.progress_ratio().is_none());
        assert_eq!(round.segments().unwrap().len(), 1);

        round.set_progress_ratio(45.0);
        assert!(round.segments().is_none());
        assert_eq!(round.progress_ratio(), Some(45.0));
    }

    #[test]
    fn single_arc_sweep_is_unclamped() {
        let mut round = RoundProgress::new();
        round.layout(Size::new(100.0, 100.0), Insets::ZERO);
        round.set_progress_ratio(450.0);
        let ops = round.draw();
        match &ops[1] {
            DrawOp::StrokeArc { sweep, .. } => assert_eq!(*sweep, 450.0),
            other => panic!("expected arc, got {:?}", other),
        }
        match ops.last().unwrap() {
            DrawOp::Text { lines, .. } => assert_eq!(lines, &["125%".to_string()]),
            other => panic!("expected text, got {:?}", other),
        }
    }

    #[test]
    fn geometry_hugs_the_short_side() {
        let mut round = RoundProgress::new();
        round.layout(Size::new(120.0, 100.0), Insets::ZERO);
        assert_eq!(round.bounds, Rect::new(2.5, 2.5, 97.5, 97.5));
        assert_eq!(round.center, Point::new(60.0, 50.0));
    }

    #[test]
    fn progress_stroke_width_syncs_at_layout() {
        let mut round = RoundProgress::new();
        round.layout(Size::new(100.0, 100.0), Insets::ZERO);
        round.set_round_width(8.0);
        round.set_progress_ratio(90.0);

        let ops = round.draw();
        match (&ops[0], &ops[1]) {
            (
                DrawOp::StrokeOval { width: base, .. },
                DrawOp::StrokeArc { width: arc, .. },
            ) => {
                assert_eq!(*base, 8.0);
                assert_eq!(*arc, 5.0);
            }
            other => panic!("unexpected ops {:?}", other),
        }

        round.layout(Size::new(100.0, 100.0), Insets::ZERO);
        match &round.draw()[1] {
            DrawOp::StrokeArc { width, .. } => assert_eq!(*width, 8.0),
            other => panic!("expected arc, got {:?}", other),
        }
    }
}
