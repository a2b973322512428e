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

//! A wheel-style progress widget.

use tracing::trace;

use crate::attrs::Attrs;
use crate::draw::{DrawOp, RimPattern};
use crate::kurbo::{Insets, Point, Rect, Size};
use crate::paint::{from_argb, FillPaint, StrokePaint, TextPaint};
use crate::theme;
use crate::widget::Gauge;
use piet::Color;

/// Cached bounding rectangles, rebuilt on every viewport-size change.
///
/// All four rectangles are concentric. `outer_bounds` carries the rim and
/// the progress arc; `inner_bounds` the inner fill disc; the two contours
/// hug the rim on either side for the decorative edges.
#[derive(Clone, Debug, Default, PartialEq)]
struct WheelGeometry {
    inner_bounds: Rect,
    outer_bounds: Rect,
    inner_contour: Rect,
    outer_contour: Rect,
    center: Point,
}

/// A progress wheel: concentric rings around centered multi-line text.
///
/// Progress is expressed directly in degrees of arc, `0..=360`. Setting it
/// also derives the percentage text shown in the middle; free-form text can
/// be set instead with [`set_text`](ProgressWheel::set_text).
pub struct ProgressWheel {
    bar: StrokePaint,
    rim: StrokePaint,
    rim_pattern: Option<RimPattern>,
    inner: FillPaint,
    outer_edge: StrokePaint,
    inner_edge: StrokePaint,
    text: TextPaint,

    progress: f64,
    lines: Vec<String>,

    geometry: WheelGeometry,
    needs_paint: bool,
}

impl ProgressWheel {
    /// A wheel with the theme defaults and no text.
    pub fn new() -> ProgressWheel {
        ProgressWheel {
            bar: StrokePaint::new(from_argb(theme::WHEEL_BAR_COLOR), theme::WHEEL_BAR_WIDTH),
            rim: StrokePaint::new(from_argb(theme::WHEEL_RIM_COLOR), theme::WHEEL_RIM_WIDTH),
            rim_pattern: None,
            inner: FillPaint::new(from_argb(theme::WHEEL_INNER_COLOR)),
            outer_edge: StrokePaint::new(from_argb(theme::WHEEL_EDGE_COLOR), theme::WHEEL_EDGE_SIZE),
            inner_edge: StrokePaint::new(from_argb(theme::WHEEL_EDGE_COLOR), theme::WHEEL_EDGE_SIZE),
            text: TextPaint::new(from_argb(theme::WHEEL_TEXT_COLOR), theme::TEXT_SIZE),
            progress: 0.0,
            lines: Vec::new(),
            geometry: WheelGeometry::default(),
            needs_paint: false,
        }
    }

    /// Builds a wheel from a style-attribute mapping.
    ///
    /// A `text` attribute takes precedence over `default_progress`.
    pub fn from_attrs(attrs: &Attrs) -> ProgressWheel {
        let mut wheel = ProgressWheel::new();
        wheel.text.color = from_argb(attrs.color("text_color", theme::WHEEL_TEXT_COLOR));
        wheel.text.size = attrs.dimension("text_size", theme::TEXT_SIZE);

        wheel.bar.width = f64::from(attrs.integer("bar_width", theme::WHEEL_BAR_WIDTH as i32));
        wheel.bar.color = from_argb(attrs.color("bar_color", theme::WHEEL_BAR_COLOR));

        match attrs.string("text") {
            Some(text) => wheel.set_text(text),
            None => {
                wheel.set_progress(attrs.integer("default_progress", theme::WHEEL_DEFAULT_PROGRESS))
            }
        }

        wheel.rim.width = f64::from(attrs.integer("rim_width", theme::WHEEL_RIM_WIDTH as i32));
        wheel.rim.color = from_argb(attrs.color("rim_color", theme::WHEEL_RIM_COLOR));
        wheel.inner.color = from_argb(attrs.color("circle_inner_color", theme::WHEEL_INNER_COLOR));

        wheel.outer_edge.width = attrs.dimension("outer_edge_size", theme::WHEEL_EDGE_SIZE);
        wheel.outer_edge.color = from_argb(attrs.color("outer_edge_color", theme::WHEEL_EDGE_COLOR));
        wheel.inner_edge.width = attrs.dimension("inner_edge_size", theme::WHEEL_EDGE_SIZE);
        wheel.inner_edge.color = from_argb(attrs.color("inner_edge_color", theme::WHEEL_EDGE_COLOR));
        wheel
    }

    /// Sets the progress to an exact number of degrees, clamped to
    /// `0..=360`, and derives the percentage text.
    pub fn set_progress(&mut self, degrees: i32) {
        self.progress = f64::from(degrees).clamp(0.0, 360.0);
        self.update_percent_text();
        self.needs_paint = true;
    }

    /// Adds `amount` degrees of progress, saturating at 360.
    pub fn increment_progress(&mut self, amount: i32) {
        self.progress = (self.progress + f64::from(amount)).clamp(0.0, 360.0);
        self.update_percent_text();
        self.needs_paint = true;
    }

    /// Resets the wheel to zero progress and `"0%"`.
    pub fn reset_count(&mut self) {
        self.progress = 0.0;
        self.set_text("0%");
        self.needs_paint = true;
    }

    /// Sets the center text, splitting on line breaks.
    ///
    /// This deliberately does not request a paint, so text and a following
    /// visual change can be batched before the next frame; call
    /// [`request_paint`](ProgressWheel::request_paint) to show the text on
    /// its own.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.lines = text.split('\n').map(str::to_string).collect();
    }

    /// Requests a redraw without changing any state.
    pub fn request_paint(&mut self) {
        self.needs_paint = true;
    }

    fn update_percent_text(&mut self) {
        let percent = (self.progress / 360.0 * 100.0).round() as i32;
        self.set_text(format!("{}%", percent));
    }

    /// Current progress in whole degrees.
    pub fn progress(&self) -> i32 {
        self.progress as i32
    }

    /// The center text as lines.
    pub fn text_lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text_size(&self) -> f64 {
        self.text.size
    }

    pub fn set_text_size(&mut self, size: f64) {
        self.text.size = size;
    }

    pub fn text_color(&self) -> Color {
        self.text.color.clone()
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text.color = color;
    }

    pub fn bar_color(&self) -> Color {
        self.bar.color.clone()
    }

    pub fn set_bar_color(&mut self, color: Color) {
        self.bar.color = color;
    }

    pub fn bar_width(&self) -> f64 {
        self.bar.width
    }

    /// Sets the progress-bar stroke width.
    ///
    /// The stroke paint changes immediately; the cached bounds keep the old
    /// width until the next [`layout`](Gauge::layout).
    pub fn set_bar_width(&mut self, width: f64) {
        self.bar.width = width;
    }

    pub fn rim_color(&self) -> Color {
        self.rim.color.clone()
    }

    pub fn set_rim_color(&mut self, color: Color) {
        self.rim.color = color;
    }

    pub fn rim_width(&self) -> f64 {
        self.rim.width
    }

    /// Sets the rim stroke width. Same layout deferral as
    /// [`set_bar_width`](ProgressWheel::set_bar_width).
    pub fn set_rim_width(&mut self, width: f64) {
        self.rim.width = width;
    }

    pub fn rim_pattern(&self) -> Option<&RimPattern> {
        self.rim_pattern.as_ref()
    }

    /// Paints the rim with a tiled pixel strip instead of the flat rim
    /// color. Does not request a paint on its own.
    pub fn set_rim_pattern(&mut self, pattern: Option<RimPattern>) {
        self.rim_pattern = pattern;
    }

    pub fn circle_inner_color(&self) -> Color {
        self.inner.color.clone()
    }

    pub fn set_circle_inner_color(&mut self, color: Color) {
        self.inner.color = color;
    }

    pub fn outer_edge_color(&self) -> Color {
        self.outer_edge.color.clone()
    }

    pub fn set_outer_edge_color(&mut self, color: Color) {
        self.outer_edge.color = color;
    }

    pub fn outer_edge_size(&self) -> f64 {
        self.outer_edge.width
    }

    pub fn set_outer_edge_size(&mut self, size: f64) {
        self.outer_edge.width = size;
    }

    pub fn inner_edge_color(&self) -> Color {
        self.inner_edge.color.clone()
    }

    pub fn set_inner_edge_color(&mut self, color: Color) {
        self.inner_edge.color = color;
    }

    pub fn inner_edge_size(&self) -> f64 {
        self.inner_edge.width
    }

    pub fn set_inner_edge_size(&mut self, size: f64) {
        self.inner_edge.width = size;
    }
}

impl Default for ProgressWheel {
    fn default() -> Self {
        ProgressWheel::new()
    }
}

impl Gauge for ProgressWheel {
    fn layout(&mut self, size: Size, padding: Insets) {
        // Work on the largest centered square; fold the centering offsets
        // into the padding so the rectangles come out concentric.
        let min_value = size.width.min(size.height);
        let pad_left = padding.x0 + (size.width - min_value) / 2.0;
        let pad_right = padding.x1 + (size.width - min_value) / 2.0;
        let pad_top = padding.y0 + (size.height - min_value) / 2.0;
        let pad_bottom = padding.y1 + (size.height - min_value) / 2.0;

        let bar = self.bar.width;
        let rim = self.rim.width;

        let inner_bounds = Rect::new(
            pad_left + 1.5 * bar,
            pad_top + 1.5 * bar,
            size.width - pad_right - 1.5 * bar,
            size.height - pad_bottom - 1.5 * bar,
        );
        let outer_bounds = Rect::new(
            pad_left + bar,
            pad_top + bar,
            size.width - pad_right - bar,
            size.height - pad_bottom - bar,
        );
        // The inner contour takes the outer edge width and vice versa; the
        // edges swap sides relative to the rim.
        let inner_contour = Rect::new(
            outer_bounds.x0 + rim / 2.0 + self.outer_edge.width / 2.0,
            outer_bounds.y0 + rim / 2.0 + self.outer_edge.width / 2.0,
            outer_bounds.x1 - rim / 2.0 - self.outer_edge.width / 2.0,
            outer_bounds.y1 - rim / 2.0 - self.outer_edge.width / 2.0,
        );
        let outer_contour = Rect::new(
            outer_bounds.x0 - rim / 2.0 - self.inner_edge.width / 2.0,
            outer_bounds.y0 - rim / 2.0 - self.inner_edge.width / 2.0,
            outer_bounds.x1 + rim / 2.0 + self.inner_edge.width / 2.0,
            outer_bounds.y1 + rim / 2.0 + self.inner_edge.width / 2.0,
        );

        self.geometry = WheelGeometry {
            inner_bounds,
            outer_bounds,
            inner_contour,
            outer_contour,
            center: Point::new(size.width / 2.0, size.height / 2.0),
        };
        trace!("wheel geometry rebuilt: outer bounds {:?}", outer_bounds);
        self.needs_paint = true;
    }

    fn draw(&self) -> Vec<DrawOp> {
        let g = &self.geometry;
        let mut ops = vec![
            DrawOp::FillOval {
                bounds: g.inner_bounds,
                color: self.inner.color.clone(),
            },
            DrawOp::StrokeOval {
                bounds: g.outer_bounds,
                color: self.rim.color.clone(),
                width: self.rim.width,
                pattern: self.rim_pattern.clone(),
            },
            DrawOp::StrokeOval {
                bounds: g.outer_contour,
                color: self.outer_edge.color.clone(),
                width: self.outer_edge.width,
                pattern: None,
            },
            DrawOp::StrokeOval {
                bounds: g.inner_contour,
                color: self.inner_edge.color.clone(),
                width: self.inner_edge.width,
                pattern: None,
            },
            DrawOp::StrokeArc {
                bounds: g.outer_bounds,
                start: -90.0,
                sweep: self.progress,
                color: self.bar.color.clone(),
                width: self.bar.width,
            },
        ];
        if !self.lines.is_empty() {
            // Text centers on the widget center, not the content square.
            ops.push(DrawOp::Text {
                lines: self.lines.clone(),
                center: g.center,
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
