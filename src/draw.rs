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

//! The draw-command sequence and its piet replay.
//!
//! Widgets describe a frame as an ordered list of [`DrawOp`]s; later ops
//! occlude earlier ones. [`render`] replays a list onto any
//! [`RenderContext`]. Keeping the two apart makes the command sequence a
//! plain value that tests can inspect without a rendering backend.

use crate::kurbo::{Arc, BezPath, CircleSegment, Ellipse, Point, Rect, Vec2};
use piet::{
    Color, Error, FontFamily, ImageFormat, InterpolationMode, RenderContext, Text, TextLayout,
    TextLayoutBuilder,
};

/// A 1×N strip of ARGB pixels tiled in both axes over the rim it decorates.
///
/// This is a pass-through of host-supplied pattern data; the widgets never
/// compute one themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RimPattern {
    pub pixels: Vec<u32>,
}

/// One drawing primitive.
///
/// Angles are in degrees, measured from the 3 o'clock position with
/// positive sweeps running clockwise, so −90 is the top of the circle.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// A filled oval inscribed in `bounds`.
    FillOval { bounds: Rect, color: Color },
    /// A stroked oval inscribed in `bounds`, optionally painted with a
    /// tiled [`RimPattern`] instead of the flat color.
    StrokeOval {
        bounds: Rect,
        color: Color,
        width: f64,
        pattern: Option<RimPattern>,
    },
    /// An open arc along the oval inscribed in `bounds`.
    StrokeArc {
        bounds: Rect,
        start: f64,
        sweep: f64,
        color: Color,
        width: f64,
    },
    /// A closed pie wedge, filled and stroked.
    FillPie {
        bounds: Rect,
        start: f64,
        sweep: f64,
        color: Color,
        width: f64,
    },
    /// A block of text lines stacked vertically, centered on `center`.
    Text {
        lines: Vec<String>,
        center: Point,
        color: Color,
        size: f64,
    },
}

/// Replays `ops` in order onto a render context.
pub fn render<RC: RenderContext>(ops: &[DrawOp], rc: &mut RC) -> Result<(), Error> {
    for op in ops {
        match op {
            DrawOp::FillOval { bounds, color } => rc.fill(oval(*bounds), color),
            DrawOp::StrokeOval {
                bounds,
                color,
                width,
                pattern,
            } => match pattern {
                Some(p) => tile_rim(rc, *bounds, *width, p)?,
                None => rc.stroke(oval(*bounds), color, *width),
            },
            DrawOp::StrokeArc {
                bounds,
                start,
                sweep,
                color,
                width,
            } => rc.stroke(arc(*bounds, *start, *sweep), color, *width),
            DrawOp::FillPie {
                bounds,
                start,
                sweep,
                color,
                width,
            } => {
                rc.fill(pie(*bounds, *start, *sweep), color);
                rc.stroke(pie(*bounds, *start, *sweep), color, *width);
            }
            DrawOp::Text {
                lines,
                center,
                color,
                size,
            } => draw_text_block(rc, lines, *center, color, *size)?,
        }
    }
    Ok(())
}

fn oval(bounds: Rect) -> Ellipse {
    Ellipse::new(
        bounds.center(),
        Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
        0.0,
    )
}

fn arc(bounds: Rect, start: f64, sweep: f64) -> Arc {
    Arc {
        center: bounds.center(),
        radii: Vec2::new(bounds.width() / 2.0, bounds.height() / 2.0),
        start_angle: start.to_radians(),
        sweep_angle: sweep.to_radians(),
        x_rotation: 0.0,
    }
}

fn pie(bounds: Rect, start: f64, sweep: f64) -> CircleSegment {
    CircleSegment::new(
        bounds.center(),
        bounds.width().min(bounds.height()) / 2.0,
        0.0,
        start.to_radians(),
        sweep.to_radians(),
    )
}

/// Lays out each line, then stacks the lines into a block whose metric
/// height is centered on `center`. Line metrics give the per-line height
/// (ascent + descent + leading); horizontal centering uses the measured
/// line width.
fn draw_text_block<RC: RenderContext>(
    rc: &mut RC,
    lines: &[String],
    center: Point,
    color: &Color,
    size: f64,
) -> Result<(), Error> {
    let mut layouts = Vec::with_capacity(lines.len());
    for line in lines {
        let layout = rc
            .text()
            .new_text_layout(line.clone())
            .font(FontFamily::SANS_SERIF, size)
            .text_color(color.clone())
            .build()?;
        layouts.push(layout);
    }
    let total: f64 = layouts.iter().map(|l| line_height(l, size)).sum();
    let mut top = center.y - total / 2.0;
    for layout in &layouts {
        let origin = Point::new(center.x - layout.size().width / 2.0, top);
        rc.draw_text(layout, origin);
        top += line_height(layout, size);
    }
    Ok(())
}

fn line_height<T: TextLayout>(layout: &T, fallback: f64) -> f64 {
    layout
        .line_metric(0)
        .map(|m| m.height)
        .unwrap_or(fallback)
}

/// Strokes a rim with a tiled pixel strip: clip to the rim annulus, then
/// tile the strip image across it. Column `x` of the strip colors the whole
/// column of the clip, which is what tiling a 1-pixel-tall strip in both
/// axes amounts to.
fn tile_rim<RC: RenderContext>(
    rc: &mut RC,
    bounds: Rect,
    width: f64,
    pattern: &RimPattern,
) -> Result<(), Error> {
    if pattern.pixels.is_empty() {
        return Ok(());
    }
    let outer = bounds.inflate(width / 2.0, width / 2.0);
    let inner = bounds.inflate(-width / 2.0, -width / 2.0);
    rc.save()?;
    rc.clip(annulus(outer, inner));

    let mut buf = Vec::with_capacity(pattern.pixels.len() * 4);
    for px in &pattern.pixels {
        buf.push((px >> 16) as u8);
        buf.push((px >> 8) as u8);
        buf.push(*px as u8);
        buf.push((px >> 24) as u8);
    }
    let tile = rc.make_image(pattern.pixels.len(), 1, &buf, ImageFormat::RgbaSeparate)?;

    let step = pattern.pixels.len() as f64;
    let mut x = outer.x0;
    while x < outer.x1 {
        rc.draw_image(
            &tile,
            Rect::new(x, outer.y0, x + step, outer.y1),
            InterpolationMode::NearestNeighbor,
        );
        x += step;
    }
    rc.restore()
}

/// The region between two concentric ovals, as a single path: the outer
/// oval wound one way and the inner oval wound the other, so both the
/// non-zero and even-odd fill rules leave the hole open.
fn annulus(outer: Rect, inner: Rect) -> BezPath {
    let mut path = oval_path(outer, false);
    for el in oval_path(inner, true).elements() {
        path.push(*el);
    }
    path
}

/// An oval as four cubic segments. `reverse` flips the winding.
fn oval_path(bounds: Rect, reverse: bool) -> BezPath {
    // Circle-from-cubics constant.
    const K: f64 = 0.552_284_749_830_793_4;
    let Point { x: cx, y: cy } = bounds.center();
    let (rx, ry) = (bounds.width() / 2.0, bounds.height() / 2.0);
    let (kx, ky) = (K * rx, K * ry);

    let mut path = BezPath::new();
    path.move_to((cx + rx, cy));
    if reverse {
        path.curve_to((cx + rx, cy - ky), (cx + kx, cy - ry), (cx, cy - ry));
        path.curve_to((cx - kx, cy - ry), (cx - rx, cy - ky), (cx - rx, cy));
        path.curve_to((cx - rx, cy + ky), (cx - kx, cy + ry), (cx, cy + ry));
        path.curve_to((cx + kx, cy + ry), (cx + rx, cy + ky), (cx + rx, cy));
    } else {
        path.curve_to((cx + rx, cy + ky), (cx + kx, cy + ry), (cx, cy + ry));
        path.curve_to((cx - kx, cy + ry), (cx - rx, cy + ky), (cx - rx, cy));
        path.curve_to((cx - rx, cy - ky), (cx - kx, cy - ry), (cx, cy - ry));
        path.curve_to((cx + kx, cy - ry), (cx + rx, cy - ky), (cx + rx, cy));
    }
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kurbo::Shape;
    use float_cmp::approx_eq;

    #[test]
    fn arc_angles_convert_to_radians() {
        let a = arc(Rect::new(0.0, 0.0, 100.0, 100.0), -90.0, 180.0);
        assert!(approx_eq!(
            f64,
            a.start_angle,
            -std::f64::consts::FRAC_PI_2,
            epsilon = 1e-12
        ));
        assert!(approx_eq!(
            f64,
            a.sweep_angle,
            std::f64::consts::PI,
            epsilon = 1e-12
        ));
        assert_eq!(a.center, Point::new(50.0, 50.0));
    }

    #[test]
    fn annulus_covers_rim_but_not_hole() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(20.0, 20.0, 80.0, 80.0);
        let ring = annulus(outer, inner);
        // Between the two ovals.
        assert_ne!(ring.winding(Point::new(5.0, 50.0)), 0);
        // In the hole and outside entirely.
        assert_eq!(ring.winding(Point::new(50.0, 50.0)), 0);
        assert_eq!(ring.winding(Point::new(150.0, 50.0)), 0);
    }

    #[test]
    fn oval_windings_cancel() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let fwd = oval_path(r, false).winding(Point::new(5.0, 5.0));
        let rev = oval_path(r, true).winding(Point::new(5.0, 5.0));
        assert_eq!(fwd + rev, 0);
        assert_ne!(fwd, 0);
    }

    #[test]
    fn render_smoke_null_backend() {
        let ops = vec![
            DrawOp::FillOval {
                bounds: Rect::new(10.0, 10.0, 90.0, 90.0),
                color: Color::rgb8(10, 20, 30),
            },
            DrawOp::StrokeOval {
                bounds: Rect::new(5.0, 5.0, 95.0, 95.0),
                color: Color::rgb8(200, 100, 0),
                width: 4.0,
                pattern: Some(RimPattern {
                    pixels: vec![0xFF00_0000, 0xFFFF_FFFF],
                }),
            },
            DrawOp::StrokeArc {
                bounds: Rect::new(5.0, 5.0, 95.0, 95.0),
                start: -90.0,
                sweep: 120.0,
                color: Color::rgb8(0, 0, 0),
                width: 4.0,
            },
            DrawOp::FillPie {
                bounds: Rect::new(5.0, 5.0, 95.0, 95.0),
                start: -90.0,
                sweep: 45.0,
                color: Color::rgb8(0, 0, 0),
                width: 4.0,
            },
            DrawOp::Text {
                lines: vec!["50%".to_string()],
                center: Point::new(50.0, 50.0),
                color: Color::rgb8(0, 0, 0),
                size: 15.0,
            },
        ];
        let mut rc = piet::NullRenderContext::new();
        render(&ops, &mut rc).unwrap();
    }
}
