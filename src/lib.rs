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

//! Circular progress widgets.
//!
//! This crate provides three round progress indicators in the style of a
//! data-oriented widget tree: [`ProgressWheel`], a multi-ring wheel with
//! centered multi-line text; [`RingProgress`], a single ring with an outline
//! or filled progress arc and a percentage readout; and [`RoundProgress`],
//! a ring that shows either one arc or a set of colored arc segments laid
//! consecutively around the circle.
//!
//! The widgets do no windowing of their own. A host hands each widget its
//! viewport size via [`Gauge::layout`] and asks for a frame via
//! [`Gauge::draw`], which returns an ordered [`DrawOp`] sequence; [`render`]
//! replays that sequence onto any [`piet::RenderContext`]. Mutating a
//! widget's progress raises a paint request the host can drain with
//! [`Gauge::take_paint_request`].

// Re-export of the drawing stack this crate is built on.
pub use piet;
pub use piet::kurbo;

mod attrs;
mod draw;
mod error;
mod paint;
pub mod theme;
pub mod widget;

pub use kurbo::{Insets, Point, Rect, Size, Vec2};
pub use piet::{Color, RenderContext};

pub use attrs::{Attrs, Value};
pub use draw::{render, DrawOp, RimPattern};
pub use error::GaugeError;
pub use paint::{from_argb, FillPaint, PaintStyle, StrokePaint, TextPaint};
pub use widget::{Gauge, ProgressStyle, ProgressWheel, RingProgress, RoundProgress, Segment};
