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

//! The progress widgets.

mod ring;
mod round;
mod wheel;

pub use ring::{ProgressStyle, RingProgress};
pub use round::{RoundProgress, Segment};
pub use wheel::ProgressWheel;

use crate::draw::{render, DrawOp};
use crate::kurbo::{Insets, Size};
use piet::{Error, RenderContext};

/// The host-facing surface of a circular progress widget.
///
/// The host owns the windowing and event loop; a widget only reacts to the
/// hooks here. Widgets are single-owner values: every operation runs to
/// completion on the calling thread, and a later mutation simply supersedes
/// an earlier one that has not been painted yet.
pub trait Gauge {
    /// Called when the viewport size changes. Rebuilds the widget's cached
    /// geometry from the new size, the padding, and the current stroke
    /// widths. Progress mutations never trigger this.
    fn layout(&mut self, size: Size, padding: Insets);

    /// Produces the frame as an ordered draw-command sequence. Later
    /// commands occlude earlier ones, so the order is part of the contract.
    fn draw(&self) -> Vec<DrawOp>;

    /// Takes the pending redraw request, if any. Mutating operations raise
    /// the request; the host drains it and schedules a paint. There is no
    /// coalescing beyond most-recent-state-wins.
    fn take_paint_request(&mut self) -> bool;

    /// Replays the current frame onto a render context.
    fn paint<RC: RenderContext>(&self, rc: &mut RC) -> Result<(), Error>
    where
        Self: Sized,
    {
        render(&self.draw(), rc)
    }
}
