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

//! Errors raised by widget mutators.

use thiserror::Error;

/// An invalid argument passed to a widget mutator.
///
/// These are synchronous and local: the failing operation leaves the widget
/// untouched, and nothing is retried or recovered internally.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GaugeError {
    /// A current-progress value below zero.
    #[error("current progress must not be negative (got {0})")]
    NegativeProgress(i32),

    /// A max-progress value below zero.
    #[error("max progress must not be negative (got {0})")]
    NegativeMaxProgress(i32),

    /// Segment sweeps and colors of different lengths.
    #[error("segment sweeps and colors must be the same length ({sweeps} sweeps, {colors} colors)")]
    SegmentMismatch { sweeps: usize, colors: usize },
}
