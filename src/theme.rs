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

//! Default style values.
//!
//! Colors are packed 32-bit ARGB, dimensions are resolved pixel floats.
//! These are the values a widget starts from when an [`Attrs`] mapping does
//! not override them.
//!
//! [`Attrs`]: crate::Attrs

#![allow(missing_docs)]

pub const WHEEL_BAR_COLOR: u32 = 0xAA00_0000;
pub const WHEEL_RIM_COLOR: u32 = 0xAADD_DDDD;
pub const WHEEL_TEXT_COLOR: u32 = 0xFF00_0000;
/// Transparent; the wheel's inner disc and decorative edges are invisible
/// until configured.
pub const WHEEL_INNER_COLOR: u32 = 0x0000_0000;
pub const WHEEL_EDGE_COLOR: u32 = 0x0000_0000;
pub const WHEEL_BAR_WIDTH: f64 = 20.0;
pub const WHEEL_RIM_WIDTH: f64 = 20.0;
pub const WHEEL_EDGE_SIZE: f64 = 0.0;
pub const WHEEL_DEFAULT_PROGRESS: i32 = 0;

pub const RING_COLOR: u32 = 0xFFFA_7C20;
pub const PROGRESS_COLOR: u32 = 0xFFEA_5450;
pub const TEXT_COLOR: u32 = 0xFF33_3333;
pub const RING_WIDTH: f64 = 5.0;
pub const MAX_PROGRESS: i32 = 100;

pub const TEXT_SIZE: f64 = 15.0;
