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

//! A terminal tour of the three widgets.
//!
//! Plays the role of a host app: a slider stepping the wheel through five
//! stops, then a "randomize" button that re-skins the wheel's rim and fills
//! in the ring and the segmented round bar. Each produced frame is replayed
//! onto a null backend and summarized on stdout.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rondel::widget::{Gauge, ProgressWheel, RingProgress, RoundProgress};
use rondel::{render, Attrs, Color, DrawOp, GaugeError, Insets, RimPattern, Size, Value};

fn main() -> Result<(), GaugeError> {
    tracing_subscriber::fmt().init();

    let attrs = Attrs::new()
        .with("bar_color", Value::Color(0xAA29_B6F6))
        .with("bar_width", Value::Int(24))
        .with("text", Value::Str("loading".into()));
    let mut wheel = ProgressWheel::from_attrs(&attrs);
    let mut ring = RingProgress::new();
    let mut round = RoundProgress::new();

    let viewport = Size::new(240.0, 240.0);
    wheel.layout(viewport, Insets::uniform(8.0));
    ring.layout(viewport, Insets::ZERO);
    round.layout(viewport, Insets::ZERO);

    // The slider reports percent; the wheel thinks in degrees.
    for stop in [0, 25, 50, 75, 100] {
        wheel.set_progress((360.0 * f64::from(stop) / 100.0) as i32);
        if wheel.take_paint_request() {
            present(&format!("wheel at {}%", stop), &wheel.draw());
        }
    }

    // The "randomize" button.
    let mut rng = StdRng::seed_from_u64(0x524f_4e44);
    wheel.set_rim_pattern(Some(random_rim(&mut rng)));
    wheel.reset_count();

    ring.set_current_progress(63)?;

    let sweeps: Vec<f64> = [56.0, 90.0, 120.0, 88.0, 80.0]
        .iter()
        .map(|deg: &f64| (deg / 360.0 * 100.0).round())
        .collect();
    let colors = vec![
        Color::rgb8(0xA0, 0xDD, 0x2A),
        Color::rgb8(0xFF, 0xAF, 0x8B),
        Color::rgb8(0x36, 0xD9, 0xF1),
        Color::rgb8(0xFF, 0xD7, 0x1C),
        Color::rgb8(0xA8, 0x9A, 0xFF),
    ];
    round.set_progress(&sweeps, &colors)?;

    if wheel.take_paint_request() {
        present("wheel, re-skinned and reset", &wheel.draw());
    }
    if ring.take_paint_request() {
        present("ring at 63 of 100", &ring.draw());
    }
    if round.take_paint_request() {
        present("round, five segments", &round.draw());
    }
    Ok(())
}

/// A strip of two random colors with a random break point, like a host
/// handing the wheel an arbitrary bitmap shader.
fn random_rim(rng: &mut StdRng) -> RimPattern {
    let first: u32 = rng.gen();
    let second: u32 = rng.gen();
    let size = (1 + rng.gen_range(0..3)) * 8;
    let change = (1 + rng.gen_range(0..3)) * 8;
    RimPattern {
        pixels: (0..size)
            .map(|i| if i > change { first } else { second })
            .collect(),
    }
}

fn present(label: &str, ops: &[DrawOp]) {
    let mut rc = rondel::piet::NullRenderContext::new();
    render(ops, &mut rc).expect("null replay failed");
    println!("{}", label);
    for op in ops {
        println!("  {}", describe(op));
    }
}

fn describe(op: &DrawOp) -> String {
    match op {
        DrawOp::FillOval { bounds, .. } => {
            format!("fill oval {:.0}x{:.0}", bounds.width(), bounds.height())
        }
        DrawOp::StrokeOval {
            bounds,
            width,
            pattern,
            ..
        } => format!(
            "stroke oval {:.0}x{:.0}, width {}{}",
            bounds.width(),
            bounds.height(),
            width,
            if pattern.is_some() { ", patterned" } else { "" }
        ),
        DrawOp::StrokeArc { start, sweep, .. } => {
            format!("arc from {} deg sweeping {} deg", start, sweep)
        }
        DrawOp::FillPie { sweep, .. } => format!("pie wedge sweeping {} deg", sweep),
        DrawOp::Text { lines, .. } => format!("text {:?}", lines),
    }
}
