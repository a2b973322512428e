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

//! Style configuration as a key-value mapping.
//!
//! Hosts describe a widget's appearance as named, typed values; the widget
//! constructors read them once with [`ProgressWheel::from_attrs`] and
//! friends, falling back to the [`theme`] defaults for anything absent.
//!
//! [`ProgressWheel::from_attrs`]: crate::ProgressWheel::from_attrs
//! [`theme`]: crate::theme

use std::collections::HashMap;

use tracing::warn;

/// A typed attribute value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A packed 32-bit ARGB color.
    Color(u32),
    /// A dimension resolved to pixels.
    Dim(f64),
    Float(f64),
    Int(i32),
    Bool(bool),
    Str(String),
}

impl Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Color(_) => "Color",
            Value::Dim(_) => "Dim",
            Value::Float(_) => "Float",
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Str(_) => "Str",
        }
    }
}

/// A set of named style attributes.
///
/// Getters take the default to use when the key is absent. A value stored
/// under the right key but with the wrong type is ignored with a warning
/// rather than failing construction.
#[derive(Clone, Debug, Default)]
pub struct Attrs {
    values: HashMap<String, Value>,
}

impl Attrs {
    pub fn new() -> Attrs {
        Attrs::default()
    }

    /// Builder-style method for adding an attribute.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Attrs {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// A packed ARGB color.
    pub fn color(&self, key: &str, default: u32) -> u32 {
        match self.values.get(key) {
            Some(Value::Color(c)) => *c,
            Some(other) => mismatch(key, "Color", other, default),
            None => default,
        }
    }

    /// A dimension in pixels.
    pub fn dimension(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(Value::Dim(d)) => *d,
            Some(other) => mismatch(key, "Dim", other, default),
            None => default,
        }
    }

    pub fn float(&self, key: &str, default: f64) -> f64 {
        match self.values.get(key) {
            Some(Value::Float(f)) => *f,
            Some(other) => mismatch(key, "Float", other, default),
            None => default,
        }
    }

    pub fn integer(&self, key: &str, default: i32) -> i32 {
        match self.values.get(key) {
            Some(Value::Int(i)) => *i,
            Some(other) => mismatch(key, "Int", other, default),
            None => default,
        }
    }

    pub fn boolean(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(other) => mismatch(key, "Bool", other, default),
            None => default,
        }
    }

    /// A string attribute; `None` when absent or of the wrong type.
    pub fn string(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(Value::Str(s)) => Some(s),
            Some(other) => {
                warn!(
                    "attribute `{}` has type {}, expected Str; ignoring",
                    key,
                    other.type_name()
                );
                None
            }
            None => None,
        }
    }
}

fn mismatch<T>(key: &str, expected: &str, found: &Value, default: T) -> T {
    warn!(
        "attribute `{}` has type {}, expected {}; using default",
        key,
        found.type_name(),
        expected
    );
    default
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getters_fall_back_to_defaults() {
        let attrs = Attrs::new();
        assert_eq!(attrs.color("bar_color", 0xAA00_0000), 0xAA00_0000);
        assert_eq!(attrs.integer("bar_width", 20), 20);
        assert!(attrs.boolean("text_visible", true));
        assert_eq!(attrs.string("text"), None);
    }

    #[test]
    fn stored_values_win() {
        let attrs = Attrs::new()
            .with("bar_color", Value::Color(0xFF12_3456))
            .with("text_size", Value::Dim(22.5))
            .with("text", Value::Str("hi".into()));
        assert_eq!(attrs.color("bar_color", 0), 0xFF12_3456);
        assert_eq!(attrs.dimension("text_size", 15.0), 22.5);
        assert_eq!(attrs.string("text"), Some("hi"));
        assert!(attrs.contains("text"));
    }

    #[test]
    fn wrong_type_falls_back() {
        let attrs = Attrs::new().with("bar_width", Value::Str("wide".into()));
        assert_eq!(attrs.integer("bar_width", 20), 20);
    }
}
