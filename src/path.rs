//! Key paths and the path-based value accessor.
//!
//! A [`KeyPath`] is an ordered list of [`PathStep`]s. [`resolve`] follows it
//! into a [`serde_json::Value`], one indexing operation per step.

use crate::error::{SortError, SortResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One step of a key path: a mapping key or a sequence index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathStep {
    Key(String),
    Index(usize),
}

impl PathStep {
    pub fn key(key: impl Into<String>) -> Self {
        PathStep::Key(key.into())
    }

    pub fn index(index: usize) -> Self {
        PathStep::Index(index)
    }

    /// Indexes `value` by this step.
    ///
    /// Mappings accept an index as its decimal key, and sequences accept a key
    /// that parses as an index. Returns `Ok(None)` when the step is absent and
    /// an error when `value` is a scalar.
    fn index_into<'a>(&self, value: &'a Value) -> SortResult<Option<&'a Value>> {
        let found = match (self, value) {
            (PathStep::Key(key), Value::Object(map)) => map.get(key),
            (PathStep::Index(index), Value::Object(map)) => map.get(&index.to_string()),
            (PathStep::Index(index), Value::Array(items)) => items.get(*index),
            (PathStep::Key(key), Value::Array(items)) => {
                key.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            (_, scalar) => {
                return Err(SortError::InvalidArgument(format!(
                    "cannot index {} with step `{}`",
                    kind_of(scalar),
                    self
                )));
            }
        };
        Ok(found)
    }
}

impl fmt::Display for PathStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStep::Key(key) => f.write_str(key),
            PathStep::Index(index) => write!(f, "[{index}]"),
        }
    }
}

impl From<&str> for PathStep {
    fn from(key: &str) -> Self {
        PathStep::Key(key.to_owned())
    }
}

impl From<String> for PathStep {
    fn from(key: String) -> Self {
        PathStep::Key(key)
    }
}

impl From<usize> for PathStep {
    fn from(index: usize) -> Self {
        PathStep::Index(index)
    }
}

/// An ordered sequence of steps into a composite value.
///
/// The empty path addresses the value itself. Paths built from a `Vec` are
/// normalized by length, so `KeyPath::from(vec![step])` is `Single(step)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawKeyPath", into = "Vec<PathStep>")]
pub enum KeyPath {
    #[default]
    Empty,
    Single(PathStep),
    Multi(Vec<PathStep>),
}

impl KeyPath {
    /// Returns the steps of this path, in order.
    pub fn steps(&self) -> &[PathStep] {
        match self {
            KeyPath::Empty => &[],
            KeyPath::Single(step) => std::slice::from_ref(step),
            KeyPath::Multi(steps) => steps,
        }
    }

    pub fn len(&self) -> usize {
        self.steps().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Resolves this path against `value`. See [`resolve`].
    pub fn resolve<'a>(&self, value: &'a Value) -> SortResult<&'a Value> {
        resolve(value, self)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, step) in self.steps().iter().enumerate() {
            match step {
                PathStep::Key(_) if position > 0 => write!(f, ".{step}")?,
                _ => write!(f, "{step}")?,
            }
        }
        Ok(())
    }
}

impl From<Vec<PathStep>> for KeyPath {
    fn from(mut steps: Vec<PathStep>) -> Self {
        match steps.len() {
            0 => KeyPath::Empty,
            1 => KeyPath::Single(steps.remove(0)),
            _ => KeyPath::Multi(steps),
        }
    }
}

impl From<KeyPath> for Vec<PathStep> {
    fn from(path: KeyPath) -> Self {
        match path {
            KeyPath::Empty => Vec::new(),
            KeyPath::Single(step) => vec![step],
            KeyPath::Multi(steps) => steps,
        }
    }
}

impl From<PathStep> for KeyPath {
    fn from(step: PathStep) -> Self {
        KeyPath::Single(step)
    }
}

impl From<&str> for KeyPath {
    fn from(key: &str) -> Self {
        KeyPath::Single(key.into())
    }
}

impl From<String> for KeyPath {
    fn from(key: String) -> Self {
        KeyPath::Single(key.into())
    }
}

impl From<usize> for KeyPath {
    fn from(index: usize) -> Self {
        KeyPath::Single(index.into())
    }
}

// A path may be written as a single step or as a list of steps.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawKeyPath {
    One(PathStep),
    Many(Vec<PathStep>),
}

impl From<RawKeyPath> for KeyPath {
    fn from(raw: RawKeyPath) -> Self {
        match raw {
            RawKeyPath::One(step) => KeyPath::Single(step),
            RawKeyPath::Many(steps) => steps.into(),
        }
    }
}

/// Builds a [`KeyPath`] from a list of keys and indices.
///
/// ```
/// use pathsort::key_path;
/// use pathsort::path::{KeyPath, PathStep};
///
/// let path = key_path!["a", 0, "b"];
/// assert_eq!(path.len(), 3);
/// assert_eq!(path.to_string(), "a[0].b");
/// assert_eq!(key_path![], KeyPath::Empty);
/// assert_eq!(key_path!["name"], KeyPath::Single(PathStep::key("name")));
/// ```
#[macro_export]
macro_rules! key_path {
    () => {
        $crate::path::KeyPath::Empty
    };
    ($($step:expr),+ $(,)?) => {
        $crate::path::KeyPath::from(vec![$($crate::path::PathStep::from($step)),+])
    };
}

/// Returns the value found by following `path` into `value`.
///
/// The empty path returns `value` itself. A scalar reached before the last
/// step is an [`SortError::InvalidArgument`]; an absent key or out-of-range
/// index is an [`SortError::UndefinedProjection`] naming the failing step.
///
/// ```
/// use pathsort::{key_path, resolve};
/// use serde_json::json;
///
/// let v = json!({ "a": [{ "b": [1, 2] }] });
/// assert_eq!(resolve(&v, &key_path!["a", 0, "b", 1]).unwrap(), &json!(2));
/// assert_eq!(resolve(&v, &key_path![]).unwrap(), &v);
/// ```
pub fn resolve<'a>(value: &'a Value, path: &KeyPath) -> SortResult<&'a Value> {
    let mut current = value;
    for (step_index, step) in path.steps().iter().enumerate() {
        current = step
            .index_into(current)?
            .ok_or_else(|| SortError::UndefinedProjection {
                path: path.clone(),
                step: step_index,
            })?;
    }
    Ok(current)
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
