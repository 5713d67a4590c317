pub mod group;
pub mod rating;

use std::ops::Index;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use group::{GroupState, LikertGroup, LikertRow, Pole};
pub use rating::RatingControl;

pub const GROUP_POINTS: usize = 5;

/// Distance under which a value is considered to sit on a scale point.
pub const MATCH_TOLERANCE: f64 = 1e-4;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LikertError {
    #[error("rating scale needs at least 2 points, got {0}")]
    InvalidPointCount(usize),

    #[error("point {index} is outside a {count}-point scale")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("row {index} is outside a group of {len} labels")]
    RowOutOfRange { index: usize, len: usize },

    #[error("expected {expected} values, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("rating {0} is outside [0, 1]")]
    OutOfRange(f64),

    #[error("rating controls are disabled")]
    Disabled,
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rating(f64);

impl Rating {
    pub const ZERO: Rating = Rating(0.0);
    pub const ONE: Rating = Rating(1.0);

    pub fn new(value: f64) -> Result<Self, LikertError> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(LikertError::OutOfRange(value))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// The value as seen from the opposite pole.
    pub fn flipped(self) -> Self {
        Self(1.0 - self.0)
    }
}

impl TryFrom<f64> for Rating {
    type Error = LikertError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for f64 {
    fn from(value: Rating) -> Self {
        value.0
    }
}

/// Immutable snapshot of a group's answers, index-aligned with its labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValueVector(Arc<[Option<Rating>]>);

impl ValueVector {
    pub fn unset(len: usize) -> Self {
        Self(vec![None; len].into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Rating> {
        self.0.get(index).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Rating>> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<Rating>] {
        &self.0
    }

    /// A new snapshot with one element replaced; `self` is left untouched.
    /// `index` must be in bounds.
    pub(crate) fn with(&self, index: usize, value: Option<Rating>) -> Self {
        let mut next = self.0.to_vec();
        next[index] = value;
        Self(next.into())
    }

    pub fn answered(&self) -> usize {
        self.0.iter().filter(|v| v.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    pub fn to_f64s(&self) -> Vec<Option<f64>> {
        self.0.iter().map(|v| v.map(Rating::get)).collect()
    }
}

impl From<Vec<Option<Rating>>> for ValueVector {
    fn from(values: Vec<Option<Rating>>) -> Self {
        Self(values.into())
    }
}

impl TryFrom<Vec<Option<f64>>> for ValueVector {
    type Error = LikertError;

    fn try_from(values: Vec<Option<f64>>) -> Result<Self, Self::Error> {
        values
            .into_iter()
            .map(|v| v.map(Rating::new).transpose())
            .collect::<Result<Vec<_>, _>>()
            .map(Self::from)
    }
}

impl Index<usize> for ValueVector {
    type Output = Option<Rating>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/likert/values.rs"]
mod tests;
