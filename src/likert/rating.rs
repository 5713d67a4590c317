use crate::likert::{LikertError, MATCH_TOLERANCE, Rating};

/// A row of evenly spaced radio points over [0, 1].
///
/// The selected point is kept apart from whatever value the owner holds, so a
/// value that arrives after construction can be adopted without the control
/// losing a selection the user already made.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingControl {
    count: usize,
    selected: Option<usize>,
    disabled: bool,
}

impl RatingControl {
    pub fn new(count: usize) -> Result<Self, LikertError> {
        if count < 2 {
            return Err(LikertError::InvalidPointCount(count));
        }
        Ok(Self {
            count,
            selected: None,
            disabled: false,
        })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn index_to_value(&self, index: usize) -> Result<Rating, LikertError> {
        if index >= self.count {
            return Err(LikertError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }
        Rating::new(index as f64 / (self.count - 1) as f64)
    }

    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        let last = (self.count - 1) as f64;
        (0..self.count).map(move |i| i as f64 / last)
    }

    /// First point within tolerance of `value`.
    pub fn nearest_index(&self, value: f64) -> Option<usize> {
        self.points()
            .position(|point| (value - point).abs() < MATCH_TOLERANCE)
    }

    /// Adopts an externally supplied value. Values that do not sit on a point,
    /// and unset values, keep the current selection.
    pub fn sync(&mut self, value: Option<Rating>) {
        if let Some(index) = value.and_then(|v| self.nearest_index(v.get())) {
            self.selected = Some(index);
        }
    }

    /// User picks point `index`; returns the un-inverted value of that point.
    pub fn select(&mut self, index: usize) -> Result<Rating, LikertError> {
        if self.disabled {
            return Err(LikertError::Disabled);
        }
        let value = self.index_to_value(index)?;
        self.selected = Some(index);
        Ok(value)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/likert/rating.rs"]
mod tests;
