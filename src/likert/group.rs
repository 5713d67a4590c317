use std::fmt;

use tracing::debug;

use crate::labels::{TextLookup, resolve};
use crate::likert::{GROUP_POINTS, LikertError, Rating, RatingControl, ValueVector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupState {
    AwaitingDefaults,
    Populated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pole {
    pub text: String,
    pub description: Vec<String>,
}

/// One labelled question as laid out on screen: `left` sits at point 0.
#[derive(Debug, Clone)]
pub struct LikertRow {
    pub label_id: String,
    pub left: Pole,
    pub right: Pole,
    pub inverted: bool,
    pub control: RatingControl,
}

impl LikertRow {
    fn to_stored(&self, raw: Rating) -> Rating {
        if self.inverted { raw.flipped() } else { raw }
    }
}

pub type ChangeListener = Box<dyn FnMut(&ValueVector) + Send>;

/// A grid of 5-point rating controls, one per label, answering into a single
/// value vector.
pub struct LikertGroup {
    rows: Vec<LikertRow>,
    values: ValueVector,
    state: GroupState,
    editable: bool,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for LikertGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LikertGroup")
            .field("rows", &self.rows)
            .field("values", &self.values)
            .field("state", &self.state)
            .field("editable", &self.editable)
            .finish_non_exhaustive()
    }
}

impl LikertGroup {
    pub fn new<S: AsRef<str>>(
        label_ids: &[S],
        lookup: &dyn TextLookup,
        editable: bool,
    ) -> Result<Self, LikertError> {
        let mut rows = Vec::with_capacity(label_ids.len());
        for id in label_ids {
            let id = id.as_ref();
            let d = resolve(id, lookup);
            let zero = Pole {
                text: d.zero_text,
                description: d.zero_description,
            };
            let one = Pole {
                text: d.one_text,
                description: d.one_description,
            };
            let (left, right) = if d.inverted { (one, zero) } else { (zero, one) };

            let mut control = RatingControl::new(GROUP_POINTS)?;
            control.set_disabled(!editable);

            rows.push(LikertRow {
                label_id: id.to_string(),
                left,
                right,
                inverted: d.inverted,
                control,
            });
        }

        Ok(Self {
            values: ValueVector::unset(rows.len()),
            rows,
            state: GroupState::AwaitingDefaults,
            editable,
            listener: None,
        })
    }

    pub fn on_change(mut self, listener: impl FnMut(&ValueVector) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn rows(&self) -> &[LikertRow] {
        &self.rows
    }

    pub fn values(&self) -> &ValueVector {
        &self.values
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        for row in &mut self.rows {
            row.control.set_disabled(!editable);
        }
    }

    pub fn answered(&self) -> usize {
        self.values.answered()
    }

    pub fn is_complete(&self) -> bool {
        self.values.is_complete()
    }

    /// Replaces the whole vector with externally loaded values.
    ///
    /// Later calls overwrite again, including any edits made in between.
    pub fn apply_defaults(&mut self, values: ValueVector) -> Result<(), LikertError> {
        if values.len() != self.rows.len() {
            return Err(LikertError::LengthMismatch {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }

        // Controls are seeded with the stored value as-is; only select inverts.
        for (row, value) in self.rows.iter_mut().zip(values.iter()) {
            row.control.sync(value);
        }

        match self.state {
            GroupState::AwaitingDefaults => {
                debug!(answered = values.answered(), "likert defaults bound");
                self.state = GroupState::Populated;
            }
            GroupState::Populated => {
                debug!(
                    answered = values.answered(),
                    "likert defaults replaced current answers"
                );
            }
        }
        self.values = values;
        Ok(())
    }

    /// User picks `point` on row `row`. Returns the full updated vector, which
    /// is also handed to the change listener.
    pub fn select(&mut self, row: usize, point: usize) -> Result<ValueVector, LikertError> {
        if !self.editable {
            return Err(LikertError::Disabled);
        }
        let len = self.rows.len();
        let target = self
            .rows
            .get_mut(row)
            .ok_or(LikertError::RowOutOfRange { index: row, len })?;

        let raw = target.control.select(point)?;
        let stored = target.to_stored(raw);

        let next = self.values.with(row, Some(stored));
        if let Some(listener) = self.listener.as_mut() {
            listener(&next);
        }
        self.values = next.clone();
        Ok(next)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/likert/group.rs"]
mod tests;
