use std::f32;
use std::fmt;

use super::{Error, Malformation};

/// Dense square matrix of arc scores.
///
/// Scores are indexed as `(dependent, head)`: row `d` holds the score of
/// every candidate head of `d`, so `get(d, h)` is the score of the arc
/// `h -> d`. `-inf` marks a missing arc.
#[derive(Clone, PartialEq)]
pub struct ScoreMatrix {
    len: usize,
    data: Vec<f32>,
}

impl ScoreMatrix {
    /// Copies a `[dependents, heads]` array into a matrix.
    ///
    /// Fails when there are no rows, when a row length differs from the
    /// number of rows, or when an entry is `NaN` or `+inf`.
    pub fn from_rows<V: AsRef<[f32]>>(rows: &[V]) -> Result<Self, Error> {
        let len = rows.len();
        if len == 0 {
            return Err(Error::InvalidScoreMatrix(Malformation::Empty));
        }
        let mut data = Vec::with_capacity(len * len);
        for (dependent, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != len {
                return Err(Error::InvalidScoreMatrix(Malformation::NotSquare {
                    row: dependent,
                    len: row.len(),
                    expected: len,
                }));
            }
            for (head, &score) in row.iter().enumerate() {
                if score.is_nan() || score == f32::INFINITY {
                    return Err(Error::InvalidScoreMatrix(Malformation::InvalidScore {
                        dependent: dependent,
                        head: head,
                    }));
                }
            }
            data.extend_from_slice(row);
        }
        Ok(ScoreMatrix {
            len: len,
            data: data,
        })
    }

    pub(crate) fn filled(len: usize, value: f32) -> Self {
        ScoreMatrix {
            len: len,
            data: vec![value; len * len],
        }
    }

    /// Number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Score of the arc `head -> dependent`.
    #[inline]
    pub fn get(&self, dependent: usize, head: usize) -> f32 {
        self.data[dependent * self.len + head]
    }

    #[inline]
    pub(crate) fn set(&mut self, dependent: usize, head: usize, score: f32) {
        self.data[dependent * self.len + head] = score;
    }

    /// Scores of every candidate head of `dependent`.
    #[inline]
    pub fn row(&self, dependent: usize) -> &[f32] {
        let start = dependent * self.len;
        &self.data[start..start + self.len]
    }
}

impl fmt::Debug for ScoreMatrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries((0..self.len).map(|dependent| self.row(dependent)))
            .finish()
    }
}
