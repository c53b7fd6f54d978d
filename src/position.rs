//! Positions into a sequence.
//!
//! A position is either a valid index or the `End` sentinel meaning "one past
//! the last element". Algorithms that would hand back an iterator return a
//! `Position` instead.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    At(usize),
    End,
}

impl Position {
    /// Builds a position from an index, mapping `len` (and anything past it)
    /// to `End`.
    pub fn from_index(index: usize, len: usize) -> Self {
        if index < len {
            Position::At(index)
        } else {
            Position::End
        }
    }

    /// The index this position stands for in a sequence of length `len`.
    pub fn resolve(self, len: usize) -> usize {
        match self {
            Position::At(i) => i.min(len),
            Position::End => len,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Position::At(i) => Some(i),
            Position::End => None,
        }
    }

    pub fn is_end(self) -> bool {
        matches!(self, Position::End)
    }

    /// The element at this position, `None` for `End`.
    pub fn get<T>(self, seq: &[T]) -> Option<&T> {
        self.index().and_then(|i| seq.get(i))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::At(i) => write!(f, "{}", i),
            Position::End => f.write_str("end"),
        }
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Position::At(i) => serializer.serialize_u64(*i as u64),
            Position::End => serializer.serialize_str("end"),
        }
    }
}
