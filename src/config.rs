//! Demo inputs and the TOML file that overrides them.
//!
//! Every table defaults to the literal input the matching demo binary uses,
//! so an empty file (or no file at all) reproduces the stock demos.
//!
//! ```toml
//! seed = 7
//!
//! [count-matching]
//! sequence = [5, 3, 7, 2, 1]
//! predicate = { kind = "greater-than", value = 2 }
//!
//! [generate-fill]
//! count = 4
//! generator = { kind = "random", low = 1, high = 6 }
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest sequence or destination buffer a demo accepts.
pub const MAX_SEQUENCE_LEN: usize = 8;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("[{demo}] has {len} elements, at most {max} are allowed")]
    SequenceTooLong {
        demo: &'static str,
        len: usize,
        max: usize,
    },

    #[error("[{demo}] random generator bounds are reversed: low {low} > high {high}")]
    InvalidGenerator {
        demo: &'static str,
        low: i32,
        high: i32,
    },

    #[error("unknown demo '{name}'{}", did_you_mean(.suggestion))]
    UnknownDemo {
        name: String,
        suggestion: Option<String>,
    },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(", did you mean '{}'?", s),
        None => String::new(),
    }
}

// =============================================================================
// Predicates and generators
// =============================================================================

/// A pure test on one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Predicate {
    GreaterThan { value: i32 },
    LessThan { value: i32 },
    Even,
    Odd,
}

impl Predicate {
    pub fn test(&self, x: i32) -> bool {
        match *self {
            Predicate::GreaterThan { value } => x > value,
            Predicate::LessThan { value } => x < value,
            Predicate::Even => x % 2 == 0,
            Predicate::Odd => x % 2 != 0,
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::GreaterThan { value } => write!(f, "x > {}", value),
            Predicate::LessThan { value } => write!(f, "x < {}", value),
            Predicate::Even => f.write_str("x is even"),
            Predicate::Odd => f.write_str("x is odd"),
        }
    }
}

/// A nullary value source for `generate_n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Generator {
    /// `start`, `start + step`, `start + 2 * step`, ...
    Counter { start: i32, step: i32 },
    /// Uniform draws from `low..=high`.
    Random { low: i32, high: i32 },
}

impl Generator {
    /// Turns the description into a callable generator drawing from `rng`.
    ///
    /// Random bounds must already be ordered; [`DemoConfig::validate`]
    /// checks them.
    pub(crate) fn into_fn<'a, R: Rng>(self, rng: &'a mut R) -> impl FnMut() -> i32 + 'a {
        let mut next = match self {
            Generator::Counter { start, .. } => start,
            Generator::Random { .. } => 0,
        };
        move || match self {
            Generator::Counter { step, .. } => {
                let value = next;
                next = next.wrapping_add(step);
                value
            }
            Generator::Random { low, high } => rng.gen_range(low..=high),
        }
    }
}

// =============================================================================
// Per-demo inputs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CountMatchingInput {
    pub sequence: Vec<i32>,
    pub predicate: Predicate,
}

impl Default for CountMatchingInput {
    fn default() -> Self {
        Self {
            sequence: vec![5, 3, 7, 2, 1],
            predicate: Predicate::GreaterThan { value: 2 },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceInput {
    pub sequence: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyToEndInput {
    pub source: Vec<i32>,
    /// Length of the zero-filled destination; the source lands at its tail.
    pub destination_len: usize,
}

impl Default for CopyToEndInput {
    fn default() -> Self {
        Self {
            source: vec![1, 2, 3, 4],
            destination_len: 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartitionPointInput {
    pub sequence: Vec<i32>,
    pub predicate: Predicate,
}

impl Default for PartitionPointInput {
    fn default() -> Self {
        Self {
            sequence: vec![2, 4, 6, 8, 1, 3, 5, 7],
            predicate: Predicate::Even,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerateFillInput {
    pub sequence: Vec<i32>,
    pub count: usize,
    pub generator: Generator,
}

impl Default for GenerateFillInput {
    fn default() -> Self {
        Self {
            sequence: vec![0; 8],
            count: 5,
            generator: Generator::Counter { start: 1, step: 1 },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymmetricDifferenceInput {
    pub first: Vec<i32>,
    pub second: Vec<i32>,
    pub destination_len: usize,
}

impl Default for SymmetricDifferenceInput {
    fn default() -> Self {
        Self {
            first: vec![1, 2, 3],
            second: vec![1, 1, 2, 4],
            destination_len: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PartialSortCopyInput {
    pub source: Vec<i32>,
    pub start: usize,
    pub end: usize,
    pub destination_len: usize,
}

impl Default for PartialSortCopyInput {
    fn default() -> Self {
        Self {
            source: vec![5, 7, 4, 2, 8, 6, 1, 9],
            start: 1,
            end: 7,
            destination_len: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MismatchInput {
    pub first: Vec<i32>,
    pub second: Vec<i32>,
}

impl Default for MismatchInput {
    fn default() -> Self {
        Self {
            first: vec![5, 3, 7, 9],
            second: vec![5, 3, 2, 9],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EqualRangeInput {
    pub sequence: Vec<i32>,
    pub target: i32,
}

impl Default for EqualRangeInput {
    fn default() -> Self {
        Self {
            sequence: vec![3, 3, 4, 4, 4, 5, 7],
            target: 4,
        }
    }
}

// =============================================================================
// DemoConfig
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct DemoConfig {
    /// Seed for the shuffle and random generator; entropy when absent.
    pub seed: Option<u64>,
    pub count_matching: CountMatchingInput,
    pub min_and_max: SequenceInput,
    pub copy_to_end: CopyToEndInput,
    pub partition_point: PartitionPointInput,
    pub shuffle: SequenceInput,
    pub generate_fill: GenerateFillInput,
    pub symmetric_set_difference: SymmetricDifferenceInput,
    pub partial_sort_copy_range: PartialSortCopyInput,
    pub mismatch: MismatchInput,
    pub equal_range: EqualRangeInput,
    pub heap_validity_check: SequenceInput,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: None,
            count_matching: CountMatchingInput::default(),
            min_and_max: SequenceInput {
                sequence: vec![5, 3, 7, 2, 1],
            },
            copy_to_end: CopyToEndInput::default(),
            partition_point: PartitionPointInput::default(),
            shuffle: SequenceInput {
                sequence: vec![1, 2, 3, 4, 5, 6, 7, 8],
            },
            generate_fill: GenerateFillInput::default(),
            symmetric_set_difference: SymmetricDifferenceInput::default(),
            partial_sort_copy_range: PartialSortCopyInput::default(),
            mismatch: MismatchInput::default(),
            equal_range: EqualRangeInput::default(),
            heap_validity_check: SequenceInput {
                sequence: vec![5, 4, 2, 3, 1, 200],
            },
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Checks the size limit on every sequence and destination buffer.
    ///
    /// Algorithm preconditions (sortedness, ranges, counts) are not checked
    /// here; the demos report those when they run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths: [(&'static str, usize); 16] = [
            ("count-matching", self.count_matching.sequence.len()),
            ("min-and-max", self.min_and_max.sequence.len()),
            ("copy-to-end", self.copy_to_end.source.len()),
            ("copy-to-end", self.copy_to_end.destination_len),
            ("partition-point", self.partition_point.sequence.len()),
            ("shuffle", self.shuffle.sequence.len()),
            ("generate-fill", self.generate_fill.sequence.len()),
            ("symmetric-set-difference", self.symmetric_set_difference.first.len()),
            ("symmetric-set-difference", self.symmetric_set_difference.second.len()),
            ("symmetric-set-difference", self.symmetric_set_difference.destination_len),
            ("partial-sort-copy-range", self.partial_sort_copy_range.source.len()),
            ("partial-sort-copy-range", self.partial_sort_copy_range.destination_len),
            ("mismatch", self.mismatch.first.len()),
            ("mismatch", self.mismatch.second.len()),
            ("equal-range", self.equal_range.sequence.len()),
            ("heap-validity-check", self.heap_validity_check.sequence.len()),
        ];
        if let Some(&(demo, len)) = lengths.iter().find(|(_, len)| *len > MAX_SEQUENCE_LEN) {
            return Err(ConfigError::SequenceTooLong {
                demo,
                len,
                max: MAX_SEQUENCE_LEN,
            });
        }

        if let Generator::Random { low, high } = self.generate_fill.generator {
            if low > high {
                return Err(ConfigError::InvalidGenerator {
                    demo: "generate-fill",
                    low,
                    high,
                });
            }
        }
        Ok(())
    }
}
