//! The demo catalogue and the harness that runs a demo against its input.

use crate::algo;
use crate::config::{ConfigError, DemoConfig};
use crate::error::Result;
use crate::position::Position;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

// =============================================================================
// Catalogue
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoKind {
    CountMatching,
    MinAndMax,
    CopyToEnd,
    PartitionPoint,
    Shuffle,
    GenerateFill,
    SymmetricSetDifference,
    PartialSortCopyRange,
    Mismatch,
    EqualRange,
    HeapValidityCheck,
}

impl DemoKind {
    pub const ALL: [DemoKind; 11] = [
        DemoKind::CountMatching,
        DemoKind::MinAndMax,
        DemoKind::CopyToEnd,
        DemoKind::PartitionPoint,
        DemoKind::Shuffle,
        DemoKind::GenerateFill,
        DemoKind::SymmetricSetDifference,
        DemoKind::PartialSortCopyRange,
        DemoKind::Mismatch,
        DemoKind::EqualRange,
        DemoKind::HeapValidityCheck,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DemoKind::CountMatching => "count-matching",
            DemoKind::MinAndMax => "min-and-max",
            DemoKind::CopyToEnd => "copy-to-end",
            DemoKind::PartitionPoint => "partition-point",
            DemoKind::Shuffle => "shuffle",
            DemoKind::GenerateFill => "generate-fill",
            DemoKind::SymmetricSetDifference => "symmetric-set-difference",
            DemoKind::PartialSortCopyRange => "partial-sort-copy-range",
            DemoKind::Mismatch => "mismatch",
            DemoKind::EqualRange => "equal-range",
            DemoKind::HeapValidityCheck => "heap-validity-check",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DemoKind::CountMatching => "count the elements matching a predicate",
            DemoKind::MinAndMax => "smallest and largest element in one pass",
            DemoKind::CopyToEnd => "copy a sequence into the tail of a buffer",
            DemoKind::PartitionPoint => "first element failing the partition predicate",
            DemoKind::Shuffle => "random permutation from a seedable generator",
            DemoKind::GenerateFill => "overwrite a prefix with generated values",
            DemoKind::SymmetricSetDifference => "elements in exactly one of two sorted inputs",
            DemoKind::PartialSortCopyRange => "smallest elements of a sub-range, sorted",
            DemoKind::Mismatch => "first pair of differing elements",
            DemoKind::EqualRange => "bounds of the run equal to a target",
            DemoKind::HeapValidityCheck => "first element breaking the max-heap property",
        }
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DemoKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        DemoKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownDemo {
                name: s.to_string(),
                suggestion: closest_name(&wanted),
            })
    }
}

fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b_chars.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            let next = (row[j + 1] + 1).min(row[j] + 1).min(diagonal + cost);
            diagonal = row[j + 1];
            row[j + 1] = next;
        }
    }
    row[b_chars.len()]
}

/// The demo name nearest to `typo`, if any is close enough to be a typo.
fn closest_name(typo: &str) -> Option<String> {
    const MAX_DISTANCE: usize = 3;

    DemoKind::ALL
        .iter()
        .map(|kind| (levenshtein_distance(typo, kind.name()), kind.name()))
        .filter(|(distance, _)| *distance <= MAX_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name.to_string())
}

// =============================================================================
// Outcome
// =============================================================================

/// What a demo prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    Count(usize),
    /// Element values; `None` where the position was `End`.
    Values(Vec<Option<i32>>),
    Positions(Vec<Position>),
    Range { start: usize, end: usize },
    Sequence(Vec<i32>),
    Copied {
        source: Vec<i32>,
        destination: Vec<i32>,
        first: Option<i32>,
    },
    Written { destination: Vec<i32>, end: Position },
}

fn value_or_end(value: &Option<i32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "end".to_string(),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Count(n) => write!(f, "{}", n),
            Outcome::Values(values) => {
                write!(f, "{}", values.iter().map(value_or_end).join(" "))
            }
            Outcome::Positions(positions) => write!(f, "{}", positions.iter().join(" ")),
            Outcome::Range { start, end } => write!(f, "{} {}", start, end),
            Outcome::Sequence(seq) => write!(f, "{}", seq.iter().join(" ")),
            Outcome::Copied {
                source,
                destination,
                first,
            } => {
                writeln!(f, "{}", source.iter().join(" "))?;
                writeln!(f, "{}", destination.iter().join(" "))?;
                write!(f, "{}", value_or_end(first))
            }
            Outcome::Written { destination, end } => {
                writeln!(f, "{}", destination.iter().join(" "))?;
                write!(f, "{}", end)
            }
        }
    }
}

// =============================================================================
// Harness
// =============================================================================

/// Runs one demo against its configured input.
///
/// `rng` feeds the shuffle and the random generator; every other demo ignores
/// it. `config` must already have passed [`DemoConfig::validate`].
pub(crate) fn run_demo<R: Rng>(kind: DemoKind, config: &DemoConfig, rng: &mut R) -> Result<Outcome> {
    debug!(demo = %kind, "running demo");

    let outcome = match kind {
        DemoKind::CountMatching => {
            let input = &config.count_matching;
            let predicate = input.predicate;
            Outcome::Count(algo::count_if(&input.sequence, |&x| predicate.test(x)))
        }
        DemoKind::MinAndMax => {
            let seq = &config.min_and_max.sequence;
            let (min, max) = algo::minmax_element(seq);
            Outcome::Values(vec![min.get(seq).copied(), max.get(seq).copied()])
        }
        DemoKind::CopyToEnd => {
            let input = &config.copy_to_end;
            let mut destination = vec![0; input.destination_len];
            let first = algo::copy_to_end(&input.source, &mut destination)?;
            Outcome::Copied {
                source: input.source.clone(),
                first: first.get(&destination).copied(),
                destination,
            }
        }
        DemoKind::PartitionPoint => {
            let input = &config.partition_point;
            let predicate = input.predicate;
            let point = algo::partition_point(&input.sequence, |&x| predicate.test(x))?;
            Outcome::Positions(vec![point])
        }
        DemoKind::Shuffle => {
            let mut seq = config.shuffle.sequence.clone();
            algo::shuffle(&mut seq, rng);
            Outcome::Sequence(seq)
        }
        DemoKind::GenerateFill => {
            let input = &config.generate_fill;
            let mut destination = input.sequence.clone();
            let end = algo::generate_n(&mut destination, input.count, input.generator.into_fn(rng))?;
            Outcome::Written { destination, end }
        }
        DemoKind::SymmetricSetDifference => {
            let input = &config.symmetric_set_difference;
            let mut destination = vec![0; input.destination_len];
            let end = algo::set_symmetric_difference(&input.first, &input.second, &mut destination)?;
            Outcome::Written { destination, end }
        }
        DemoKind::PartialSortCopyRange => {
            let input = &config.partial_sort_copy_range;
            let mut destination = vec![0; input.destination_len];
            let end = algo::partial_sort_copy(&input.source, input.start..input.end, &mut destination)?;
            Outcome::Written { destination, end }
        }
        DemoKind::Mismatch => {
            let input = &config.mismatch;
            let (a, b) = algo::mismatch(&input.first, &input.second);
            Outcome::Values(vec![a.get(&input.first).copied(), b.get(&input.second).copied()])
        }
        DemoKind::EqualRange => {
            let input = &config.equal_range;
            let range = algo::equal_range(&input.sequence, &input.target)?;
            Outcome::Range {
                start: range.start,
                end: range.end,
            }
        }
        DemoKind::HeapValidityCheck => {
            let until = algo::is_heap_until(&config.heap_validity_check.sequence);
            Outcome::Positions(vec![until])
        }
    };

    debug!(demo = %kind, %outcome, "demo finished");
    Ok(outcome)
}

/// Runs demos from one validated config with one generator.
pub struct Runner {
    config: DemoConfig,
    rng: StdRng,
}

impl Runner {
    /// Validates `config`, then seeds the generator from `config.seed`, or
    /// from entropy when unset.
    pub fn new(config: DemoConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self { config, rng })
    }

    pub fn run(&mut self, kind: DemoKind) -> Result<Outcome> {
        run_demo(kind, &self.config, &mut self.rng)
            .inspect_err(|e| warn!(demo = %kind, error = %e, "demo failed its precondition check"))
    }

    /// Every demo in catalogue order. A failing demo does not stop the rest.
    pub fn run_all(&mut self) -> Vec<(DemoKind, Result<Outcome>)> {
        DemoKind::ALL
            .into_iter()
            .map(|kind| (kind, self.run(kind)))
            .collect()
    }
}
