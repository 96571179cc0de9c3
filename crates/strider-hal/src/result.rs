//! Execution results and outcome counts.

use std::collections::BTreeMap;
use std::fmt;

use rustc_hash::FxHashMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use strider_ir::BitVector;

/// Occurrence counts of sampled outcomes.
///
/// Maps each observed classical bit assignment to the number of shots
/// that produced it. A well-behaved backend returns counts summing to
/// the requested shot total; that contract is the backend's to honor,
/// not this type's to enforce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Counts {
    map: FxHashMap<BitVector, u64>,
}

impl Counts {
    /// Create an empty count map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of an outcome.
    pub fn insert(&mut self, outcome: BitVector, count: u64) {
        *self.map.entry(outcome).or_insert(0) += count;
    }

    /// Occurrences of an outcome (0 when never observed).
    pub fn get(&self, outcome: &BitVector) -> u64 {
        self.map.get(outcome).copied().unwrap_or(0)
    }

    /// Iterate over `(outcome, count)` entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&BitVector, &u64)> {
        self.map.iter()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether no outcome was observed.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> u64 {
        self.map.values().sum()
    }

    /// The most frequent outcome, if any.
    pub fn most_frequent(&self) -> Option<(&BitVector, u64)> {
        self.map
            .iter()
            .max_by_key(|&(outcome, count)| (count, outcome))
            .map(|(outcome, &count)| (outcome, count))
    }

    /// Entries sorted by descending count, ties by outcome value.
    pub fn sorted(&self) -> Vec<(&BitVector, &u64)> {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(BitVector, u64)> for Counts {
    fn from_iter<I: IntoIterator<Item = (BitVector, u64)>>(iter: I) -> Self {
        let mut counts = Counts::new();
        for (outcome, count) in iter {
            counts.insert(outcome, count);
        }
        counts
    }
}

impl fmt::Display for Counts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "{{")?;
        for (outcome, count) in self.sorted() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{outcome}: {count}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

// Serialized as a string-keyed map so counts stay readable in JSON; the
// typed keys are rebuilt on deserialization.
impl Serialize for Counts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let map: BTreeMap<String, u64> = self
            .map
            .iter()
            .map(|(outcome, &count)| (outcome.to_string(), count))
            .collect();
        map.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Counts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, u64>::deserialize(deserializer)?;
        let mut counts = Counts::new();
        for (key, count) in map {
            let outcome = key.parse::<BitVector>().map_err(D::Error::custom)?;
            counts.insert(outcome, count);
        }
        Ok(counts)
    }
}

/// The result of executing a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Outcome counts.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if the backend reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a new execution result.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}
