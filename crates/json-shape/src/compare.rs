//! Recursive shape comparison with structured mismatch reporting

use crate::classify::{classify_keys, ObjectShape};
use crate::kind::ValueKind;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

/// Options controlling where the lookup-table heuristic runs and how much of
/// each structure is sampled.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Paths at which an object may be classified as a lookup table. The root
    /// path is `""`.
    pub map_candidate_paths: HashSet<String>,
    /// Number of keys the heuristic samples when classifying an object.
    pub classify_sample: usize,
    /// Number of lookup-table entries compared.
    pub entry_sample: usize,
    /// Number of leading array elements compared.
    pub element_sample: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::records_only()
    }
}

impl CompareOptions {
    /// Treat every object as a record. Lookup-table detection is off.
    pub fn records_only() -> Self {
        Self {
            map_candidate_paths: HashSet::new(),
            classify_sample: 10,
            entry_sample: 1,
            element_sample: 1,
        }
    }

    /// Allow the top-level object to be classified as a lookup table.
    pub fn top_level_map() -> Self {
        Self::records_only().map_path("")
    }

    /// Nominate an additional path where the heuristic may run.
    pub fn map_path(mut self, path: &str) -> Self {
        self.map_candidate_paths.insert(path.to_string());
        self
    }

    /// Compare the first `n` common lookup-table entries instead of one.
    pub fn with_entry_sample(mut self, n: usize) -> Self {
        self.entry_sample = n;
        self
    }

    /// Compare the first `n` array elements instead of one.
    pub fn with_element_sample(mut self, n: usize) -> Self {
        self.element_sample = n;
        self
    }
}

/// A single structural divergence between two JSON values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mismatch {
    /// Where in the structure the divergence sits; `""` is the root,
    /// `.<value>` marks a sampled lookup-table entry.
    pub path: String,
    #[serde(flatten)]
    pub kind: MismatchKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// The two values have different JSON kinds.
    Kind { first: ValueKind, second: ValueKind },
    /// Record key sets differ; carries both halves of the symmetric
    /// difference, sorted.
    Keys {
        only_in_first: Vec<String>,
        only_in_second: Vec<String>,
    },
    /// Array lengths differ.
    Length { first: usize, second: usize },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = if self.path.is_empty() {
            "<root>"
        } else {
            self.path.as_str()
        };
        match &self.kind {
            MismatchKind::Kind { first, second } => {
                write!(f, "kind mismatch at {at}: {first} vs {second}")
            }
            MismatchKind::Keys {
                only_in_first,
                only_in_second,
            } => {
                write!(f, "key mismatch at {at}:")?;
                if !only_in_first.is_empty() {
                    write!(f, " only in first: {only_in_first:?}")?;
                }
                if !only_in_second.is_empty() {
                    write!(f, " only in second: {only_in_second:?}")?;
                }
                Ok(())
            }
            MismatchKind::Length { first, second } => {
                write!(f, "array length mismatch at {at}: {first} vs {second}")
            }
        }
    }
}

/// Everything the comparator found out about two values.
///
/// An empty mismatch list is a match. The report serializes to JSON so it can
/// be asserted on or shipped elsewhere without parsing operator output.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShapeReport {
    pub mismatches: Vec<Mismatch>,
}

impl ShapeReport {
    /// True when the two values have the same shape.
    pub fn matches(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Compare the shapes of two JSON values.
///
/// Pure and total: never panics, never performs I/O, and recursion depth is
/// bounded by the nesting of the inputs.
pub fn compare_shapes(first: &Value, second: &Value, options: &CompareOptions) -> ShapeReport {
    let mut report = ShapeReport::default();
    compare_at("", first, second, options, &mut report.mismatches);
    report
}

fn compare_at(
    path: &str,
    first: &Value,
    second: &Value,
    options: &CompareOptions,
    out: &mut Vec<Mismatch>,
) {
    let first_kind = ValueKind::of(first);
    let second_kind = ValueKind::of(second);
    if first_kind != second_kind {
        out.push(Mismatch {
            path: path.to_string(),
            kind: MismatchKind::Kind {
                first: first_kind,
                second: second_kind,
            },
        });
        return;
    }

    match (first, second) {
        (Value::Object(a), Value::Object(b)) => compare_objects(path, a, b, options, out),
        (Value::Array(a), Value::Array(b)) => compare_arrays(path, a, b, options, out),
        // Same-kind scalars always match; values are out of scope.
        _ => {}
    }
}

fn compare_objects(
    path: &str,
    first: &Map<String, Value>,
    second: &Map<String, Value>,
    options: &CompareOptions,
    out: &mut Vec<Mismatch>,
) {
    // Classification inspects the first value's keys only, and only at paths
    // nominated as map candidates.
    let shape = if options.map_candidate_paths.contains(path) {
        classify_keys(first.keys().map(String::as_str), options.classify_sample)
    } else {
        ObjectShape::Record
    };

    match shape {
        ObjectShape::Map => compare_map_entries(path, first, second, options, out),
        ObjectShape::Record => compare_record_fields(path, first, second, options, out),
    }
}

/// Lookup table: the sampled entry values stand in for the whole table. Key
/// sets are expected to drift between backends (different market listings)
/// and are not compared.
fn compare_map_entries(
    path: &str,
    first: &Map<String, Value>,
    second: &Map<String, Value>,
    options: &CompareOptions,
    out: &mut Vec<Mismatch>,
) {
    let entry_path = format!("{path}.<value>");
    let common: Vec<&String> = first.keys().filter(|k| second.contains_key(*k)).collect();

    if !common.is_empty() {
        for key in common.into_iter().take(options.entry_sample) {
            compare_at(&entry_path, &first[key], &second[key], options, out);
        }
    } else if !first.is_empty() && !second.is_empty() {
        // No shared keys; pair up arbitrary entries from each side.
        for (first_key, second_key) in first.keys().zip(second.keys()).take(options.entry_sample) {
            compare_at(
                &entry_path,
                &first[first_key],
                &second[second_key],
                options,
                out,
            );
        }
    }
    // One or both sides empty: nothing to sample, trivially compatible.
}

fn compare_record_fields(
    path: &str,
    first: &Map<String, Value>,
    second: &Map<String, Value>,
    options: &CompareOptions,
    out: &mut Vec<Mismatch>,
) {
    let first_keys: HashSet<&str> = first.keys().map(String::as_str).collect();
    let second_keys: HashSet<&str> = second.keys().map(String::as_str).collect();

    if first_keys != second_keys {
        let mut only_in_first: Vec<String> = first_keys
            .difference(&second_keys)
            .map(|k| (*k).to_string())
            .collect();
        let mut only_in_second: Vec<String> = second_keys
            .difference(&first_keys)
            .map(|k| (*k).to_string())
            .collect();
        only_in_first.sort();
        only_in_second.sort();
        out.push(Mismatch {
            path: path.to_string(),
            kind: MismatchKind::Keys {
                only_in_first,
                only_in_second,
            },
        });
    }

    // Shared keys are still walked so one report lists every divergence.
    for (key, value) in first {
        if let Some(other) = second.get(key) {
            compare_at(&format!("{path}.{key}"), value, other, options, out);
        }
    }
}

fn compare_arrays(
    path: &str,
    first: &[Value],
    second: &[Value],
    options: &CompareOptions,
    out: &mut Vec<Mismatch>,
) {
    if first.len() != second.len() {
        out.push(Mismatch {
            path: path.to_string(),
            kind: MismatchKind::Length {
                first: first.len(),
                second: second.len(),
            },
        });
        return;
    }

    // Leading elements stand in for the whole array. Empty arrays match.
    for (index, (a, b)) in first
        .iter()
        .zip(second)
        .take(options.element_sample)
        .enumerate()
    {
        compare_at(&format!("{path}[{index}]"), a, b, options, out);
    }
}
