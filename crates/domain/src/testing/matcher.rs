//! Structural subset comparison of JSON values.
//!
//! A fragment matches a body when every value it spells out appears, equal,
//! at the same place in the body. Extra object keys in the body are ignored.
//! Array fragments are matched order-insensitively: each fragment element
//! must match a distinct element of the body array.

use std::fmt;

use serde_json::{Number, Value};

/// Where and why a fragment failed to match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetMismatch {
    /// JSON path of the first offending value, e.g. `$.user.tags[1]`.
    pub path: String,
    /// Expected vs actual description.
    pub detail: String,
}

impl fmt::Display for SubsetMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at {}: {}", self.path, self.detail)
    }
}

/// Checks that `expected` is a structural subset of `actual`.
///
/// # Errors
///
/// Returns the first mismatch found, depth first.
pub fn json_subset(expected: &Value, actual: &Value) -> Result<(), SubsetMismatch> {
    check(expected, actual, "$")
}

fn check(expected: &Value, actual: &Value, path: &str) -> Result<(), SubsetMismatch> {
    match (expected, actual) {
        (Value::Object(want), Value::Object(have)) => {
            for (key, want_value) in want {
                let child = format!("{path}.{key}");
                match have.get(key) {
                    Some(have_value) => check(want_value, have_value, &child)?,
                    None => {
                        return Err(SubsetMismatch {
                            path: child,
                            detail: format!("expected {want_value}, key is missing"),
                        });
                    }
                }
            }
            Ok(())
        }
        (Value::Array(want), Value::Array(have)) => check_array(want, have, path),
        (Value::Number(want), Value::Number(have)) if numbers_equal(want, have) => Ok(()),
        (want, have) if want == have => Ok(()),
        (want, have) if kind(want) != kind(have) => Err(SubsetMismatch {
            path: path.to_string(),
            detail: format!("expected {} {want}, got {} {have}", kind(want), kind(have)),
        }),
        (want, have) => Err(SubsetMismatch {
            path: path.to_string(),
            detail: format!("expected {want}, got {have}"),
        }),
    }
}

fn check_array(want: &[Value], have: &[Value], path: &str) -> Result<(), SubsetMismatch> {
    if want.len() > have.len() {
        return Err(SubsetMismatch {
            path: path.to_string(),
            detail: format!(
                "expected at least {} elements, got {}",
                want.len(),
                have.len()
            ),
        });
    }

    // Bipartite matching: an earlier pick is moved when a later element needs it.
    let fits: Vec<Vec<bool>> = want
        .iter()
        .map(|want_item| {
            have.iter()
                .map(|have_item| check(want_item, have_item, path).is_ok())
                .collect()
        })
        .collect();

    let mut owner: Vec<Option<usize>> = vec![None; have.len()];
    for (index, want_item) in want.iter().enumerate() {
        let mut visited = vec![false; have.len()];
        if !assign(index, &fits, &mut owner, &mut visited) {
            return Err(SubsetMismatch {
                path: format!("{path}[{index}]"),
                detail: format!("no element matching {want_item}"),
            });
        }
    }

    Ok(())
}

/// Finds an actual element for fragment element `index`, reassigning
/// earlier fragment elements along an augmenting path when needed.
fn assign(
    index: usize,
    fits: &[Vec<bool>],
    owner: &mut [Option<usize>],
    visited: &mut [bool],
) -> bool {
    for (candidate, &fit) in fits[index].iter().enumerate() {
        if !fit || visited[candidate] {
            continue;
        }
        visited[candidate] = true;
        let free = match owner[candidate] {
            None => true,
            Some(previous) => assign(previous, fits, owner, visited),
        };
        if free {
            owner[candidate] = Some(index);
            return true;
        }
    }
    false
}

#[allow(clippy::float_cmp)]
fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    a.as_f64() == b.as_f64()
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
