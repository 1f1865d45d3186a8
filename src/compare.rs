//! Identifier comparison with a bounded mismatch tolerance.

use std::cmp::Ordering;

/// Compare two identifiers, allowing up to `tolerance` mismatched bytes.
///
/// Returns 0 when the identifiers are equal under the tolerance, a negative
/// value when `a` sorts before `b` and a positive value otherwise. The sign
/// comes from the first differing byte; the magnitude is the mismatch count
/// at the point the comparison was decided. The magnitude is a tie-break
/// sort key, not a distance metric.
///
/// Whitespace terminates an identifier: when one input is a prefix of the
/// other and the divergence point is whitespace, the two compare equal. This
/// lets a bare target id match a header line that carries a description
/// after the id. When the divergence point is not whitespace, the length
/// difference counts toward the mismatch total.
///
/// With `tolerance > 0` equality is not transitive, so the relation is not a
/// total order and cannot safely drive a sorted set. [`crate::TargetSet`]
/// only ever uses tolerance 0, where this degenerates to a lexicographic
/// comparison plus the whitespace-terminated-prefix rule.
pub fn entry_cmp(a: &[u8], b: &[u8], tolerance: u32) -> i32 {
    let mut diff: u32 = 0;
    let mut dir: i32 = 0;

    for (&x, &y) in a.iter().zip(b.iter()) {
        if x != y {
            if dir == 0 {
                dir = if x < y { -1 } else { 1 };
            }
            diff += 1;
            if diff > tolerance {
                return dir * diff as i32;
            }
        }
    }

    if a.len() != b.len() {
        let shared = a.len().min(b.len());
        let longer = if a.len() > b.len() { a } else { b };
        if !longer[shared].is_ascii_whitespace() {
            if dir == 0 {
                dir = if a.len() < b.len() { -1 } else { 1 };
            }
            for _ in shared..longer.len() {
                diff += 1;
                if diff > tolerance {
                    return dir * diff as i32;
                }
            }
        }
    }

    // every mismatch fit within the tolerance
    0
}

/// [`entry_cmp`] as an [`Ordering`], for sorting.
pub fn entry_order(a: &[u8], b: &[u8], tolerance: u32) -> Ordering {
    entry_cmp(a, b, tolerance).cmp(&0)
}

/// Equality under [`entry_cmp`].
pub fn entry_eq(a: &[u8], b: &[u8], tolerance: u32) -> bool {
    entry_cmp(a, b, tolerance) == 0
}
