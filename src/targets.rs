//! The target identifier set: build, sort, dedup and binary search.

use std::io::{self, BufRead};
use std::path::Path;

use crate::compare::{entry_cmp, entry_order};
use crate::error::FilterError;
use crate::line::read_field;
use crate::util::open_source;

/// A sorted, deduplicated set of target identifiers.
///
/// The mismatch tolerance is fixed at construction and used for every
/// lookup, so the order the set was built under and the order it is searched
/// under cannot drift apart.
pub struct TargetSet {
    entries: Vec<Box<[u8]>>,
    tolerance: u32,
}

impl TargetSet {
    /// Build the set from a newline-delimited identifier file (`-` for
    /// stdin, gzip auto-detected). An empty file yields an empty set, which
    /// never matches.
    pub fn from_path(path: &Path, tolerance: u32) -> Result<Self, FilterError> {
        let mut src = open_source(path).map_err(|e| FilterError::io(path, e))?;
        Self::from_reader(&mut src, tolerance).map_err(|e| FilterError::io(path, e))
    }

    /// Build the set from any buffered source of newline-delimited
    /// identifiers. Blank lines are skipped; trailing whitespace on each
    /// line is stripped.
    ///
    /// Identifiers already in sorted order are deduplicated on the fly
    /// against the last appended entry. The full sort and a second adjacent
    /// dedup pass only run when an out-of-order insertion was seen.
    pub fn from_reader<R: BufRead + ?Sized>(src: &mut R, tolerance: u32) -> io::Result<Self> {
        let mut entries: Vec<Box<[u8]>> = Vec::new();
        let mut field = Vec::with_capacity(256);
        let mut sorted = true;

        while read_field(src, &mut field)? {
            if field.is_empty() {
                continue;
            }
            if let Some(last) = entries.last() {
                let cmp = entry_cmp(last, &field, tolerance);
                if cmp == 0 {
                    continue;
                }
                if cmp > 0 {
                    sorted = false;
                }
            }
            entries.push(field.as_slice().into());
        }

        if !sorted {
            entries.sort_by(|a, b| entry_order(a, b, tolerance));
            entries.dedup_by(|a, b| entry_cmp(a, b, tolerance) == 0);
        }
        entries.shrink_to_fit();

        Ok(Self { entries, tolerance })
    }

    /// Binary search for `id`, returning its index in the sorted set.
    ///
    /// `id` may be a full header line; the comparator treats the first
    /// whitespace as the end of the identifier, so trailing descriptions do
    /// not get in the way.
    pub fn find(&self, id: &[u8]) -> Option<usize> {
        let mut low = 0;
        let mut high = self.entries.len();
        while low < high {
            let mid = (low + high) / 2;
            let cmp = entry_cmp(id, &self.entries[mid], self.tolerance);
            if cmp < 0 {
                high = mid;
            } else if cmp > 0 {
                low = mid + 1;
            } else {
                return Some(mid);
            }
        }
        None
    }

    pub fn contains(&self, id: &[u8]) -> bool {
        self.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// The entries in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = &[u8]> {
        self.entries.iter().map(|e| e.as_ref())
    }
}
