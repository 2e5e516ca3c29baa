//! Derives the prefix shared by all raw constants of an enumeration from its mapped type name.

use tracing::debug;

use super::naming::{segment, NamingConvention, ScreamingSnakeCase};
use crate::config::NameOverrideTable;

/// Chunk sequences that end the part of a type name contributing to its prefix. Tested in this
/// order at every index.
const TRUNCATION_TRIGGERS: [&[&str]; 6] = [
    &["Flag"],
    &["Flags"],
    &["K", "H", "R"],
    &["A", "M", "D"],
    &["E", "X", "T"],
    &["Type", "N", "V", "X"],
];

/// The versioned bitmask suffix. It truncates like `Flags` but leaves a `2` behind, so that
/// `AccessFlags2` and `AccessFlags` get different prefixes.
const VERSIONED_FLAGS: &str = "Flags2";

/// Index of the first chunk that ends the prefix, and whether the version marker is kept.
fn truncation_point(chunks: &[&str]) -> Option<(usize, bool)> {
    for i in 0..chunks.len() {
        let tail = &chunks[i..];
        if TRUNCATION_TRIGGERS
            .iter()
            .any(|trigger| tail.starts_with(trigger))
        {
            return Some((i, false));
        }
        if chunks[i] == VERSIONED_FLAGS {
            return Some((i, true));
        }
    }
    None
}

/// Resolve the canonical `UPPER_SNAKE` prefix for the enumeration named `mapped_name`.
///
/// Note that vendor acronyms truncate wherever they occur in the name, not only at its end.
pub fn resolve(mapped_name: &str, overrides: &NameOverrideTable) -> String {
    if let Some(prefix) = overrides.prefix(mapped_name) {
        debug!(name = mapped_name, prefix, "Using prefix override.");
        return prefix.to_string();
    }

    let mut chunks = segment(mapped_name);
    if let Some((end, versioned)) = truncation_point(&chunks) {
        chunks.truncate(end);
        if versioned {
            chunks.push("2");
        }
    }

    ScreamingSnakeCase::concatenate(&chunks)
}
