//! The built-in mathlib table.

use std::sync::OnceLock;

use super::{MappingTable, PrefixMapping};

/// Commit that `master` links are pinned to.
pub const PINNED_COMMIT: &str = "f694c7dead66f5d4c80f446c796a5aad14707f0e";

const BUILTIN_MAPPINGS: &[(&str, &str)] = &[
    (
        "https://github.com/leanprover-community/mathlib/blob/master/src/",
        "https://github.com/leanprover-community/mathlib/blob/f694c7dead66f5d4c80f446c796a5aad14707f0e/src/",
    ),
    (
        "https://github.com/leanprover-community/mathlib/blob/master/archive/",
        "https://github.com/leanprover-community/mathlib/blob/f694c7dead66f5d4c80f446c796a5aad14707f0e/archive/",
    ),
    (
        "https://github.com/leanprover-community/mathlib/blob/master/counterexamples/",
        "https://github.com/leanprover-community/mathlib/blob/f694c7dead66f5d4c80f446c796a5aad14707f0e/counterexamples/",
    ),
];

static BUILTIN: OnceLock<MappingTable> = OnceLock::new();

/// Process-wide built-in table. Initialized on first use, never mutated.
pub fn builtin() -> &'static MappingTable {
    BUILTIN.get_or_init(|| {
        MappingTable::new(
            BUILTIN_MAPPINGS
                .iter()
                .map(|(from, to)| PrefixMapping::new(*from, *to))
                .collect(),
        )
    })
}
