//! Case-insensitive identifier comparison.
//!
//! Skin ids are matched after folding both sides to lowercase. The folding is
//! done character by character so lookups never allocate.

/// Returns true if two identifiers are equal after lowercase folding.
#[must_use]
pub fn ids_match(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}
