//! Categorical value -> display glyph.

use sok_core::enums::Rating;
use sok_core::{PLACEHOLDER, is_missing};

/// Map a categorical cell to the glyph used in the tables.
///
/// Missing values (empty or already the placeholder) map to the placeholder.
/// Known labels map to their [`Rating::glyph`]. Anything else passes through
/// unchanged, since the data may carry values outside the rating vocabulary.
#[must_use]
pub fn display_symbol(value: &str) -> &str {
    if is_missing(value) {
        return PLACEHOLDER;
    }
    match Rating::from_label(value) {
        Some(rating) => rating.glyph(),
        None => value,
    }
}
